//! Masking of card data for debug output and logs.
//!
//! PCI-DSS allows displaying at most the first 6 and last 4 digits of a
//! card number. The engine goes further: anything that reaches `Debug`
//! output or a tracing event shows only the last 4 digits, and the
//! security code is never shown at all.

use crate::card::CardNetwork;

/// Character that replaces hidden digits.
pub const MASK_CHAR: char = '*';

/// Masks every digit except the last four, keeping separators in place.
///
/// The last four are shown only once the digit count is a valid length for
/// `network`. Until then every digit is masked: the trailing digits of a
/// half-typed number move with each keystroke, and a series of snapshots
/// would otherwise expose most of the card.
///
/// # Example
///
/// ```
/// use card_form::mask::mask_number;
/// use card_form::CardNetwork;
///
/// assert_eq!(mask_number("4111 1111 1111 1111", CardNetwork::Visa), "**** **** **** 1111");
/// assert_eq!(mask_number("3782 822463 10005", CardNetwork::Amex), "**** ****** *0005");
/// assert_eq!(mask_number("4111 1111 1111", CardNetwork::Visa), "**** **** ****");
/// ```
pub fn mask_number(formatted: &str, network: CardNetwork) -> String {
    let digit_count = formatted.chars().filter(|c| c.is_ascii_digit()).count();
    let visible_from = if network.is_valid_length(digit_count) {
        digit_count.saturating_sub(4)
    } else {
        digit_count
    };

    let mut seen = 0;
    formatted
        .chars()
        .map(|c| {
            if !c.is_ascii_digit() {
                return c;
            }
            let shown = seen >= visible_from;
            seen += 1;
            if shown {
                c
            } else {
                MASK_CHAR
            }
        })
        .collect()
}

/// Masks a security code completely, preserving only its length.
///
/// # Example
///
/// ```
/// use card_form::mask::mask_cvc;
///
/// assert_eq!(mask_cvc("123"), "***");
/// assert_eq!(mask_cvc(""), "");
/// ```
pub fn mask_cvc(cvc: &str) -> String {
    cvc.chars().map(|_| MASK_CHAR).collect()
}

/// Returns the last four digits of a number, or an empty string unless
/// the digit count is a valid length for `network`.
pub fn last_four(formatted: &str, network: CardNetwork) -> String {
    let digits: Vec<char> = formatted.chars().filter(|c| c.is_ascii_digit()).collect();
    if !network.is_valid_length(digits.len()) {
        return String::new();
    }
    digits[digits.len() - 4..].iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_full_number() {
        let masked = mask_number("4111 1111 1111 1111", CardNetwork::Visa);
        assert!(!masked.contains("4111 1111"));
        assert_eq!(masked, "**** **** **** 1111");
    }

    #[test]
    fn test_mask_partial_number_hides_everything() {
        assert_eq!(mask_number("", CardNetwork::Unknown), "");
        assert_eq!(mask_number("4", CardNetwork::Visa), "*");
        assert_eq!(mask_number("4111 1", CardNetwork::Visa), "**** *");
        assert_eq!(mask_number("4012 8888 8888 188", CardNetwork::Visa), "**** **** **** ***");
    }

    #[test]
    fn test_mask_between_valid_lengths() {
        // 17 digits is not a Visa length, 18 is
        let seventeen = "4111 1111 1111 1111 1";
        assert_eq!(mask_number(seventeen, CardNetwork::Visa), "**** **** **** **** *");
        let eighteen = "4111 1111 1111 1111 12";
        assert_eq!(mask_number(eighteen, CardNetwork::Visa), "**** **** **** **11 12");
    }

    #[test]
    fn test_mask_unknown_network_hides_everything() {
        assert_eq!(mask_number("9999 9999 9999 9999", CardNetwork::Unknown), "**** **** **** ****");
    }

    #[test]
    fn test_typing_reveals_only_final_last_four() {
        let number = "4012888888881881";
        let mut revealed = [false; 16];
        for end in 1..=number.len() {
            let partial = &number[..end];
            let masked = mask_number(partial, CardNetwork::Visa);
            for (i, c) in masked.chars().enumerate() {
                if c != MASK_CHAR {
                    revealed[i] = true;
                }
            }
        }
        assert_eq!(revealed.iter().filter(|&&r| r).count(), 4);
        assert!(revealed[12..].iter().all(|&r| r));
    }

    #[test]
    fn test_mask_cvc() {
        assert_eq!(mask_cvc("1234"), "****");
    }

    #[test]
    fn test_last_four() {
        assert_eq!(last_four("4111 1111 1111 1234", CardNetwork::Visa), "1234");
        assert_eq!(last_four("4111 1111 1234", CardNetwork::Visa), "");
        assert_eq!(last_four("4111", CardNetwork::Unknown), "");
    }
}
