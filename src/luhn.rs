//! Luhn (mod 10) checksum.
//!
//! Starting from the rightmost digit, every second digit moving left is
//! doubled, with 9 subtracted when the doubled value has two digits. The
//! number passes when the sum of all digits is divisible by 10.
//!
//! The form engine only runs the checksum once the digit count reaches a
//! valid length for the detected network; shorter input is `incomplete`.

/// Doubled digit with 9 subtracted when the result has two digits.
const DOUBLE_TABLE: [u8; 10] = [0, 2, 4, 6, 8, 1, 3, 5, 7, 9];

/// Returns true if the digits pass the Luhn checksum.
///
/// Empty input never passes.
///
/// # Example
///
/// ```
/// use card_form::luhn::validate;
///
/// assert!(validate(&[4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1]));
/// assert!(!validate(&[4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 2]));
/// ```
#[inline]
pub fn validate(digits: &[u8]) -> bool {
    !digits.is_empty() && checksum(digits, false) % 10 == 0
}

/// Returns true if the ASCII digits of `input` pass the Luhn checksum.
///
/// Any non-digit character (including separators) makes the input fail;
/// strip formatting first with [`strip_non_digits`](crate::format::strip_non_digits).
pub fn passes(input: &str) -> bool {
    if !input.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    let digits: Vec<u8> = input.bytes().map(|b| b - b'0').collect();
    validate(&digits)
}

/// Computes the Luhn sum (not reduced modulo 10).
#[inline]
pub fn compute_checksum(digits: &[u8]) -> u32 {
    checksum(digits, false)
}

/// Sums the digits right to left. When `double_rightmost` is set the
/// rightmost digit is treated as position 1, as when a check digit will be
/// appended afterwards.
fn checksum(digits: &[u8], double_rightmost: bool) -> u32 {
    digits
        .iter()
        .rev()
        .enumerate()
        .map(|(pos, &d)| {
            let doubled = (pos % 2 == 1) != double_rightmost;
            if doubled {
                DOUBLE_TABLE[d as usize] as u32
            } else {
                d as u32
            }
        })
        .sum()
}

/// Computes the check digit that makes `digits` followed by it pass.
///
/// # Example
///
/// ```
/// use card_form::luhn::generate_check_digit;
///
/// let partial = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];
/// assert_eq!(generate_check_digit(&partial), 1);
/// ```
#[inline]
pub fn generate_check_digit(digits: &[u8]) -> u8 {
    let sum = checksum(digits, true);
    ((10 - (sum % 10)) % 10) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digits(s: &str) -> Vec<u8> {
        s.bytes().map(|b| b - b'0').collect()
    }

    #[test]
    fn test_every_network_length_passes() {
        // one passing number per digit count the networks accept
        for number in [
            "30569309025904",      // 14, diners
            "378282246310005",     // 15, amex
            "6011111111111117",    // 16, discover
            "35301113333000001",   // 17, jcb
            "620000000000000005",  // 18, unionpay
            "6011000000000000001", // 19, discover
        ] {
            assert!(passes(number), "{}", number);
        }
    }

    #[test]
    fn test_last_digit_typo_fails() {
        assert!(!passes("30569309025905"));
        assert!(!passes("378282246310006"));
        assert!(!passes("6011000000000000002"));
    }

    #[test]
    fn test_passes_rejects_formatted_input() {
        assert!(!passes("3782 822463 10005"));
        assert!(!passes("3782-822463-10005"));
        assert!(!passes(""));
    }

    #[test]
    fn test_checksum_parity() {
        // with a check digit present, the rightmost digit is not doubled
        assert_eq!(compute_checksum(&digits("30569309025904")), 50);
        assert_eq!(compute_checksum(&digits("378282246310005")), 60);

        // without one, the rightmost digit takes the doubled position
        assert_eq!(checksum(&digits("3056930902590"), true), 46);
        assert_eq!(checksum(&digits("37828224631000"), true), 55);
    }

    #[test]
    fn test_double_rightmost_matches_appended_zero() {
        for partial in ["3056930902590", "601100000000000000", "35301113333000000"] {
            let mut padded = digits(partial);
            padded.push(0);
            assert_eq!(
                checksum(&digits(partial), true),
                compute_checksum(&padded),
                "{}",
                partial
            );
        }
    }

    #[test]
    fn test_check_digit_completes_each_length() {
        let body = digits("601100000000000000");
        for length in 14..=19 {
            let mut number = body[..length - 1].to_vec();
            number.push(generate_check_digit(&number));
            assert_eq!(number.len(), length);
            assert!(validate(&number), "length {}", length);
        }
    }

    #[test]
    fn test_empty_never_passes() {
        assert!(!validate(&[]));
        assert_eq!(generate_check_digit(&[]), 0);
    }
}
