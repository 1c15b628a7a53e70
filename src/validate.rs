//! Card number validation.
//!
//! Unlike a one-shot validator, the number field is judged on every
//! keystroke, so the verdict is three-valued: a short number that could still
//! become valid is `Incomplete`, not an error.
//!
//! # Rules
//!
//! 1. Any character other than a digit or the group separator is `Invalid`.
//! 2. More digits than the network's longest length is `Invalid`.
//! 3. At a valid length, the Luhn checksum decides `Valid` or `Invalid`.
//! 4. Otherwise the number can still grow into a valid length: `Incomplete`.
//!
//! With no network detected, the number is `Incomplete` while its digits
//! could still grow into some network's prefix (and are fewer than 12), and
//! `Invalid` once no network can match.

use crate::card::{CardNetwork, MIN_CARD_DIGITS};
use crate::detect::{detect_network_digits, is_plausible_prefix};
use crate::format::SEPARATOR;
use crate::luhn;
use crate::ValidationState;

/// Validates a formatted card number against a network's rules.
///
/// # Example
///
/// ```
/// use card_form::validate::validate_number;
/// use card_form::{CardNetwork, ValidationState};
///
/// assert_eq!(
///     validate_number("4111 1111 1111 1111", CardNetwork::Visa),
///     ValidationState::Valid
/// );
/// assert_eq!(
///     validate_number("4111 1111 1111 1112", CardNetwork::Visa),
///     ValidationState::Invalid
/// );
/// assert_eq!(validate_number("4111 11", CardNetwork::Visa), ValidationState::Incomplete);
/// ```
pub fn validate_number(formatted: &str, network: CardNetwork) -> ValidationState {
    let digits = match parse_digits(formatted) {
        Some(digits) => digits,
        None => return ValidationState::Invalid,
    };
    let count = digits.len();

    if !network.is_known() {
        return if count < MIN_CARD_DIGITS && is_plausible_prefix(&digits) {
            ValidationState::Incomplete
        } else {
            ValidationState::Invalid
        };
    }

    if count > network.max_length() {
        return ValidationState::Invalid;
    }

    if network.is_valid_length(count) {
        return if luhn::validate(&digits) {
            ValidationState::Valid
        } else {
            ValidationState::Invalid
        };
    }

    ValidationState::Incomplete
}

/// Returns true if the input is a complete, checksum-valid number of a
/// recognized network. Separators of any kind are accepted.
///
/// # Example
///
/// ```
/// use card_form::is_valid_number;
///
/// assert!(is_valid_number("4111-1111-1111-1111"));
/// assert!(!is_valid_number("4111111111111112"));
/// assert!(!is_valid_number("4111"));
/// ```
pub fn is_valid_number(input: &str) -> bool {
    let digits: Vec<u8> = input
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect();
    let network = detect_network_digits(&digits);
    network.is_valid_length(digits.len()) && luhn::validate(&digits)
}

/// Extracts digit values, skipping separators. Returns `None` when any other
/// character is present.
fn parse_digits(formatted: &str) -> Option<Vec<u8>> {
    let mut digits = Vec::with_capacity(formatted.len());
    for c in formatted.chars() {
        match c {
            '0'..='9' => digits.push(c as u8 - b'0'),
            SEPARATOR => {}
            _ => return None,
        }
    }
    Some(digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Standard test card numbers from payment processors
    const VISA_16: &str = "4111 1111 1111 1111";
    const MASTERCARD: &str = "5500 0000 0000 0004";
    const AMEX: &str = "3782 822463 10005";
    const DISCOVER: &str = "6011 1111 1111 1117";
    const DINERS: &str = "3056 930902 5904";
    const JCB: &str = "3530 1113 3330 0000";

    #[test]
    fn test_valid_numbers() {
        assert_eq!(validate_number(VISA_16, CardNetwork::Visa), ValidationState::Valid);
        assert_eq!(
            validate_number(MASTERCARD, CardNetwork::Mastercard),
            ValidationState::Valid
        );
        assert_eq!(validate_number(AMEX, CardNetwork::Amex), ValidationState::Valid);
        assert_eq!(
            validate_number(DISCOVER, CardNetwork::Discover),
            ValidationState::Valid
        );
        assert_eq!(
            validate_number(DINERS, CardNetwork::DinersClub),
            ValidationState::Valid
        );
        assert_eq!(validate_number(JCB, CardNetwork::Jcb), ValidationState::Valid);
    }

    #[test]
    fn test_luhn_failure_at_valid_length() {
        assert_eq!(
            validate_number("4111111111111112", CardNetwork::Visa),
            ValidationState::Invalid
        );
        assert_eq!(
            validate_number("3782 822463 10006", CardNetwork::Amex),
            ValidationState::Invalid
        );
    }

    #[test]
    fn test_short_number_is_incomplete() {
        assert_eq!(validate_number("", CardNetwork::Visa), ValidationState::Incomplete);
        assert_eq!(validate_number("4", CardNetwork::Visa), ValidationState::Incomplete);
        assert_eq!(
            validate_number("3782 822463 1000", CardNetwork::Amex),
            ValidationState::Incomplete
        );
    }

    #[test]
    fn test_between_valid_lengths_is_incomplete() {
        // Visa accepts 16, 18 and 19 digits
        assert_eq!(
            validate_number("4111 1111 1111 1111 1", CardNetwork::Visa),
            ValidationState::Incomplete
        );
    }

    #[test]
    fn test_too_long_is_invalid() {
        assert_eq!(
            validate_number("3782 822463 100051", CardNetwork::Amex),
            ValidationState::Invalid
        );
        assert_eq!(
            validate_number("5500 0000 0000 0004 1", CardNetwork::Mastercard),
            ValidationState::Invalid
        );
    }

    #[test]
    fn test_leaked_character_is_invalid() {
        assert_eq!(
            validate_number("4111-1111-1111-1111", CardNetwork::Visa),
            ValidationState::Invalid
        );
        assert_eq!(validate_number("41x", CardNetwork::Visa), ValidationState::Invalid);
    }

    #[test]
    fn test_unknown_network() {
        assert_eq!(validate_number("", CardNetwork::Unknown), ValidationState::Incomplete);
        // could still be Mastercard or Discover
        assert_eq!(validate_number("5", CardNetwork::Unknown), ValidationState::Incomplete);
        assert_eq!(validate_number("601", CardNetwork::Unknown), ValidationState::Incomplete);
        // no network starts this way
        assert_eq!(validate_number("0", CardNetwork::Unknown), ValidationState::Invalid);
        assert_eq!(validate_number("59", CardNetwork::Unknown), ValidationState::Invalid);
        assert_eq!(
            validate_number("0000 0000 0000 0000", CardNetwork::Unknown),
            ValidationState::Invalid
        );
    }

    #[test]
    fn test_is_valid_number() {
        assert!(is_valid_number("4111111111111111"));
        assert!(is_valid_number("3782 822463 10005"));
        assert!(is_valid_number("5500-0000-0000-0004"));
        assert!(!is_valid_number("4111111111111112"));
        assert!(!is_valid_number("0000000000000000"));
        assert!(!is_valid_number(""));
    }
}
