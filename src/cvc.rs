//! Security code (CVC/CVV/CID) formatting and validation.
//!
//! - **CVV** (Card Verification Value) - Visa
//! - **CVC** (Card Verification Code) - Mastercard
//! - **CID** (Card Identification Number) - American Express, Discover
//!
//! # Length Requirements
//!
//! - American Express: 4 digits (printed on front)
//! - All other networks, and an undetected network: 3 digits
//!
//! # Example
//!
//! ```
//! use card_form::cvc::{format_cvc, validate_cvc};
//! use card_form::{CardNetwork, ValidationState};
//!
//! assert_eq!(format_cvc("12a34", CardNetwork::Visa), "123");
//! assert_eq!(validate_cvc("123", CardNetwork::Visa), ValidationState::Valid);
//! assert_eq!(validate_cvc("123", CardNetwork::Amex), ValidationState::Incomplete);
//! ```

use crate::format::strip_non_digits;
use crate::{CardNetwork, ValidationState};

/// Formats raw security-code input: digits only, truncated to the network's
/// code length.
pub fn format_cvc(raw: &str, network: CardNetwork) -> String {
    let mut digits = strip_non_digits(raw);
    digits.truncate(network.cvc_length());
    digits
}

/// Validates a security code for a network.
///
/// `Invalid` if any non-digit is present or there are more digits than the
/// network requires; `Incomplete` while shorter; `Valid` at exactly the
/// required length.
pub fn validate_cvc(raw: &str, network: CardNetwork) -> ValidationState {
    if !raw.bytes().all(|b| b.is_ascii_digit()) {
        return ValidationState::Invalid;
    }

    let required = network.cvc_length();
    match raw.len() {
        n if n < required => ValidationState::Incomplete,
        n if n == required => ValidationState::Valid,
        _ => ValidationState::Invalid,
    }
}
