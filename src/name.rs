//! Cardholder name validation.
//!
//! Any non-blank text is accepted; there is no `Invalid` verdict for names.

use crate::ValidationState;

/// Validates the cardholder name.
///
/// When the name is not required the field is always `Valid`. Otherwise it
/// is `Incomplete` while blank and `Valid` once it has a non-whitespace
/// character.
///
/// # Example
///
/// ```
/// use card_form::name::validate_name;
/// use card_form::ValidationState;
///
/// assert_eq!(validate_name("", false), ValidationState::Valid);
/// assert_eq!(validate_name("  ", true), ValidationState::Incomplete);
/// assert_eq!(validate_name("Jane Doe", true), ValidationState::Valid);
/// ```
pub fn validate_name(raw: &str, required: bool) -> ValidationState {
    if !required || !raw.trim().is_empty() {
        ValidationState::Valid
    } else {
        ValidationState::Incomplete
    }
}
