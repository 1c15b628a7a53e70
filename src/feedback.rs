//! Error-message configuration and selection for a view.
//!
//! The engine only produces [`ValidationState`]s. A view that shows error
//! text configures its own messages here, per field and per failure mode,
//! and asks which message (if any) applies to the current snapshot.
//!
//! A field is flagged when it is `invalid`, or when it is `incomplete`, not
//! focused, and not empty: an incomplete field is only an error once the
//! user has typed something and moved on.
//!
//! # Example
//!
//! ```
//! use card_form::feedback::{ErrorMessages, FieldMessages};
//! use card_form::{FieldName, FormConfig, FormEngine};
//!
//! let messages = ErrorMessages {
//!     number: FieldMessages::new("Card number is invalid", "Card number is incomplete"),
//!     ..ErrorMessages::default()
//! };
//!
//! let mut engine = FormEngine::new(FormConfig::default());
//! engine.update_field(FieldName::Number, "4111");
//! let snapshot = engine.current_snapshot();
//!
//! // still typing in the number field: no message
//! assert_eq!(messages.message_for(&snapshot, FieldName::Number, Some(FieldName::Number)), None);
//! // moved on to expiry: the number is flagged as incomplete
//! assert_eq!(
//!     messages.message_for(&snapshot, FieldName::Number, Some(FieldName::Expiry)),
//!     Some("Card number is incomplete")
//! );
//! ```

use crate::engine::FormSnapshot;
use crate::{FieldName, ValidationState};

/// Messages for a field with two failure modes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct FieldMessages {
    /// Shown while the field is `invalid`.
    pub invalid: Option<String>,
    /// Shown while the field is `incomplete` and flagged.
    pub incomplete: Option<String>,
}

impl FieldMessages {
    /// Creates messages for both failure modes.
    pub fn new(invalid: impl Into<String>, incomplete: impl Into<String>) -> Self {
        Self {
            invalid: Some(invalid.into()),
            incomplete: Some(incomplete.into()),
        }
    }

    fn for_state(&self, state: ValidationState) -> Option<&str> {
        match state {
            ValidationState::Invalid => self.invalid.as_deref(),
            ValidationState::Incomplete => self.incomplete.as_deref(),
            ValidationState::Valid => None,
        }
    }
}

/// Per-field error messages. The name field has a single failure mode and
/// therefore a single message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ErrorMessages {
    /// Card number messages.
    pub number: FieldMessages,
    /// Expiry messages.
    pub expiry: FieldMessages,
    /// Security code messages.
    pub cvc: FieldMessages,
    /// Cardholder name message.
    pub name: Option<String>,
}

impl ErrorMessages {
    /// Returns the configured message for `field` in `snapshot`, if the
    /// field is flagged and a message for its state is configured.
    pub fn message_for(
        &self,
        snapshot: &FormSnapshot,
        field: FieldName,
        focused: Option<FieldName>,
    ) -> Option<&str> {
        let state = snapshot.status.get(field);
        if !should_flag(field, state, snapshot.values.get(field), focused) {
            return None;
        }

        match field {
            FieldName::Number => self.number.for_state(state),
            FieldName::Expiry => self.expiry.for_state(state),
            FieldName::Cvc => self.cvc.for_state(state),
            FieldName::Name => self.name.as_deref(),
        }
    }
}

/// Returns true if a view should mark the field as erroneous.
///
/// # Example
///
/// ```
/// use card_form::feedback::should_flag;
/// use card_form::{FieldName, ValidationState};
///
/// assert!(should_flag(FieldName::Cvc, ValidationState::Invalid, "12345", Some(FieldName::Cvc)));
/// assert!(!should_flag(FieldName::Cvc, ValidationState::Incomplete, "12", Some(FieldName::Cvc)));
/// assert!(should_flag(FieldName::Cvc, ValidationState::Incomplete, "12", None));
/// assert!(!should_flag(FieldName::Cvc, ValidationState::Incomplete, "", None));
/// ```
pub fn should_flag(
    field: FieldName,
    state: ValidationState,
    value: &str,
    focused: Option<FieldName>,
) -> bool {
    match state {
        ValidationState::Invalid => true,
        ValidationState::Incomplete => focused != Some(field) && !value.is_empty(),
        ValidationState::Valid => false,
    }
}
