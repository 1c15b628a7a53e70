//! Error types for the card form engine.
//!
//! User input never produces an error: every keystroke maps to a
//! [`ValidationState`](crate::ValidationState). The errors here cover
//! contract violations at string boundaries (field and network names coming
//! from a CLI, a JS binding or a config file) and malformed configuration.

use std::fmt;

/// Errors raised at the edges of the form engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// A field name that is not one of `number`, `expiry`, `cvc`, `name`.
    UnknownField(String),

    /// A network tag that is not one of the supported card networks.
    UnknownNetwork(String),

    /// A reference date with a month outside 1-12 or an unparseable form.
    InvalidReferenceDate {
        /// The year that was supplied.
        year: u16,
        /// The month that was supplied.
        month: u8,
    },

    /// The configuration could not be loaded.
    Config(String),
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownField(name) => {
                write!(
                    f,
                    "unknown form field '{}' (expected number, expiry, cvc or name)",
                    name.escape_default()
                )
            }

            Self::UnknownNetwork(tag) => {
                write!(f, "unknown card network '{}'", tag.escape_default())
            }

            Self::InvalidReferenceDate { year, month } => {
                write!(
                    f,
                    "invalid reference date {:04}-{:02}: month must be 1-12",
                    year, month
                )
            }

            Self::Config(reason) => write!(f, "invalid form configuration: {}", reason),
        }
    }
}

impl std::error::Error for FormError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            FormError::UnknownField("zip".into()).to_string(),
            "unknown form field 'zip' (expected number, expiry, cvc or name)"
        );

        assert_eq!(
            FormError::UnknownNetwork("maestro".into()).to_string(),
            "unknown card network 'maestro'"
        );

        assert_eq!(
            FormError::InvalidReferenceDate {
                year: 2024,
                month: 13
            }
            .to_string(),
            "invalid reference date 2024-13: month must be 1-12"
        );

        assert!(FormError::Config("bad json".into())
            .to_string()
            .contains("bad json"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FormError>();
    }
}
