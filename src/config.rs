//! Form engine configuration.
//!
//! # Example
//!
//! ```
//! use card_form::expiry::YearMonth;
//! use card_form::FormConfig;
//!
//! let config = FormConfig::default()
//!     .with_requires_name(true)
//!     .with_reference_date(YearMonth::new(2024, 6).unwrap())
//!     .with_max_expiry_years(20);
//!
//! assert!(config.requires_name);
//! assert_eq!(config.reference().year(), 2024);
//! ```

use crate::expiry::YearMonth;
use crate::feedback::ErrorMessages;

#[cfg(feature = "serde")]
use crate::error::FormError;

/// Settings for a [`FormEngine`](crate::FormEngine).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct FormConfig {
    /// Whether the cardholder name must be filled in for the form to be valid.
    pub requires_name: bool,

    /// Month that expiry dates are checked against. `None` means the current
    /// local month at the time of each update.
    pub reference_date: Option<YearMonth>,

    /// Reject expiry years more than this many years after the reference
    /// year. `None` disables the check.
    pub max_expiry_years: Option<u16>,

    /// Messages a view shows for flagged fields.
    pub messages: ErrorMessages,
}

impl FormConfig {
    /// Sets whether the cardholder name is required.
    pub fn with_requires_name(mut self, requires_name: bool) -> Self {
        self.requires_name = requires_name;
        self
    }

    /// Pins the reference month for expiry checks.
    pub fn with_reference_date(mut self, reference: YearMonth) -> Self {
        self.reference_date = Some(reference);
        self
    }

    /// Caps how far in the future an expiry may be.
    pub fn with_max_expiry_years(mut self, years: u16) -> Self {
        self.max_expiry_years = Some(years);
        self
    }

    /// Sets the error messages.
    pub fn with_messages(mut self, messages: ErrorMessages) -> Self {
        self.messages = messages;
        self
    }

    /// Returns the month expiry dates are checked against right now.
    pub fn reference(&self) -> YearMonth {
        self.reference_date.unwrap_or_else(YearMonth::current)
    }

    /// Loads a configuration from JSON. Missing keys take their defaults.
    ///
    /// # Example
    ///
    /// ```
    /// use card_form::FormConfig;
    ///
    /// let config = FormConfig::from_json(
    ///     r#"{ "requires_name": true, "reference_date": "2024-06",
    ///          "messages": { "name": "Name is required" } }"#,
    /// ).unwrap();
    /// assert!(config.requires_name);
    /// assert_eq!(config.messages.name.as_deref(), Some("Name is required"));
    /// ```
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, FormError> {
        serde_json::from_str(json).map_err(|e| FormError::Config(e.to_string()))
    }
}
