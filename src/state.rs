//! Field and validation-state tags shared by the validators and the engine.

use std::fmt;
use std::str::FromStr;

use crate::error::FormError;

/// The fields of a card form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum FieldName {
    /// Card number.
    Number,
    /// Expiry date, `MM/YY`.
    Expiry,
    /// Security code (CVC/CVV/CID).
    Cvc,
    /// Cardholder name.
    Name,
}

impl FieldName {
    /// All fields, in form order.
    pub const ALL: [FieldName; 4] = [Self::Number, Self::Expiry, Self::Cvc, Self::Name];

    /// Returns the lowercase tag for this field.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::Expiry => "expiry",
            Self::Cvc => "cvc",
            Self::Name => "name",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "number" => Ok(Self::Number),
            "expiry" => Ok(Self::Expiry),
            "cvc" => Ok(Self::Cvc),
            "name" => Ok(Self::Name),
            _ => Err(FormError::UnknownField(s.to_string())),
        }
    }
}

/// Verdict for a single field.
///
/// - `Incomplete`: too short to judge, but nothing typed so far breaks a rule.
/// - `Invalid`: the content breaks a rule regardless of what follows.
/// - `Valid`: the content satisfies every rule for its format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum ValidationState {
    /// Fully satisfies all rules.
    Valid,
    /// Conclusively violates a rule.
    Invalid,
    /// Not yet long enough for a verdict.
    Incomplete,
}

impl ValidationState {
    /// Returns true for `Valid`.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Returns the lowercase tag for this state.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Valid => "valid",
            Self::Invalid => "invalid",
            Self::Incomplete => "incomplete",
        }
    }
}

impl fmt::Display for ValidationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
