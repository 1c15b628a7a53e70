//! The form engine: keystroke in, snapshot out.
//!
//! A [`FormEngine`] owns the current [`FormSnapshot`]. Each call to
//! [`FormEngine::update_field`] reformats the edited field, re-detects the
//! card network, re-validates every field against it, and replaces the held
//! snapshot with a new one before handing it to the change callback. Values
//! and statuses are always computed together, so no observer ever sees new
//! values paired with stale statuses.
//!
//! Snapshots are immutable and shared through [`Arc`]: a snapshot captured
//! by a caller stays exactly as it was when later updates replace the
//! engine's current one.
//!
//! The engine is single-threaded. Every update runs to completion before
//! returning, and the callback fires synchronously, exactly once per update.
//!
//! # Example
//!
//! ```
//! use card_form::{create_form_engine, CardNetwork, FieldName, ValidationState};
//!
//! let mut engine = create_form_engine(false, |snapshot| {
//!     println!("number is {}", snapshot.status.number);
//! });
//!
//! engine.update_field(FieldName::Number, "4");
//! engine.update_field(FieldName::Number, "41111111");
//! engine.update_field(FieldName::Number, "4111111111111111");
//!
//! let snapshot = engine.current_snapshot();
//! assert_eq!(snapshot.values.network, CardNetwork::Visa);
//! assert_eq!(snapshot.values.number, "4111 1111 1111 1111");
//! assert_eq!(snapshot.status.number, ValidationState::Valid);
//! ```

use std::fmt;
use std::sync::Arc;

use tracing::debug;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::config::FormConfig;
use crate::cvc::{format_cvc, validate_cvc};
use crate::detect::detect_network;
use crate::error::FormError;
use crate::expiry::{format_expiry_edit, validate_expiry_with_options};
use crate::format::format_number;
use crate::mask::{mask_cvc, mask_number};
use crate::name::validate_name;
use crate::validate::validate_number;
use crate::{CardNetwork, FieldName, ValidationState};

/// Display values of every field, plus the detected network.
///
/// The strings are wiped from memory when the values are dropped, and the
/// `Debug` output masks the card number and security code.
#[derive(Clone, Default, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FormValues {
    /// Card number, grouped for the detected network.
    pub number: String,
    /// Expiry as `MM/YY` (or the partial form of it).
    pub expiry: String,
    /// Security code, digits only.
    pub cvc: String,
    /// Cardholder name, as typed.
    pub name: String,
    /// Network detected from the card number.
    #[zeroize(skip)]
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub network: CardNetwork,
}

impl FormValues {
    /// Returns the display value of a field.
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::Number => &self.number,
            FieldName::Expiry => &self.expiry,
            FieldName::Cvc => &self.cvc,
            FieldName::Name => &self.name,
        }
    }
}

impl fmt::Debug for FormValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormValues")
            .field("number", &mask_number(&self.number, self.network))
            .field("expiry", &self.expiry)
            .field("cvc", &mask_cvc(&self.cvc))
            .field("name", &self.name)
            .field("network", &self.network)
            .finish()
    }
}

/// Validation state of every field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FormStatus {
    /// Card number state.
    pub number: ValidationState,
    /// Expiry state.
    pub expiry: ValidationState,
    /// Security code state.
    pub cvc: ValidationState,
    /// Cardholder name state.
    pub name: ValidationState,
}

impl FormStatus {
    /// Returns the state of a field.
    pub const fn get(&self, field: FieldName) -> ValidationState {
        match field {
            FieldName::Number => self.number,
            FieldName::Expiry => self.expiry,
            FieldName::Cvc => self.cvc,
            FieldName::Name => self.name,
        }
    }

    /// Returns true if every field is valid.
    ///
    /// A name that is not required always validates, so this is the
    /// aggregate validity of the form.
    pub const fn all_valid(&self) -> bool {
        self.number.is_valid()
            && self.expiry.is_valid()
            && self.cvc.is_valid()
            && self.name.is_valid()
    }
}

/// Immutable view of the form after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FormSnapshot {
    /// Display values and detected network.
    pub values: FormValues,
    /// Per-field validation states.
    pub status: FormStatus,
    /// True iff every required field is valid.
    pub valid: bool,
}

impl FormSnapshot {
    /// Returns the detected card network.
    #[inline]
    pub fn network(&self) -> CardNetwork {
        self.values.network
    }
}

/// Callback invoked with every new snapshot.
pub type ChangeCallback = Box<dyn FnMut(Arc<FormSnapshot>)>;

/// Card form engine. See the [module docs](self).
pub struct FormEngine {
    config: FormConfig,
    current: Arc<FormSnapshot>,
    on_change: Option<ChangeCallback>,
}

impl FormEngine {
    /// Creates an engine with empty fields and no change callback.
    ///
    /// The initial snapshot has every field `incomplete` (the name `valid`
    /// when it is not required) and is not reported to any callback.
    pub fn new(config: FormConfig) -> Self {
        let current = Arc::new(evaluate(&config, FormValues::default()));
        Self {
            config,
            current,
            on_change: None,
        }
    }

    /// Creates an engine that reports every update to `on_change`.
    pub fn with_callback<F>(config: FormConfig, on_change: F) -> Self
    where
        F: FnMut(Arc<FormSnapshot>) + 'static,
    {
        let mut engine = Self::new(config);
        engine.set_on_change(on_change);
        engine
    }

    /// Replaces the change callback.
    pub fn set_on_change<F>(&mut self, on_change: F)
    where
        F: FnMut(Arc<FormSnapshot>) + 'static,
    {
        self.on_change = Some(Box::new(on_change));
    }

    /// Applies raw text typed into a field.
    ///
    /// The edited field is normalized, the network is re-detected when the
    /// number changes, every field is re-validated against the current
    /// network, and the new snapshot replaces the current one. The change
    /// callback then runs once with the new snapshot.
    pub fn update_field(&mut self, field: FieldName, raw: &str) {
        let previous = Arc::clone(&self.current);
        let mut values = previous.values.clone();

        match field {
            FieldName::Number => {
                values.network = detect_network(raw);
                values.number = format_number(raw, values.network);
            }
            FieldName::Expiry => {
                values.expiry = format_expiry_edit(&previous.values.expiry, raw);
            }
            FieldName::Cvc => {
                values.cvc = raw.to_string();
            }
            FieldName::Name => {
                values.name = raw.to_string();
            }
        }

        // The code length follows the network, so re-derive it on every
        // update, not only when the cvc field itself changes.
        values.cvc = format_cvc(&values.cvc, values.network);

        if values.network != previous.values.network {
            debug!(
                from = previous.values.network.tag(),
                to = values.network.tag(),
                "card network changed"
            );
        }

        let snapshot = Arc::new(evaluate(&self.config, values));
        debug!(
            field = field.as_str(),
            status = snapshot.status.get(field).as_str(),
            network = snapshot.values.network.tag(),
            valid = snapshot.valid,
            "form field updated"
        );

        self.current = Arc::clone(&snapshot);
        if let Some(on_change) = self.on_change.as_mut() {
            on_change(snapshot);
        }
    }

    /// Applies raw text to a field named by its tag.
    ///
    /// For string-driven surfaces (bindings, CLIs). An unknown field name is
    /// a caller bug and is returned as an error without touching the form.
    pub fn update_field_named(&mut self, field: &str, raw: &str) -> Result<(), FormError> {
        let field: FieldName = field.parse()?;
        self.update_field(field, raw);
        Ok(())
    }

    /// Returns the most recent snapshot.
    #[inline]
    pub fn current_snapshot(&self) -> Arc<FormSnapshot> {
        Arc::clone(&self.current)
    }

    /// Returns the engine configuration.
    #[inline]
    pub fn config(&self) -> &FormConfig {
        &self.config
    }
}

impl fmt::Debug for FormEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormEngine")
            .field("config", &self.config)
            .field("current", &self.current)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

/// Creates an engine with the given name requirement and change callback.
pub fn create_form_engine<F>(requires_name: bool, on_change: F) -> FormEngine
where
    F: FnMut(Arc<FormSnapshot>) + 'static,
{
    FormEngine::with_callback(
        FormConfig::default().with_requires_name(requires_name),
        on_change,
    )
}

/// Validates normalized values into a snapshot.
fn evaluate(config: &FormConfig, values: FormValues) -> FormSnapshot {
    let network = values.network;
    let status = FormStatus {
        number: validate_number(&values.number, network),
        expiry: validate_expiry_with_options(
            &values.expiry,
            config.reference(),
            config.max_expiry_years,
        ),
        cvc: validate_cvc(&values.cvc, network),
        name: validate_name(&values.name, config.requires_name),
    };

    FormSnapshot {
        valid: status.all_valid(),
        values,
        status,
    }
}
