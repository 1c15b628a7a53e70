//! # card_form
//!
//! Live formatting and validation of payment card form fields.
//!
//! The engine sits between the text inputs of a card form and whatever
//! renders them. Every keystroke goes in as raw text; out comes a snapshot
//! with the normalized display value of each field, the detected card
//! network, a three-valued validation state per field and the aggregate
//! validity of the form.
//!
//! ## Features
//!
//! - Card network detection from the leading digits, stable while typing
//! - Network-aware digit grouping (`4111 1111 1111 1111`, `3782 822463 10005`)
//! - Luhn checksum, applied once a valid length is reached
//! - `MM/YY` expiry formatting that lets the separator be deleted
//! - Security code length that follows the detected network
//! - `valid` / `invalid` / `incomplete` states suited to keystroke feedback
//! - Configurable error messages and a flagging rule for views
//!
//! ## Quick Start
//!
//! ```rust
//! use card_form::{FieldName, FormConfig, FormEngine, ValidationState};
//! use card_form::expiry::YearMonth;
//!
//! let config = FormConfig::default().with_reference_date(YearMonth::new(2024, 6).unwrap());
//! let mut engine = FormEngine::new(config);
//!
//! engine.update_field(FieldName::Number, "378282246310005");
//! engine.update_field(FieldName::Expiry, "0927");
//! engine.update_field(FieldName::Cvc, "1234");
//!
//! let snapshot = engine.current_snapshot();
//! assert_eq!(snapshot.values.number, "3782 822463 10005");
//! assert_eq!(snapshot.values.expiry, "09/27");
//! assert_eq!(snapshot.status.cvc, ValidationState::Valid);
//! assert!(snapshot.valid);
//! ```
//!
//! ## Change Notifications
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use card_form::{create_form_engine, FieldName};
//!
//! let updates = Rc::new(Cell::new(0));
//! let counter = Rc::clone(&updates);
//! let mut engine = create_form_engine(true, move |snapshot| {
//!     counter.set(counter.get() + 1);
//!     assert!(!snapshot.valid);
//! });
//!
//! engine.update_field(FieldName::Name, "Jane Doe");
//! assert_eq!(updates.get(), 1);
//! ```
//!
//! ## Standalone Helpers
//!
//! ```rust
//! use card_form::{detect_network, format_number, validate_cvc, CardNetwork, ValidationState};
//!
//! assert_eq!(detect_network("5555"), CardNetwork::Mastercard);
//! assert_eq!(format_number("5555555555554444", CardNetwork::Mastercard), "5555 5555 5555 4444");
//! assert_eq!(validate_cvc("12", CardNetwork::Visa), ValidationState::Incomplete);
//! ```
//!
//! ## Supported Networks
//!
//! | Network | Prefix | Length | Groups | CVC |
//! |---------|--------|--------|--------|-----|
//! | Visa | 4 | 16, 18, 19 | 4-4-4-4-3 | 3 |
//! | Mastercard | 51-55, 2221-2720 | 16 | 4-4-4-4 | 3 |
//! | American Express | 34, 37 | 15 | 4-6-5 | 4 |
//! | Discover | 6011, 644-649, 65 | 16, 19 | 4-4-4-4-3 | 3 |
//! | Diners Club | 300-305, 36, 38, 39 | 14, 16, 19 | 4-6-9 | 3 |
//! | JCB | 3528-3589 | 16-19 | 4-4-4-4-3 | 3 |
//! | UnionPay | 62 | 14-19 | 4-4-4-4-3 | 3 |
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | Serialize snapshots, load configuration from JSON |
//! | `generate` | Random test card generation |
//! | `cli` | The `ccform` command-line tool |
//! | `wasm` | WebAssembly bindings |
//!
//! ## Security
//!
//! - Field values are zeroized when a snapshot is dropped
//! - `Debug` output masks the card number and security code
//! - Tracing events carry states and network tags, never digits
//! - No unsafe code (`#![deny(unsafe_code)]`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod card;
pub mod config;
pub mod cvc;
pub mod detect;
pub mod engine;
pub mod error;
pub mod expiry;
pub mod feedback;
pub mod format;
pub mod generate;
pub mod luhn;
pub mod mask;
pub mod name;
pub mod state;
pub mod validate;

#[cfg(feature = "wasm")]
mod wasm;

// Re-export main types at crate root
pub use card::{CardNetwork, MAX_CARD_DIGITS, MIN_CARD_DIGITS};
pub use config::FormConfig;
pub use engine::{create_form_engine, FormEngine, FormSnapshot, FormStatus, FormValues};
pub use error::FormError;
pub use expiry::YearMonth;
pub use feedback::ErrorMessages;
pub use state::{FieldName, ValidationState};

// Re-export the per-field operations
pub use cvc::validate_cvc;
pub use detect::detect_network;
pub use expiry::validate_expiry;
pub use format::format_number;
pub use name::validate_name;
pub use validate::{is_valid_number, validate_number};
