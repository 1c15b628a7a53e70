//! Test card numbers for exercising the form.
//!
//! Every generated number passes the Luhn checksum and starts with a prefix
//! the detector maps to the requested network, so typing it digit by digit
//! walks the form through `incomplete` to `valid`. The numbers belong to no
//! real account.
//!
//! # Example
//!
//! ```
//! use card_form::generate::{generate_card_deterministic, CardGenerator};
//! use card_form::{detect_network, is_valid_number, CardNetwork};
//!
//! let number = generate_card_deterministic(CardNetwork::Amex);
//! assert_eq!(number.len(), 15);
//! assert_eq!(detect_network(&number), CardNetwork::Amex);
//! assert!(is_valid_number(&number));
//!
//! let long_visa = CardGenerator::new(CardNetwork::Visa).length(19).generate_deterministic();
//! assert!(is_valid_number(&long_visa));
//! ```

use crate::luhn;
use crate::CardNetwork;

#[cfg(feature = "generate")]
use rand::Rng;

/// Returns a prefix that the detector resolves to `network`.
///
/// `Unknown` gets a prefix no network claims.
pub const fn prefix_for_network(network: CardNetwork) -> &'static str {
    match network {
        CardNetwork::Visa => "4",
        CardNetwork::Mastercard => "51",
        CardNetwork::Amex => "34",
        CardNetwork::Discover => "6011",
        CardNetwork::DinersClub => "36",
        CardNetwork::Jcb => "3528",
        CardNetwork::UnionPay => "62",
        CardNetwork::Unknown => "9",
    }
}

/// Shortest valid length of the network, or 16 when it has none.
const fn default_length(network: CardNetwork) -> usize {
    match network.number_lengths() {
        [first, ..] if network.is_known() => *first as usize,
        _ => 16,
    }
}

/// Generates a number for the network with zero padding (no randomness).
///
/// The same network always yields the same number.
pub fn generate_card_deterministic(network: CardNetwork) -> String {
    generate_card_deterministic_with_prefix(prefix_for_network(network), default_length(network))
}

/// Generates a zero-padded number that starts with `prefix`.
///
/// Non-digits in the prefix are ignored.
///
/// # Panics
///
/// Panics if the prefix has as many digits as `length` or more, since no
/// room would be left for the check digit.
pub fn generate_card_deterministic_with_prefix(prefix: &str, length: usize) -> String {
    build(prefix, length, || 0)
}

/// Generates a random number for the network.
///
/// Requires the `generate` feature.
#[cfg(feature = "generate")]
pub fn generate_card(network: CardNetwork) -> String {
    let mut rng = rand::thread_rng();
    generate_card_with_rng(prefix_for_network(network), default_length(network), &mut rng)
}

/// Generates a random number with the given prefix from a caller's RNG.
///
/// Useful with a seeded RNG for reproducible fixtures.
///
/// # Panics
///
/// Panics under the same condition as
/// [`generate_card_deterministic_with_prefix`].
#[cfg(feature = "generate")]
pub fn generate_card_with_rng<R: Rng>(prefix: &str, length: usize, rng: &mut R) -> String {
    build(prefix, length, || rng.gen_range(0..10))
}

/// Generates `count` random numbers for the network.
#[cfg(feature = "generate")]
pub fn generate_cards(network: CardNetwork, count: usize) -> Vec<String> {
    (0..count).map(|_| generate_card(network)).collect()
}

fn build(prefix: &str, length: usize, mut fill: impl FnMut() -> u8) -> String {
    let mut digits: Vec<u8> = prefix
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect();
    assert!(
        digits.len() < length,
        "prefix must leave room for the check digit"
    );

    while digits.len() < length - 1 {
        digits.push(fill());
    }
    digits.push(luhn::generate_check_digit(&digits));

    digits.iter().map(|&d| char::from(b'0' + d)).collect()
}

/// Builder for test numbers with a custom prefix or length.
#[derive(Debug, Clone)]
pub struct CardGenerator {
    prefix: String,
    length: usize,
}

impl CardGenerator {
    /// Starts from the network's default prefix and shortest length.
    pub fn new(network: CardNetwork) -> Self {
        Self {
            prefix: prefix_for_network(network).to_string(),
            length: default_length(network),
        }
    }

    /// Starts from a custom prefix with length 16.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            length: 16,
        }
    }

    /// Sets the total number of digits.
    pub fn length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Generates a zero-padded number.
    pub fn generate_deterministic(&self) -> String {
        generate_card_deterministic_with_prefix(&self.prefix, self.length)
    }

    /// Generates a random number.
    #[cfg(feature = "generate")]
    pub fn generate(&self) -> String {
        let mut rng = rand::thread_rng();
        generate_card_with_rng(&self.prefix, self.length, &mut rng)
    }
}
