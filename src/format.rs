//! Card number formatting for display while typing.
//!
//! Formatting is a pure function of the digits and the network: every
//! non-digit is dropped, the digits are truncated to the network's longest
//! valid length, and separators are re-inserted after each group. Running
//! it on its own output is a no-op.
//!
//! # Format Conventions
//!
//! - **Visa/Mastercard/Discover/JCB/UnionPay**: `XXXX XXXX XXXX XXXX XXX`
//! - **American Express** (15 digits): `XXXX XXXXXX XXXXX`
//! - **Diners Club**: `XXXX XXXXXX XXXX…`
//!
//! # Example
//!
//! ```
//! use card_form::format::format_number;
//! use card_form::CardNetwork;
//!
//! assert_eq!(format_number("4111111111111111", CardNetwork::Visa), "4111 1111 1111 1111");
//! assert_eq!(format_number("378282246310005", CardNetwork::Amex), "3782 822463 10005");
//! assert_eq!(format_number("41111", CardNetwork::Visa), "4111 1");
//! ```

use crate::CardNetwork;

/// Separator inserted between digit groups.
pub const SEPARATOR: char = ' ';

/// Strips everything except ASCII digits.
///
/// # Example
///
/// ```
/// use card_form::format::strip_non_digits;
///
/// assert_eq!(strip_non_digits("4111-1111 1111.1111"), "4111111111111111");
/// ```
pub fn strip_non_digits(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Formats a raw card number for the given network.
///
/// Non-digits are discarded, the digits are capped at
/// `network.max_length()` (19 when the network is unknown) and grouped by
/// `network.group_sizes()`.
pub fn format_number(raw: &str, network: CardNetwork) -> String {
    let mut digits = strip_non_digits(raw);
    digits.truncate(network.max_length());
    group_digits(&digits, network.group_sizes())
}

/// Joins a digit string into groups of the given sizes.
///
/// Digits beyond the last group are appended as one trailing group.
/// A separator is only written once a digit follows it, so partial input
/// never ends in a separator.
pub fn group_digits(digits: &str, group_sizes: &[u8]) -> String {
    let separator = SEPARATOR.to_string();
    split_groups(digits, group_sizes).join(separator.as_str())
}

/// Splits a raw card number into its display groups for the network.
///
/// # Example
///
/// ```
/// use card_form::format::split_into_groups;
/// use card_form::CardNetwork;
///
/// let groups = split_into_groups("378282246310005", CardNetwork::Amex);
/// assert_eq!(groups, vec!["3782", "822463", "10005"]);
/// ```
pub fn split_into_groups(raw: &str, network: CardNetwork) -> Vec<String> {
    let mut digits = strip_non_digits(raw);
    digits.truncate(network.max_length());
    split_groups(&digits, network.group_sizes())
        .into_iter()
        .map(str::to_string)
        .collect()
}

fn split_groups<'a>(digits: &'a str, group_sizes: &[u8]) -> Vec<&'a str> {
    let mut groups = Vec::with_capacity(group_sizes.len() + 1);
    let mut rest = digits;

    for &size in group_sizes {
        if rest.is_empty() {
            break;
        }
        let (group, tail) = rest.split_at((size as usize).min(rest.len()));
        groups.push(group);
        rest = tail;
    }

    if !rest.is_empty() {
        groups.push(rest);
    }

    groups
}

/// Returns true if the string contains only digits and the group separator.
///
/// # Example
///
/// ```
/// use card_form::format::is_number_alphabet;
///
/// assert!(is_number_alphabet("4111 1111"));
/// assert!(!is_number_alphabet("4111-1111"));
/// ```
pub fn is_number_alphabet(input: &str) -> bool {
    input.chars().all(|c| c.is_ascii_digit() || c == SEPARATOR)
}
