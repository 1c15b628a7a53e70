//! Card network detection using IIN prefix rules.
//!
//! The Issuer Identification Number (IIN) is the leading run of digits of a
//! card number. Detection walks a fixed table of prefix ranges, widest prefix
//! first, and answers with the first rule that matches.
//!
//! Detection runs on every keystroke, so it must be safe on partial input:
//! while the digits typed so far could still grow into a rule of a
//! *different* network, the answer is `Unknown` rather than a guess. Once a
//! concrete network is returned, typing more digits never switches it to
//! another concrete network.

use crate::CardNetwork;

/// A contiguous range of `width`-digit prefixes belonging to one network.
#[derive(Debug, Clone, Copy)]
struct PrefixRule {
    low: u32,
    high: u32,
    width: u8,
    network: CardNetwork,
}

/// Outcome of comparing typed digits against one rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RuleMatch {
    /// The leading `width` digits fall inside the range.
    Matched,
    /// Fewer than `width` digits typed, and some completion lands in range.
    Pending,
    /// No completion of the digits can land in range.
    Excluded,
}

impl PrefixRule {
    const fn new(low: u32, high: u32, width: u8, network: CardNetwork) -> Self {
        Self {
            low,
            high,
            width,
            network,
        }
    }

    fn classify(&self, digits: &[u8]) -> RuleMatch {
        let width = self.width as usize;
        let typed = digits.len().min(width);
        let prefix = digits[..typed]
            .iter()
            .fold(0u32, |acc, &d| acc * 10 + d as u32);

        if typed == width {
            return if (self.low..=self.high).contains(&prefix) {
                RuleMatch::Matched
            } else {
                RuleMatch::Excluded
            };
        }

        // Completions of the typed digits span [floor, floor + scale - 1].
        let scale = 10u32.pow((width - typed) as u32);
        let floor = prefix * scale;
        let ceil = floor + scale - 1;
        if floor <= self.high && ceil >= self.low {
            RuleMatch::Pending
        } else {
            RuleMatch::Excluded
        }
    }
}

/// Prefix rules, widest prefix first. Order within a width is priority order.
const PREFIX_RULES: &[PrefixRule] = &[
    // 4-digit prefixes
    PrefixRule::new(6011, 6011, 4, CardNetwork::Discover),
    PrefixRule::new(2221, 2720, 4, CardNetwork::Mastercard),
    PrefixRule::new(3528, 3589, 4, CardNetwork::Jcb),
    // 3-digit prefixes
    PrefixRule::new(644, 649, 3, CardNetwork::Discover),
    PrefixRule::new(300, 305, 3, CardNetwork::DinersClub),
    // 2-digit prefixes
    PrefixRule::new(34, 34, 2, CardNetwork::Amex),
    PrefixRule::new(37, 37, 2, CardNetwork::Amex),
    PrefixRule::new(36, 36, 2, CardNetwork::DinersClub),
    PrefixRule::new(38, 39, 2, CardNetwork::DinersClub),
    PrefixRule::new(51, 55, 2, CardNetwork::Mastercard),
    PrefixRule::new(65, 65, 2, CardNetwork::Discover),
    PrefixRule::new(62, 62, 2, CardNetwork::UnionPay),
    // 1-digit prefixes
    PrefixRule::new(4, 4, 1, CardNetwork::Visa),
];

/// Detects the card network from a (partial) card number string.
///
/// Non-digit characters are ignored, so both raw keystrokes and formatted
/// values can be passed.
///
/// # Example
///
/// ```
/// use card_form::detect::detect_network;
/// use card_form::CardNetwork;
///
/// assert_eq!(detect_network("4"), CardNetwork::Visa);
/// assert_eq!(detect_network("3782 822463 10005"), CardNetwork::Amex);
///
/// // "5" could still become Mastercard 51-55: no guess yet
/// assert_eq!(detect_network("5"), CardNetwork::Unknown);
/// assert_eq!(detect_network("55"), CardNetwork::Mastercard);
/// ```
pub fn detect_network(input: &str) -> CardNetwork {
    let digits: Vec<u8> = input
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect();
    detect_network_digits(&digits)
}

/// Detects the card network from a slice of digit values (0-9).
///
/// Returns `Unknown` for empty input, for input that matches no rule, and
/// for input that is still a strict prefix of a rule belonging to a network
/// other than the one matched so far.
pub fn detect_network_digits(digits: &[u8]) -> CardNetwork {
    if digits.is_empty() {
        return CardNetwork::Unknown;
    }

    let matched = PREFIX_RULES
        .iter()
        .find(|rule| rule.classify(digits) == RuleMatch::Matched)
        .map(|rule| rule.network);

    let ambiguous = PREFIX_RULES.iter().any(|rule| {
        Some(rule.network) != matched && rule.classify(digits) == RuleMatch::Pending
    });

    match matched {
        Some(network) if !ambiguous => network,
        _ => CardNetwork::Unknown,
    }
}

/// Returns true if the digits match a rule, or could still match one as more
/// digits are typed. Empty input is plausible.
///
/// # Example
///
/// ```
/// use card_form::detect::is_plausible_prefix;
///
/// assert!(is_plausible_prefix(&[]));
/// assert!(is_plausible_prefix(&[3, 5])); // JCB 3528-3589 still possible
/// assert!(!is_plausible_prefix(&[0]));
/// ```
pub fn is_plausible_prefix(digits: &[u8]) -> bool {
    digits.is_empty()
        || PREFIX_RULES
            .iter()
            .any(|rule| rule.classify(digits) != RuleMatch::Excluded)
}
