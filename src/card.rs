//! Card network tags and their per-network rules.
//!
//! Every network carries a closed, build-time set of rules: which total digit
//! counts are valid, how the digits are grouped for display, and how long the
//! security code is. The prefix patterns that identify a network live in
//! [`detect`](crate::detect).

use std::fmt;
use std::str::FromStr;

use crate::error::FormError;

/// Maximum number of digits in a card number of any network.
pub const MAX_CARD_DIGITS: usize = 19;

/// Minimum number of digits before an unrecognized number can be judged.
pub const MIN_CARD_DIGITS: usize = 12;

/// Card networks recognized by the form engine.
///
/// `Unknown` is the state before enough digits have been typed to identify a
/// network, or when the digits match no network at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum CardNetwork {
    /// Visa - Prefix 4, lengths 16, 18, 19
    Visa,
    /// Mastercard - Prefix 51-55, 2221-2720, length 16
    Mastercard,
    /// American Express - Prefix 34, 37, length 15
    Amex,
    /// Discover - Prefix 6011, 644-649, 65, lengths 16, 19
    Discover,
    /// Diners Club - Prefix 300-305, 36, 38-39, lengths 14, 16, 19
    DinersClub,
    /// JCB - Prefix 3528-3589, length 16-19
    Jcb,
    /// UnionPay - Prefix 62, length 14-19
    UnionPay,
    /// No network identified (yet).
    #[default]
    Unknown,
}

impl CardNetwork {
    /// All concrete networks, in display order.
    pub const KNOWN: [CardNetwork; 7] = [
        Self::Visa,
        Self::Mastercard,
        Self::Amex,
        Self::Discover,
        Self::DinersClub,
        Self::Jcb,
        Self::UnionPay,
    ];

    /// Returns the valid total digit counts for this network.
    ///
    /// For `Unknown` this is the generic 12-19 range, which only bounds
    /// formatting; an unknown network never validates.
    #[inline]
    pub const fn number_lengths(&self) -> &'static [u8] {
        match self {
            Self::Visa => &[16, 18, 19],
            Self::Mastercard => &[16],
            Self::Amex => &[15],
            Self::Discover => &[16, 19],
            Self::DinersClub => &[14, 16, 19],
            Self::Jcb => &[16, 17, 18, 19],
            Self::UnionPay => &[14, 15, 16, 17, 18, 19],
            Self::Unknown => &[12, 13, 14, 15, 16, 17, 18, 19],
        }
    }

    /// Returns how the digits are chunked for display.
    ///
    /// Grouping depends only on the network, never on the digit count, so
    /// separators stay put as digits are typed. Diners Club keeps 4-6-9 for
    /// its 16 and 19 digit numbers for that reason.
    ///
    /// Digits past the sum of the groups (never reached after truncation)
    /// would be appended as a trailing group.
    #[inline]
    pub const fn group_sizes(&self) -> &'static [u8] {
        match self {
            Self::Amex => &[4, 6, 5],
            Self::DinersClub => &[4, 6, 9],
            Self::Mastercard => &[4, 4, 4, 4],
            Self::Visa | Self::Discover | Self::Jcb | Self::UnionPay | Self::Unknown => {
                &[4, 4, 4, 4, 3]
            }
        }
    }

    /// Returns the required security code length.
    #[inline]
    pub const fn cvc_length(&self) -> usize {
        match self {
            Self::Amex => 4,
            _ => 3,
        }
    }

    /// Returns the largest valid digit count.
    #[inline]
    pub const fn max_length(&self) -> usize {
        let lengths = self.number_lengths();
        lengths[lengths.len() - 1] as usize
    }

    /// Returns the smallest valid digit count.
    #[inline]
    pub const fn min_length(&self) -> usize {
        self.number_lengths()[0] as usize
    }

    /// Returns true if the given length is valid for this network.
    #[inline]
    pub const fn is_valid_length(&self, length: usize) -> bool {
        if matches!(self, Self::Unknown) {
            return false;
        }
        let valid = self.number_lengths();
        let mut i = 0;
        while i < valid.len() {
            if valid[i] as usize == length {
                return true;
            }
            i += 1;
        }
        false
    }

    /// Returns true for every network except `Unknown`.
    #[inline]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }

    /// Returns the lowercase tag used in snapshots and on string surfaces.
    #[inline]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Visa => "visa",
            Self::Mastercard => "mastercard",
            Self::Amex => "amex",
            Self::Discover => "discover",
            Self::DinersClub => "dinersclub",
            Self::Jcb => "jcb",
            Self::UnionPay => "unionpay",
            Self::Unknown => "unknown",
        }
    }

    /// Returns a human-readable name for the network.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Visa => "Visa",
            Self::Mastercard => "Mastercard",
            Self::Amex => "American Express",
            Self::Discover => "Discover",
            Self::DinersClub => "Diners Club",
            Self::Jcb => "JCB",
            Self::UnionPay => "UnionPay",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for CardNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CardNetwork {
    type Err = FormError;

    /// Parses a network tag. Accepts the snapshot tags plus a few common
    /// spellings ("american express", "diners", "union pay").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "visa" => Ok(Self::Visa),
            "mastercard" | "mc" => Ok(Self::Mastercard),
            "amex" | "american express" => Ok(Self::Amex),
            "discover" => Ok(Self::Discover),
            "dinersclub" | "diners" | "diners club" => Ok(Self::DinersClub),
            "jcb" => Ok(Self::Jcb),
            "unionpay" | "union pay" => Ok(Self::UnionPay),
            "unknown" => Ok(Self::Unknown),
            _ => Err(FormError::UnknownNetwork(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_valid_lengths() {
        assert!(CardNetwork::Visa.is_valid_length(16));
        assert!(CardNetwork::Visa.is_valid_length(19));
        assert!(!CardNetwork::Visa.is_valid_length(13));
        assert!(!CardNetwork::Visa.is_valid_length(17));

        assert!(CardNetwork::Amex.is_valid_length(15));
        assert!(!CardNetwork::Amex.is_valid_length(16));

        assert!(CardNetwork::Mastercard.is_valid_length(16));
        assert!(!CardNetwork::Mastercard.is_valid_length(15));

        assert!(!CardNetwork::Unknown.is_valid_length(16));
    }

    #[test]
    fn test_min_max_lengths() {
        assert_eq!(CardNetwork::Amex.min_length(), 15);
        assert_eq!(CardNetwork::Amex.max_length(), 15);
        assert_eq!(CardNetwork::DinersClub.min_length(), 14);
        assert_eq!(CardNetwork::DinersClub.max_length(), 19);
        assert_eq!(CardNetwork::Unknown.min_length(), MIN_CARD_DIGITS);
        assert_eq!(CardNetwork::Unknown.max_length(), MAX_CARD_DIGITS);
    }

    #[test]
    fn test_groups_cover_max_length() {
        for network in CardNetwork::KNOWN.iter().chain([CardNetwork::Unknown].iter()) {
            let total: usize = network.group_sizes().iter().map(|&g| g as usize).sum();
            assert!(
                total >= network.max_length(),
                "{:?} groups must cover its longest number",
                network
            );
        }
    }

    #[test]
    fn test_cvc_lengths() {
        assert_eq!(CardNetwork::Amex.cvc_length(), 4);
        assert_eq!(CardNetwork::Visa.cvc_length(), 3);
        assert_eq!(CardNetwork::Unknown.cvc_length(), 3);
    }

    #[test]
    fn test_network_names() {
        assert_eq!(CardNetwork::Visa.name(), "Visa");
        assert_eq!(CardNetwork::Amex.name(), "American Express");
        assert_eq!(CardNetwork::DinersClub.tag(), "dinersclub");
        assert_eq!(CardNetwork::Mastercard.to_string(), "Mastercard");
    }

    #[test]
    fn test_parse_network() {
        assert_eq!("visa".parse::<CardNetwork>(), Ok(CardNetwork::Visa));
        assert_eq!(" AMEX ".parse::<CardNetwork>(), Ok(CardNetwork::Amex));
        assert_eq!("union pay".parse::<CardNetwork>(), Ok(CardNetwork::UnionPay));
        for network in CardNetwork::KNOWN {
            assert_eq!(network.tag().parse::<CardNetwork>(), Ok(network));
        }
        assert!(matches!(
            "maestro".parse::<CardNetwork>(),
            Err(FormError::UnknownNetwork(_))
        ));
    }

    #[test]
    fn test_default_is_unknown() {
        assert_eq!(CardNetwork::default(), CardNetwork::Unknown);
        assert!(!CardNetwork::Unknown.is_known());
        assert!(CardNetwork::Jcb.is_known());
    }
}
