//! Card network classifier
//!
//! Assigns a card network from the number's prefix and length. Runs
//! independently of the checksum, so a number can look like a Visa card and
//! still fail validation.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::entities::CardNetwork;

/// Ordered network patterns, anchored at both ends. First match wins.
static NETWORK_PATTERNS: LazyLock<Vec<(CardNetwork, Regex)>> = LazyLock::new(|| {
    [
        (CardNetwork::Visa, r"^4[0-9]{12}(?:[0-9]{3})?$"),
        (CardNetwork::MasterCard, r"^5[1-5][0-9]{14}$"),
        (CardNetwork::AmericanExpress, r"^3[47][0-9]{13}$"),
    ]
    .into_iter()
    .map(|(network, pattern)| {
        // Patterns are literals, so this only fails on a programming error
        let re = Regex::new(pattern)
            .unwrap_or_else(|e| panic!("invalid {} pattern: {}", network, e));
        (network, re)
    })
    .collect()
});

/// Identify the card network of a normalized card number.
///
/// Returns [`CardNetwork::Unknown`] when no pattern matches.
pub fn classify_network(number: &str) -> CardNetwork {
    NETWORK_PATTERNS
        .iter()
        .find(|(_, re)| re.is_match(number))
        .map(|(network, _)| *network)
        .unwrap_or(CardNetwork::Unknown)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visa() {
        assert_eq!(classify_network("4532015112830366"), CardNetwork::Visa);
        assert_eq!(classify_network("4222222222222"), CardNetwork::Visa);
        // Checksum is irrelevant to classification
        assert_eq!(classify_network("4532015112830367"), CardNetwork::Visa);
    }

    #[test]
    fn test_visa_lengths() {
        assert_eq!(classify_network("411111111111"), CardNetwork::Unknown);
        assert_eq!(classify_network("41111111111111"), CardNetwork::Unknown);
        assert_eq!(classify_network("411111111111111"), CardNetwork::Unknown);
        assert_eq!(classify_network("41111111111111111"), CardNetwork::Unknown);
        assert_eq!(classify_network("4111111111111111111"), CardNetwork::Unknown);
    }

    #[test]
    fn test_mastercard() {
        assert_eq!(classify_network("5500000000000004"), CardNetwork::MasterCard);
        assert_eq!(classify_network("5105105105105100"), CardNetwork::MasterCard);
        assert_eq!(classify_network("5555555555554444"), CardNetwork::MasterCard);
    }

    #[test]
    fn test_mastercard_second_digit_range() {
        assert_eq!(classify_network("5000000000000000"), CardNetwork::Unknown);
        assert_eq!(classify_network("5600000000000000"), CardNetwork::Unknown);
        assert_eq!(classify_network("550000000000000"), CardNetwork::Unknown);
        // 2-series MasterCard ranges are not recognised
        assert_eq!(classify_network("2221000000000009"), CardNetwork::Unknown);
    }

    #[test]
    fn test_american_express() {
        assert_eq!(
            classify_network("371449635398431"),
            CardNetwork::AmericanExpress
        );
        assert_eq!(
            classify_network("341111111111111"),
            CardNetwork::AmericanExpress
        );
        assert_eq!(classify_network("351111111111111"), CardNetwork::Unknown);
        assert_eq!(classify_network("3714496353984310"), CardNetwork::Unknown);
    }

    #[test]
    fn test_unknown() {
        assert_eq!(classify_network("1234567812345670"), CardNetwork::Unknown);
        assert_eq!(classify_network("6011111111111117"), CardNetwork::Unknown);
        assert_eq!(classify_network("123"), CardNetwork::Unknown);
        assert_eq!(classify_network(""), CardNetwork::Unknown);
        assert_eq!(classify_network("abc"), CardNetwork::Unknown);
    }

    #[test]
    fn test_patterns_are_anchored() {
        assert_eq!(classify_network("x4532015112830366"), CardNetwork::Unknown);
        assert_eq!(classify_network("4532015112830366x"), CardNetwork::Unknown);
        assert_eq!(classify_network("4532015112830366\n"), CardNetwork::Unknown);
        assert_eq!(classify_network("4532 0151 1283 0366"), CardNetwork::Unknown);
    }

    #[test]
    fn test_ascii_digits_only() {
        assert_eq!(classify_network("4٥٣٢٠١٥١١٢٨٣٠٣٦٦"), CardNetwork::Unknown);
    }
}
