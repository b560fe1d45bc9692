//! Card validation service
//!
//! The single use case of the API: normalize a submitted card number, check
//! its Luhn checksum and identify its network.

use crate::domain::entities::{CardNumber, ValidationResult};

use super::luhn::is_valid_luhn;
use super::network_classifier::classify_network;

/// Stateless service evaluating card numbers.
///
/// Holds no data of its own; the network pattern table is a process-wide
/// constant, so one instance can be shared across all requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct CardValidationService;

impl CardValidationService {
    pub fn new() -> Self {
        Self
    }

    /// Evaluate raw user input.
    ///
    /// Normalization happens once so the checksum and the classifier always
    /// see the same canonical string.
    pub fn validate(&self, raw: &str) -> ValidationResult {
        let card = CardNumber::normalize(raw);
        self.validate_card(&card)
    }

    /// Evaluate an already normalized card number
    pub fn validate_card(&self, card: &CardNumber) -> ValidationResult {
        let is_valid = is_valid_luhn(card.as_str());
        let card_network = classify_network(card.as_str());

        tracing::debug!(
            card = %card,
            length = card.as_str().len(),
            is_valid,
            network = %card_network,
            known_network = card_network.is_known(),
            "Card number evaluated"
        );

        ValidationResult::new(is_valid, card_network)
    }
}
