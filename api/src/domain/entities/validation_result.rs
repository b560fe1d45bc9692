//! Validation result domain entity

use super::CardNetwork;

/// Outcome of evaluating one card number.
///
/// An invalid checksum or an unrecognised network is a normal result, not an
/// error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub card_network: CardNetwork,
}

impl ValidationResult {
    pub fn new(is_valid: bool, card_network: CardNetwork) -> Self {
        Self {
            is_valid,
            card_network,
        }
    }
}
