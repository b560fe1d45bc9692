//! Domain entities
//!
//! Pure domain models for card validation.

pub mod card_network;
pub mod card_number;
pub mod validation_result;

pub use card_network::CardNetwork;
pub use card_number::CardNumber;
pub use validation_result::ValidationResult;
