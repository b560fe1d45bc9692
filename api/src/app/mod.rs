//! Application layer
//!
//! Contains the card validation use case and the pure functions it is built
//! from: the Luhn checksum and the network classifier.

pub mod luhn;
pub mod network_classifier;
pub mod validation_service;

pub use validation_service::CardValidationService;
