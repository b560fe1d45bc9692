//! Test fixtures
//!
//! Well-known test card numbers covering each combination of checksum
//! validity and network recognition.

/// Luhn-valid Visa number
pub const VISA_VALID: &str = "4532015112830366";

/// Same Visa number as typed by a user, grouped in fours
pub const VISA_VALID_SPACED: &str = "4532 0151 1283 0366";

/// Visa pattern, wrong check digit
pub const VISA_INVALID: &str = "4532015112830367";

/// Luhn-valid MasterCard number
pub const MASTERCARD_VALID: &str = "5555555555554444";

/// Luhn-valid American Express number
pub const AMEX_VALID: &str = "371449635398431";

/// Luhn-valid, but matches no known network
pub const UNKNOWN_VALID: &str = "1234567812345670";

/// Neither Luhn-valid nor a known network
pub const UNKNOWN_INVALID: &str = "1234567812345678";

/// Build a `/validate` request body
pub fn validate_body(card_number: &str) -> serde_json::Value {
    serde_json::json!({ "credit_card_number": card_number })
}
