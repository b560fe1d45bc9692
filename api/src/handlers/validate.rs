//! Card validation handler
//!
//! `POST /validate` reports whether a card number passes the Luhn checksum and
//! which network it appears to belong to.

use axum::{
    body::Bytes,
    extract::State,
    http::{header, Method},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::domain::entities::ValidationResult;
use crate::error::AppError;
use crate::AppState;

/// Request body for card validation
#[derive(Debug, Default, Deserialize)]
pub struct ValidateRequest {
    /// Card number as typed by the user; spaces are allowed.
    /// A missing or `null` field is treated as an empty number.
    #[serde(default)]
    pub credit_card_number: Option<String>,
}

impl ValidateRequest {
    /// Decode a request body. A bare `null` body is the empty request.
    pub fn from_body(body: &[u8]) -> Result<Self, AppError> {
        serde_json::from_slice::<Option<Self>>(body)
            .map(Option::unwrap_or_default)
            .map_err(AppError::BadRequest)
    }

    pub fn card_number(&self) -> &str {
        self.credit_card_number.as_deref().unwrap_or_default()
    }
}

/// Response body for card validation
#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    pub is_valid: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub card_network: String,
}

impl From<ValidationResult> for ValidateResponse {
    fn from(result: ValidationResult) -> Self {
        Self {
            is_valid: result.is_valid,
            card_network: result.card_network.label().to_string(),
        }
    }
}

/// POST /validate
///
/// The body is decoded as JSON whatever the `Content-Type` header says.
/// An invalid or unrecognised number is still a 200 response; only a body
/// that is not `{"credit_card_number": "<string>"}` is rejected.
pub async fn validate_card(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, AppError> {
    let request = ValidateRequest::from_body(&body)?;

    let result = state.validation_service.validate(request.card_number());

    let json = serde_json::to_vec(&ValidateResponse::from(result)).map_err(AppError::Encoding)?;

    Ok(([(header::CONTENT_TYPE, "application/json")], json).into_response())
}

/// Fallback for any method other than POST on `/validate`
pub async fn method_not_allowed(method: Method) -> AppError {
    AppError::MethodNotAllowed(method.to_string())
}
