use serde::{Deserialize, Serialize};

/// Outcome of asking the validation API about a member.
///
/// Exactly one variant is produced per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    /// The API answered; `true` if the member is a verified OSF member.
    Verified(bool),
    /// The API could not answer: non-200 status, unreadable body, or transport failure.
    Failure(String),
}

/// Request body for `GET /api/v1/bot/validate`.
#[derive(Debug, Clone, Serialize)]
pub struct ValidateRequestDto {
    pub id: u64,
}

/// Response body of a successful validation request.
#[derive(Debug, Clone, Deserialize)]
pub struct ValidateResponseDto {
    pub result: bool,
}
