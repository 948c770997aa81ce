//! Client for the OSF validation API.
//!
//! Asks the remote service whether a Discord user is a verified OSF member. Every
//! request resolves to a `ValidationResult`; HTTP and transport errors are reported as
//! `ValidationResult::Failure` so the caller can surface them in the audit log.

use reqwest::StatusCode;

use crate::model::validation::{ValidateRequestDto, ValidateResponseDto, ValidationResult};

/// Path of the validation endpoint, relative to the API base URL.
pub const VALIDATE_PATH: &str = "/api/v1/bot/validate";

#[derive(Clone)]
pub struct ValidationClient {
    http: reqwest::Client,
    base_url: String,
}

impl ValidationClient {
    /// Creates a client for the API at `base_url`.
    ///
    /// The request timeout is whatever `http` was built with.
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self { http, base_url }
    }

    /// Checks whether the given Discord user is a verified OSF member.
    ///
    /// Sends `GET {base_url}/api/v1/bot/validate` with a `{"id": member_id}` JSON body.
    ///
    /// # Arguments
    /// - `member_id` - Discord user ID to validate
    ///
    /// # Returns
    /// - `Verified(bool)` - 200 response with a `{"result": bool}` body
    /// - `Failure("{status}: {body}")` - Any other status, with the raw response body
    /// - `Failure("invalid response body: ...")` - 200 response that isn't the expected JSON
    /// - `Failure("request failed: ...")` - Timeout or connection error
    pub async fn validate(&self, member_id: u64) -> ValidationResult {
        let url = format!("{}{}", self.base_url, VALIDATE_PATH);

        let response = match self
            .http
            .get(&url)
            .json(&ValidateRequestDto { id: member_id })
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Validation request for {} failed: {}", member_id, e);
                return ValidationResult::Failure(format!("request failed: {}", e));
            }
        };

        let status = response.status();

        if status == StatusCode::OK {
            return match response.json::<ValidateResponseDto>().await {
                Ok(body) => {
                    tracing::debug!("Validation API answered {} for {}", body.result, member_id);
                    ValidationResult::Verified(body.result)
                }
                Err(e) => {
                    tracing::warn!("Unreadable validation response for {}: {}", member_id, e);
                    ValidationResult::Failure(format!("invalid response body: {}", e))
                }
            };
        }

        let text = response
            .text()
            .await
            .unwrap_or_else(|e| format!("<unreadable body: {}>", e));

        tracing::warn!(
            "Validation API returned {} for {}: {}",
            status.as_u16(),
            member_id,
            text
        );

        ValidationResult::Failure(format!("{}: {}", status.as_u16(), text))
    }
}
