use std::time::Duration;

use crate::{
    api::{MockResponse, MockValidationApi},
    context::TestContext,
    error::TestError,
};

/// Builder for creating test contexts with a configurable mock validation API.
///
/// Provides a fluent interface for configuring how the mock API answers. Call `build()`
/// to start the mock and obtain the test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
///
/// let test = TestBuilder::new()
///     .with_validation_response(404, "not found")
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// Response the mock API returns, if a mock should be started at all.
    response: Option<MockResponse>,
}

impl TestBuilder {
    /// Creates a new test builder with no mock API configured.
    ///
    /// # Returns
    /// - New `TestBuilder` instance
    pub fn new() -> Self {
        Self { response: None }
    }

    /// Configures the mock API to answer every request with the given status and body.
    ///
    /// # Arguments
    /// - `status` - HTTP status code to respond with
    /// - `body` - Raw response body text
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_validation_response(mut self, status: u16, body: impl Into<String>) -> Self {
        let delay = self.response.as_ref().and_then(|r| r.delay);
        self.response = Some(MockResponse {
            status,
            body: body.into(),
            delay,
        });
        self
    }

    /// Configures the mock API to answer `200 {"result": verified}`.
    pub fn with_verified(self, verified: bool) -> Self {
        self.with_validation_response(200, serde_json::json!({ "result": verified }).to_string())
    }

    /// Delays every mock API response by the given duration.
    ///
    /// Defaults to a `200 {"result": true}` response if none was configured yet.
    pub fn with_response_delay(mut self, delay: Duration) -> Self {
        let mut response = self.response.take().unwrap_or_else(|| MockResponse {
            status: 200,
            body: serde_json::json!({ "result": true }).to_string(),
            delay: None,
        });
        response.delay = Some(delay);
        self.response = Some(response);
        self
    }

    /// Builds the test context, starting the mock API if one was configured.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Configured test context
    /// - `Err(TestError)` - Failed to start the mock API
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new();

        if let Some(response) = self.response {
            context.validation_api = Some(MockValidationApi::start(response).await?);
        }

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
