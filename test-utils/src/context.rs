use crate::api::MockValidationApi;

/// Test context containing the mock services a test runs against.
pub struct TestContext {
    /// Running mock of the remote validation API.
    ///
    /// `None` when the builder was not given a response to serve.
    pub validation_api: Option<MockValidationApi>,
}

impl TestContext {
    /// Creates a new empty test context.
    ///
    /// # Returns
    /// - New `TestContext` instance with no mock services running
    pub fn new() -> Self {
        Self {
            validation_api: None,
        }
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
