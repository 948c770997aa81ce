use super::*;

/// Tests validating a member the API reports as verified.
///
/// Verifies that a 200 `{"result": true}` response is reported as verified and that
/// the member id was sent in the request body.
///
/// Expected: Verified(true)
#[tokio::test]
async fn verified_member_returns_true() -> Result<(), TestError> {
    let test = TestBuilder::new().with_verified(true).build().await?;
    let api = test.validation_api.as_ref().unwrap();

    let client = ValidationClient::new(reqwest::Client::new(), api.base_url());
    let result = client.validate(MEMBER_ID).await;

    assert_eq!(result, ValidationResult::Verified(true));
    assert_eq!(api.received_ids(), vec![MEMBER_ID]);

    Ok(())
}

/// Tests validating several member ids against a verifying API.
///
/// Expected: Verified(true) for each, ids received in order
#[tokio::test]
async fn verified_for_any_member_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_verified(true).build().await?;
    let api = test.validation_api.as_ref().unwrap();
    let client = ValidationClient::new(reqwest::Client::new(), api.base_url());

    let ids = [1, MEMBER_ID, 1_234_567_890_123_456_789, u64::MAX];
    for id in ids {
        assert_eq!(client.validate(id).await, ValidationResult::Verified(true));
    }

    assert_eq!(api.received_ids(), ids.to_vec());

    Ok(())
}

/// Tests validating a member the API reports as not verified.
///
/// Expected: Verified(false)
#[tokio::test]
async fn unverified_member_returns_false() -> Result<(), TestError> {
    let test = TestBuilder::new().with_verified(false).build().await?;
    let api = test.validation_api.as_ref().unwrap();

    let client = ValidationClient::new(reqwest::Client::new(), api.base_url());

    assert_eq!(
        client.validate(MEMBER_ID).await,
        ValidationResult::Verified(false)
    );

    Ok(())
}

/// Tests that a non-200 status is reported with the raw response body.
///
/// Expected: Failure("404: not found")
#[tokio::test]
async fn non_success_status_returns_failure() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_validation_response(404, "not found")
        .build()
        .await?;
    let api = test.validation_api.as_ref().unwrap();

    let client = ValidationClient::new(reqwest::Client::new(), api.base_url());

    assert_eq!(
        client.validate(MEMBER_ID).await,
        ValidationResult::Failure("404: not found".to_string())
    );

    Ok(())
}

/// Tests that a 200 response with an unexpected body is reported as a failure.
///
/// Expected: Failure starting with "invalid response body"
#[tokio::test]
async fn malformed_success_body_returns_failure() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_validation_response(200, r#"{"verified": true}"#)
        .build()
        .await?;
    let api = test.validation_api.as_ref().unwrap();

    let client = ValidationClient::new(reqwest::Client::new(), api.base_url());

    match client.validate(MEMBER_ID).await {
        ValidationResult::Failure(message) => {
            assert!(message.starts_with("invalid response body"), "{message}")
        }
        other => panic!("expected failure, got {:?}", other),
    }

    Ok(())
}

/// Tests that a refused connection is reported as a failure instead of an error.
///
/// Expected: Failure starting with "request failed"
#[tokio::test]
async fn connection_error_returns_failure() -> Result<(), TestError> {
    let client = ValidationClient::new(reqwest::Client::new(), unreachable_base_url().await?);

    match client.validate(MEMBER_ID).await {
        ValidationResult::Failure(message) => {
            assert!(message.starts_with("request failed"), "{message}")
        }
        other => panic!("expected failure, got {:?}", other),
    }

    Ok(())
}

/// Tests that a response slower than the client timeout is reported as a failure.
///
/// Expected: Failure starting with "request failed"
#[tokio::test]
async fn timeout_returns_failure() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_verified(true)
        .with_response_delay(Duration::from_secs(2))
        .build()
        .await?;
    let api = test.validation_api.as_ref().unwrap();

    let http = reqwest::Client::builder()
        .timeout(Duration::from_millis(100))
        .build()
        .unwrap();
    let client = ValidationClient::new(http, api.base_url());

    match client.validate(MEMBER_ID).await {
        ValidationResult::Failure(message) => {
            assert!(message.starts_with("request failed"), "{message}")
        }
        other => panic!("expected failure, got {:?}", other),
    }

    Ok(())
}

/// Tests that a trailing slash on the base URL does not break the endpoint path.
///
/// Expected: Verified(true)
#[tokio::test]
async fn trailing_slash_in_base_url_is_ignored() -> Result<(), TestError> {
    let test = TestBuilder::new().with_verified(true).build().await?;
    let api = test.validation_api.as_ref().unwrap();

    let client = ValidationClient::new(reqwest::Client::new(), format!("{}/", api.base_url()));

    assert_eq!(
        client.validate(MEMBER_ID).await,
        ValidationResult::Verified(true)
    );

    Ok(())
}
