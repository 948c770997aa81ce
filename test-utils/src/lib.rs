//! OSF Bot Test Utils
//!
//! Provides shared testing utilities for the OSF validation bot. This crate offers a builder
//! pattern for creating test contexts backed by a mock of the remote validation API, plus
//! factories for the Serenity objects the bot consumes.
//!
//! # Overview
//!
//! The test utilities consist of three main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment holding the running mock validation API
//! - **TestError**: Error types that can occur during test setup
//!
//! # Usage
//!
//! Use `TestBuilder` to start a mock validation API answering with a fixed response:
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_validation() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_verified(true)
//!         .build()
//!         .await?;
//!
//!     let api = test.validation_api.as_ref().unwrap();
//!     // Point a client at api.base_url()...
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod builder;
pub mod context;
pub mod error;
pub mod serenity;
