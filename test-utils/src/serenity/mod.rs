//! Test factories for creating Serenity API objects.
//!
//! This module provides factory functions for creating mock Serenity structs
//! (Member, Role, GuildChannel, command options) for testing purposes. These factories
//! create valid Serenity objects by deserializing JSON, simulating what Discord's API
//! would return.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_member, create_test_role};
//!
//! #[tokio::test]
//! async fn test_member_join() {
//!     let member = create_test_member(42, 100, "alice");
//!     let role = create_test_role(600, 100, "OSF Member");
//!
//!     // Use in your tests...
//! }
//! ```

pub mod channel;
pub mod member;
pub mod option;
pub mod role;

pub use channel::create_test_channel;
pub use member::create_test_member;
pub use option::{create_test_string_option, create_test_user_option};
pub use role::create_test_role;
