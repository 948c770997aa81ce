//! Discord side of the validation pipeline.
//!
//! The pipeline never talks to Serenity directly. It goes through the `DiscordPlatform`
//! trait, implemented over the gateway context by `SerenityPlatform`, so the join flow can
//! be exercised without a live connection.

pub mod gateway;
pub mod platform;
pub mod ready;
pub mod resolver;

pub use gateway::SerenityPlatform;
pub use platform::DiscordPlatform;
pub use ready::ReadySignal;
pub use resolver::{ResourceResolver, RoleGrant};
