//! Discord bot integration.
//!
//! Runs the gateway client and dispatches the events the bot cares about: `ready`,
//! `guild_member_addition` and slash command interactions.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Populates the guild and role cache
//! - `GUILD_MEMBERS` - Receive member join events (privileged intent)
//!
//! Note: `GUILD_MEMBERS` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod command;
pub mod handler;
pub mod start;
