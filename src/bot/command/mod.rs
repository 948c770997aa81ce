//! Slash commands registered by the bot.

pub mod validate;
