//! Business logic for validating members that join the guild.
//!
//! - `validation` - HTTP client for the remote OSF validation API
//! - `discord` - Discord platform seam, readiness signal and lazily resolved handles
//! - `member_validation` - The join pipeline tying the two together

pub mod discord;
pub mod member_validation;
pub mod validation;

#[cfg(test)]
mod test;
