//! Ready event handler for bot initialization.
//!
//! The ready handler is used to:
//! - Log connection information
//! - Release anything waiting for the bot to become ready
//! - Register the `/validate` slash command
//! - Resolve the audit log channel ahead of the first join

use serenity::all::{Command, Context, Ready};

use crate::{
    bot::command::validate,
    service::{
        discord::{ReadySignal, SerenityPlatform},
        member_validation::MemberValidationService,
    },
};

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `validation` - Validation pipeline whose log channel is resolved up front
/// - `signal` - Readiness flag raised by this event
/// - `ctx` - Discord context for API access
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(
    validation: &MemberValidationService,
    signal: &ReadySignal,
    ctx: Context,
    ready: Ready,
) {
    tracing::info!(
        "{} is connected to Discord ({} guilds)",
        ready.user.name,
        ready.guilds.len()
    );

    signal.mark_ready();

    match Command::create_global_command(&ctx.http, validate::register()).await {
        Ok(command) => tracing::debug!("Registered /{} command ({})", command.name, command.id),
        Err(e) => tracing::error!("Failed to register /{} command: {}", validate::NAME, e),
    }

    let platform = SerenityPlatform::new(ctx.http.clone(), ctx.cache.clone(), signal.clone());

    if validation
        .resolver()
        .resolve_log_channel(&platform)
        .await
        .is_none()
    {
        tracing::warn!("Audit messages will be dropped until the log channel is reachable");
    }
}
