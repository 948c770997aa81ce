use serenity::all::{Context, Interaction};

use crate::bot::command::validate;

/// Handles interaction_create events, dispatching slash commands by name
pub async fn handle_interaction_create(ctx: Context, interaction: Interaction) {
    let Interaction::Command(command) = interaction else {
        return;
    };

    let result = match command.data.name.as_str() {
        validate::NAME => validate::run(&ctx, &command).await,
        other => {
            tracing::warn!("Received unknown command /{}", other);
            return;
        }
    };

    if let Err(e) = result {
        tracing::error!("Failed to handle /{}: {}", command.data.name, e);
    }
}
