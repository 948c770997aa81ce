use serenity::all::{Client, GatewayIntents};

use crate::{
    bot::handler::Handler, config::Config, error::AppError,
    service::member_validation::MemberValidationService,
};

/// Builds the Discord bot client.
///
/// # Arguments
/// - `config` - Application configuration holding the bot token
/// - `validation` - Pipeline run for every member that joins
///
/// # Returns
/// - `Ok(Client)` - Client ready to be started with `start_bot`
/// - `Err(AppError)` - Client could not be built
pub async fn init_bot(
    config: &Config,
    validation: MemberValidationService,
) -> Result<Client, AppError> {
    // GUILD_MEMBERS is a privileged intent - must be enabled in Discord Developer Portal
    let intents = GatewayIntents::GUILDS | GatewayIntents::GUILD_MEMBERS;

    let handler = Handler::new(validation);

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    Ok(client)
}

/// Runs the Discord bot until it disconnects or the process receives Ctrl+C.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    let shard_manager = client.shard_manager.clone();

    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Shutting down Discord bot...");
            shard_manager.shutdown_all().await;
        }
    });

    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
