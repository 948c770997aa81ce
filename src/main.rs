mod bot;
mod config;
mod error;
mod model;
mod service;
mod startup;

use crate::{config::Config, error::AppError};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_logging()?;

    let config = Config::from_env()?;

    let http_client = startup::setup_reqwest_client(&config)?;
    let validation = startup::setup_validation_service(&config, http_client);

    tracing::info!(
        "Starting OSF validation bot ({:?}) against {}",
        config.environment,
        config.validation_api_url
    );

    let client = bot::start::init_bot(&config, validation).await?;
    bot::start::start_bot(client).await
}
