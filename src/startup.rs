use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{
    config::Config,
    error::AppError,
    service::{
        discord::ResourceResolver, member_validation::MemberValidationService,
        validation::ValidationClient,
    },
};

const DEFAULT_LOG_FILTER: &str = "info,osfbot=debug";

/// Installs the global tracing subscriber.
///
/// Log levels are read from `RUST_LOG`, falling back to `info` with debug output for
/// this crate.
pub fn init_logging() -> Result<(), AppError> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()?;

    Ok(())
}

/// Builds the HTTP client used for validation API requests.
///
/// Every request is bounded by the configured validation timeout.
pub fn setup_reqwest_client(config: &Config) -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .timeout(config.validation_timeout)
        .user_agent(concat!("osfbot/", env!("CARGO_PKG_VERSION")))
        .build()?;

    Ok(client)
}

/// Wires the validation client and resource resolver into the join pipeline.
pub fn setup_validation_service(
    config: &Config,
    http_client: reqwest::Client,
) -> MemberValidationService {
    let client = ValidationClient::new(http_client, config.validation_api_url.clone());
    let resolver = ResourceResolver::new(config.log_channel_id, config.osf_member_role_id);

    MemberValidationService::new(client, resolver)
}
