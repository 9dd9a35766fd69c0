use std::sync::Arc;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use holotable::bot;
use holotable::comlink::{ComlinkClient, LocalizationStore};
use holotable::config::Config;
use holotable::error::AppError;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Load .env file if it exists (silently ignore if not found)
    dotenvy::dotenv().ok();
    setup_logging();

    let config = Config::from_env()?;

    // One HTTP connection pool for the process lifetime, shared with the
    // Comlink client.
    let http_client = reqwest::Client::new();
    let comlink = Arc::new(ComlinkClient::from_config(http_client, &config));
    let localization = Arc::new(LocalizationStore::new());

    tracing::info!(
        signing = comlink.signing_enabled(),
        "Starting bot"
    );

    let client = bot::start::init_bot(&config, comlink, localization).await?;
    bot::start::start_bot(client).await?;

    tracing::info!("Shutdown bot");
    Ok(())
}

fn setup_logging() {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
