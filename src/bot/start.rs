use std::sync::Arc;

use serenity::all::{Client, GatewayIntents};

use crate::comlink::{ComlinkClient, LocalizationStore};
use crate::config::Config;
use crate::error::AppError;

use super::handler::Handler;

/// Builds the Discord client with the handler context attached.
pub async fn init_bot(
    config: &Config,
    comlink: Arc<ComlinkClient>,
    localization: Arc<LocalizationStore>,
) -> Result<Client, AppError> {
    let intents = GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES;

    let client = Client::builder(&config.discord_token, intents)
        .event_handler(Handler::new(comlink, localization))
        .await?;

    Ok(client)
}

/// Runs the gateway connection until shutdown.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    client.start().await?;
    Ok(())
}
