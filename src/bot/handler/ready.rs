//! Ready event handler for bot initialization.
//!
//! The `ready` event fires when the bot completes the gateway handshake. This
//! is where one-time startup work belongs; for this bot that is kicking off
//! the localization pipeline, which must not block event processing and whose
//! failure leaves the bot running in a degraded state.

use std::sync::Arc;

use serenity::all::{Context, Ready};

use crate::comlink::{ComlinkClient, LocalizationStore};

/// Handles the ready event when the bot connects to Discord.
///
/// Logs the connection, then spawns the one-shot localization pipeline. The
/// store's init barrier makes a reconnect-triggered second `ready` a no-op.
pub async fn handle_ready(
    comlink: Arc<ComlinkClient>,
    localization: Arc<LocalizationStore>,
    _ctx: Context,
    data: Ready,
) {
    tracing::info!("{} is connected to Discord", data.user.name);

    tokio::spawn(async move {
        localization.initialize(&comlink).await;
    });
}
