use std::sync::Arc;

use serenity::all::{Context, EventHandler, Ready};
use serenity::async_trait;

use crate::comlink::{ComlinkClient, LocalizationStore};

pub mod ready;

/// Discord bot event handler.
///
/// Carries the shared process context for the handler functions; both fields
/// are reference-counted and cheap to clone into spawned tasks.
pub struct Handler {
    pub comlink: Arc<ComlinkClient>,
    pub localization: Arc<LocalizationStore>,
}

impl Handler {
    pub fn new(comlink: Arc<ComlinkClient>, localization: Arc<LocalizationStore>) -> Self {
        Self {
            comlink,
            localization,
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, data: Ready) {
        ready::handle_ready(
            self.comlink.clone(),
            self.localization.clone(),
            ctx,
            data,
        )
        .await;
    }
}
