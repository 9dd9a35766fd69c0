//! Discord bot shell around the Comlink core.
//!
//! The bot owns no logic of its own: it holds the dependency-injected context
//! (Comlink client, localization store) and wires gateway events to thin
//! handler functions. Command and interaction surfaces live with the
//! collaborators that call into the core.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Receive events about guild availability
//! - `GUILD_MESSAGES` - Receive events about messages in guilds

pub mod handler;
pub mod start;
