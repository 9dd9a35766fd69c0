//! Core library for the holotable guild bot.
//!
//! The heart of the crate is [`comlink`]: a signed-request client for the
//! swgoh-comlink proxy, the typed player response model, and the one-shot
//! localization pipeline. [`bot`] is a thin Discord shell around that core;
//! [`config`] and [`error`] carry the process-wide configuration and error
//! taxonomy.

pub mod bot;
pub mod comlink;
pub mod config;
pub mod error;
pub mod util;
