//! duthree Setup Tool
//!
//! One-time interactive setup for the duthree chat bot: collects the
//! admin list and the bot token, then writes `./config/djs_config.json`.

pub mod types;
pub mod config;
pub mod setup;
