//! duthree Setup - Type Definitions
//!
//! The configuration record persisted by the setup tool.

use serde::{Deserialize, Serialize};

/// Base name (without extension) of the text corpus used to seed the
/// Markov chain. Operators can point the bot at a different corpus by
/// editing the saved config.
pub const DEFAULT_DATA_FILE: &str = "beemovie";

/// The bot configuration written to `./config/djs_config.json`.
///
/// Field order is the serialization order.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BotConfig {
    /// User ids permitted to issue the bot's admin commands.
    #[serde(rename = "adminID")]
    pub admin_id: Vec<String>,
    /// Authentication token the bot uses to connect to the chat platform.
    pub bot_token: String,
    /// Base name of the Markov chain seed corpus.
    pub default_data_file: String,
}

impl BotConfig {
    /// Build a config from the two raw prompt answers.
    ///
    /// The admin line is split on whitespace, preserving order and
    /// duplicates; surrounding whitespace never produces empty ids. The
    /// token keeps its inner whitespace and loses only the outer. Empty
    /// answers are accepted as-is.
    pub fn from_answers(admin_line: &str, token_line: &str) -> Self {
        BotConfig {
            admin_id: admin_line.split_whitespace().map(str::to_string).collect(),
            bot_token: token_line.trim().to_string(),
            default_data_file: DEFAULT_DATA_FILE.to_string(),
        }
    }
}
