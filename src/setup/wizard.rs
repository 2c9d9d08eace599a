//! Setup Wizard
//!
//! Interactive one-time setup. Asks for the admin list and the bot
//! token, then writes `./config/djs_config.json`.

use anyhow::{Context, Result};
use colored::Colorize;
use tracing::debug;

use crate::config::{config_path, save_config};
use crate::types::{BotConfig, DEFAULT_DATA_FILE};

use super::prompts::prompt_line;

/// Run the interactive setup.
/// Returns the `BotConfig` that was written to disk.
pub fn run_setup() -> Result<BotConfig> {
    println!(
        "{}",
        "  Admins of this bot will have access to the bot's admin commands, \
         which are able to modify the computer that duthree is hosted on."
            .yellow()
    );

    let admin_line = prompt_line("Input a space separated list of the user ids of all admins:")?;
    println!();

    let token_line = prompt_line("Input the bot token:")?;
    println!();

    let config = BotConfig::from_answers(&admin_line, &token_line);
    debug!(admins = config.admin_id.len(), "setup answers collected");

    println!(
        "{}",
        format!(
            "  Default data file for the Markov chain has been set to {}.txt",
            DEFAULT_DATA_FILE
        )
        .green()
    );
    println!(
        "{}",
        format!(
            "  You can change the defaultDataFile element in ./{} to any text file of your liking.",
            config_path().display()
        )
        .dimmed()
    );

    save_config(&config).context("Failed to write bot config")?;

    Ok(config)
}
