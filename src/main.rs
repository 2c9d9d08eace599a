//! duthree Setup
//!
//! The entry point for the bot setup tool. Handles CLI args, logging,
//! and dispatching to the interactive wizard.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use duthree_setup::config::load_config;
use duthree_setup::setup::wizard::run_setup;

/// duthree Setup -- one-time bot configuration
#[derive(Parser, Debug)]
#[command(
    name = "duthree-setup",
    version,
    about = "duthree Setup -- one-time bot configuration",
    long_about = "Collects the admin list and the bot token, then writes ./config/djs_config.json."
)]
struct Cli {
    /// Show the currently saved configuration
    #[arg(long)]
    status: bool,
}

// ---- Status Command ---------------------------------------------------------

/// Display the currently saved bot configuration.
fn show_status() {
    let config = match load_config() {
        Some(c) => c,
        None => {
            println!("The bot is not configured. Run the setup tool first.");
            return;
        }
    };

    println!(
        r#"
=== BOT CONFIG ===
Admins:     {}
Token:      {}
Data file:  {}
==================
"#,
        config.admin_id.join(" "),
        config.bot_token,
        config.default_data_file,
    );
}

// ---- Entry Point -----------------------------------------------------------

fn main() {
    // Diagnostics on stderr; stdout is operator-facing.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.status {
        show_status();
        return;
    }

    if let Err(e) = run_setup() {
        eprintln!("Setup failed: {}", e);
        std::process::exit(1);
    }
}
