use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod admin;
mod app;
mod auth;
mod config;
mod forms;
mod logging;
mod shell;
mod ui;

use app::App;
use auth::{CredentialStore, FileTokenStore};
use config::Config;

#[derive(Parser)]
#[command(name = "menuza")]
#[command(about = "Terminal console for the Menuza restaurant platform")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file path
    #[arg(short, long)]
    config: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show endpoint and stored credential status
    Status,

    /// Clear the stored credential
    Logout,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first (needed for logging setup)
    let config = Config::load(cli.config.as_deref())?;

    // Determine if we're running in TUI mode (no subcommand)
    let is_tui_mode = cli.command.is_none();

    // Initialize logging (file-based for TUI, stderr for CLI)
    let logging_handle = logging::init_logging(&config, is_tui_mode, cli.debug)?;

    match cli.command {
        Some(Commands::Status) => {
            cmd_status(&config)?;
        }
        Some(Commands::Logout) => {
            cmd_logout(&config)?;
        }
        None => {
            // No subcommand = launch the console
            run_tui(config, logging_handle.log_file_path).await?;
        }
    }

    Ok(())
}

async fn run_tui(config: Config, log_file_path: Option<PathBuf>) -> Result<()> {
    let mut app = App::new(config)?;
    let result = app.run().await;

    // Print log file path on exit if logs were written
    if let Some(log_path) = log_file_path {
        if log_path.exists() {
            if let Ok(metadata) = log_path.metadata() {
                if metadata.len() > 0 {
                    eprintln!("Session log: {}", log_path.display());
                }
            }
        }
    }

    result
}

fn cmd_status(config: &Config) -> Result<()> {
    let store = FileTokenStore::from_config(config);
    let signed_in = store.load()?.is_some();

    println!("Config file:  {}", Config::user_config_path().display());
    println!("API base URL: {}", config.api.base_url);
    println!("Data dir:     {}", config.data_path().display());
    println!("Logs dir:     {}", config.logs_path().display());
    println!(
        "Credential:   {}",
        if signed_in { "stored" } else { "none" }
    );

    Ok(())
}

fn cmd_logout(config: &Config) -> Result<()> {
    let mut store = FileTokenStore::from_config(config);

    if store.load()?.is_none() {
        println!("No stored credential");
        return Ok(());
    }

    store.clear()?;
    println!("Signed out");

    Ok(())
}
