//! Spotlight - Main entry point
//!
//! Opens a window with the configured images and toggles their size from
//! number keys, or from the left stick once an Xbox controller shows up.

mod app;
mod config;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "spotlight")]
#[command(about = "Toggle the size of on-screen images with number keys or a gamepad")]
#[command(version)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "spotlight.toml")]
    config: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Seconds between accepted stick gestures (overrides the config file)
    #[arg(long)]
    cooldown: Option<f64>,

    /// Write a default configuration file to the config path and exit
    #[arg(long)]
    write_default_config: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!("Spotlight v{}", env!("CARGO_PKG_VERSION"));

    if args.write_default_config {
        config::save_default_config(&args.config)?;
        info!(path = %args.config.display(), "Wrote default configuration");
        return Ok(());
    }

    let mut config = config::load_config(&args.config)?;

    if let Some(cooldown) = args.cooldown {
        config.toggle.stick_cooldown_secs = cooldown;
        config.validate()?;
    }

    info!(
        images = config.images.len(),
        cooldown = config.toggle.stick_cooldown_secs,
        gamepad = %config.toggle.gamepad_name_pattern,
        "Configuration loaded"
    );

    if app::run(config).is_error() {
        anyhow::bail!("Viewer exited with an error");
    }
    Ok(())
}
