//! framecut
//!
//! Scrub through a video in the terminal and cut frame ranges with ffmpeg.
//!
//! # Usage
//!
//! ```bash
//! framecut holiday.mp4                  # cut clips right away
//! framecut --mode imgs holiday.mp4      # extract PNG frames
//! framecut --script holiday.mp4         # collect commands in output/onescripttocutthemall.sh
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use framecut::cli::{commands, Cli};
use framecut::config::AppConfig;
use framecut::utils::logging::{init_logging, log_system_info, LoggingConfig};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config =
        AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    config.apply_overrides(cli.overrides())?;

    init_logging(&LoggingConfig::with_level(&config.log_level)?)?;
    log_system_info();

    let cuts = commands::run(cli, config)?;
    info!(cuts, "Done");
    Ok(())
}
