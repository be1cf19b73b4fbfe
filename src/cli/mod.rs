//! CLI module for framecut
//!
//! This module handles command-line argument parsing and command execution.

use std::path::PathBuf;

use clap::Parser;

use crate::config::ConfigOverrides;

pub mod args;
pub mod commands;

pub use args::CutArgs;

/// framecut
///
/// Scrub through a video in the terminal, mark the first and last frame of a
/// range, and cut it into a clip or a PNG sequence with ffmpeg.
#[derive(Parser, Debug)]
#[command(name = "framecut")]
#[command(about = "Interactive frame-range cutter for ffmpeg")]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub cut: CutArgs,

    /// Configuration file (default: ./framecut.toml if present)
    #[arg(short, long, env = "FRAMECUT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log every frame the scrubber shows
    #[arg(short, long)]
    pub verbose: bool,

    /// Logging level (RUST_LOG takes precedence)
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Cli {
    /// Settings that override the configuration file
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            tool: self.cut.tool.clone(),
            output_dir: self.cut.outdir.clone(),
            log_level: self.log_level.clone(),
            stream_copy: self.cut.copy,
            verbose: self.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["framecut", "clip.mp4"]).unwrap();
        assert_eq!(cli.cut.video, PathBuf::from("clip.mp4"));
        assert_eq!(cli.cut.mode, "vids");
        assert!(!cli.cut.script);
        assert!(!cli.cut.copy);
    }

    #[test]
    fn test_short_flags() {
        let cli = Cli::try_parse_from([
            "framecut", "-m", "imgs", "-s", "-o", "cuts", "-v", "clip.mp4",
        ])
        .unwrap();
        assert_eq!(cli.cut.mode, "imgs");
        assert!(cli.cut.script);
        assert_eq!(cli.cut.outdir, Some(PathBuf::from("cuts")));
        assert!(cli.verbose);
    }

    #[test]
    fn test_overrides_carry_flags() {
        let cli = Cli::try_parse_from([
            "framecut",
            "--copy",
            "--tool",
            "ffmpeg7",
            "--log-level",
            "debug",
            "clip.mp4",
        ])
        .unwrap();
        let overrides = cli.overrides();
        assert!(overrides.stream_copy);
        assert_eq!(overrides.tool.as_deref(), Some("ffmpeg7"));
        assert_eq!(overrides.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_video_is_required() {
        assert!(Cli::try_parse_from(["framecut"]).is_err());
    }
}
