//! Command implementations

use anyhow::{Context, Result};
use tracing::info;

use crate::adapters::{LibavMediaAdapter, ScriptFileAdapter, ShellExecAdapter, TerminalUiAdapter};
use crate::app::{help_lines, CutInteractor, SessionOptions};
use crate::cli::Cli;
use crate::config::AppConfig;
use crate::domain::model::{ExecutionMode, OutputKind, OutputMode};
use crate::planner::{OutputPlanner, PlannerSettings};
use crate::ports::ExecutePort;
use crate::utils::path::ensure_output_dir;

/// Run an interactive cutting session; returns the number of cuts produced
pub fn run(cli: Cli, config: AppConfig) -> Result<u32> {
    let kind = OutputKind::parse(&cli.cut.mode)?;
    let execution = if cli.cut.script {
        ExecutionMode::AppendToScript
    } else {
        ExecutionMode::ExecuteNow
    };
    let options = SessionOptions {
        keys: config.keys,
        output_mode: OutputMode::new(kind, execution),
        verbose: config.verbose,
    };

    if let Some(source) = &config.source {
        info!("Loaded configuration from {}", source.display());
    }
    info!(
        kind = ?kind,
        execution = ?execution,
        stream_copy = config.stream_copy,
        "Output directory: {}",
        config.output_dir.display()
    );

    let ui = TerminalUiAdapter::new(config.preview_width, help_lines(&options));

    ensure_output_dir(&config.output_dir).context("Failed to prepare output directory")?;

    let sink: Box<dyn ExecutePort> = match execution {
        ExecutionMode::ExecuteNow => Box::new(ShellExecAdapter::new()),
        ExecutionMode::AppendToScript => {
            info!("Appending commands to {}", config.script_path().display());
            Box::new(ScriptFileAdapter::new(config.script_path()))
        }
    };

    let planner = OutputPlanner::new(
        kind,
        PlannerSettings {
            tool: config.tool.clone(),
            output_dir: config.output_dir.clone(),
        },
        config.stream_copy,
    );

    crate::init()?;

    let mut interactor = CutInteractor::open(
        &cli.cut.video,
        Box::new(LibavMediaAdapter::new()),
        Box::new(ui),
        planner,
        sink,
        options,
    )?;

    Ok(interactor.run()?)
}
