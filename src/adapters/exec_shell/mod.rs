// Shell execution adapter - Runs rendered commands immediately

use std::process::Command;

use tracing::{info, warn};

use crate::domain::errors::*;
use crate::planner::CutPlan;
use crate::ports::*;

/// Runs each command through the platform shell and waits for it
///
/// The transcoder inherits stdin, stdout and stderr. A non-zero exit is
/// reported in the [`SinkReport`] and logged, but is not an error.
pub struct ShellExecAdapter {
    shell: String,
    flag: String,
}

impl ShellExecAdapter {
    /// Create an adapter using `sh -c` (`cmd /C` on Windows)
    ///
    /// Planned commands quote paths with [`crate::planner::PATH_QUOTE`], which
    /// matches the shell picked here. A shell from [`Self::with_shell`] must
    /// accept the same quoting.
    pub fn new() -> Self {
        if cfg!(windows) {
            Self::with_shell("cmd", "/C")
        } else {
            Self::with_shell("sh", "-c")
        }
    }

    /// Create an adapter using a specific shell and command flag
    pub fn with_shell(shell: impl Into<String>, flag: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
            flag: flag.into(),
        }
    }
}

impl Default for ShellExecAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl ExecutePort for ShellExecAdapter {
    fn submit(&mut self, plan: &CutPlan) -> Result<SinkReport, DomainError> {
        info!(cut = plan.cut.value(), "Running: {}", plan.command);

        let status = Command::new(&self.shell)
            .arg(&self.flag)
            .arg(&plan.command)
            .status()
            .map_err(|e| {
                DomainError::ExecFail(format!("Failed to start {}: {}", self.shell, e))
            })?;

        if !status.success() {
            warn!(
                cut = plan.cut.value(),
                "Transcoder exited with {}; {} may be missing or incomplete",
                status,
                plan.output.display()
            );
        }

        Ok(SinkReport::Executed {
            success: status.success(),
            status: status.code(),
        })
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::domain::model::{CompletedRange, CutCounter};
    use std::path::PathBuf;

    fn plan_with_command(command: &str) -> CutPlan {
        CutPlan {
            range: CompletedRange::new(0, 25).unwrap(),
            cut: CutCounter::default(),
            start_time: 0.0,
            stop_time: 1.0,
            duration: 1.0,
            output: PathBuf::from("output/clip_000.mp4"),
            command: command.to_string(),
        }
    }

    #[test]
    fn test_successful_command() {
        let mut adapter = ShellExecAdapter::new();
        let report = adapter.submit(&plan_with_command("true")).unwrap();
        assert_eq!(
            report,
            SinkReport::Executed {
                success: true,
                status: Some(0)
            }
        );
    }

    #[test]
    fn test_failing_command_is_reported_not_raised() {
        let mut adapter = ShellExecAdapter::new();
        let report = adapter.submit(&plan_with_command("exit 3")).unwrap();
        assert_eq!(
            report,
            SinkReport::Executed {
                success: false,
                status: Some(3)
            }
        );
    }

    #[test]
    fn test_missing_shell_is_an_error() {
        let mut adapter = ShellExecAdapter::with_shell("/nonexistent/shell", "-c");
        let result = adapter.submit(&plan_with_command("true"));
        assert!(matches!(result, Err(DomainError::ExecFail(_))));
    }
}
