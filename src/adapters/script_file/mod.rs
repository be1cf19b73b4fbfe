// Script file adapter - Records rendered commands for later execution

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use tracing::info;

use crate::domain::errors::*;
use crate::planner::CutPlan;
use crate::ports::*;

/// Appends one command per line to a shell script
///
/// Every submit opens the file in append mode, writes a single line and
/// closes it again. The file is created on the first submit.
pub struct ScriptFileAdapter {
    script_path: PathBuf,
}

impl ScriptFileAdapter {
    pub fn new(script_path: impl Into<PathBuf>) -> Self {
        Self {
            script_path: script_path.into(),
        }
    }

    fn append_line(&self, line: &str) -> std::io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.script_path)?;
        file.write_all(format!("{}\n", line).as_bytes())
    }
}

impl ExecutePort for ScriptFileAdapter {
    fn submit(&mut self, plan: &CutPlan) -> Result<SinkReport, DomainError> {
        self.append_line(&plan.command).map_err(|e| {
            DomainError::FsFail(format!(
                "Failed to append to script {}: {}",
                self.script_path.display(),
                e
            ))
        })?;

        info!(
            cut = plan.cut.value(),
            "Appended command to {}",
            self.script_path.display()
        );

        Ok(SinkReport::Appended {
            script: self.script_path.clone(),
        })
    }
}
