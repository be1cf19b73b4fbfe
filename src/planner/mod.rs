//! Output planning
//!
//! Turns a completed frame range into an output name and a transcoder
//! command. Planning is pure: the same media, range, counter and mode always
//! render the same command, and nothing here runs it.

use std::path::PathBuf;

use tracing::debug;

use crate::domain::model::{CompletedRange, CutCounter, MediaHandle, OutputKind};

pub mod command;

pub use command::{TranscodeCommand, PATH_QUOTE};

/// Settings shared by every planner variant
#[derive(Debug, Clone, PartialEq)]
pub struct PlannerSettings {
    /// Transcoder binary
    pub tool: String,
    /// Directory outputs are written to
    pub output_dir: PathBuf,
}

impl Default for PlannerSettings {
    fn default() -> Self {
        Self {
            tool: "ffmpeg".to_string(),
            output_dir: PathBuf::from("output"),
        }
    }
}

/// Planner for one output kind
#[derive(Debug, Clone, PartialEq)]
pub enum OutputPlanner {
    /// `{base}_{cut:03}{ext}`, optionally stream-copied
    SingleClip {
        settings: PlannerSettings,
        stream_copy: bool,
    },
    /// `{base}_{cut:03}_%06d.png`, expanded by the transcoder
    ImageSequence { settings: PlannerSettings },
}

/// Everything decided for one cut
#[derive(Debug, Clone, PartialEq)]
pub struct CutPlan {
    pub range: CompletedRange,
    pub cut: CutCounter,
    pub start_time: f64,
    pub stop_time: f64,
    pub duration: f64,
    /// Output file, or printf-style pattern for image sequences
    pub output: PathBuf,
    pub command: String,
}

impl OutputPlanner {
    /// Create the planner for an output kind
    ///
    /// `stream_copy` only applies to single clips.
    pub fn new(kind: OutputKind, settings: PlannerSettings, stream_copy: bool) -> Self {
        match kind {
            OutputKind::SingleClip => OutputPlanner::SingleClip {
                settings,
                stream_copy,
            },
            OutputKind::ImageSequence => OutputPlanner::ImageSequence { settings },
        }
    }

    pub fn settings(&self) -> &PlannerSettings {
        match self {
            OutputPlanner::SingleClip { settings, .. } => settings,
            OutputPlanner::ImageSequence { settings } => settings,
        }
    }

    /// Output path (or pattern) for the given cut
    pub fn output_target(&self, media: &MediaHandle, cut: CutCounter) -> PathBuf {
        let name = match self {
            OutputPlanner::SingleClip { .. } => {
                format!("{}_{}{}", media.base_name(), cut, media.extension())
            }
            OutputPlanner::ImageSequence { .. } => {
                format!("{}_{}_%06d.png", media.base_name(), cut)
            }
        };
        self.settings().output_dir.join(name)
    }

    /// Plan the cut of `range` from `media`
    pub fn plan(&self, media: &MediaHandle, range: CompletedRange, cut: CutCounter) -> CutPlan {
        let frame_rate = media.frame_rate();
        let start_time = range.start_time(frame_rate);
        let duration = range.duration(frame_rate);
        let output = self.output_target(media, cut);

        let command = TranscodeCommand {
            tool: self.settings().tool.clone(),
            start_time,
            input: media.path().to_path_buf(),
            duration,
            stream_copy: matches!(
                self,
                OutputPlanner::SingleClip {
                    stream_copy: true,
                    ..
                }
            ),
            output: output.clone(),
        }
        .render();

        debug!(range = %range, cut = cut.value(), "Planned cut: {}", command);

        CutPlan {
            range,
            cut,
            start_time,
            stop_time: range.stop_time(frame_rate),
            duration,
            output,
            command,
        }
    }
}
