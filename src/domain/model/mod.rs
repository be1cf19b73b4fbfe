// Domain models - Core types and data structures

use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::errors::DomainError;
use crate::utils::path::split_file_name;

/// Frame rate as a rational number of frames per second
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRate {
    pub num: u32,
    pub den: u32,
}

impl FrameRate {
    /// Create a new frame rate, rejecting zero rates and zero denominators
    pub fn new(num: u32, den: u32) -> Result<Self, DomainError> {
        if den == 0 {
            return Err(DomainError::BadArgs(
                "Frame rate denominator cannot be zero".to_string(),
            ));
        }
        if num == 0 {
            return Err(DomainError::BadArgs("Frame rate must be positive".to_string()));
        }
        Ok(Self { num, den })
    }

    /// Frames per second as a float
    pub fn as_f64(&self) -> f64 {
        self.num as f64 / self.den as f64
    }

    /// Convert a frame count (or frame index) to seconds
    pub fn frames_to_seconds(&self, frames: u64) -> f64 {
        frames as f64 / self.as_f64()
    }

    /// PAL rate, also the fallback before a video is open
    pub fn fps_25() -> Self {
        Self { num: 25, den: 1 }
    }
}

#[cfg(test)]
impl FrameRate {
    pub fn fps_30() -> Self {
        Self { num: 30, den: 1 }
    }

    pub fn ntsc() -> Self {
        Self { num: 30000, den: 1001 } // 29.97 fps
    }
}

impl fmt::Display for FrameRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den == 1 {
            write!(f, "{} fps", self.num)
        } else {
            write!(f, "{}/{} ({:.3} fps)", self.num, self.den, self.as_f64())
        }
    }
}

/// Identity of an opened source video
///
/// Immutable once created. The base name and extension are derived from
/// the file name the same way output names are built from them later, so
/// `clip.mp4` yields base name `clip` and extension `.mp4`.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaHandle {
    path: PathBuf,
    file_name: String,
    base_name: String,
    extension: String,
    frame_rate: FrameRate,
    total_frames: u64,
}

impl MediaHandle {
    /// Create a handle for an opened source
    pub fn new(
        path: impl Into<PathBuf>,
        frame_rate: FrameRate,
        total_frames: u64,
    ) -> Result<Self, DomainError> {
        let path = path.into();
        let (file_name, base_name, extension) = split_file_name(&path).ok_or_else(|| {
            DomainError::BadArgs(format!("Path has no file name: {}", path.display()))
        })?;

        Ok(Self {
            path,
            file_name,
            base_name,
            extension,
            frame_rate,
            total_frames,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name including extension, used as the window title
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    /// Extension including the leading dot, or empty
    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn frame_rate(&self) -> FrameRate {
        self.frame_rate
    }

    pub fn total_frames(&self) -> u64 {
        self.total_frames
    }

    /// Highest valid frame index (0 for an empty source)
    pub fn last_frame(&self) -> u64 {
        self.total_frames.saturating_sub(1)
    }
}

/// A marked frame range with `stop > start`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletedRange {
    start: u64,
    stop: u64,
}

impl CompletedRange {
    /// Create a range, rejecting selections where stop is not after start
    pub fn new(start: u64, stop: u64) -> Result<Self, DomainError> {
        if stop <= start {
            return Err(DomainError::InvalidRangeSelection { start, stop });
        }
        Ok(Self { start, stop })
    }

    pub fn start(&self) -> u64 {
        self.start
    }

    pub fn stop(&self) -> u64 {
        self.stop
    }

    /// Number of frames between the marks
    pub fn frame_span(&self) -> u64 {
        self.stop - self.start
    }

    /// Start time in seconds
    pub fn start_time(&self, frame_rate: FrameRate) -> f64 {
        frame_rate.frames_to_seconds(self.start)
    }

    /// Stop time in seconds
    pub fn stop_time(&self, frame_rate: FrameRate) -> f64 {
        frame_rate.frames_to_seconds(self.stop)
    }

    /// Duration in seconds, always positive
    pub fn duration(&self, frame_rate: FrameRate) -> f64 {
        frame_rate.frames_to_seconds(self.frame_span())
    }
}

impl fmt::Display for CompletedRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.stop)
    }
}

/// Per-process sequence number of produced cuts
///
/// Only moves forward, and only when a cut was handed to the sink.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct CutCounter(u32);

impl CutCounter {
    pub fn value(&self) -> u32 {
        self.0
    }

    pub(crate) fn advance(&mut self) {
        self.0 += 1;
    }
}

impl fmt::Display for CutCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03}", self.0)
    }
}

/// What a cut produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    /// One trimmed video file per cut
    SingleClip,
    /// One PNG per frame of the cut
    ImageSequence,
}

impl OutputKind {
    /// Parse output kind from the command-line names
    pub fn parse(kind_str: &str) -> Result<Self, DomainError> {
        match kind_str.to_lowercase().as_str() {
            "vids" | "clip" => Ok(OutputKind::SingleClip),
            "imgs" | "images" => Ok(OutputKind::ImageSequence),
            _ => Err(DomainError::BadArgs(format!(
                "Invalid mode: {}. Valid modes: vids, imgs",
                kind_str
            ))),
        }
    }
}

/// What happens to a rendered command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    /// Run it right away through the shell
    ExecuteNow,
    /// Append it to the cut script for later
    AppendToScript,
}

/// Output configuration fixed at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputMode {
    pub kind: OutputKind,
    pub execution: ExecutionMode,
}

impl OutputMode {
    pub fn new(kind: OutputKind, execution: ExecutionMode) -> Self {
        Self { kind, execution }
    }

    pub fn is_script(&self) -> bool {
        self.execution == ExecutionMode::AppendToScript
    }
}

#[cfg(test)]
mod tests;
