// Ports - Interface definitions (contracts)

use std::path::{Path, PathBuf};

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::planner::CutPlan;

/// A decoded frame as packed RGB24
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameImage {
    pub width: u32,
    pub height: u32,
    /// `width * height * 3` bytes, row-major, no padding
    pub data: Vec<u8>,
}

impl FrameImage {
    /// Create a frame image, checking the buffer size
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self, DomainError> {
        let expected = width as usize * height as usize * 3;
        if data.len() != expected {
            return Err(DomainError::BadArgs(format!(
                "RGB buffer of {} bytes does not match {}x{}",
                data.len(),
                width,
                height
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// RGB triple at `(x, y)`
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let offset = (y as usize * self.width as usize + x as usize) * 3;
        [
            self.data[offset],
            self.data[offset + 1],
            self.data[offset + 2],
        ]
    }
}

/// Port for opening, seeking and decoding the source video
pub trait MediaPort {
    /// Open the file at `path`
    fn open(&mut self, path: &Path) -> Result<(), DomainError>;

    /// Total number of frames of the opened source
    fn frame_count(&self) -> u64;

    /// Frame rate of the opened source
    fn frame_rate(&self) -> FrameRate;

    /// Position the stream so the next read returns `frame_index`
    fn seek(&mut self, frame_index: u64) -> Result<(), DomainError>;

    /// Decode the frame at the current position
    fn read_frame(&mut self) -> Result<FrameImage, DomainError>;
}

/// Input events delivered by the user interface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    /// A key with a character was pressed
    Key(char),
    /// The user moved the position slider
    SliderMoved(u64),
    /// The user interrupted the session (Ctrl+C)
    Interrupted,
}

/// Port for the display, the position slider and keyboard input
pub trait UiPort {
    /// Set the title shown above the preview
    fn set_title(&mut self, title: &str);

    /// Create the slider with the range `[0, max_position]` at position 0
    fn create_slider(&mut self, max_position: u64);

    /// Move the slider, returning the position after clamping to its range
    fn set_slider_position(&mut self, position: u64) -> u64;

    /// Position the slider currently reports
    fn slider_position(&self) -> u64;

    /// Display a decoded frame
    fn show_frame(&mut self, frame_index: u64, image: &FrameImage) -> Result<(), DomainError>;

    /// Block until the next input event
    fn next_event(&mut self) -> Result<UiEvent, DomainError>;

    /// Block on a text prompt for a frame number; `None` if the entry is not one
    fn prompt_frame_number(&mut self) -> Result<Option<u64>, DomainError>;

    /// Show a message to the user
    fn notify(&mut self, message: &str);
}

/// What an execution sink did with a plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkReport {
    /// The command was run; `status` is the exit code if it exited normally
    Executed { success: bool, status: Option<i32> },
    /// The command was appended to the script
    Appended { script: PathBuf },
}

/// Port for running or recording rendered commands
pub trait ExecutePort {
    /// Hand a planned cut to the sink
    fn submit(&mut self, plan: &CutPlan) -> Result<SinkReport, DomainError>;
}
