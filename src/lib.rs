//! framecut library
//!
//! Interactive frame-range cutting: scrub through a video, mark an in-point
//! and an out-point, and turn the range into an ffmpeg command that is run
//! right away or collected in a shell script.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod planner;
pub mod ports;
pub mod utils;

// Re-export commonly used types
pub use app::{CutInteractor, Scrubber, SessionOptions};
pub use config::AppConfig;
pub use domain::errors::DomainError;
pub use planner::{CutPlan, OutputPlanner};

/// Initialize the media backend
pub fn init() -> Result<(), DomainError> {
    ffmpeg_next::init()
        .map_err(|e| DomainError::ConfigFail(format!("Failed to initialize FFmpeg: {}", e)))
}
