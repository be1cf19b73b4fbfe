// Scrubber - Frame position over an opened source video

use std::path::Path;

use tracing::{debug, info};

use crate::domain::errors::*;
use crate::domain::model::MediaHandle;
use crate::ports::*;

/// Owns the opened media and the last successfully shown frame
pub struct Scrubber {
    media: Box<dyn MediaPort>,
    handle: MediaHandle,
    current_frame: u64,
    verbose: bool,
}

impl Scrubber {
    /// Open `path`, size the slider to the source and show frame 0
    pub fn open(
        path: &Path,
        mut media: Box<dyn MediaPort>,
        ui: &mut dyn UiPort,
        verbose: bool,
    ) -> Result<Self, DomainError> {
        if !path.exists() {
            return Err(DomainError::NotFound {
                path: path.to_path_buf(),
            });
        }

        media.open(path)?;
        let handle = MediaHandle::new(path, media.frame_rate(), media.frame_count())?;

        ui.set_title(handle.file_name());
        ui.create_slider(handle.last_frame());

        if verbose {
            info!(
                "Total frames: {} at {}",
                handle.total_frames(),
                handle.frame_rate()
            );
        } else {
            debug!(
                "Total frames: {} at {}",
                handle.total_frames(),
                handle.frame_rate()
            );
        }

        let mut scrubber = Self {
            media,
            handle,
            current_frame: 0,
            verbose,
        };
        scrubber.seek(0, ui)?;
        Ok(scrubber)
    }

    /// Seek to `frame_index`, decode it and display it
    ///
    /// The index is not clamped here; the slider only reports positions in
    /// range. A failed seek or read leaves the current frame unchanged.
    pub fn seek(&mut self, frame_index: u64, ui: &mut dyn UiPort) -> Result<(), DomainError> {
        self.media.seek(frame_index)?;
        let image = self.media.read_frame()?;
        self.current_frame = frame_index;
        ui.show_frame(frame_index, &image)?;

        if self.verbose {
            info!(frame = frame_index, "Current frame");
        } else {
            debug!(frame = frame_index, "Current frame");
        }
        Ok(())
    }

    /// Last successfully sought frame
    pub fn current_frame(&self) -> u64 {
        self.current_frame
    }

    pub fn media(&self) -> &MediaHandle {
        &self.handle
    }
}
