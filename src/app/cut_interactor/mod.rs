// Cut interactor - Interaction loop for marking and cutting ranges

use std::path::Path;

use tracing::{info, warn};

use crate::app::scrubber::Scrubber;
use crate::config::KeyBindings;
use crate::domain::errors::*;
use crate::domain::model::*;
use crate::domain::rules::*;
use crate::planner::OutputPlanner;
use crate::ports::*;
use crate::utils::time::format_seconds;

/// Session settings fixed at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    pub keys: KeyBindings,
    pub output_mode: OutputMode,
    pub verbose: bool,
}

/// Startup help describing the keys for the chosen output mode
pub fn help_lines(options: &SessionOptions) -> Vec<String> {
    let keys = &options.keys;
    let product = match options.output_mode.kind {
        OutputKind::SingleClip => "cut that range into a clip",
        OutputKind::ImageSequence => "extract that range as PNG frames",
    };
    let delivery = if options.output_mode.is_script() {
        "The command is added to the cut script instead of being run."
    } else {
        "The transcoder runs right away."
    };

    vec![
        "Move through the video with the arrow keys (1 or 10 frames), PgUp/PgDn (100) and Home/End."
            .to_string(),
        format!("Press '{}' to type a frame number to jump to.", keys.jump),
        format!(
            "Press '{}' on the first frame, then '{}' again on the last frame to {}.",
            keys.mark, keys.mark, product
        ),
        delivery.to_string(),
        format!("Press '{}' to quit.", keys.quit),
    ]
}

/// Drives one scrubbing session until the user quits
pub struct CutInteractor {
    scrubber: Scrubber,
    selector: RangeSelector,
    planner: OutputPlanner,
    ui: Box<dyn UiPort>,
    sink: Box<dyn ExecutePort>,
    options: SessionOptions,
}

impl CutInteractor {
    /// Open the source and show its first frame
    pub fn open(
        path: &Path,
        media: Box<dyn MediaPort>,
        mut ui: Box<dyn UiPort>,
        planner: OutputPlanner,
        sink: Box<dyn ExecutePort>,
        options: SessionOptions,
    ) -> Result<Self, DomainError> {
        let scrubber = Scrubber::open(path, media, ui.as_mut(), options.verbose)?;

        Ok(Self {
            scrubber,
            selector: RangeSelector::new(),
            planner,
            ui,
            sink,
            options,
        })
    }

    /// Process events until quit; returns the number of cuts produced
    pub fn run(&mut self) -> Result<u32, DomainError> {
        loop {
            let event = self.ui.next_event()?;
            if !self.handle_event(event)? {
                break;
            }
        }

        let cuts = self.cuts_made();
        info!(
            cuts,
            pending = matches!(self.selector.state(), SelectorState::Pending(_)),
            "Session finished"
        );
        Ok(cuts)
    }

    /// Handle one event; returns `false` when the loop should stop
    pub fn handle_event(&mut self, event: UiEvent) -> Result<bool, DomainError> {
        let keys = self.options.keys;
        match event {
            UiEvent::Interrupted => Ok(false),
            UiEvent::Key(key) if key == keys.quit => Ok(false),
            UiEvent::Key(key) if key == keys.jump => {
                self.jump()?;
                Ok(true)
            }
            UiEvent::Key(key) if key == keys.mark => {
                self.mark()?;
                Ok(true)
            }
            UiEvent::Key(_) => Ok(true),
            UiEvent::SliderMoved(position) => {
                self.scrubber.seek(position, self.ui.as_mut())?;
                Ok(true)
            }
        }
    }

    /// Prompt for a frame number and move there
    fn jump(&mut self) -> Result<(), DomainError> {
        let Some(frame) = self.ui.prompt_frame_number()? else {
            return Ok(());
        };
        let position = self.ui.set_slider_position(frame);
        self.scrubber.seek(position, self.ui.as_mut())
    }

    /// Mark the frame the slider reports
    ///
    /// The slider position is used rather than the last decoded frame; both
    /// agree as long as every slider move goes through [`Self::handle_event`].
    pub fn mark(&mut self) -> Result<MarkOutcome, DomainError> {
        let current = self.ui.slider_position();
        let Self {
            scrubber,
            selector,
            planner,
            ui,
            sink,
            ..
        } = self;

        let outcome = selector.mark(current, |range, cut| {
            let plan = planner.plan(scrubber.media(), range, cut);

            ui.notify(&format!("Last frame: {}", range.stop()));
            ui.notify(&format!(
                "Cutting from frames {} to {}",
                range.start(),
                range.stop()
            ));
            ui.notify(&format!(
                "Cutting from time {} to {}",
                format_seconds(plan.start_time),
                format_seconds(plan.stop_time)
            ));
            ui.notify(&plan.command);

            if let SinkReport::Executed {
                success: false,
                status,
            } = sink.submit(&plan)?
            {
                let reason = status.map_or_else(
                    || "was terminated by a signal".to_string(),
                    |code| format!("exited with status {}", code),
                );
                ui.notify(&format!(
                    "Transcoder {}; {} may be incomplete",
                    reason,
                    plan.output.display()
                ));
            }
            Ok::<(), DomainError>(())
        })?;

        match outcome {
            MarkOutcome::Started { start } => {
                info!(start, "Marked start frame");
                self.ui.notify(&format!("First frame: {}", start));
            }
            MarkOutcome::Completed { range, cut } => {
                info!(range = %range, cut = cut.value(), "Cut produced");
            }
            MarkOutcome::Rejected { start, stop } => {
                warn!(start, stop, "Ignoring cut since stop <= start");
                self.ui.notify(&format!("Last frame: {}", stop));
                self.ui.notify("Ignoring cut since stop <= start.");
            }
        }
        Ok(outcome)
    }

    /// Number of cuts handed to the sink so far
    pub fn cuts_made(&self) -> u32 {
        self.selector.cut_counter().value()
    }

    pub fn selector_state(&self) -> SelectorState {
        self.selector.state()
    }

    pub fn scrubber(&self) -> &Scrubber {
        &self.scrubber
    }
}
