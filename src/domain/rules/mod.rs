// Domain rules - Range selection state machine

use crate::domain::model::{CompletedRange, CutCounter};

/// Selection state between marks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorState {
    /// No start frame marked
    Idle,
    /// Start frame marked, waiting for the stop mark
    Pending(u64),
}

/// Result of a single mark event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkOutcome {
    /// First mark recorded
    Started { start: u64 },
    /// Second mark closed a valid range and the cut was produced
    Completed { range: CompletedRange, cut: CutCounter },
    /// Second mark was not after the first; selection discarded
    Rejected { start: u64, stop: u64 },
}

/// Turns a stream of mark events into completed ranges
///
/// Owns the pending start mark and the cut counter. After every second mark
/// the selector is back in [`SelectorState::Idle`], whether the range was
/// accepted, rejected, or its output failed.
#[derive(Debug, Default)]
pub struct RangeSelector {
    pending: Option<u64>,
    cuts: CutCounter,
}

impl RangeSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SelectorState {
        match self.pending {
            Some(start) => SelectorState::Pending(start),
            None => SelectorState::Idle,
        }
    }

    /// Counter value the next completed cut will be named with
    pub fn cut_counter(&self) -> CutCounter {
        self.cuts
    }

    /// Handle a mark at `current_frame`
    ///
    /// When the mark completes a valid range, `produce` is called with the
    /// range and the current counter value. The counter advances only if
    /// `produce` succeeds; its error is returned as is.
    pub fn mark<F, E>(&mut self, current_frame: u64, produce: F) -> Result<MarkOutcome, E>
    where
        F: FnOnce(CompletedRange, CutCounter) -> Result<(), E>,
    {
        let Some(start) = self.pending.take() else {
            self.pending = Some(current_frame);
            return Ok(MarkOutcome::Started {
                start: current_frame,
            });
        };

        match CompletedRange::new(start, current_frame) {
            Ok(range) => {
                let cut = self.cuts;
                produce(range, cut)?;
                self.cuts.advance();
                Ok(MarkOutcome::Completed { range, cut })
            }
            Err(_) => Ok(MarkOutcome::Rejected {
                start,
                stop: current_frame,
            }),
        }
    }
}

#[cfg(test)]
mod tests;
