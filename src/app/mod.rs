// Application layer - Use case interactors

pub mod cut_interactor;
pub mod scrubber;

// Re-export interactors
pub use cut_interactor::{help_lines, CutInteractor, SessionOptions};
pub use scrubber::Scrubber;
