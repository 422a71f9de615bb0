//! Counter module - per-session aggregate of all exercises
//!
//! Re-exports only. All logic in submodules.

mod progress;
mod snapshot;
mod aggregate;

pub use progress::{ActivityProgress, PROGRESS_MAX};
pub use snapshot::RepCounts;
pub use aggregate::{FrameOutcome, RepCounter, SkipReason};
