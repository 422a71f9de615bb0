//! Trainer Web - exercise repetition counter
//!
//! Counts reps of six exercises from MediaPipe Pose landmarks streamed
//! in from JavaScript. Entry point for the WASM module; contains only
//! module declarations and the start hook.

pub mod bridge;
pub mod config;
pub mod counter;
pub mod error;
pub mod exercise;
pub mod pose;

use wasm_bindgen::prelude::*;

pub use config::TrainerConfig;
pub use counter::{FrameOutcome, RepCounter, RepCounts, SkipReason};
pub use error::TrainerError;
pub use exercise::{Exercise, Phase};
pub use pose::LandmarkFrame;

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
    bridge::init_logging(log::LevelFilter::Info);
}
