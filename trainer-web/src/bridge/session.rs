//! Session storage and JS bridge
//!
//! JavaScript runs the camera and MediaPipe Pose, then hands each frame's
//! landmarks to `update_landmarks`. Counters and progress are read back
//! for the overlay.

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::config::TrainerConfig;
use crate::counter::{FrameOutcome, RepCounter, RepCounts};
use crate::error::{Result, TrainerError};
use crate::exercise::Exercise;
use crate::pose::LandmarkFrame;

impl From<TrainerError> for JsValue {
    fn from(err: TrainerError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

// Thread-local storage (WASM is single-threaded)
thread_local! {
    static SESSION: RefCell<Option<RepCounter>> = RefCell::new(None);
}

// ============================================================================
// WASM-BINDGEN ENTRY POINTS
// ============================================================================

/// Start (or restart) a session. `config_json` may be partial or omitted.
#[wasm_bindgen]
pub fn start_session(config_json: Option<String>) -> std::result::Result<(), JsValue> {
    open_session(config_json.as_deref())?;
    Ok(())
}

/// Called from JavaScript with a flat Float32Array of `(id, x, y)` triples.
///
/// Returns true if the frame was processed, false if it was skipped for
/// lack of landmarks.
#[wasm_bindgen]
pub fn update_landmarks(data: &[f32]) -> std::result::Result<bool, JsValue> {
    let outcome = feed_frame(data)?;
    Ok(outcome.is_processed())
}

/// Counts in `get_exercise_names` order
#[wasm_bindgen]
pub fn get_counts() -> Vec<u32> {
    current_counts().as_array().to_vec()
}

/// Counts as `{ "dumbbells": n, ... }`
#[wasm_bindgen]
pub fn get_counts_json() -> String {
    serde_json::to_string(&current_counts()).unwrap_or_else(|_| "{}".to_string())
}

/// Activity progress in [0, 100]
#[wasm_bindgen]
pub fn get_progress() -> f32 {
    SESSION.with(|cell| cell.borrow().as_ref().map_or(0.0, |counter| counter.progress()))
}

/// Display labels, in counter order
#[wasm_bindgen]
pub fn get_exercise_names() -> Vec<String> {
    Exercise::ALL.iter().map(|e| e.name().to_string()).collect()
}

/// Zero all counters and progress, keeping the session's config
#[wasm_bindgen]
pub fn reset_session() {
    SESSION.with(|cell| {
        if let Some(counter) = cell.borrow_mut().as_mut() {
            counter.reset();
        }
    });
    log::info!("Session reset");
}

// ============================================================================
// INTERNAL API (no wasm_bindgen)
// ============================================================================

pub fn open_session(config_json: Option<&str>) -> Result<()> {
    let config = match config_json {
        Some(json) => TrainerConfig::from_json(json)?,
        None => TrainerConfig::default(),
    };
    let counter = RepCounter::new(&config)?;
    SESSION.with(|cell| *cell.borrow_mut() = Some(counter));
    log::info!("Session started (min landmarks {})", config.min_landmarks);
    Ok(())
}

/// Parse and process one frame against the current session
pub fn feed_frame(data: &[f32]) -> Result<FrameOutcome> {
    let frame = LandmarkFrame::from_flat(data).map_err(|err| {
        log::warn!("{}", err);
        err
    })?;

    SESSION.with(|cell| {
        let mut session = cell.borrow_mut();
        let counter = session.as_mut().ok_or(TrainerError::NotInitialized)?;
        Ok(counter.process(&frame))
    })
}

/// Counters of the current session (all zero before `start_session`)
pub fn current_counts() -> RepCounts {
    SESSION.with(|cell| cell.borrow().as_ref().map(|counter| counter.counts()).unwrap_or_default())
}

pub fn has_session() -> bool {
    SESSION.with(|cell| cell.borrow().is_some())
}
