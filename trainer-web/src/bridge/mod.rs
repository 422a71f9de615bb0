//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod session;
mod logging;

pub use session::{
    // WASM entry points
    start_session,
    update_landmarks,
    get_counts,
    get_counts_json,
    get_progress,
    get_exercise_names,
    reset_session,
    // Internal API
    open_session,
    feed_frame,
    current_counts,
    has_session,
};

pub use logging::{init_logging, set_log_level};
