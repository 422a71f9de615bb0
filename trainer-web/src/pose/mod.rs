//! Pose module - landmark frames and signal extraction
//!
//! Re-exports only. All logic in submodules.

mod landmarks;
mod angles;
mod signals;

pub use landmarks::{
    LandmarkFrame, Point,
    // Constants
    EYE, LEFT_SHOULDER, RIGHT_SHOULDER,
    LEFT_ELBOW, RIGHT_ELBOW,
    LEFT_WRIST, RIGHT_WRIST,
    LEFT_HIP, RIGHT_HIP,
    LEFT_KNEE, RIGHT_KNEE,
    REQUIRED_LANDMARKS, MIN_LANDMARKS,
};
pub use angles::joint_angle;
pub use signals::{extract_signals, ExerciseSignal, FrameSignals};
