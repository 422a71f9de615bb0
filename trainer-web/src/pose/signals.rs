//! Signal extraction for repetition counting
//!
//! Derives per-exercise scalars from one landmark frame. Pure: no state
//! is carried between frames.

use super::angles::joint_angle;
use super::landmarks::{
    LandmarkFrame, EYE, LEFT_ELBOW, LEFT_HIP, LEFT_KNEE, LEFT_SHOULDER, LEFT_WRIST, RIGHT_HIP,
    RIGHT_WRIST,
};
use crate::exercise::Exercise;

/// Scalar input for one exercise's state machine
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExerciseSignal {
    /// Signal tested by the start and completion thresholds
    pub primary: f32,
    /// Signal tested by the start gate, if the exercise has one
    pub secondary: Option<f32>,
}

impl ExerciseSignal {
    pub fn single(primary: f32) -> Self {
        Self {
            primary,
            secondary: None,
        }
    }

    pub fn with_secondary(primary: f32, secondary: f32) -> Self {
        Self {
            primary,
            secondary: Some(secondary),
        }
    }
}

/// One frame's signals, indexed by exercise
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameSignals {
    signals: [Option<ExerciseSignal>; 6],
}

impl FrameSignals {
    pub fn get(&self, exercise: Exercise) -> Option<ExerciseSignal> {
        self.signals[exercise.index()]
    }

    pub fn set(&mut self, exercise: Exercise, signal: Option<ExerciseSignal>) {
        self.signals[exercise.index()] = signal;
    }
}

/// Extract every exercise's signal from a frame
///
/// Signals:
/// - arm angle: interior angle at the elbow (shoulder, elbow, wrist)
/// - eye y: vertical position of the eye point (smaller = higher)
/// - hip diff: |left hip y - right hip y|
/// - hand distance: wrist to wrist
/// - cross distance: wrist to opposite hip
/// - hip-knee distance: shrinks as the body lowers
///
/// An exercise gets `None` when a point it needs is absent or its
/// primary value is degenerate; the rest are unaffected.
pub fn extract_signals(frame: &LandmarkFrame) -> FrameSignals {
    let point = |id| frame.get(id);

    let arm_angle = match (point(LEFT_SHOULDER), point(LEFT_ELBOW), point(LEFT_WRIST)) {
        (Some(shoulder), Some(elbow), Some(wrist)) => joint_angle(shoulder, elbow, wrist),
        _ => None,
    };
    let eye_y = point(EYE).map(|eye| eye.y).filter(|y| y.is_finite());
    let hip_diff = match (point(LEFT_HIP), point(RIGHT_HIP)) {
        (Some(left), Some(right)) => finite((left.y - right.y).abs()),
        _ => None,
    };
    let hand_dist = distance(frame, LEFT_WRIST, RIGHT_WRIST);
    let cross_dist = distance(frame, LEFT_WRIST, RIGHT_HIP);
    let hip_knee_dist = distance(frame, LEFT_HIP, LEFT_KNEE);

    let mut signals = FrameSignals::default();
    signals.set(Exercise::DumbbellCurl, arm_angle.map(ExerciseSignal::single));
    signals.set(
        Exercise::Jump,
        eye_y.map(|y| ExerciseSignal {
            primary: y,
            secondary: hip_diff,
        }),
    );
    signals.set(Exercise::JumpingJack, hand_dist.map(ExerciseSignal::single));
    signals.set(Exercise::Twister, cross_dist.map(ExerciseSignal::single));
    signals.set(
        Exercise::Pushup,
        arm_angle.map(|angle| ExerciseSignal {
            primary: angle,
            secondary: eye_y,
        }),
    );
    signals.set(
        Exercise::Squat,
        hip_knee_dist.map(|dist| ExerciseSignal {
            primary: dist,
            secondary: eye_y,
        }),
    );
    signals
}

fn distance(frame: &LandmarkFrame, a: u32, b: u32) -> Option<f32> {
    let (a, b) = (frame.get(a)?, frame.get(b)?);
    finite(a.distance_to(b))
}

fn finite(value: f32) -> Option<f32> {
    value.is_finite().then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pose::landmarks::{RIGHT_ELBOW, RIGHT_KNEE, RIGHT_SHOULDER};

    fn standing_frame() -> LandmarkFrame {
        [
            (EYE, 640.0, 120.0),
            (LEFT_SHOULDER, 700.0, 250.0),
            (RIGHT_SHOULDER, 580.0, 250.0),
            (LEFT_ELBOW, 700.0, 350.0),
            (RIGHT_ELBOW, 580.0, 350.0),
            (LEFT_WRIST, 700.0, 450.0),
            (RIGHT_WRIST, 580.0, 450.0),
            (LEFT_HIP, 680.0, 450.0),
            (RIGHT_HIP, 600.0, 460.0),
            (LEFT_KNEE, 680.0, 650.0),
            (RIGHT_KNEE, 600.0, 650.0),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_standing_signals() {
        let signals = extract_signals(&standing_frame());

        let curl = signals.get(Exercise::DumbbellCurl).unwrap();
        assert!((curl.primary - 180.0).abs() < 0.5);
        assert_eq!(curl.secondary, None);

        let jump = signals.get(Exercise::Jump).unwrap();
        assert_eq!(jump.primary, 120.0);
        assert_eq!(jump.secondary, Some(10.0));

        let jack = signals.get(Exercise::JumpingJack).unwrap();
        assert!((jack.primary - 120.0).abs() < 1e-3);

        let twister = signals.get(Exercise::Twister).unwrap();
        assert!((twister.primary - (100.0f32 * 100.0 + 10.0 * 10.0).sqrt()).abs() < 1e-3);

        let pushup = signals.get(Exercise::Pushup).unwrap();
        assert_eq!(pushup.secondary, Some(120.0));

        let squat = signals.get(Exercise::Squat).unwrap();
        assert!((squat.primary - 200.0).abs() < 1e-3);
        assert_eq!(squat.secondary, Some(120.0));
    }

    #[test]
    fn test_curled_arm_angle() {
        let mut frame = standing_frame();
        // forearm folded back up toward the shoulder
        frame.insert(LEFT_WRIST, 740.0, 260.0);
        let angle = extract_signals(&frame).get(Exercise::DumbbellCurl).unwrap().primary;
        assert!(angle < 60.0, "angle was {}", angle);
    }

    #[test]
    fn test_degenerate_elbow_isolated() {
        let mut frame = standing_frame();
        frame.insert(LEFT_ELBOW, 700.0, 250.0);
        let signals = extract_signals(&frame);
        assert_eq!(signals.get(Exercise::DumbbellCurl), None);
        assert_eq!(signals.get(Exercise::Pushup), None);
        assert!(signals.get(Exercise::JumpingJack).is_some());
        assert!(signals.get(Exercise::Squat).is_some());
    }

    #[test]
    fn test_missing_point_isolated() {
        let frame: LandmarkFrame = [
            (LEFT_WRIST, 0.0, 0.0),
            (RIGHT_WRIST, 600.0, 0.0),
            (RIGHT_KNEE, 0.0, 0.0),
        ]
        .into_iter()
        .collect();
        let signals = extract_signals(&frame);
        assert_eq!(signals.get(Exercise::JumpingJack), Some(ExerciseSignal::single(600.0)));
        assert_eq!(signals.get(Exercise::Jump), None);
        assert_eq!(signals.get(Exercise::Twister), None);
    }

    #[test]
    fn test_nan_eye_drops_gate_not_primary() {
        let mut frame = standing_frame();
        frame.insert(EYE, 640.0, f32::NAN);
        let signals = extract_signals(&frame);
        assert_eq!(signals.get(Exercise::Jump), None);
        assert_eq!(signals.get(Exercise::Squat).unwrap().secondary, None);
    }
}
