//! Repetition counter aggregate
//!
//! Owns one state machine per exercise, the counters and the activity
//! progress. One frame is fully processed per `process` call.

use super::progress::ActivityProgress;
use super::snapshot::RepCounts;
use crate::config::TrainerConfig;
use crate::error::Result;
use crate::exercise::{Exercise, RepStateMachine};
use crate::pose::{extract_signals, LandmarkFrame, REQUIRED_LANDMARKS};

/// Why a frame was not processed
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SkipReason {
    InsufficientLandmarks {
        found: usize,
        min: usize,
        missing: Vec<u32>,
    },
}

/// Result of feeding one frame
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Frame was used; lists the exercises whose counter went up
    Processed { completed: Vec<Exercise> },
    /// Nothing was mutated
    Skipped(SkipReason),
}

impl FrameOutcome {
    pub fn is_processed(&self) -> bool {
        matches!(self, FrameOutcome::Processed { .. })
    }

    pub fn completed(&self) -> &[Exercise] {
        match self {
            FrameOutcome::Processed { completed } => completed,
            FrameOutcome::Skipped(_) => &[],
        }
    }
}

/// Per-session repetition counter
#[derive(Debug)]
pub struct RepCounter {
    min_landmarks: usize,
    machines: [RepStateMachine; 6],
    counts: [u32; 6],
    progress: ActivityProgress,
    frames_processed: u64,
    frames_skipped: u64,
}

impl RepCounter {
    pub fn new(config: &TrainerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            min_landmarks: config.min_landmarks,
            machines: Exercise::ALL
                .map(|exercise| RepStateMachine::new(exercise, *config.rules.get(exercise))),
            counts: [0; 6],
            progress: ActivityProgress::new(config.progress_decay_step),
            frames_processed: 0,
            frames_skipped: 0,
        })
    }

    /// Run every exercise on one frame
    ///
    /// Frames below the landmark minimum, or missing a required id, are
    /// skipped without touching counters or progress. Otherwise each
    /// exercise updates independently; one without a usable signal this
    /// frame simply keeps its state.
    pub fn process(&mut self, frame: &LandmarkFrame) -> FrameOutcome {
        let missing = frame.missing(&REQUIRED_LANDMARKS);
        if frame.len() < self.min_landmarks || !missing.is_empty() {
            self.frames_skipped += 1;
            log::debug!(
                "Skipping frame: {} landmarks (min {}), missing {:?}",
                frame.len(),
                self.min_landmarks,
                missing
            );
            return FrameOutcome::Skipped(SkipReason::InsufficientLandmarks {
                found: frame.len(),
                min: self.min_landmarks,
                missing,
            });
        }

        let signals = extract_signals(frame);
        let mut completed = Vec::new();

        for machine in self.machines.iter_mut() {
            let exercise = machine.exercise();
            let Some(signal) = signals.get(exercise) else {
                continue;
            };
            if machine.update(signal) {
                let count = &mut self.counts[exercise.index()];
                *count = count.saturating_add(1);
                log::info!("{} counted! ({})", exercise, count);
                completed.push(exercise);
            }
        }

        if completed.is_empty() {
            self.progress.decay();
        } else {
            self.progress.on_repetition();
        }
        self.frames_processed += 1;

        FrameOutcome::Processed { completed }
    }

    pub fn counts(&self) -> RepCounts {
        RepCounts::from_array(self.counts)
    }

    pub fn count(&self, exercise: Exercise) -> u32 {
        self.counts[exercise.index()]
    }

    pub fn total(&self) -> u32 {
        self.counts().total()
    }

    /// Activity progress in [0, 100]
    pub fn progress(&self) -> f32 {
        self.progress.value()
    }

    pub fn frames_processed(&self) -> u64 {
        self.frames_processed
    }

    pub fn frames_skipped(&self) -> u64 {
        self.frames_skipped
    }

    /// Start a new session: all machines at rest, counters and progress zeroed
    pub fn reset(&mut self) {
        for machine in self.machines.iter_mut() {
            machine.reset();
        }
        self.counts = [0; 6];
        self.progress.reset();
        self.frames_processed = 0;
        self.frames_skipped = 0;
    }
}
