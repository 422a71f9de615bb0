//! Per-exercise repetition state machine
//!
//! Converts a continuous signal into debounced "rep completed" events.
//! A rep is recognized once per full excursion: the start crossing arms
//! the machine, the opposite completion crossing counts and disarms it.

use super::kind::{Exercise, Phase};
use super::rule::RepRule;
use crate::pose::ExerciseSignal;

/// Repetition detector for a single exercise
#[derive(Clone, Debug)]
pub struct RepStateMachine {
    exercise: Exercise,
    rule: RepRule,
    phase: Phase,
    /// Set by the start crossing, cleared by the completion crossing
    ready: bool,
}

impl RepStateMachine {
    pub fn new(exercise: Exercise, rule: RepRule) -> Self {
        Self {
            exercise,
            rule,
            phase: Phase::Rest,
            ready: false,
        }
    }

    /// Feed one frame's signal. Returns true if a repetition completed.
    ///
    /// Non-finite primary values leave the machine untouched. The gate,
    /// if any, only applies to the start transition and fails when the
    /// secondary signal is missing.
    pub fn update(&mut self, signal: ExerciseSignal) -> bool {
        if !signal.primary.is_finite() {
            return false;
        }

        match (self.phase, self.ready) {
            (Phase::Rest, false) => {
                if self.rule.start.is_met(signal.primary) && self.gate_open(signal.secondary) {
                    self.phase = Phase::Engaged;
                    self.ready = true;
                }
                false
            }
            (Phase::Engaged, true) => {
                if self.rule.completion.is_met(signal.primary) {
                    self.phase = Phase::Rest;
                    self.ready = false;
                    true
                } else {
                    false
                }
            }
            _ => false,
        }
    }

    fn gate_open(&self, secondary: Option<f32>) -> bool {
        match (self.rule.gate, secondary) {
            (None, _) => true,
            (Some(gate), Some(value)) => gate.is_met(value),
            (Some(_), None) => false,
        }
    }

    pub fn exercise(&self) -> Exercise {
        self.exercise
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Exercise-specific name of the current phase
    pub fn phase_label(&self) -> &'static str {
        self.exercise.phase_label(self.phase)
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Back to the rest configuration
    pub fn reset(&mut self) {
        self.phase = Phase::Rest;
        self.ready = false;
    }
}
