//! Threshold descriptors for the repetition state machine
//!
//! One `RepRule` per exercise replaces six hand-written detectors:
//! it says which way the primary signal must cross to start a rep,
//! which way to complete it, and an optional gate on the secondary
//! signal that must also hold at the start.

use serde::{Deserialize, Deserializer, Serialize};

use super::kind::Exercise;
use crate::error::TrainerError;

/// A strict threshold test on a scalar signal
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Crossing {
    /// Signal strictly greater than the threshold
    Above(f32),
    /// Signal strictly less than the threshold
    Below(f32),
}

impl Crossing {
    pub fn is_met(&self, value: f32) -> bool {
        match *self {
            Crossing::Above(threshold) => value > threshold,
            Crossing::Below(threshold) => value < threshold,
        }
    }

    pub fn threshold(&self) -> f32 {
        match *self {
            Crossing::Above(threshold) | Crossing::Below(threshold) => threshold,
        }
    }
}

/// Start/completion thresholds for one exercise
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct RepRule {
    /// Primary signal test that arms the machine (Rest → Engaged)
    pub start: Crossing,
    /// Primary signal test that counts the rep (Engaged → Rest)
    pub completion: Crossing,
    /// Secondary signal test ANDed into the start transition only
    pub gate: Option<Crossing>,
}

/// Partial rule read from config
///
/// Absent fields keep the exercise default. `"gate": null` removes the
/// gate, while a missing `gate` keeps the default one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RuleOverride {
    pub start: Option<Crossing>,
    pub completion: Option<Crossing>,
    #[serde(deserialize_with = "present")]
    pub gate: Option<Option<Crossing>>,
}

impl RuleOverride {
    /// Merge over `base` field by field
    pub fn apply(&self, base: RepRule) -> RepRule {
        RepRule {
            start: self.start.unwrap_or(base.start),
            completion: self.completion.unwrap_or(base.completion),
            gate: self.gate.unwrap_or(base.gate),
        }
    }
}

/// Wraps a present field (even `null`) in `Some`
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl RepRule {
    pub fn new(start: Crossing, completion: Crossing) -> Self {
        Self {
            start,
            completion,
            gate: None,
        }
    }

    pub fn with_gate(mut self, gate: Crossing) -> Self {
        self.gate = Some(gate);
        self
    }

    /// Factory thresholds (pixel units for a 1280x720 camera)
    pub fn default_for(exercise: Exercise) -> Self {
        match exercise {
            // elbow angle: extended, then curled
            Exercise::DumbbellCurl => Self::new(Crossing::Above(160.0), Crossing::Below(60.0)),
            // eye y high with level hips, then eye back down
            Exercise::Jump => Self::new(Crossing::Below(100.0), Crossing::Above(150.0))
                .with_gate(Crossing::Below(50.0)),
            // wrist distance: arms open, then closed
            Exercise::JumpingJack => Self::new(Crossing::Above(500.0), Crossing::Below(400.0)),
            // wrist to opposite hip: crossed, then back to center
            Exercise::Twister => Self::new(Crossing::Below(100.0), Crossing::Above(150.0)),
            // elbow angle with eye low in frame
            Exercise::Pushup => Self::new(Crossing::Above(140.0), Crossing::Below(90.0))
                .with_gate(Crossing::Above(400.0)),
            // hip-knee distance with eye high in frame
            Exercise::Squat => Self::new(Crossing::Below(150.0), Crossing::Above(200.0))
                .with_gate(Crossing::Below(400.0)),
        }
    }

    /// Check that the rule has a dead zone between start and completion
    pub fn validate(&self, exercise: Exercise) -> Result<(), TrainerError> {
        let invalid = |reason: String| TrainerError::InvalidRule { exercise, reason };

        let thresholds = [Some(self.start), Some(self.completion), self.gate];
        if thresholds
            .iter()
            .flatten()
            .any(|crossing| !crossing.threshold().is_finite())
        {
            return Err(invalid("thresholds must be finite".into()));
        }

        match (self.start, self.completion) {
            (Crossing::Above(start), Crossing::Below(completion)) if completion < start => Ok(()),
            (Crossing::Below(start), Crossing::Above(completion)) if start < completion => Ok(()),
            (Crossing::Above(_), Crossing::Above(_)) | (Crossing::Below(_), Crossing::Below(_)) => {
                Err(invalid("start and completion must cross in opposite directions".into()))
            }
            (start, completion) => Err(invalid(format!(
                "no dead zone between start {} and completion {}",
                start.threshold(),
                completion.threshold()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crossing_is_strict() {
        assert!(Crossing::Above(160.0).is_met(160.5));
        assert!(!Crossing::Above(160.0).is_met(160.0));
        assert!(Crossing::Below(60.0).is_met(59.9));
        assert!(!Crossing::Below(60.0).is_met(60.0));
        assert!(!Crossing::Above(0.0).is_met(f32::NAN));
        assert!(!Crossing::Below(0.0).is_met(f32::NAN));
    }

    #[test]
    fn test_defaults_are_valid() {
        for exercise in Exercise::ALL {
            RepRule::default_for(exercise).validate(exercise).unwrap();
        }
    }

    #[test]
    fn test_default_gates() {
        assert_eq!(RepRule::default_for(Exercise::Jump).gate, Some(Crossing::Below(50.0)));
        assert_eq!(RepRule::default_for(Exercise::Pushup).gate, Some(Crossing::Above(400.0)));
        assert_eq!(RepRule::default_for(Exercise::Squat).gate, Some(Crossing::Below(400.0)));
        assert_eq!(RepRule::default_for(Exercise::DumbbellCurl).gate, None);
    }

    #[test]
    fn test_rejects_same_direction() {
        let rule = RepRule::new(Crossing::Above(100.0), Crossing::Above(50.0));
        assert!(rule.validate(Exercise::Twister).is_err());
    }

    #[test]
    fn test_rejects_missing_dead_zone() {
        let equal = RepRule::new(Crossing::Above(100.0), Crossing::Below(100.0));
        assert!(equal.validate(Exercise::DumbbellCurl).is_err());

        let overlap = RepRule::new(Crossing::Below(200.0), Crossing::Above(150.0));
        assert!(overlap.validate(Exercise::Squat).is_err());
    }

    #[test]
    fn test_rejects_non_finite() {
        let rule = RepRule::new(Crossing::Above(f32::INFINITY), Crossing::Below(10.0));
        assert!(rule.validate(Exercise::JumpingJack).is_err());

        let gated = RepRule::default_for(Exercise::Jump).with_gate(Crossing::Below(f32::NAN));
        assert!(gated.validate(Exercise::Jump).is_err());
    }

    #[test]
    fn test_override_keeps_missing_fields() {
        let base = RepRule::default_for(Exercise::Squat);
        let json = r#"{ "start": { "below": 120.0 } }"#;
        let merged = serde_json::from_str::<RuleOverride>(json).unwrap().apply(base);
        assert_eq!(merged.start, Crossing::Below(120.0));
        assert_eq!(merged.completion, Crossing::Above(200.0));
        assert_eq!(merged.gate, Some(Crossing::Below(400.0)));
    }

    #[test]
    fn test_override_null_gate_removes_it() {
        let base = RepRule::default_for(Exercise::Pushup);
        let merged = serde_json::from_str::<RuleOverride>(r#"{ "gate": null }"#)
            .unwrap()
            .apply(base);
        assert_eq!(merged.gate, None);
        assert_eq!(merged.start, base.start);

        let replaced = serde_json::from_str::<RuleOverride>(r#"{ "gate": { "above": 350.0 } }"#)
            .unwrap()
            .apply(base);
        assert_eq!(replaced.gate, Some(Crossing::Above(350.0)));
    }

    #[test]
    fn test_rule_json_shape() {
        let json = serde_json::to_value(RepRule::default_for(Exercise::Jump)).unwrap();
        assert_eq!(json["start"]["below"], 100.0);
        assert_eq!(json["completion"]["above"], 150.0);
        assert_eq!(json["gate"]["below"], 50.0);
    }
}
