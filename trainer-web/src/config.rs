//! Trainer configuration
//!
//! Every field has a default, so JS may send a partial JSON object
//! (or nothing at all) when starting a session.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TrainerError};
use crate::exercise::{Exercise, RepRule, RuleOverride};
use crate::pose::MIN_LANDMARKS;

/// Activity progress lost per frame without a repetition
pub const PROGRESS_DECAY_STEP: f32 = 2.0;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainerConfig {
    /// Distinct landmarks a frame needs before it is processed
    pub min_landmarks: usize,
    pub progress_decay_step: f32,
    pub rules: ExerciseRules,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            min_landmarks: MIN_LANDMARKS,
            progress_decay_step: PROGRESS_DECAY_STEP,
            rules: ExerciseRules::default(),
        }
    }
}

impl TrainerConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.progress_decay_step.is_finite() || self.progress_decay_step < 0.0 {
            return Err(TrainerError::InvalidConfig(format!(
                "progress_decay_step must be a non-negative number, got {}",
                self.progress_decay_step
            )));
        }
        for exercise in Exercise::ALL {
            self.rules.get(exercise).validate(exercise)?;
        }
        Ok(())
    }
}

/// One rule per exercise, keyed like the counter snapshot
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "RuleOverrides")]
pub struct ExerciseRules {
    pub dumbbells: RepRule,
    pub jumps: RepRule,
    pub jumping_jacks: RepRule,
    pub twisters: RepRule,
    pub pushups: RepRule,
    pub squats: RepRule,
}

impl ExerciseRules {
    pub fn get(&self, exercise: Exercise) -> &RepRule {
        match exercise {
            Exercise::DumbbellCurl => &self.dumbbells,
            Exercise::Jump => &self.jumps,
            Exercise::JumpingJack => &self.jumping_jacks,
            Exercise::Twister => &self.twisters,
            Exercise::Pushup => &self.pushups,
            Exercise::Squat => &self.squats,
        }
    }
}

impl Default for ExerciseRules {
    fn default() -> Self {
        Self {
            dumbbells: RepRule::default_for(Exercise::DumbbellCurl),
            jumps: RepRule::default_for(Exercise::Jump),
            jumping_jacks: RepRule::default_for(Exercise::JumpingJack),
            twisters: RepRule::default_for(Exercise::Twister),
            pushups: RepRule::default_for(Exercise::Pushup),
            squats: RepRule::default_for(Exercise::Squat),
        }
    }
}

/// Config form of `ExerciseRules`: each rule merges over its default
#[derive(Default, Deserialize)]
#[serde(default)]
struct RuleOverrides {
    dumbbells: RuleOverride,
    jumps: RuleOverride,
    jumping_jacks: RuleOverride,
    twisters: RuleOverride,
    pushups: RuleOverride,
    squats: RuleOverride,
}

impl From<RuleOverrides> for ExerciseRules {
    fn from(overrides: RuleOverrides) -> Self {
        let rule = |exercise, over: RuleOverride| over.apply(RepRule::default_for(exercise));
        Self {
            dumbbells: rule(Exercise::DumbbellCurl, overrides.dumbbells),
            jumps: rule(Exercise::Jump, overrides.jumps),
            jumping_jacks: rule(Exercise::JumpingJack, overrides.jumping_jacks),
            twisters: rule(Exercise::Twister, overrides.twisters),
            pushups: rule(Exercise::Pushup, overrides.pushups),
            squats: rule(Exercise::Squat, overrides.squats),
        }
    }
}
