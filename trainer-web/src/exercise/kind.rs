//! Exercise types and their phase labels

use serde::Serialize;

/// Tracked exercise types
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Exercise {
    #[serde(rename = "dumbbells")]
    DumbbellCurl,
    #[serde(rename = "jumps")]
    Jump,
    #[serde(rename = "jumping_jacks")]
    JumpingJack,
    #[serde(rename = "twisters")]
    Twister,
    #[serde(rename = "pushups")]
    Pushup,
    #[serde(rename = "squats")]
    Squat,
}

/// Half-cycle of a motion
///
/// `Rest` is where every machine starts; `Engaged` means the start
/// threshold was crossed and the next completion crossing counts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Rest,
    Engaged,
}

impl Exercise {
    /// All exercises, in counter order
    pub const ALL: [Exercise; 6] = [
        Exercise::DumbbellCurl,
        Exercise::Jump,
        Exercise::JumpingJack,
        Exercise::Twister,
        Exercise::Pushup,
        Exercise::Squat,
    ];

    pub fn index(&self) -> usize {
        match self {
            Exercise::DumbbellCurl => 0,
            Exercise::Jump => 1,
            Exercise::JumpingJack => 2,
            Exercise::Twister => 3,
            Exercise::Pushup => 4,
            Exercise::Squat => 5,
        }
    }

    /// Stable key used in JSON snapshots
    pub fn as_str(&self) -> &'static str {
        match self {
            Exercise::DumbbellCurl => "dumbbells",
            Exercise::Jump => "jumps",
            Exercise::JumpingJack => "jumping_jacks",
            Exercise::Twister => "twisters",
            Exercise::Pushup => "pushups",
            Exercise::Squat => "squats",
        }
    }

    /// Label shown next to the counter
    pub fn name(&self) -> &'static str {
        match self {
            Exercise::DumbbellCurl => "Dumbbells",
            Exercise::Jump => "Jumps",
            Exercise::JumpingJack => "Jumping Jacks",
            Exercise::Twister => "Twisters",
            Exercise::Pushup => "Pushups",
            Exercise::Squat => "Squats",
        }
    }

    /// Exercise-specific name of a phase
    pub fn phase_label(&self, phase: Phase) -> &'static str {
        match (self, phase) {
            (Exercise::JumpingJack, Phase::Rest) => "closed",
            (Exercise::JumpingJack, Phase::Engaged) => "open",
            (Exercise::Twister, Phase::Rest) => "center",
            (Exercise::Twister, Phase::Engaged) => "twisted",
            (_, Phase::Rest) => "up",
            (_, Phase::Engaged) => "down",
        }
    }
}

impl std::fmt::Display for Exercise {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
