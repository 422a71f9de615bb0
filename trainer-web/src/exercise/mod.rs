//! Exercise module - repetition state machines
//!
//! Re-exports only. All logic in submodules.

mod kind;
mod rule;
mod machine;

pub use kind::{Exercise, Phase};
pub use rule::{Crossing, RepRule, RuleOverride};
pub use machine::RepStateMachine;
