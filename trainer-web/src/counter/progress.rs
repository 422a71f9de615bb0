//! Activity progress - decaying feedback after each repetition

/// Progress value right after a repetition
pub const PROGRESS_MAX: f32 = 100.0;

/// Bounded [0, 100] scalar that jumps to 100 on a rep and decays per frame
#[derive(Clone, Debug, PartialEq)]
pub struct ActivityProgress {
    value: f32,
    decay_step: f32,
}

impl ActivityProgress {
    pub fn new(decay_step: f32) -> Self {
        Self {
            value: 0.0,
            decay_step,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// A repetition was recognized this frame
    pub fn on_repetition(&mut self) {
        self.value = PROGRESS_MAX;
    }

    /// A frame passed without repetitions
    pub fn decay(&mut self) {
        self.value = (self.value - self.decay_step).max(0.0);
    }

    pub fn reset(&mut self) {
        self.value = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        assert_eq!(ActivityProgress::new(2.0).value(), 0.0);
    }

    #[test]
    fn test_decays_by_step() {
        let mut progress = ActivityProgress::new(2.0);
        progress.on_repetition();
        assert_eq!(progress.value(), 100.0);
        progress.decay();
        assert_eq!(progress.value(), 98.0);
        progress.decay();
        assert_eq!(progress.value(), 96.0);
    }

    #[test]
    fn test_floors_at_zero() {
        let mut progress = ActivityProgress::new(30.0);
        progress.on_repetition();
        for _ in 0..10 {
            progress.decay();
        }
        assert_eq!(progress.value(), 0.0);
    }
}
