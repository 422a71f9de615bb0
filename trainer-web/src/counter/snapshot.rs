//! Read-only counter snapshot for presentation

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::exercise::Exercise;

/// Cumulative repetitions per exercise
///
/// Serializes as `{ "dumbbells": n, "jumps": n, ... }` in `Exercise::ALL` order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RepCounts {
    counts: [u32; 6],
}

impl RepCounts {
    pub(crate) fn from_array(counts: [u32; 6]) -> Self {
        Self { counts }
    }

    pub fn get(&self, exercise: Exercise) -> u32 {
        self.counts[exercise.index()]
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().fold(0u32, |acc, &n| acc.saturating_add(n))
    }

    /// Counts in `Exercise::ALL` order (flat array for JS)
    pub fn as_array(&self) -> [u32; 6] {
        self.counts
    }

    pub fn iter(&self) -> impl Iterator<Item = (Exercise, u32)> + '_ {
        Exercise::ALL.iter().map(|&exercise| (exercise, self.get(exercise)))
    }
}

impl Serialize for RepCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.counts.len()))?;
        for (exercise, count) in self.iter() {
            map.serialize_entry(exercise.as_str(), &count)?;
        }
        map.end()
    }
}
