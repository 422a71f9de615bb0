//! Landmark frame storage
//!
//! Holds one frame of MediaPipe Pose points as sent by JavaScript:
//! `(id, x, y)` triples in pixel coordinates of the mirrored camera image.

use std::collections::BTreeMap;

use crate::error::TrainerError;

// ============================================================================
// LANDMARK INDICES (MediaPipe Pose, mirrored image)
// ============================================================================

/// Inner eye point, used as a proxy for overall body height
pub const EYE: u32 = 1;
pub const RIGHT_SHOULDER: u32 = 11;
pub const LEFT_SHOULDER: u32 = 12;
pub const RIGHT_ELBOW: u32 = 13;
pub const LEFT_ELBOW: u32 = 14;
pub const RIGHT_WRIST: u32 = 15;
pub const LEFT_WRIST: u32 = 16;
pub const RIGHT_HIP: u32 = 23;
pub const LEFT_HIP: u32 = 24;
pub const RIGHT_KNEE: u32 = 25;
pub const LEFT_KNEE: u32 = 26;

/// Every id some exercise extractor reads
pub const REQUIRED_LANDMARKS: [u32; 8] = [
    EYE,
    LEFT_SHOULDER,
    LEFT_ELBOW,
    LEFT_WRIST, RIGHT_WRIST,
    LEFT_HIP, RIGHT_HIP,
    LEFT_KNEE,
];

/// Distinct landmark count below which a frame is never processed
pub const MIN_LANDMARKS: usize = 28;

// ============================================================================
// LANDMARK DATA STRUCTURE
// ============================================================================

/// A single 2D landmark point (pixel coordinates)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance_to(&self, other: Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// All landmarks detected in one video frame, keyed by schema id
#[derive(Clone, Debug, Default)]
pub struct LandmarkFrame {
    points: BTreeMap<u32, Point>,
}

impl LandmarkFrame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a frame from a flat `[id, x, y, id, x, y, ...]` buffer.
    ///
    /// A later triple with the same id replaces an earlier one.
    pub fn from_flat(data: &[f32]) -> Result<Self, TrainerError> {
        if data.len() % 3 != 0 {
            return Err(TrainerError::MalformedFrame(format!(
                "length {} is not a multiple of 3",
                data.len()
            )));
        }

        let mut frame = Self::new();
        for triple in data.chunks_exact(3) {
            let raw_id = triple[0];
            if !raw_id.is_finite() || raw_id < 0.0 || raw_id.fract() != 0.0 {
                return Err(TrainerError::MalformedFrame(format!(
                    "invalid landmark id {}",
                    raw_id
                )));
            }
            frame.insert(raw_id as u32, triple[1], triple[2]);
        }
        Ok(frame)
    }

    pub fn insert(&mut self, id: u32, x: f32, y: f32) {
        self.points.insert(id, Point::new(x, y));
    }

    /// Get a specific landmark by id
    pub fn get(&self, id: u32) -> Option<Point> {
        self.points.get(&id).copied()
    }

    /// Number of distinct ids in the frame
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Ids from `required` that this frame lacks
    pub fn missing(&self, required: &[u32]) -> Vec<u32> {
        required
            .iter()
            .copied()
            .filter(|id| !self.points.contains_key(id))
            .collect()
    }
}

impl FromIterator<(u32, f32, f32)> for LandmarkFrame {
    fn from_iter<I: IntoIterator<Item = (u32, f32, f32)>>(iter: I) -> Self {
        let mut frame = Self::new();
        for (id, x, y) in iter {
            frame.insert(id, x, y);
        }
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_flat_reads_triples() {
        let frame = LandmarkFrame::from_flat(&[1.0, 10.0, 20.0, 12.0, 30.0, 40.0]).unwrap();
        assert_eq!(frame.len(), 2);
        assert_eq!(frame.get(EYE), Some(Point::new(10.0, 20.0)));
        assert_eq!(frame.get(LEFT_SHOULDER), Some(Point::new(30.0, 40.0)));
        assert_eq!(frame.get(LEFT_WRIST), None);
    }

    #[test]
    fn test_from_flat_rejects_partial_triple() {
        let err = LandmarkFrame::from_flat(&[1.0, 10.0]).unwrap_err();
        assert!(matches!(err, TrainerError::MalformedFrame(_)));
    }

    #[test]
    fn test_from_flat_rejects_bad_ids() {
        assert!(LandmarkFrame::from_flat(&[-1.0, 0.0, 0.0]).is_err());
        assert!(LandmarkFrame::from_flat(&[1.5, 0.0, 0.0]).is_err());
        assert!(LandmarkFrame::from_flat(&[f32::NAN, 0.0, 0.0]).is_err());
    }

    #[test]
    fn test_duplicate_id_last_wins() {
        let frame = LandmarkFrame::from_flat(&[1.0, 0.0, 0.0, 1.0, 5.0, 6.0]).unwrap();
        assert_eq!(frame.len(), 1);
        assert_eq!(frame.get(EYE), Some(Point::new(5.0, 6.0)));
    }

    #[test]
    fn test_missing_lists_absent_ids() {
        let frame: LandmarkFrame = [(EYE, 0.0, 0.0), (LEFT_HIP, 0.0, 0.0)].into_iter().collect();
        let missing = frame.missing(&REQUIRED_LANDMARKS);
        assert_eq!(missing.len(), REQUIRED_LANDMARKS.len() - 2);
        assert!(!missing.contains(&EYE));
        assert!(missing.contains(&LEFT_WRIST));
    }

    #[test]
    fn test_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert!((a.distance_to(b) - 5.0).abs() < 1e-6);
    }
}
