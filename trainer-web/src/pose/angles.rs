//! Joint angle calculation using dot product
//!
//! Calculates the interior angle at a joint from the vectors
//! joint→first (e.g. elbow→shoulder) and joint→second (elbow→wrist).

use super::landmarks::Point;

/// Segments shorter than this (pixels) give no usable angle
const MIN_SEGMENT: f32 = 0.0001;

/// Calculate the interior joint angle in degrees
///
/// Uses dot product formula: cos(θ) = (v1 · v2) / (|v1| × |v2|)
///
/// Returns `None` when either segment is degenerate or a coordinate
/// is not finite. Otherwise:
/// - 0° = fully folded
/// - 180° = fully straight
pub fn joint_angle(first: Point, joint: Point, second: Point) -> Option<f32> {
    let v1 = (first.x - joint.x, first.y - joint.y);
    let v2 = (second.x - joint.x, second.y - joint.y);

    let dot = v1.0 * v2.0 + v1.1 * v2.1;

    let mag1 = (v1.0 * v1.0 + v1.1 * v1.1).sqrt();
    let mag2 = (v2.0 * v2.0 + v2.1 * v2.1).sqrt();

    if !(mag1 >= MIN_SEGMENT && mag2 >= MIN_SEGMENT) || !dot.is_finite() {
        return None;
    }

    let cos_angle = (dot / (mag1 * mag2)).clamp(-1.0, 1.0);
    Some(cos_angle.acos().to_degrees())
}
