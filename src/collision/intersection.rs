use crate::math::vec2::Vec2;

/// Result of a successful SAT test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionData {
    /// Axis of minimum overlap. Pushing the first shape along `+normal`
    /// by `distance` separates the pair.
    pub normal: Vec2,
    /// Penetration depth along `normal`.
    pub distance: f64,
}

impl IntersectionData {
    pub fn new(normal: Vec2, distance: f64) -> Self {
        Self { normal, distance }
    }

    /// The minimum translation vector, `normal * distance`.
    pub fn translation(&self) -> Vec2 {
        self.normal * self.distance
    }

    /// True until an axis has been recorded.
    pub fn is_unset(&self) -> bool {
        self.distance == f64::INFINITY
    }
}

impl Default for IntersectionData {
    /// The running-minimum sentinel: zero normal, infinite distance.
    fn default() -> Self {
        Self {
            normal: Vec2::ZERO,
            distance: f64::INFINITY,
        }
    }
}
