//! Collision response for moving balls.
//!
//! A hit is resolved in two steps: the ball is pulled back along its own
//! travel direction by the reported depth, then its direction is mirrored
//! off the collision normal. Speed is never touched, so bounces are
//! perfectly elastic.

use crate::collision::intersection::IntersectionData;
use crate::objects::Ball;

/// Resolves `data` against `ball` in place.
///
/// The retreat follows the direction of travel, not the collision normal,
/// so it approximates undoing the penetration rather than removing it
/// exactly. The direction must be unit length for the reflection to keep it
/// unit length.
pub fn resolve(ball: &mut Ball, data: &IntersectionData) {
    ball.advance_by(-data.distance);
    let reflected = ball.direction().reflect(data.normal);
    ball.set_direction(reflected);
}
