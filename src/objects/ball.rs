use std::slice;

use crate::config::BallConfig;
use crate::error::CollisionResult;
use crate::math::vec2::Vec2;
use crate::shapes::Polygon;

/// A convex body moving at constant speed along a unit direction.
///
/// The ball owns its polygon outright. Its position only changes through
/// [`advance`](Self::advance) and [`advance_by`](Self::advance_by), and its
/// heading only through [`set_direction`](Self::set_direction).
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    body: Polygon,
    direction: Vec2,
    speed: f64,
}

impl Ball {
    /// Creates a ball with the default motion (see [`BallConfig::default`]).
    pub fn new(vertices: Vec<Vec2>) -> CollisionResult<Self> {
        Self::with_config(vertices, &BallConfig::default())
    }

    /// Creates a ball from its vertices and motion parameters.
    pub fn with_config(vertices: Vec<Vec2>, config: &BallConfig) -> CollisionResult<Self> {
        config.validate()?;
        Ok(Self {
            body: Polygon::new(vertices)?,
            direction: config.direction,
            speed: config.speed,
        })
    }

    pub fn body(&self) -> &Polygon {
        &self.body
    }

    /// The body as a one-piece composite, for [`CollisionTester::test_bodies`].
    ///
    /// [`CollisionTester::test_bodies`]: crate::collision::CollisionTester::test_bodies
    pub fn parts(&self) -> &[Polygon] {
        slice::from_ref(&self.body)
    }

    pub fn direction(&self) -> Vec2 {
        self.direction
    }

    /// Replaces the heading. Callers keep it unit length; it is not checked.
    pub fn set_direction(&mut self, direction: Vec2) {
        self.direction = direction;
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Moves one full tick: `speed` units along the direction.
    pub fn advance(&mut self) {
        self.advance_by(self.speed);
    }

    /// Moves `distance` units along the direction. Negative values move back.
    pub fn advance_by(&mut self, distance: f64) {
        self.body.translate(self.direction * distance);
    }
}
