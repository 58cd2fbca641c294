//! Narrow-phase collision detection and response for 2D convex polygons.
//!
//! Polygons are tested with the Separating Axis Theorem, either one against
//! one or as composite bodies built from several convex parts. Moving
//! [`Ball`]s are resolved against the result by backing off along their
//! travel direction and reflecting their heading.

pub mod collision;
pub mod config;
pub mod error;
pub mod math;
pub mod objects;
pub mod shapes;
pub mod world;

// Re-export key types for easier use
pub use collision::{CollisionTester, IntersectionData};
pub use config::BallConfig;
pub use error::{CollisionError, CollisionResult};
pub use math::vec2::Vec2;
pub use objects::Ball;
pub use shapes::Polygon;
pub use world::{Contact, HitTarget, Scene};
