//! Ball configuration.
//!
//! Initial motion parameters for a [`Ball`](crate::objects::Ball). The
//! defaults match a ball dropping straight along +y at 10 units per tick.

use serde::{Deserialize, Serialize};

use crate::error::{CollisionError, CollisionResult};
use crate::math::vec2::Vec2;

/// Allowed deviation of `direction` from unit length.
pub const DIRECTION_TOLERANCE: f64 = 1e-6;

/// Motion parameters for a ball.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallConfig {
    /// Distance travelled per tick.
    pub speed: f64,

    /// Unit direction of travel.
    pub direction: Vec2,
}

impl Default for BallConfig {
    fn default() -> Self {
        Self {
            speed: 10.0,
            direction: Vec2::UP,
        }
    }
}

impl BallConfig {
    /// Checks that speed is finite and non-negative and that the direction
    /// is unit length.
    pub fn validate(&self) -> CollisionResult<()> {
        if !self.speed.is_finite() || self.speed < 0.0 {
            return Err(CollisionError::InvalidConfig(format!(
                "speed must be finite and non-negative, got {}",
                self.speed
            )));
        }
        if !self.direction.is_unit(DIRECTION_TOLERANCE) {
            return Err(CollisionError::InvalidConfig(format!(
                "direction must be unit length, got {:?} (length {})",
                self.direction,
                self.direction.magnitude()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = BallConfig::default();
        assert_eq!(config.speed, 10.0);
        assert_eq!(config.direction, Vec2::new(0.0, 1.0));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_speed() {
        for speed in [-1.0, f64::NAN, f64::INFINITY] {
            let config = BallConfig { speed, ..Default::default() };
            assert!(matches!(config.validate(), Err(CollisionError::InvalidConfig(_))));
        }
    }

    #[test]
    fn test_rejects_non_unit_direction() {
        let config = BallConfig {
            direction: Vec2::new(1.0, 1.0),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(CollisionError::InvalidConfig(_))));
    }

    #[test]
    fn test_config_from_json_fills_defaults() {
        let config: BallConfig = serde_json::from_str(r#"{"speed": 2.5}"#).unwrap();
        assert_eq!(config.speed, 2.5);
        assert_eq!(config.direction, Vec2::UP);

        let config: BallConfig =
            serde_json::from_str(r#"{"direction": {"x": -1.0, "y": 0.0}}"#).unwrap();
        assert_eq!(config.speed, 10.0);
        assert!(config.validate().is_ok());
    }
}
