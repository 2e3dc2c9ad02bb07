//! Ball kinematics
//!
//! Direction is stored as an angle and the velocity vector is rebuilt on every
//! access. Bounces flip one component of the rebuilt vector and re-derive the
//! angle with `atan2`, so the magnitude always comes back as `speed`.

use std::f64::consts::TAU;

use glam::DVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// The pong ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    position: DVec2,
    /// Direction of travel (radians)
    angle: f64,
    /// Distance travelled per tick
    speed: f64,
}

impl Ball {
    /// Create a ball at `position` travelling along `angle`.
    ///
    /// Panics if `speed` is negative or not finite.
    pub fn new(position: DVec2, angle: f64, speed: f64) -> Self {
        assert!(
            speed.is_finite() && speed >= 0.0,
            "ball speed must be finite and nonnegative, got {speed}"
        );
        assert!(angle.is_finite(), "ball angle must be finite, got {angle}");
        Self {
            position,
            angle,
            speed,
        }
    }

    /// Place a ball at `center` heading in a uniformly random direction
    pub fn launch<R: Rng>(center: DVec2, speed: f64, rng: &mut R) -> Self {
        let angle = rng.random_range(0.0..TAU);
        Self::new(center, angle, speed)
    }

    #[inline]
    pub fn position(&self) -> DVec2 {
        self.position
    }

    #[inline]
    pub fn set_position(&mut self, position: DVec2) {
        self.position = position;
    }

    #[inline]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    #[inline]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Per-tick displacement: `(cos(angle), sin(angle)) * speed`
    #[inline]
    pub fn velocity_vector(&self) -> DVec2 {
        DVec2::new(self.angle.cos(), self.angle.sin()) * self.speed
    }

    /// Snap to `new_y` and mirror the vertical component of travel
    pub fn bounce_vertical(&mut self, new_y: f64) {
        self.position.y = new_y;
        let v = self.velocity_vector();
        self.set_direction(v.x, -v.y);
    }

    /// Snap to `new_x` and mirror the horizontal component of travel
    pub fn bounce_horizontal(&mut self, new_x: f64) {
        self.position.x = new_x;
        let v = self.velocity_vector();
        self.set_direction(-v.x, v.y);
    }

    fn set_direction(&mut self, x: f64, y: f64) {
        self.angle = y.atan2(x);
        debug_assert!(
            self.angle.is_finite() && self.position.is_finite(),
            "non-finite ball state after bounce: {self:?}"
        );
    }
}
