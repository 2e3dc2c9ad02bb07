//! Horizontal paddles
//!
//! A paddle slides along `x` at a fixed `y`. Every move is clamped so the
//! paddle body never leaves the board.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// A player's paddle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    position: DVec2,
    /// Full extents (collision uses half of each)
    size: DVec2,
    /// Distance moved per tick
    step: f64,
    /// Width of the board the paddle is confined to
    board_extent: f64,
}

impl Paddle {
    /// Create a paddle centered at `x`, fixed at `y`. The starting `x` is clamped.
    ///
    /// Panics if `step` is negative or not finite.
    pub fn new(x: f64, y: f64, size: DVec2, step: f64, board_extent: f64) -> Self {
        assert!(
            step.is_finite() && step >= 0.0,
            "paddle step must be finite and nonnegative, got {step}"
        );
        let mut paddle = Self {
            position: DVec2::new(x, y),
            size,
            step,
            board_extent,
        };
        paddle.position.x = paddle.clamp_x(x);
        paddle
    }

    #[inline]
    pub fn position(&self) -> DVec2 {
        self.position
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.position.x
    }

    /// The immutable coordinate perpendicular to movement
    #[inline]
    pub fn fixed_y(&self) -> f64 {
        self.position.y
    }

    #[inline]
    pub fn size(&self) -> DVec2 {
        self.size
    }

    #[inline]
    pub fn half_size(&self) -> DVec2 {
        self.size / 2.0
    }

    /// Allowed range for the paddle center
    pub fn travel(&self) -> (f64, f64) {
        let half = self.size.x / 2.0;
        (half, self.board_extent - half)
    }

    pub fn move_left(&mut self) {
        self.position.x = self.clamp_x(self.position.x - self.step);
    }

    pub fn move_right(&mut self) {
        self.position.x = self.clamp_x(self.position.x + self.step);
    }

    /// Move toward `target_x` by at most one step
    pub fn track(&mut self, target_x: f64) {
        let dx = (target_x - self.position.x).clamp(-self.step, self.step);
        self.position.x = self.clamp_x(self.position.x + dx);
    }

    fn clamp_x(&self, x: f64) -> f64 {
        let (min, max) = self.travel();
        x.max(min).min(max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn paddle_at(x: f64) -> Paddle {
        Paddle::new(x, 750.0, DVec2::new(100.0, 10.0), 5.0, 800.0)
    }

    #[test]
    fn test_moves_by_step() {
        let mut paddle = paddle_at(400.0);
        paddle.move_left();
        assert_eq!(paddle.x(), 395.0);
        paddle.move_right();
        paddle.move_right();
        assert_eq!(paddle.x(), 405.0);
        assert_eq!(paddle.fixed_y(), 750.0);
    }

    #[test]
    fn test_clamped_at_left_edge() {
        let mut paddle = paddle_at(52.0);
        paddle.move_left();
        assert_eq!(paddle.x(), 50.0);
        paddle.move_left();
        assert_eq!(paddle.x(), 50.0);
    }

    #[test]
    fn test_clamped_at_right_edge() {
        let mut paddle = paddle_at(748.0);
        paddle.move_right();
        assert_eq!(paddle.x(), 750.0);
    }

    #[test]
    fn test_new_clamps_start() {
        assert_eq!(paddle_at(-20.0).x(), 50.0);
        assert_eq!(paddle_at(1000.0).x(), 750.0);
    }

    #[test]
    fn test_track_limited_to_one_step() {
        let mut paddle = paddle_at(400.0);
        paddle.track(600.0);
        assert_eq!(paddle.x(), 405.0);
        paddle.track(403.0);
        assert_eq!(paddle.x(), 403.0);
    }

    #[test]
    #[should_panic(expected = "nonnegative")]
    fn test_negative_step_rejected() {
        Paddle::new(400.0, 750.0, DVec2::new(100.0, 10.0), -5.0, 800.0);
    }

    #[test]
    #[should_panic(expected = "paddle step")]
    fn test_nan_step_rejected() {
        Paddle::new(400.0, 750.0, DVec2::new(100.0, 10.0), f64::NAN, 800.0);
    }

    proptest! {
        #[test]
        fn prop_paddle_stays_on_board(
            start in 0.0f64..800.0,
            moves in prop::collection::vec(any::<bool>(), 0..400),
        ) {
            let mut paddle = paddle_at(start);
            for left in moves {
                if left { paddle.move_left() } else { paddle.move_right() }
                prop_assert!(paddle.x() >= 50.0 && paddle.x() <= 750.0);
            }
        }
    }
}
