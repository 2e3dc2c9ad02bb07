//! Collision detection and response for the ball
//!
//! One Euler step per tick. The proposed position is committed first and then
//! corrected by every collision that fires: walls per axis, then each paddle in
//! list order. Paddle hits are detected by edge crossing between the old and the
//! proposed position, so a ball resting on an edge does not bounce again.

use glam::DVec2;

use super::ball::Ball;
use super::board::Board;
use super::paddle::Paddle;

/// What the resolver hit during one tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollisionReport {
    /// Top or bottom wall
    pub wall_vertical: bool,
    /// Left or right wall
    pub wall_horizontal: bool,
    /// Indices of the paddles that bounced the ball, in check order
    pub paddles: Vec<usize>,
}

impl CollisionReport {
    pub fn any(&self) -> bool {
        self.wall_vertical || self.wall_horizontal || !self.paddles.is_empty()
    }
}

/// Ball vs. board and paddle collision resolver
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Physics {
    pub ball_radius: f64,
}

impl Physics {
    pub fn new(ball_radius: f64) -> Self {
        Self { ball_radius }
    }

    /// Advance the ball one tick and resolve collisions
    pub fn resolve(
        &self,
        ball: &mut Ball,
        board: &Board,
        paddles: &[Paddle],
    ) -> CollisionReport {
        let r = self.ball_radius;
        let old = ball.position();
        let delta = ball.velocity_vector();
        let new = old + delta;
        ball.set_position(new);

        let mut report = CollisionReport::default();

        if new.y < r {
            ball.bounce_vertical(r);
            report.wall_vertical = true;
        } else if new.y > board.height - r {
            ball.bounce_vertical(board.height - r);
            report.wall_vertical = true;
        }

        if new.x < r {
            ball.bounce_horizontal(r);
            report.wall_horizontal = true;
        } else if new.x > board.width - r {
            ball.bounce_horizontal(board.width - r);
            report.wall_horizontal = true;
        }

        // Every paddle is checked, even after a hit
        for (index, paddle) in paddles.iter().enumerate() {
            if let Some(edge_y) = self.paddle_contact(paddle, old, new, delta) {
                ball.bounce_vertical(edge_y);
                report.paddles.push(index);
                log::debug!("ball bounced off paddle {index} at y={edge_y}");
            }
        }

        if report.wall_vertical || report.wall_horizontal {
            log::debug!("ball bounced off wall, now at {}", ball.position());
        }
        log::trace!("ball {} -> {}", old, ball.position());

        report
    }

    /// Contact boundary `y` if the ball crossed this paddle's edge this step
    fn paddle_contact(
        &self,
        paddle: &Paddle,
        old: DVec2,
        new: DVec2,
        delta: DVec2,
    ) -> Option<f64> {
        let r = self.ball_radius;
        let center = paddle.position();
        let half = paddle.half_size();

        let reach_x = r + half.x;
        if new.x < center.x - reach_x || new.x > center.x + reach_x {
            return None;
        }

        let near = center.y - r - half.y;
        let far = center.y + r + half.y;

        if delta.y > 0.0 && old.y < near && new.y >= near {
            Some(near)
        } else if delta.y < 0.0 && old.y > far && new.y <= far {
            Some(far)
        } else {
            None
        }
    }
}
