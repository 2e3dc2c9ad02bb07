//! Canvas rendering
//!
//! Draws the board, paddles and ball with plain filled shapes.

use glam::DVec2;

use crate::platform::Canvas;
use crate::sim::World;

/// Colors for game elements
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const PADDLE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const BALL: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
}

/// Draw one frame: background, then paddles, then the ball
pub fn draw_world(world: &World, ball_radius: f64, canvas: &mut dyn Canvas) {
    canvas.fill_rect(DVec2::ZERO, world.board.size(), colors::BACKGROUND);

    for paddle in &world.paddles {
        let origin = paddle.position() - paddle.half_size();
        canvas.fill_rect(origin, paddle.size(), colors::PADDLE);
    }

    canvas.fill_circle(world.ball.position(), ball_radius, colors::BALL);
}
