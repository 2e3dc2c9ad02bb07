//! Ordered per-tick update stages
//!
//! A session declares its stages once; every tick runs them front to back.
//! Paddle controllers are registered before physics so the resolver always
//! sees this tick's paddle positions.

use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::board::Board;
use super::paddle::Paddle;
use super::physics::{CollisionReport, Physics};
use crate::platform::input::{InputState, Key};

/// Mutable state shared by all stages of one session
#[derive(Debug, Clone)]
pub struct World {
    pub board: Board,
    pub ball: Ball,
    pub paddles: Vec<Paddle>,
    /// Collisions resolved during the current tick
    pub events: CollisionReport,
}

impl World {
    pub fn new(board: Board, ball: Ball, paddles: Vec<Paddle>) -> Self {
        Self {
            board,
            ball,
            paddles,
            events: CollisionReport::default(),
        }
    }
}

/// One step of the update pipeline
pub trait Stage {
    fn name(&self) -> &'static str;

    fn on_tick(&mut self, world: &mut World, input: &dyn InputState);
}

/// How a paddle is driven
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Control {
    /// Held keys; `left` wins when both are down
    Keys { left: Key, right: Key },
    /// Follow the ball without input
    Autopilot,
}

/// Moves one paddle each tick
#[derive(Debug, Clone)]
pub struct PaddleController {
    pub paddle: usize,
    pub control: Control,
}

impl PaddleController {
    pub fn new(paddle: usize, control: Control) -> Self {
        Self { paddle, control }
    }
}

impl Stage for PaddleController {
    fn name(&self) -> &'static str {
        match self.control {
            Control::Keys { .. } => "paddle-input",
            Control::Autopilot => "paddle-autopilot",
        }
    }

    fn on_tick(&mut self, world: &mut World, input: &dyn InputState) {
        let target_x = world.ball.position().x;
        let Some(paddle) = world.paddles.get_mut(self.paddle) else {
            log::warn!("controller bound to missing paddle {}", self.paddle);
            return;
        };

        match self.control {
            Control::Keys { left, right } => {
                if input.is_held(left) {
                    paddle.move_left();
                } else if input.is_held(right) {
                    paddle.move_right();
                }
            }
            Control::Autopilot => paddle.track(target_x),
        }
    }
}

impl Stage for Physics {
    fn name(&self) -> &'static str {
        "physics"
    }

    fn on_tick(&mut self, world: &mut World, _input: &dyn InputState) {
        world.events = self.resolve(&mut world.ball, &world.board, &world.paddles);
    }
}

/// Stages in declared execution order
#[derive(Default)]
pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a stage; it runs after every stage already registered
    pub fn with_stage(mut self, stage: impl Stage + 'static) -> Self {
        self.stages.push(Box::new(stage));
        self
    }

    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    /// Run one tick through every stage
    pub fn run(&mut self, world: &mut World, input: &dyn InputState) {
        world.events = CollisionReport::default();
        for stage in &mut self.stages {
            stage.on_tick(world, input);
        }
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.stage_names()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::input::HeldKeys;
    use glam::DVec2;
    use std::f64::consts::FRAC_PI_2;

    fn world_with_ball(pos: DVec2, angle: f64) -> World {
        let paddle = Paddle::new(400.0, 100.0, DVec2::new(100.0, 10.0), 5.0, 800.0);
        World::new(
            Board::new(800.0, 800.0),
            Ball::new(pos, angle, 5.0),
            vec![paddle],
        )
    }

    fn arrows() -> Control {
        Control::Keys {
            left: Key::ArrowLeft,
            right: Key::ArrowRight,
        }
    }

    #[test]
    fn test_left_key_wins_over_right() {
        let mut world = world_with_ball(DVec2::new(400.0, 400.0), 0.0);
        let mut keys = HeldKeys::new();
        keys.press(Key::ArrowLeft);
        keys.press(Key::ArrowRight);

        PaddleController::new(0, arrows()).on_tick(&mut world, &keys);

        assert_eq!(world.paddles[0].x(), 395.0);
    }

    #[test]
    fn test_no_keys_no_motion() {
        let mut world = world_with_ball(DVec2::new(400.0, 400.0), 0.0);
        PaddleController::new(0, arrows()).on_tick(&mut world, &HeldKeys::new());
        assert_eq!(world.paddles[0].x(), 400.0);
    }

    #[test]
    fn test_autopilot_follows_ball() {
        let mut world = world_with_ball(DVec2::new(200.0, 400.0), 0.0);
        PaddleController::new(0, Control::Autopilot).on_tick(&mut world, &HeldKeys::new());
        assert_eq!(world.paddles[0].x(), 395.0);
    }

    #[test]
    fn test_missing_paddle_is_ignored() {
        let mut world = world_with_ball(DVec2::new(400.0, 400.0), 0.0);
        PaddleController::new(3, Control::Autopilot).on_tick(&mut world, &HeldKeys::new());
        assert_eq!(world.paddles[0].x(), 400.0);
    }

    #[test]
    fn test_paddle_moves_before_physics_reads_it() {
        // x=457 is inside the reach of a paddle at 400 (340..460) but outside
        // the reach once it has moved left to 395 (335..455).
        let mut world = world_with_ball(DVec2::new(457.0, 82.0), FRAC_PI_2);
        let mut keys = HeldKeys::new();
        keys.press(Key::ArrowLeft);
        let mut pipeline = Pipeline::new()
            .with_stage(PaddleController::new(0, arrows()))
            .with_stage(Physics::new(10.0));

        pipeline.run(&mut world, &keys);

        assert_eq!(world.paddles[0].x(), 395.0);
        assert!(world.events.paddles.is_empty());
        assert!(world.ball.position().y > 85.0);
    }

    #[test]
    fn test_events_reset_each_run() {
        let mut world = world_with_ball(DVec2::new(400.0, 795.0), FRAC_PI_2);
        let mut pipeline = Pipeline::new().with_stage(Physics::new(10.0));

        pipeline.run(&mut world, &HeldKeys::new());
        assert!(world.events.wall_vertical);

        pipeline.run(&mut world, &HeldKeys::new());
        assert!(!world.events.wall_vertical);
    }

    #[test]
    fn test_stage_order_is_declared_order() {
        let pipeline = Pipeline::new()
            .with_stage(PaddleController::new(0, arrows()))
            .with_stage(PaddleController::new(1, Control::Autopilot))
            .with_stage(Physics::new(10.0));
        assert_eq!(
            pipeline.stage_names(),
            vec!["paddle-input", "paddle-autopilot", "physics"]
        );
    }
}
