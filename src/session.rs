//! A single game session
//!
//! Owns the ball, paddles and board for one game and runs the declared update
//! pipeline once per frame. Ending the session is dropping it.

use glam::DVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::platform::{Canvas, FrameClock, InputState, Key};
use crate::renderer;
use crate::settings::Settings;
use crate::sim::{
    Ball, Board, CollisionReport, Control, Paddle, PaddleController, Physics, Pipeline, World,
};

/// Totals for a finished run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub ticks: u64,
    pub wall_bounces: u64,
    pub paddle_bounces: u64,
}

impl RunSummary {
    fn record(&mut self, report: &CollisionReport) {
        self.ticks += 1;
        self.wall_bounces += report.wall_vertical as u64 + report.wall_horizontal as u64;
        self.paddle_bounces += report.paddles.len() as u64;
    }
}

/// One running game
#[derive(Debug)]
pub struct Session {
    world: World,
    pipeline: Pipeline,
    ball_radius: f64,
    time_ticks: u64,
}

/// Keys for each paddle row, bottom first
const PADDLE_KEYS: [(Key, Key); 2] = [
    (Key::ArrowLeft, Key::ArrowRight),
    (Key::KeyA, Key::KeyD),
];

impl Session {
    /// Build a session: board, paddles, ball, then the stage order
    pub fn new(settings: &Settings) -> Self {
        let board = Board::new(settings.board_width, settings.board_height);
        let paddle_size = DVec2::new(settings.paddle_width, settings.paddle_height);

        let paddles: Vec<Paddle> = settings
            .paddle_rows()
            .into_iter()
            .map(|y| {
                let x = board.width / 2.0;
                Paddle::new(x, y, paddle_size, settings.paddle_step, board.width)
            })
            .collect();

        let ball = match settings.initial_angle {
            Some(angle) => Ball::new(board.center(), angle, settings.ball_speed),
            None => {
                let mut rng = Pcg32::seed_from_u64(settings.seed);
                Ball::launch(board.center(), settings.ball_speed, &mut rng)
            }
        };

        let mut pipeline = Pipeline::new();
        for (index, &(left, right)) in PADDLE_KEYS.iter().enumerate().take(paddles.len()) {
            let control = if settings.autopilot {
                Control::Autopilot
            } else {
                Control::Keys { left, right }
            };
            pipeline = pipeline.with_stage(PaddleController::new(index, control));
        }
        pipeline = pipeline.with_stage(Physics::new(settings.ball_radius));

        log::info!(
            "Session started: {} layout ({} paddles), {}x{} board, ball angle {:.3} speed {}",
            settings.layout.as_str(),
            settings.layout.paddle_count(),
            board.width,
            board.height,
            ball.angle(),
            ball.speed()
        );
        log::debug!("Stage order: {:?}", pipeline.stage_names());

        Self {
            world: World::new(board, ball, paddles),
            pipeline,
            ball_radius: settings.ball_radius,
            time_ticks: 0,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn ball(&self) -> &Ball {
        &self.world.ball
    }

    pub fn paddles(&self) -> &[Paddle] {
        &self.world.paddles
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    pub fn stage_names(&self) -> Vec<&'static str> {
        self.pipeline.stage_names()
    }

    /// Advance one tick; returns what the ball hit
    pub fn tick(&mut self, input: &dyn InputState) -> CollisionReport {
        self.pipeline.run(&mut self.world, input);
        self.time_ticks += 1;
        self.world.events.clone()
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        renderer::draw_world(&self.world, self.ball_radius, canvas);
    }

    /// Tick and draw once per frame until the clock stops
    pub fn run(
        &mut self,
        clock: &mut dyn FrameClock,
        input: &dyn InputState,
        canvas: &mut dyn Canvas,
    ) -> RunSummary {
        let mut summary = RunSummary::default();
        while let Some(frame) = clock.next_frame() {
            let report = self.tick(input);
            if !report.paddles.is_empty() {
                log::debug!("frame {frame}: paddle hit {:?}", report.paddles);
            }
            summary.record(&report);
            self.draw(canvas);
        }
        log::info!(
            "Run finished after {} ticks ({} wall bounces, {} paddle bounces)",
            summary.ticks,
            summary.wall_bounces,
            summary.paddle_bounces
        );
        summary
    }
}
