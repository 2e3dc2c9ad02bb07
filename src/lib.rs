//! Paddle Bounce - deterministic Pong ball physics
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball, paddles, collision resolution, update pipeline)
//! - `session`: Owns one game's state and drives the pipeline frame by frame
//! - `platform`: Input, canvas and frame clock interfaces with in-memory implementations
//! - `renderer`: Draws a session onto a canvas
//! - `settings`: Data-driven configuration

pub mod platform;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;

pub use session::{RunSummary, Session};
pub use settings::{Layout, Settings};

/// Game configuration constants
pub mod consts {
    /// Board dimensions
    pub const BOARD_WIDTH: f64 = 800.0;
    pub const BOARD_HEIGHT: f64 = 800.0;

    /// Ball defaults
    pub const BALL_RADIUS: f64 = 10.0;
    /// Distance travelled per tick
    pub const BALL_SPEED: f64 = 5.0;

    /// Paddle defaults (full extents)
    pub const PADDLE_WIDTH: f64 = 100.0;
    pub const PADDLE_HEIGHT: f64 = 10.0;
    /// Distance moved per tick while a key is held
    pub const PADDLE_STEP: f64 = 5.0;
    /// Gap between a paddle's center and its board edge
    pub const PADDLE_INSET: f64 = 50.0;

    /// Frames run by the headless binary when not configured
    pub const DEFAULT_FRAMES: u64 = 600;
    pub const DEFAULT_SEED: u64 = 12345;
}
