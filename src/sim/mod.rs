//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick
//! - Seeded RNG only
//! - Stable stage and paddle order
//! - No rendering or platform dependencies beyond the input trait

pub mod ball;
pub mod board;
pub mod paddle;
pub mod physics;
pub mod pipeline;

pub use ball::Ball;
pub use board::Board;
pub use paddle::Paddle;
pub use physics::{CollisionReport, Physics};
pub use pipeline::{Control, PaddleController, Pipeline, Stage, World};
