//! Platform abstraction layer
//!
//! The simulation only talks to the outside world through these traits:
//! - Input: polled key state
//! - Canvas: filled rectangles and circles
//! - Time: the frame clock that drives ticks

pub mod canvas;
pub mod input;
pub mod time;

pub use canvas::{Canvas, CountingCanvas, DrawCommand, RecordingCanvas};
pub use input::{HeldKeys, InputState, Key};
pub use time::{FixedFrames, FrameClock};
