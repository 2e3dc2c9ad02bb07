//! Drawing sink

use glam::DVec2;

/// RGBA color, components in 0-1
pub type Color = [f32; 4];

/// A surface that can fill rectangles and circles
pub trait Canvas {
    /// Fill an axis-aligned rectangle whose top-left corner is `origin`
    fn fill_rect(&mut self, origin: DVec2, size: DVec2, color: Color);

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Color);
}

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Rect {
        origin: DVec2,
        size: DVec2,
        color: Color,
    },
    Circle {
        center: DVec2,
        radius: f64,
        color: Color,
    },
}

/// Canvas that keeps every draw call for inspection
#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    pub commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn circles(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
    }

    pub fn rects(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Rect { .. }))
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rect(&mut self, origin: DVec2, size: DVec2, color: Color) {
        self.commands.push(DrawCommand::Rect {
            origin,
            size,
            color,
        });
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Color) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }
}

/// Canvas that only counts draw calls; memory stays constant over any run length
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CountingCanvas {
    pub rects: u64,
    pub circles: u64,
}

impl CountingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total(&self) -> u64 {
        self.rects + self.circles
    }
}

impl Canvas for CountingCanvas {
    fn fill_rect(&mut self, _origin: DVec2, _size: DVec2, _color: Color) {
        self.rects += 1;
    }

    fn fill_circle(&mut self, _center: DVec2, _radius: f64, _color: Color) {
        self.circles += 1;
    }
}
