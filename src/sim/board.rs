//! Play field bounds

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// The fixed rectangle `[0, width] x [0, height]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub width: f64,
    pub height: f64,
}

impl Board {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn size(&self) -> DVec2 {
        DVec2::new(self.width, self.height)
    }

    pub fn center(&self) -> DVec2 {
        self.size() / 2.0
    }

    /// Whether a circle of `radius` at `center` lies fully on the board
    pub fn contains_circle(&self, center: DVec2, radius: f64) -> bool {
        center.x >= radius
            && center.x <= self.width - radius
            && center.y >= radius
            && center.y <= self.height - radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center() {
        let board = Board::new(800.0, 600.0);
        assert_eq!(board.center(), DVec2::new(400.0, 300.0));
    }

    #[test]
    fn test_contains_circle_edges() {
        let board = Board::new(800.0, 800.0);
        assert!(board.contains_circle(DVec2::new(10.0, 790.0), 10.0));
        assert!(!board.contains_circle(DVec2::new(9.9, 400.0), 10.0));
        assert!(!board.contains_circle(DVec2::new(400.0, 790.1), 10.0));
    }
}
