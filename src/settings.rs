//! Game settings
//!
//! Loaded from a JSON file; every field falls back to the classic demo values.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Which paddles a session gets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Layout {
    /// One paddle near the bottom edge, arrow keys
    #[default]
    Solo,
    /// Bottom paddle on arrow keys, top paddle on A/D
    Versus,
}

impl Layout {
    pub fn as_str(&self) -> &'static str {
        match self {
            Layout::Solo => "Solo",
            Layout::Versus => "Versus",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "solo" | "single" => Some(Layout::Solo),
            "versus" | "vs" => Some(Layout::Versus),
            _ => None,
        }
    }

    pub fn paddle_count(&self) -> usize {
        match self {
            Layout::Solo => 1,
            Layout::Versus => 2,
        }
    }
}

/// Session configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Board ===
    pub board_width: f64,
    pub board_height: f64,

    // === Ball ===
    pub ball_radius: f64,
    /// Distance per tick
    pub ball_speed: f64,
    /// Fixed launch angle in radians; random from `seed` when absent
    pub initial_angle: Option<f64>,

    // === Paddles ===
    pub paddle_width: f64,
    pub paddle_height: f64,
    /// Distance per tick while a key is held
    pub paddle_step: f64,
    pub layout: Layout,
    /// Drive every paddle toward the ball instead of from keys
    pub autopilot: bool,

    // === Run ===
    pub seed: u64,
    /// Frames the headless runner plays
    pub frames: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            board_width: BOARD_WIDTH,
            board_height: BOARD_HEIGHT,

            ball_radius: BALL_RADIUS,
            ball_speed: BALL_SPEED,
            initial_angle: None,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_step: PADDLE_STEP,
            layout: Layout::Solo,
            autopilot: false,

            seed: DEFAULT_SEED,
            frames: DEFAULT_FRAMES,
        }
    }
}

impl Settings {
    /// Defaults with a different layout
    pub fn from_layout(layout: Layout) -> Self {
        Self {
            layout,
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    return settings;
                }
                Err(e) => log::warn!("Ignoring malformed settings {}: {}", path.display(), e),
            },
            Err(e) => log::warn!("Cannot read settings {}: {}", path.display(), e),
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Write settings as pretty JSON
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let json = self.to_json().map_err(std::io::Error::other)?;
        std::fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }

    /// Reject geometry the simulation cannot honor
    pub fn validate(&self) -> Result<(), String> {
        if !(self.board_width > 0.0 && self.board_height > 0.0) {
            return Err(format!(
                "board must have positive size, got {}x{}",
                self.board_width, self.board_height
            ));
        }
        if !(self.ball_speed.is_finite() && self.ball_speed >= 0.0) {
            return Err(format!("ball speed must be nonnegative, got {}", self.ball_speed));
        }
        let shortest_side = self.board_width.min(self.board_height);
        if !(self.ball_radius > 0.0) || 2.0 * self.ball_radius > shortest_side {
            return Err(format!("ball radius {} does not fit the board", self.ball_radius));
        }
        if !(self.paddle_width > 0.0 && self.paddle_width <= self.board_width) {
            return Err(format!(
                "paddle width {} does not fit board width {}",
                self.paddle_width, self.board_width
            ));
        }
        let step_ok = self.paddle_step.is_finite() && self.paddle_step >= 0.0;
        if !(self.paddle_height > 0.0) || !step_ok {
            return Err("paddle height must be positive and step nonnegative".to_string());
        }
        let half_height = self.paddle_height / 2.0;
        let rows = self.paddle_rows();
        for &row in &rows {
            if row < half_height || row > self.board_height - half_height {
                return Err(format!(
                    "paddle row y={} does not fit board height {}",
                    row, self.board_height
                ));
            }
        }
        // Rows are listed bottom first; the top paddle must sit fully above the bottom one
        for pair in rows.windows(2) {
            if pair[0] - pair[1] < self.paddle_height {
                return Err(format!("paddle rows y={} and y={} overlap", pair[0], pair[1]));
            }
        }
        if let Some(angle) = self.initial_angle {
            if !angle.is_finite() {
                return Err(format!("initial angle must be finite, got {angle}"));
            }
        }
        Ok(())
    }

    /// Fixed `y` of each paddle, bottom first
    pub fn paddle_rows(&self) -> Vec<f64> {
        let bottom = self.board_height - PADDLE_INSET;
        match self.layout {
            Layout::Solo => vec![bottom],
            Layout::Versus => vec![bottom, PADDLE_INSET],
        }
    }
}
