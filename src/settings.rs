//! Game settings: difficulty selection plus field layout and tuning
//!
//! Defaults mirror `crate::consts`. Settings may also be loaded from a JSON
//! file; missing keys fall back to their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Smallest accepted field width/height (pixels)
const MIN_FIELD_SIZE: f32 = 1.0;
/// Largest accepted brick row/column count
pub const MAX_BRICK_GRID: u32 = 256;

/// Difficulty levels, fixed when a session is created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        }
    }

    /// Parse a difficulty name, or its index in the selection list ("0".."2")
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" | "0" => Some(Difficulty::Easy),
            "normal" | "medium" | "1" => Some(Difficulty::Normal),
            "hard" | "2" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Initial ball speed per axis (pixels/tick)
    pub fn ball_speed(&self) -> f32 {
        match self {
            Difficulty::Easy => 2.0,
            Difficulty::Normal => 3.0,
            Difficulty::Hard => 5.0,
        }
    }

    /// Paddle travel per move command (pixels)
    pub fn paddle_speed(&self) -> f32 {
        match self {
            Difficulty::Easy => 15.0,
            Difficulty::Normal => 20.0,
            Difficulty::Hard => 25.0,
        }
    }
}

/// Field layout and simulation tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Field ===
    pub field_width: f32,
    pub field_height: f32,
    /// Reserved band at the top where the score is drawn
    pub score_area_height: f32,

    // === Bricks ===
    pub brick_rows: u32,
    pub brick_columns: u32,
    pub brick_height: f32,
    /// Vertical gap between brick rows
    pub brick_gap: f32,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_y: f32,
    pub paddle_start_x: f32,

    // === Ball ===
    pub ball_radius: f32,
    pub ball_start_x: f32,
    pub ball_start_y: f32,
    /// Per-axis velocity cap (pixels/tick)
    pub max_ball_speed: f32,

    // === Timing ===
    /// Nominal tick rate the host should drive the simulation at
    pub tick_rate: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            score_area_height: SCORE_AREA_HEIGHT,

            brick_rows: BRICK_ROWS,
            brick_columns: BRICK_COLUMNS,
            brick_height: BRICK_HEIGHT,
            brick_gap: BRICK_GAP,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_y: PADDLE_Y,
            paddle_start_x: PADDLE_START_X,

            ball_radius: BALL_RADIUS,
            ball_start_x: BALL_START_X,
            ball_start_y: BALL_START_Y,
            max_ball_speed: BALL_MAX_SPEED,

            tick_rate: SIM_HZ,
        }
    }
}

impl Settings {
    /// Parse settings from JSON; absent keys keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a JSON file, falling back to defaults on any error
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings.sanitized()
                }
                Err(e) => {
                    log::warn!("Invalid settings in {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read {}: {}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Replace or clamp values that would make a session invalid
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        let field_ok = |v: f32| v.is_finite() && v >= MIN_FIELD_SIZE;
        if !field_ok(self.field_width) || !field_ok(self.field_height) {
            log::warn!(
                "Field size {}x{} is too small, using {}x{}",
                self.field_width,
                self.field_height,
                defaults.field_width,
                defaults.field_height
            );
            self.field_width = defaults.field_width;
            self.field_height = defaults.field_height;
        }

        if self.brick_columns == 0 {
            log::warn!("Brick grid needs at least one column");
            self.brick_columns = 1;
        }
        if self.brick_rows > MAX_BRICK_GRID || self.brick_columns > MAX_BRICK_GRID {
            log::warn!(
                "Brick grid {}x{} is too large, capping at {}",
                self.brick_rows,
                self.brick_columns,
                MAX_BRICK_GRID
            );
            self.brick_rows = self.brick_rows.min(MAX_BRICK_GRID);
            self.brick_columns = self.brick_columns.min(MAX_BRICK_GRID);
        }

        if !(self.ball_radius.is_finite() && self.ball_radius > 0.0) {
            log::warn!("Ball radius {} is not positive", self.ball_radius);
            self.ball_radius = defaults.ball_radius;
        }
        if !(self.max_ball_speed.is_finite() && self.max_ball_speed > 0.0) {
            log::warn!("Max ball speed {} is not positive", self.max_ball_speed);
            self.max_ball_speed = defaults.max_ball_speed;
        }
        if !(self.paddle_width.is_finite() && self.paddle_width > 0.0) {
            log::warn!("Paddle width {} is not positive", self.paddle_width);
            self.paddle_width = defaults.paddle_width;
        }
        if self.paddle_width > self.field_width {
            log::warn!(
                "Paddle width {} does not fit the field, clamping",
                self.paddle_width
            );
            self.paddle_width = self.field_width;
        }
        if self.tick_rate == 0 {
            self.tick_rate = defaults.tick_rate;
        }

        // Non-finite positions and sizes fall back to their defaults
        for (value, default) in [
            (&mut self.score_area_height, defaults.score_area_height),
            (&mut self.brick_height, defaults.brick_height),
            (&mut self.brick_gap, defaults.brick_gap),
            (&mut self.paddle_height, defaults.paddle_height),
            (&mut self.paddle_y, defaults.paddle_y),
            (&mut self.paddle_start_x, defaults.paddle_start_x),
            (&mut self.ball_start_x, defaults.ball_start_x),
            (&mut self.ball_start_y, defaults.ball_start_y),
        ] {
            if !value.is_finite() {
                *value = default;
            }
        }

        // field_width >= MIN_FIELD_SIZE and paddle_width <= field_width keep these ranges non-empty
        self.score_area_height = self.score_area_height.clamp(0.0, self.field_height);
        self.paddle_start_x = self
            .paddle_start_x
            .clamp(0.0, self.field_width - self.paddle_width);
        self
    }

    /// Seconds per tick at the configured rate
    pub fn tick_dt(&self) -> f32 {
        1.0 / self.tick_rate.max(1) as f32
    }
}
