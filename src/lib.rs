//! Brick Breaker - A single-screen brick breaking arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball, paddle, bricks, collisions, game state)
//! - `renderer`: Vertex geometry for a GPU backend
//! - `settings`: Difficulty selection and data-driven layout/tuning

pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{Difficulty, Settings};
pub use sim::{Command, GamePhase, GameState, TickInput, tick};

/// Game configuration constants
pub mod consts {
    /// Simulation rate (ticks per second)
    pub const SIM_HZ: u32 = 60;
    /// Fixed simulation timestep in seconds
    pub const SIM_DT: f32 = 1.0 / SIM_HZ as f32;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Play field dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;
    /// Height of the score display band at the top of the field
    pub const SCORE_AREA_HEIGHT: f32 = 40.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 80.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    pub const PADDLE_Y: f32 = 550.0;
    pub const PADDLE_START_X: f32 = 360.0;
    /// Horizontal speed range produced by a paddle hit: dx = (hit - 0.5) * this
    pub const PADDLE_DEFLECTION: f32 = 8.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_START_X: f32 = 400.0;
    pub const BALL_START_Y: f32 = 500.0;
    /// Per-axis velocity cap (pixels/tick)
    pub const BALL_MAX_SPEED: f32 = 8.0;

    /// Brick grid defaults
    pub const BRICK_ROWS: u32 = 5;
    pub const BRICK_COLUMNS: u32 = 10;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_GAP: f32 = 5.0;
    pub const BRICK_SCORE: u64 = 10;
}
