//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (the host calls `tick` at `SIM_HZ`)
//! - Stable iteration order (bricks are scanned row-major)
//! - No rendering or platform dependencies

pub mod clock;
pub mod collision;
pub mod geometry;
pub mod state;
pub mod tick;

pub use clock::FixedStepClock;
pub use collision::{ImpactAxis, circle_rect_overlap, impact_axis, is_vertical_impact};
pub use geometry::Rect;
pub use state::{Ball, Brick, BrickField, GameEvent, GamePhase, GameState, Paddle};
pub use tick::{Command, TickInput, apply_command, tick};
