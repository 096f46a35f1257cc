//! Fixed timestep scheduling for hosts
//!
//! Turns variable frame times into a whole number of simulation ticks.

use super::state::GameState;
use super::tick::{TickInput, tick};
use crate::consts::MAX_SUBSTEPS;

/// Accumulator that converts elapsed wall-clock time into ticks
#[derive(Debug, Clone)]
pub struct FixedStepClock {
    accumulator: f32,
    dt: f32,
    max_substeps: u32,
}

impl FixedStepClock {
    pub fn new(tick_rate: u32) -> Self {
        Self {
            accumulator: 0.0,
            dt: 1.0 / tick_rate.max(1) as f32,
            max_substeps: MAX_SUBSTEPS,
        }
    }

    /// Seconds per tick
    pub fn dt(&self) -> f32 {
        self.dt
    }

    /// Add `elapsed` seconds and return how many ticks are due
    ///
    /// A single frame never yields more than `MAX_SUBSTEPS` ticks, so a long
    /// stall (window drag, breakpoint) does not trigger a catch-up burst.
    pub fn advance(&mut self, elapsed: f32) -> u32 {
        let elapsed = elapsed.clamp(0.0, self.dt * self.max_substeps as f32);
        self.accumulator += elapsed;

        let mut substeps = 0;
        while self.accumulator >= self.dt && substeps < self.max_substeps {
            self.accumulator -= self.dt;
            substeps += 1;
        }
        substeps
    }

    /// Advance the clock and run every due tick. One-shot input is consumed
    /// by the first tick only. Returns the number of ticks run.
    pub fn run(&mut self, elapsed: f32, state: &mut GameState, input: &mut TickInput) -> u32 {
        let due = self.advance(elapsed);
        for _ in 0..due {
            tick(state, input);

            // Clear one-shot inputs after processing
            input.move_left = false;
            input.move_right = false;
            input.pause = false;
            input.restart = false;
        }
        due
    }
}
