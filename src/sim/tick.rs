//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically. The host must
//! call `tick` at the configured rate; stopping is just not calling it.

use serde::{Deserialize, Serialize};

use super::collision::{ImpactAxis, circle_rect_overlap, impact_axis};
use super::state::{GameEvent, GamePhase, GameState};

/// Input commands forwarded by the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Move the paddle one step left (Playing only)
    MoveLeft,
    /// Move the paddle one step right (Playing only)
    MoveRight,
    /// Playing <-> Paused (ignored after game over)
    TogglePause,
    /// Start over (GameOver only)
    Restart,
}

/// Input commands for a single tick (one-shot, cleared by the host after use)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
    /// Pause toggle
    pub pause: bool,
    pub restart: bool,
    /// Idle/demo mode - AI plays the game
    pub idle_mode: bool,
}

impl TickInput {
    /// Commands in the order they are applied
    pub fn commands(&self) -> impl Iterator<Item = Command> {
        [
            (self.pause, Command::TogglePause),
            (self.restart, Command::Restart),
            (self.move_left, Command::MoveLeft),
            (self.move_right, Command::MoveRight),
        ]
        .into_iter()
        .filter_map(|(set, command)| set.then_some(command))
    }
}

/// Apply one input command. Returns true if the state changed.
pub fn apply_command(state: &mut GameState, command: Command) -> bool {
    match (command, state.phase) {
        (Command::MoveLeft, GamePhase::Playing) => {
            let before = state.paddle.x;
            state
                .paddle
                .move_left(state.difficulty.paddle_speed(), state.settings.field_width);
            state.paddle.x != before
        }
        (Command::MoveRight, GamePhase::Playing) => {
            let before = state.paddle.x;
            state
                .paddle
                .move_right(state.difficulty.paddle_speed(), state.settings.field_width);
            state.paddle.x != before
        }
        (Command::TogglePause, GamePhase::Playing) => {
            state.phase = GamePhase::Paused;
            state.emit(GameEvent::Paused);
            log::debug!("Paused at tick {}", state.time_ticks);
            true
        }
        (Command::TogglePause, GamePhase::Paused) => {
            state.phase = GamePhase::Playing;
            state.emit(GameEvent::Resumed);
            log::debug!("Resumed at tick {}", state.time_ticks);
            true
        }
        (Command::Restart, GamePhase::GameOver) => {
            state.reset();
            state.emit(GameEvent::Restarted);
            log::info!("Restarted ({})", state.difficulty.as_str());
            true
        }
        _ => false,
    }
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) {
    let mut input = input.clone();
    if input.idle_mode {
        autopilot(state, &mut input);
    }

    let mut restarted = false;
    for command in input.commands() {
        let changed = apply_command(state, command);
        restarted |= changed && command == Command::Restart;
    }

    // Show the fresh layout for one frame before the ball moves
    if restarted {
        return;
    }

    // Don't tick if paused or game over
    if state.phase != GamePhase::Playing {
        return;
    }

    step(state);
}

/// One Playing-phase simulation step
fn step(state: &mut GameState) {
    state.time_ticks += 1;

    let field_width = state.settings.field_width;
    let field_height = state.settings.field_height;
    let score_area_height = state.settings.score_area_height;

    state.ball.advance();

    // Side walls
    let max_x = field_width - state.ball.diameter();
    if state.ball.pos.x <= 0.0 || state.ball.pos.x >= max_x {
        state.ball.vel.x = -state.ball.vel.x;
        state.ball.pos.x = if state.ball.pos.x <= 0.0 { 0.0 } else { max_x };
        state.emit(GameEvent::WallBounce);
    }

    // The ball never enters the score band
    if state.ball.pos.y <= score_area_height {
        state.ball.vel.y = state.ball.vel.y.abs();
        state.ball.pos.y = score_area_height;
        state.emit(GameEvent::ScoreBandBounce);
    }

    if state.ball.pos.y >= field_height {
        state.phase = GamePhase::GameOver;
        let score = state.score;
        state.emit(GameEvent::GameOver { score });
        log::info!("Game over: score {} after {} ticks", score, state.time_ticks);
        return;
    }

    // Paddle and brick checks are independent; both may fire in one tick
    if circle_rect_overlap(state.ball.pos, state.ball.radius, &state.paddle.rect()) {
        state.paddle.deflect(&mut state.ball);
        state.ball.clamp_speed(state.settings.max_ball_speed);
        state.emit(GameEvent::PaddleHit);
    }

    // Single hit per tick: only the first overlapping brick breaks
    if let Some(index) = state
        .bricks
        .first_overlapping(state.ball.pos, state.ball.radius)
    {
        state.bricks.deactivate(index);
        let score = state.award_brick();

        let ball = &mut state.ball;
        let rect = state.bricks.get(index).map(|b| b.rect);
        if let Some(rect) = rect {
            match impact_axis(ball.previous_y(), ball.pos.y, ball.vel.y, ball.radius, &rect) {
                ImpactAxis::Vertical => ball.vel.y = -ball.vel.y,
                ImpactAxis::Horizontal => ball.vel.x = -ball.vel.x,
            }
        }

        log::debug!("Brick {} destroyed, score {}", index, score);
        state.emit(GameEvent::BrickDestroyed { index, score });
        if state.bricks.active_count() == 0 {
            log::info!("Field cleared with score {}", score);
            state.emit(GameEvent::FieldCleared);
        }
    }
}

/// Demo AI: restart after game over, otherwise chase the ball with the paddle
fn autopilot(state: &GameState, input: &mut TickInput) {
    match state.phase {
        GamePhase::GameOver => input.restart = true,
        GamePhase::Playing => {
            let target = state.ball.pos.x;
            let center = state.paddle.x + state.paddle.width / 2.0;
            let dead_zone = state.difficulty.paddle_speed() / 2.0;

            if center < target - dead_zone {
                input.move_right = true;
            } else if center > target + dead_zone {
                input.move_left = true;
            }
        }
        GamePhase::Paused => {}
    }
}
