//! Game state and core simulation types
//!
//! Everything the presentation layer reads between ticks lives here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::circle_rect_overlap;
use super::geometry::Rect;
use crate::consts::{BRICK_SCORE, PADDLE_DEFLECTION};
use crate::settings::{Difficulty, Settings};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Game is paused
    Paused,
    /// Ball fell out of the field
    GameOver,
}

/// Things that happened during a tick or command, for sound/redraw hooks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball bounced off the left or right wall
    WallBounce,
    /// Ball bounced off the score band
    ScoreBandBounce,
    /// Ball bounced off the paddle
    PaddleHit,
    /// Brick at `index` destroyed; `score` is the new total
    BrickDestroyed { index: usize, score: u64 },
    /// Last active brick destroyed
    FieldCleared,
    GameOver { score: u64 },
    Paused,
    Resumed,
    Restarted,
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Center position
    pub pos: Vec2,
    /// Velocity in pixels per tick
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self { pos, vel, radius }
    }

    /// Opening serve of a new session: down and to the right, toward the paddle
    pub fn serve(settings: &Settings, difficulty: Difficulty) -> Self {
        let speed = difficulty.ball_speed();
        Self::served(settings, Vec2::new(speed, speed))
    }

    /// Serve after a restart: up and to the right, toward the bricks
    pub fn serve_again(settings: &Settings, difficulty: Difficulty) -> Self {
        let speed = difficulty.ball_speed();
        Self::served(settings, Vec2::new(speed, -speed))
    }

    fn served(settings: &Settings, vel: Vec2) -> Self {
        let mut ball = Self::new(
            Vec2::new(settings.ball_start_x, settings.ball_start_y),
            vel,
            settings.ball_radius,
        );
        ball.clamp_speed(settings.max_ball_speed);
        ball
    }

    /// Move by one tick of velocity (no bounds checks)
    #[inline]
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    /// Vertical center before the most recent `advance`
    #[inline]
    pub fn previous_y(&self) -> f32 {
        self.pos.y - self.vel.y
    }

    #[inline]
    pub fn diameter(&self) -> f32 {
        self.radius * 2.0
    }

    /// Keep each velocity component within [-max, max]
    pub fn clamp_speed(&mut self, max: f32) {
        self.vel = self.vel.clamp(Vec2::splat(-max), Vec2::splat(max));
    }
}

/// The player's paddle; only moves horizontally
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            x: settings.paddle_start_x,
            y: settings.paddle_y,
            width: settings.paddle_width,
            height: settings.paddle_height,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn move_left(&mut self, speed: f32, field_width: f32) {
        self.set_x(self.x - speed, field_width);
    }

    pub fn move_right(&mut self, speed: f32, field_width: f32) {
        self.set_x(self.x + speed, field_width);
    }

    fn set_x(&mut self, x: f32, field_width: f32) {
        self.x = x.clamp(0.0, (field_width - self.width).max(0.0));
    }

    /// Where along the paddle a ball center at `ball_x` lands, 0 = left edge, 1 = right edge.
    ///
    /// Capped to [0, 1] on purpose: a ball overhanging a paddle corner is
    /// treated as an edge hit, so deflection never exceeds `PADDLE_DEFLECTION / 2`.
    pub fn hit_position(&self, ball_x: f32) -> f32 {
        ((ball_x - self.x) / self.width).clamp(0.0, 1.0)
    }

    /// Send the ball back up, angled by where it struck the paddle
    pub fn deflect(&self, ball: &mut Ball) {
        let hit = self.hit_position(ball.pos.x);
        ball.vel.x = (hit - 0.5) * PADDLE_DEFLECTION;
        ball.vel.y = -ball.vel.y.abs();
    }
}

/// A destructible brick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub rect: Rect,
    pub active: bool,
}

impl Brick {
    pub fn new(rect: Rect) -> Self {
        Self { rect, active: true }
    }
}

/// Grid of bricks stored row-major; bricks are deactivated, never removed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BrickField {
    bricks: Vec<Brick>,
}

impl BrickField {
    /// Lay out `rows x columns` active bricks tiling `field_width` exactly.
    ///
    /// Every column is `floor(field_width / columns)` wide except the last,
    /// which takes the remainder.
    pub fn build(
        field_width: f32,
        rows: u32,
        columns: u32,
        top_offset: f32,
        brick_height: f32,
        gap: f32,
    ) -> Self {
        let columns = columns.max(1);
        let column_width = (field_width / columns as f32).floor();
        let last_width = field_width - column_width * (columns - 1) as f32;

        let mut bricks = Vec::with_capacity(rows as usize * columns as usize);
        for row in 0..rows {
            let y = top_offset + row as f32 * (brick_height + gap);
            for col in 0..columns {
                let width = if col == columns - 1 {
                    last_width
                } else {
                    column_width
                };
                let x = col as f32 * column_width;
                bricks.push(Brick::new(Rect::new(x, y, width, brick_height)));
            }
        }

        Self { bricks }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::build(
            settings.field_width,
            settings.brick_rows,
            settings.brick_columns,
            settings.score_area_height,
            settings.brick_height,
            settings.brick_gap,
        )
    }

    pub fn len(&self) -> usize {
        self.bricks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bricks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Brick> {
        self.bricks.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Brick> {
        self.bricks.iter()
    }

    pub fn active_count(&self) -> usize {
        self.bricks.iter().filter(|b| b.active).count()
    }

    /// Mark a brick destroyed; repeated calls are harmless
    pub fn deactivate(&mut self, index: usize) {
        if let Some(brick) = self.bricks.get_mut(index) {
            brick.active = false;
        }
    }

    /// First active brick (row-major) overlapping the circle
    pub fn first_overlapping(&self, center: Vec2, radius: f32) -> Option<usize> {
        self.bricks
            .iter()
            .position(|b| b.active && circle_rect_overlap(center, radius, &b.rect))
    }
}

/// One game session: owns every entity plus score and phase
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub difficulty: Difficulty,
    pub settings: Settings,
    pub ball: Ball,
    pub paddle: Paddle,
    pub bricks: BrickField,
    pub score: u64,
    pub phase: GamePhase,
    /// Ticks simulated since the last reset
    pub time_ticks: u64,
    /// Pending events for the presentation layer
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Difficulty::default(), Settings::default())
    }
}

impl GameState {
    /// Create a new session in the Playing phase
    pub fn new(difficulty: Difficulty, settings: Settings) -> Self {
        let settings = settings.sanitized();
        log::info!(
            "New session: difficulty={}, field={}x{}, bricks={}x{}",
            difficulty.as_str(),
            settings.field_width,
            settings.field_height,
            settings.brick_rows,
            settings.brick_columns
        );

        Self {
            difficulty,
            ball: Ball::serve(&settings, difficulty),
            paddle: Paddle::from_settings(&settings),
            bricks: BrickField::from_settings(&settings),
            score: 0,
            phase: GamePhase::Playing,
            time_ticks: 0,
            events: Vec::new(),
            settings,
        }
    }

    /// Put ball, paddle, bricks and score back to their starting values
    pub fn reset(&mut self) {
        self.ball = Ball::serve_again(&self.settings, self.difficulty);
        self.paddle = Paddle::from_settings(&self.settings);
        self.bricks = BrickField::from_settings(&self.settings);
        self.score = 0;
        self.time_ticks = 0;
        self.phase = GamePhase::Playing;
    }

    /// Record a destroyed brick and return the new score
    pub(crate) fn award_brick(&mut self) -> u64 {
        self.score += BRICK_SCORE;
        self.score
    }

    pub(crate) fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all events recorded since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn ball_position(&self) -> Vec2 {
        self.ball.pos
    }

    pub fn ball_radius(&self) -> f32 {
        self.ball.radius
    }

    pub fn paddle_rect(&self) -> Rect {
        self.paddle.rect()
    }

    /// Score band at the top of the field
    pub fn score_band(&self) -> Rect {
        Rect::new(
            0.0,
            0.0,
            self.settings.field_width,
            self.settings.score_area_height,
        )
    }

    pub fn is_paused(&self) -> bool {
        self.phase == GamePhase::Paused
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Status text shown next to the score
    pub fn status(&self) -> &'static str {
        if self.is_paused() { "Paused" } else { "Active" }
    }

    /// Score line for the HUD
    pub fn score_text(&self) -> String {
        format!("Score: {}", self.score)
    }

    /// Banner shown once the ball is lost
    pub fn game_over_message(&self) -> Option<String> {
        self.is_game_over().then(|| {
            format!(
                "Game Over! Score: {} Press Enter to restart",
                self.score
            )
        })
    }
}
