//! Frame building: turns session state into a triangle list
//!
//! Text (score, status, game-over banner) is left to the host; the strings
//! come from `GameState::score_text`, `status` and `game_over_message`.

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::sim::{GamePhase, GameState, Rect};

/// Segments used to tessellate the ball
const BALL_SEGMENTS: u32 = 24;
/// Brick border thickness in field pixels
const BRICK_OUTLINE: f32 = 1.0;

/// Maps field pixels (origin top-left, y down) to normalized device coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldProjection {
    pub width: f32,
    pub height: f32,
}

impl FieldProjection {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn for_state(state: &GameState) -> Self {
        Self::new(state.settings.field_width, state.settings.field_height)
    }

    /// Convert field coordinates to NDC (-1..1, y up)
    pub fn to_ndc(&self, x: f32, y: f32) -> (f32, f32) {
        (x / self.width * 2.0 - 1.0, 1.0 - y / self.height * 2.0)
    }
}

/// Geometry for one frame in field coordinates, back to front
pub fn build_frame(state: &GameState) -> Vec<Vertex> {
    let mut vertices = Vec::new();

    let field = Rect::new(
        0.0,
        0.0,
        state.settings.field_width,
        state.settings.field_height,
    );
    vertices.extend(shapes::rect(&field, colors::BACKGROUND));
    vertices.extend(shapes::rect(&state.score_band(), colors::SCORE_BAND));

    for brick in state.bricks.iter().filter(|b| b.active) {
        vertices.extend(shapes::rect(&brick.rect, colors::BRICK));
        vertices.extend(shapes::rect_outline(
            &brick.rect,
            BRICK_OUTLINE,
            colors::BRICK_OUTLINE,
        ));
    }

    vertices.extend(shapes::rect(&state.paddle_rect(), colors::PADDLE));
    vertices.extend(shapes::circle(
        state.ball_position(),
        state.ball_radius(),
        colors::BALL,
        BALL_SEGMENTS,
    ));

    if state.phase != GamePhase::Playing {
        let play_area = Rect::new(
            0.0,
            state.settings.score_area_height,
            state.settings.field_width,
            state.settings.field_height - state.settings.score_area_height,
        );
        vertices.extend(shapes::rect(&play_area, colors::OVERLAY));
    }

    vertices
}

/// Geometry for one frame, ready to upload
pub fn build_frame_ndc(state: &GameState) -> Vec<Vertex> {
    let projection = FieldProjection::for_state(state);
    build_frame(state)
        .into_iter()
        .map(|v| {
            let (x, y) = projection.to_ndc(v.position[0], v.position[1]);
            Vertex::new(x, y, v.color)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Command, apply_command};

    /// Vertices per brick: fill quad plus four outline quads
    const PER_BRICK: usize = 6 + 24;

    #[test]
    fn test_projection_corners() {
        let p = FieldProjection::new(800.0, 600.0);
        assert_eq!(p.to_ndc(0.0, 0.0), (-1.0, 1.0));
        assert_eq!(p.to_ndc(800.0, 600.0), (1.0, -1.0));
        assert_eq!(p.to_ndc(400.0, 300.0), (0.0, 0.0));
    }

    #[test]
    fn test_frame_skips_inactive_bricks() {
        let mut state = GameState::default();
        let full = build_frame(&state).len();

        state.bricks.deactivate(0);
        state.bricks.deactivate(1);
        assert_eq!(build_frame(&state).len(), full - 2 * PER_BRICK);
    }

    #[test]
    fn test_background_drawn_first() {
        let state = GameState::default();
        let frame = build_frame(&state);
        assert!(frame[..6].iter().all(|v| v.color == colors::BACKGROUND));
        assert_eq!(frame[5].position, [800.0, 600.0]);
        assert!(frame[6..12].iter().all(|v| v.color == colors::SCORE_BAND));
    }

    #[test]
    fn test_overlay_when_paused() {
        let mut state = GameState::default();
        let playing = build_frame(&state);
        apply_command(&mut state, Command::TogglePause);
        let paused = build_frame(&state);

        assert_eq!(paused.len(), playing.len() + 6);
        assert_eq!(paused.last().map(|v| v.color), Some(colors::OVERLAY));
    }

    #[test]
    fn test_ndc_frame_is_in_clip_space() {
        let state = GameState::default();
        for v in build_frame_ndc(&state) {
            assert!((-1.0..=1.0).contains(&v.position[0]));
            assert!((-1.0..=1.0).contains(&v.position[1]));
        }
    }
}
