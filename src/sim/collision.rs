//! Collision detection between the circular ball and axis-aligned rectangles
//!
//! Detection is a closest-point test. Response is decided per axis: a hit
//! either reflects the vertical or the horizontal velocity component.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;

/// Which velocity component a collision reflects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImpactAxis {
    /// Hit a top or bottom face: reflect dy
    Vertical,
    /// Hit a left or right face: reflect dx
    Horizontal,
}

/// Check whether a circle overlaps a rectangle
///
/// Clamps the circle center onto the rectangle to find the closest point and
/// compares squared distances, so touching counts as overlapping.
#[inline]
pub fn circle_rect_overlap(center: Vec2, radius: f32, rect: &Rect) -> bool {
    let closest = rect.clamp_point(center);
    center.distance_squared(closest) <= radius * radius
}

/// Classify a hit as vertical when the ball's leading edge crossed the
/// rectangle's top (moving down) or bottom (moving up) during this tick.
///
/// `prev_y` is the ball center before the move, `y` after it. Anything else,
/// including most corner hits, is treated as a horizontal impact.
pub fn is_vertical_impact(prev_y: f32, y: f32, vel_y: f32, radius: f32, rect: &Rect) -> bool {
    let crossed_top = prev_y + radius < rect.top() && y + radius >= rect.top();
    let crossed_bottom = prev_y - radius > rect.bottom() && y - radius <= rect.bottom();

    (vel_y > 0.0 && crossed_top) || (vel_y < 0.0 && crossed_bottom)
}

/// Impact axis for a ball that moved from `prev_y` to `y` and now overlaps `rect`
pub fn impact_axis(prev_y: f32, y: f32, vel_y: f32, radius: f32, rect: &Rect) -> ImpactAxis {
    if is_vertical_impact(prev_y, y, vel_y, radius, rect) {
        ImpactAxis::Vertical
    } else {
        ImpactAxis::Horizontal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brick() -> Rect {
        Rect::new(0.0, 40.0, 80.0, 20.0)
    }

    #[test]
    fn test_overlap_inside_and_touching() {
        let rect = brick();
        // Center inside the rectangle
        assert!(circle_rect_overlap(Vec2::new(40.0, 50.0), 10.0, &rect));
        // Exactly touching the bottom face
        assert!(circle_rect_overlap(Vec2::new(40.0, 70.0), 10.0, &rect));
        // One pixel too far
        assert!(!circle_rect_overlap(Vec2::new(40.0, 71.0), 10.0, &rect));
    }

    #[test]
    fn test_overlap_corner_uses_euclidean_distance() {
        let rect = brick();
        // 8 px right and 8 px below the bottom-right corner: distance ~11.3
        assert!(!circle_rect_overlap(Vec2::new(88.0, 68.0), 10.0, &rect));
        // 6 px each way: distance ~8.5
        assert!(circle_rect_overlap(Vec2::new(86.0, 66.0), 10.0, &rect));
    }

    #[test]
    fn test_vertical_impact_from_below() {
        let rect = brick();
        // Moving up, top edge went from 62 to 59 and crossed the bottom at 60
        assert!(is_vertical_impact(72.0, 69.0, -3.0, 10.0, &rect));
        assert_eq!(impact_axis(72.0, 69.0, -3.0, 10.0, &rect), ImpactAxis::Vertical);
    }

    #[test]
    fn test_vertical_impact_from_above() {
        let rect = brick();
        // Moving down, bottom edge 29 -> 32 is still above the top face at 40
        assert!(!is_vertical_impact(19.0, 22.0, 3.0, 10.0, &rect));
        // Bottom edge 38 -> 41 crosses the top face
        assert!(is_vertical_impact(28.0, 31.0, 3.0, 10.0, &rect));
    }

    #[test]
    fn test_side_impact_is_horizontal() {
        let rect = brick();
        // Ball level with the brick, moving sideways with a small dy
        assert!(!is_vertical_impact(53.0, 50.0, -3.0, 10.0, &rect));
        assert_eq!(impact_axis(53.0, 50.0, -3.0, 10.0, &rect), ImpactAxis::Horizontal);
    }

    #[test]
    fn test_crossing_against_velocity_is_horizontal() {
        let rect = brick();
        // Geometry says "crossed top" but the ball claims to move up
        assert!(!is_vertical_impact(28.0, 31.0, -3.0, 10.0, &rect));
    }
}
