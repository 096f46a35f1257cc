//! Axis-aligned rectangle geometry for the paddle and bricks
//!
//! Field coordinates: origin at the top-left corner, x grows right, y grows down.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle given by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn min(&self) -> Vec2 {
        Vec2::new(self.left(), self.top())
    }

    pub fn max(&self) -> Vec2 {
        Vec2::new(self.right(), self.bottom())
    }

    /// Closest point inside (or on the border of) the rectangle to `p`
    #[inline]
    pub fn clamp_point(&self, p: Vec2) -> Vec2 {
        p.clamp(self.min(), self.max())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let r = Rect::new(10.0, 20.0, 30.0, 5.0);
        assert_eq!(r.left(), 10.0);
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.top(), 20.0);
        assert_eq!(r.bottom(), 25.0);
    }

    #[test]
    fn test_clamp_point() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        // Inside stays put
        assert_eq!(r.clamp_point(Vec2::new(3.0, 4.0)), Vec2::new(3.0, 4.0));
        // Outside snaps to the nearest border point
        assert_eq!(r.clamp_point(Vec2::new(-5.0, 15.0)), Vec2::new(0.0, 10.0));
        assert_eq!(r.clamp_point(Vec2::new(12.0, 5.0)), Vec2::new(10.0, 5.0));
    }
}
