//! Axis-aligned body shared by every entity
//!
//! Positions are top-left corners in field coordinates (y grows downward).

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Position, size and velocity of an entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub vel: Vec2,
}

impl Body {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            size,
            vel: Vec2::ZERO,
        }
    }

    /// Body of the given size centered on `center`
    pub fn centered(center: Vec2, size: Vec2) -> Self {
        Self::new(center - size * 0.5, size)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    pub fn set_center(&mut self, center: Vec2) {
        self.pos = center - self.size * 0.5;
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.pos + self.size
    }

    /// Advance by velocity
    pub fn integrate(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }

    /// Strict overlap (touching edges do not count)
    pub fn overlaps(&self, other: &Body) -> bool {
        let (a_min, a_max) = (self.min(), self.max());
        let (b_min, b_max) = (other.min(), other.max());
        a_min.x < b_max.x && b_min.x < a_max.x && a_min.y < b_max.y && b_min.y < a_max.y
    }

    /// Keep the body horizontally inside [0, width]
    pub fn clamp_x(&mut self, width: f32) {
        if self.pos.x < 0.0 {
            self.pos.x = 0.0;
        } else if self.pos.x + self.size.x > width {
            self.pos.x = width - self.size.x;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_roundtrip() {
        let mut body = Body::new(Vec2::new(10.0, 20.0), Vec2::new(100.0, 15.0));
        assert_eq!(body.center(), Vec2::new(60.0, 27.5));
        body.set_center(Vec2::new(350.0, 250.0));
        assert_eq!(body.pos, Vec2::new(300.0, 242.5));
    }

    #[test]
    fn test_overlap() {
        let a = Body::new(Vec2::ZERO, Vec2::splat(10.0));
        let b = Body::new(Vec2::new(5.0, 5.0), Vec2::splat(10.0));
        let c = Body::new(Vec2::new(10.0, 0.0), Vec2::splat(10.0));
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        // Shared edge only
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_clamp_x() {
        let mut body = Body::new(Vec2::new(-30.0, 0.0), Vec2::new(100.0, 15.0));
        body.clamp_x(700.0);
        assert_eq!(body.pos.x, 0.0);

        body.pos.x = 650.0;
        body.clamp_x(700.0);
        assert_eq!(body.pos.x, 600.0);
    }
}
