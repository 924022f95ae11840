//! Circle collider
//!
//! Containment and circle-circle overlap are strict: a point on the boundary
//! is outside, and two circles that merely touch do not intersect. The
//! segment-circle test lives on `Segment` and is inclusive; the asymmetry is
//! deliberate and covered by tests.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::segment::Segment;

/// A circle described by center and radius. Radius must be non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub fn new(center: Vec2, radius: f32) -> Self {
        debug_assert!(radius >= 0.0);
        Self { center, radius }
    }

    /// Strict containment: points on the boundary are outside.
    pub fn contains(&self, point: Vec2) -> bool {
        self.center.distance(point) < self.radius
    }

    /// Strict overlap: circles whose boundaries touch do not intersect.
    pub fn intersects_circle(&self, other: &Circle) -> bool {
        self.center.distance(other.center) < self.radius + other.radius
    }

    /// Delegates to the segment's own circle test so the projection math
    /// lives in one place.
    pub fn intersects_segment(&self, segment: &Segment) -> bool {
        segment.intersects_circle(self)
    }

    /// Circle-rectangle intersection. Three branches are required:
    /// corner-inside alone misses partial overlaps, the edge tests alone miss
    /// a small rectangle fully inside a large circle, and center-in-rect
    /// covers a small circle fully inside the rectangle.
    pub fn intersects_rect(&self, rect: &Rect) -> bool {
        if rect.corners().iter().any(|&corner| self.contains(corner)) {
            return true;
        }
        if rect.edges().iter().any(|edge| edge.intersects_circle(self)) {
            return true;
        }
        rect.contains(self.center)
    }

    /// Integer-rounded enclosing rectangle.
    pub fn bounding_box(&self) -> Rect {
        Rect::new(
            (self.center.x - self.radius) as i32,
            (self.center.y - self.radius) as i32,
            (2.0 * self.radius) as i32,
            (2.0 * self.radius) as i32,
        )
    }
}
