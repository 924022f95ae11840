//! The polymorphic collider every entity exposes
//!
//! A closed sum over the three shape kinds with an explicit dispatch table.
//! Every pair ordering routes to a single shared test, so
//! `a.intersects(b) == b.intersects(a)` holds by construction.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::circle::Circle;
use super::rect::Rect;
use super::segment::Segment;

/// Exactly one concrete shape per collider. Value equality compares the
/// shape's defining fields and carries no ownership semantics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Collider {
    Circle(Circle),
    Segment(Segment),
    Rect(Rect),
}

impl Collider {
    /// Point containment for the wrapped shape.
    pub fn contains(&self, point: Vec2) -> bool {
        match self {
            Collider::Circle(circle) => circle.contains(point),
            Collider::Segment(segment) => segment.contains(point),
            Collider::Rect(rect) => rect.contains(point),
        }
    }

    /// Pairwise intersection across all nine shape orderings.
    pub fn intersects(&self, other: &Collider) -> bool {
        use Collider::*;
        match (self, other) {
            (Circle(a), Circle(b)) => a.intersects_circle(b),
            (Circle(a), Segment(b)) => a.intersects_segment(b),
            (Circle(a), Rect(b)) => a.intersects_rect(b),
            (Segment(a), Circle(b)) => a.intersects_circle(b),
            (Segment(a), Segment(b)) => a.intersects_segment(b),
            (Segment(a), Rect(b)) => a.intersects_rect(b),
            (Rect(a), Circle(b)) => b.intersects_rect(a),
            (Rect(a), Segment(b)) => b.intersects_rect(a),
            (Rect(a), Rect(b)) => a.intersects_rect(b),
        }
    }

    /// Smallest enclosing axis-aligned rectangle. Stays accurate after every
    /// position mutation because nothing here is cached.
    pub fn bounding_box(&self) -> Rect {
        match self {
            Collider::Circle(circle) => circle.bounding_box(),
            Collider::Segment(segment) => segment.bounding_box(),
            Collider::Rect(rect) => *rect,
        }
    }
}

impl From<Circle> for Collider {
    fn from(circle: Circle) -> Self {
        Collider::Circle(circle)
    }
}

impl From<Segment> for Collider {
    fn from(segment: Segment) -> Self {
        Collider::Segment(segment)
    }
}

impl From<Rect> for Collider {
    fn from(rect: Rect) -> Self {
        Collider::Rect(rect)
    }
}
