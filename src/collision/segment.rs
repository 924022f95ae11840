//! Line segment collider
//!
//! Carries the determinant-based segment tests, the standard-form line
//! coefficients, and the closest-point projection the circle tests reuse.
//! The coefficients are recomputed from the endpoints on every call so they
//! always reflect the current geometry.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::EPSILON;
use super::circle::Circle;
use super::rect::Rect;

/// A line segment between two points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Vec2,
    pub end: Vec2,
}

impl Segment {
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    /// Build a segment from a start point, a direction, and a length.
    pub fn from_direction(start: Vec2, direction: Vec2, length: f32) -> Self {
        Self {
            start,
            end: start + direction * length,
        }
    }

    #[inline]
    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }

    /// Normalized direction from start to end; zero for a degenerate segment.
    #[inline]
    pub fn direction(&self) -> Vec2 {
        (self.end - self.start).normalize_or_zero()
    }

    /// Move the end point so the segment has the given length.
    pub fn set_length(&mut self, length: f32) {
        self.end = self.start + self.direction() * length;
    }

    /// The A coefficient of the line's standard form Ax + By + C = 0.
    #[inline]
    pub fn standard_a(&self) -> f32 {
        self.end.y - self.start.y
    }

    /// The B coefficient of the line's standard form Ax + By + C = 0.
    #[inline]
    pub fn standard_b(&self) -> f32 {
        self.start.x - self.end.x
    }

    /// The C coefficient of the line's standard form Ax + By + C = 0.
    #[inline]
    pub fn standard_c(&self) -> f32 {
        (self.end.x - self.start.x) * self.start.y - (self.end.y - self.start.y) * self.start.x
    }

    /// Segment-segment intersection via the determinant of the two direction
    /// vectors. Endpoint touches are excluded (t and u strictly in (0, 1)).
    ///
    /// Limitation: a zero determinant reports no intersection, so collinear
    /// overlapping segments are never flagged as intersecting.
    pub fn intersects_segment(&self, other: &Segment) -> bool {
        let (p1, p2) = (self.start, self.end);
        let (p3, p4) = (other.start, other.end);

        let det = (p1.x - p2.x) * (p3.y - p4.y) - (p1.y - p2.y) * (p3.x - p4.x);
        if det == 0.0 {
            return false;
        }

        let t = ((p1.x - p3.x) * (p3.y - p4.y) - (p1.y - p3.y) * (p3.x - p4.x)) / det;
        let u = -((p1.x - p2.x) * (p1.y - p3.y) - (p1.y - p2.y) * (p1.x - p3.x)) / det;

        t > 0.0 && t < 1.0 && u > 0.0 && u < 1.0
    }

    /// Segment-circle intersection: distance from the circle center to the
    /// closest point on the segment, against the radius.
    ///
    /// The boundary is inclusive (a tangent segment counts as a hit), unlike
    /// the circle's own strict circle-circle test.
    pub fn intersects_circle(&self, circle: &Circle) -> bool {
        let closest = self.nearest_point(circle.center);
        closest.distance(circle.center) <= circle.radius
    }

    /// Segment-rectangle intersection: any edge crossing, or the whole
    /// segment nested inside the rectangle without touching an edge.
    pub fn intersects_rect(&self, rect: &Rect) -> bool {
        if rect.edges().iter().any(|edge| self.intersects_segment(edge)) {
            return true;
        }
        (rect.contains(self.start) || rect.on_edge(self.start))
            && (rect.contains(self.end) || rect.on_edge(self.end))
    }

    /// Closest point on the segment to the given point.
    pub fn nearest_point(&self, point: Vec2) -> Vec2 {
        let direction = self.direction();
        let projection = (point - self.start).dot(direction).clamp(0.0, self.length());
        self.start + direction * projection
    }

    /// Intersection point of the two carrier lines, solved from the
    /// standard-form coefficients.
    ///
    /// Returns the zero vector when the lines are parallel, which is
    /// indistinguishable from a genuine crossing at the origin; callers that
    /// care must check for parallelism separately.
    pub fn intersection_point(&self, other: &Segment) -> Vec2 {
        let (a1, b1, c1) = (self.standard_a(), self.standard_b(), self.standard_c());
        let (a2, b2, c2) = (other.standard_a(), other.standard_b(), other.standard_c());

        let det = a1 * b2 - a2 * b1;
        if det == 0.0 {
            return Vec2::ZERO;
        }

        Vec2::new((b1 * c2 - b2 * c1) / det, (a2 * c1 - a1 * c2) / det)
    }

    /// Whether the point lies on the segment, within tolerance.
    pub fn contains(&self, point: Vec2) -> bool {
        let min = self.start.min(self.end);
        let max = self.start.max(self.end);
        if point.x < min.x - EPSILON
            || point.x > max.x + EPSILON
            || point.y < min.y - EPSILON
            || point.y > max.y + EPSILON
        {
            return false;
        }

        let cross = (point.y - self.start.y) * (self.end.x - self.start.x)
            - (point.x - self.start.x) * (self.end.y - self.start.y);
        cross.abs() < EPSILON
    }

    /// Smallest axis-aligned rectangle enclosing both endpoints.
    pub fn bounding_box(&self) -> Rect {
        let min = self.start.min(self.end);
        let max = self.start.max(self.end);
        Rect::new(
            min.x as i32,
            min.y as i32,
            (max.x - min.x) as i32,
            (max.y - min.y) as i32,
        )
    }

    /// Angle of this segment's direction, measured from the up vector.
    pub fn angle(&self) -> f32 {
        Self::angle_of(self.direction())
    }

    /// Angle in radians between the up vector (0, -1) and the given
    /// direction. Turret and ship rotation use this convention, not the
    /// conventional x-axis angle.
    pub fn angle_of(direction: Vec2) -> f32 {
        let d = direction.normalize_or_zero();
        d.x.atan2(-d.y)
    }

    /// Normalized direction from one point to another.
    pub fn direction_between(from: Vec2, to: Vec2) -> Vec2 {
        (to - from).normalize_or_zero()
    }
}
