//! Axis-aligned rectangle with integer position and size
//!
//! Used directly as a collider shape and as the bounding-box type returned by
//! every shape. Containment is half-open like a pixel rect: left/top edges
//! inclusive, right/bottom exclusive.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::EPSILON;
use super::segment::Segment;

/// An axis-aligned rectangle. Width and height are expected non-negative;
/// callers that mutate them must keep the rectangle axis-aligned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build a rect of the given size centered on a point.
    pub fn from_center(center: Vec2, width: i32, height: i32) -> Self {
        Self {
            x: center.x as i32 - width / 2,
            y: center.y as i32 - height / 2,
            width,
            height,
        }
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(
            self.x as f32 + self.width as f32 / 2.0,
            self.y as f32 + self.height as f32 / 2.0,
        )
    }

    /// Move the rect so its center sits on the given point.
    pub fn set_center(&mut self, center: Vec2) {
        self.x = center.x as i32 - self.width / 2;
        self.y = center.y as i32 - self.height / 2;
    }

    /// Corners in clockwise order starting at the top-left.
    pub fn corners(&self) -> [Vec2; 4] {
        let (l, r) = (self.left() as f32, self.right() as f32);
        let (t, b) = (self.top() as f32, self.bottom() as f32);
        [
            Vec2::new(l, t),
            Vec2::new(r, t),
            Vec2::new(r, b),
            Vec2::new(l, b),
        ]
    }

    /// The four edges as line segments, clockwise from the top edge.
    pub fn edges(&self) -> [Segment; 4] {
        let [tl, tr, br, bl] = self.corners();
        [
            Segment::new(tl, tr),
            Segment::new(tr, br),
            Segment::new(br, bl),
            Segment::new(bl, tl),
        ]
    }

    /// Half-open containment: left/top edges count as inside, right/bottom
    /// edges do not.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left() as f32
            && point.x < self.right() as f32
            && point.y >= self.top() as f32
            && point.y < self.bottom() as f32
    }

    /// True when the point sits on the rectangle's outline, within tolerance.
    pub fn on_edge(&self, point: Vec2) -> bool {
        let (l, r) = (self.left() as f32, self.right() as f32);
        let (t, b) = (self.top() as f32, self.bottom() as f32);
        let on_vertical = ((point.x - l).abs() <= EPSILON || (point.x - r).abs() <= EPSILON)
            && point.y >= t - EPSILON
            && point.y <= b + EPSILON;
        let on_horizontal = ((point.y - t).abs() <= EPSILON || (point.y - b).abs() <= EPSILON)
            && point.x >= l - EPSILON
            && point.x <= r + EPSILON;
        on_vertical || on_horizontal
    }

    /// Plain AABB overlap, strict (touching rects do not intersect).
    pub fn intersects_rect(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_half_open() {
        let rect = Rect::new(0, 0, 10, 10);
        assert!(rect.contains(Vec2::new(0.0, 0.0)));
        assert!(rect.contains(Vec2::new(5.0, 5.0)));
        assert!(rect.contains(Vec2::new(9.9, 9.9)));
        assert!(!rect.contains(Vec2::new(10.0, 5.0)));
        assert!(!rect.contains(Vec2::new(5.0, 10.0)));
        assert!(!rect.contains(Vec2::new(-0.1, 5.0)));
    }

    #[test]
    fn test_on_edge() {
        let rect = Rect::new(0, 0, 10, 10);
        assert!(rect.on_edge(Vec2::new(10.0, 5.0)));
        assert!(rect.on_edge(Vec2::new(0.0, 0.0)));
        assert!(rect.on_edge(Vec2::new(5.0, 10.0)));
        assert!(!rect.on_edge(Vec2::new(5.0, 5.0)));
        assert!(!rect.on_edge(Vec2::new(11.0, 5.0)));
    }

    #[test]
    fn test_corners_and_edges() {
        let rect = Rect::new(1, 2, 3, 4);
        let [tl, tr, br, bl] = rect.corners();
        assert_eq!(tl, Vec2::new(1.0, 2.0));
        assert_eq!(tr, Vec2::new(4.0, 2.0));
        assert_eq!(br, Vec2::new(4.0, 6.0));
        assert_eq!(bl, Vec2::new(1.0, 6.0));
        let edges = rect.edges();
        assert_eq!(edges[0].start, tl);
        assert_eq!(edges[0].end, tr);
        assert_eq!(edges[3].end, tl);
    }

    #[test]
    fn test_center_round_trip() {
        let mut rect = Rect::new(0, 0, 20, 10);
        rect.set_center(Vec2::new(100.0, 50.0));
        assert_eq!(rect.center(), Vec2::new(100.0, 50.0));
        assert_eq!(rect.x, 90);
        assert_eq!(rect.y, 45);
    }

    #[test]
    fn test_rect_rect_overlap() {
        let a = Rect::new(0, 0, 10, 10);
        assert!(a.intersects_rect(&Rect::new(5, 5, 10, 10)));
        assert!(!a.intersects_rect(&Rect::new(20, 20, 5, 5)));
        // Touching edges do not count
        assert!(!a.intersects_rect(&Rect::new(10, 0, 10, 10)));
    }
}
