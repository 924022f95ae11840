//! 2D collision primitives and the polymorphic collider
//!
//! Three shape kinds (circle, line segment, axis-aligned rectangle) with
//! pairwise intersection tests, point containment, and bounding boxes. The
//! `Collider` sum type is the single query surface every entity exposes.
//!
//! Degenerate geometry is never an error here: zero-length segments have a
//! zero direction, parallel lines report no intersection, and every predicate
//! falls back to `false` rather than panicking.

pub mod circle;
pub mod collider;
pub mod rect;
pub mod segment;

pub use circle::Circle;
pub use collider::Collider;
pub use rect::Rect;
pub use segment::Segment;

/// Tolerance for point-on-line and edge-touching checks, where exact
/// float equality would be fragile.
pub const EPSILON: f32 = 1e-3;
