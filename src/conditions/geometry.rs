//! Geometry checks on triangles, rectangles and circles.
//!
//! Rectangles use canvas coordinates: `top` grows downward and `left` grows to
//! the right, so a rectangle spans `[left, left + width]` horizontally and
//! `[top, top + height]` vertically.

use serde::{Deserialize, Serialize};

/// A point on the plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// An axis-aligned rectangle in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    fn right(&self) -> f64 {
        self.left + self.width
    }

    fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// A circle given by its center and radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

/// True when sides `a`, `b`, `c` satisfy the strict triangle inequality.
pub fn is_triangle(a: f64, b: f64, c: f64) -> bool {
    a + b > c && a + c > b && b + c > a
}

/// True when the two rectangles share at least one point.
///
/// Rectangles that only touch along an edge or a corner count as overlapping.
pub fn do_rectangles_overlap(r1: &Rect, r2: &Rect) -> bool {
    r1.left <= r2.right() && r2.left <= r1.right() && r1.top <= r2.bottom() && r2.top <= r1.bottom()
}

/// True when `point` lies strictly inside `circle`.
pub fn is_inside_circle(circle: &Circle, point: &Point) -> bool {
    (circle.center.x - point.x).hypot(circle.center.y - point.y) < circle.radius
}
