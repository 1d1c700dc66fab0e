//! Drawing-primitive abstraction.
//!
//! A surface is a square canvas with a stack of rotations and a pending
//! path of line segments. Implementations decide how pixels are produced.

use crate::color::Rgba;

/// A point in canvas coordinates (pixels, y pointing down).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate.
    pub y: f32,
}

impl Point {
    /// Creates a point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Trait for the 2D drawing primitives the clock renderer consumes.
pub trait Surface {
    /// Fills a circle in `color`.
    fn fill_circle(&mut self, center: Point, radius: f32, color: Rgba);

    /// Strokes the outline of a circle in `color`.
    fn stroke_circle(&mut self, center: Point, radius: f32, color: Rgba);

    /// Pushes a clockwise rotation of `degrees` about `pivot` onto the
    /// transform stack. Subsequent lines are drawn under it until popped.
    fn push_rotation(&mut self, degrees: f32, pivot: Point);

    /// Restores the transform active before the matching `push_rotation`.
    fn pop_rotation(&mut self);

    /// Appends a line segment to the pending path, under the current
    /// transform.
    fn line(&mut self, from: Point, to: Point);

    /// Strokes the pending path in `color` and clears it.
    fn stroke(&mut self, color: Rgba);
}
