//! Recording surface — a `Surface` that captures drawing commands.

use clockface_core::color::Rgba;
use clockface_core::surface::{Point, Surface};

/// A circle drawn on the surface.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCircle {
    /// Circle center.
    pub center: Point,
    /// Circle radius.
    pub radius: f32,
    /// Fill or stroke color.
    pub color: Rgba,
    /// `true` for a fill, `false` for an outline stroke.
    pub filled: bool,
}

/// A line segment as it was added to the pending path.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedLine {
    /// Start point, before rotation.
    pub from: Point,
    /// End point, before rotation.
    pub to: Point,
    /// Sum of all rotations active when the line was added, in degrees.
    pub rotation: f32,
    /// Number of rotations active when the line was added.
    pub depth: usize,
}

impl RecordedLine {
    /// Returns the clockwise angle from twelve o'clock, in `[0, 360)`, of
    /// the endpoint farther from `center`, with the active rotation applied.
    #[must_use]
    pub fn angle_about(&self, center: Point) -> f32 {
        let distance = |p: Point| (p.x - center.x).hypot(p.y - center.y);
        let outer = if distance(self.to) > distance(self.from) {
            self.to
        } else {
            self.from
        };
        let base = (outer.x - center.x).atan2(center.y - outer.y).to_degrees();
        (base + self.rotation).rem_euclid(360.0)
    }

    /// Returns the length of the segment.
    #[must_use]
    pub fn length(&self) -> f32 {
        (self.to.x - self.from.x).hypot(self.to.y - self.from.y)
    }
}

/// A stroke of the pending path.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedStroke {
    /// Stroke color.
    pub color: Rgba,
    /// Lines that made up the pending path.
    pub lines: Vec<RecordedLine>,
}

/// A surface that records every drawing command instead of rasterizing.
///
/// Panics on `pop_rotation` without a matching `push_rotation`.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    circles: Vec<RecordedCircle>,
    strokes: Vec<RecordedStroke>,
    pending: Vec<RecordedLine>,
    rotations: Vec<f32>,
}

impl RecordingSurface {
    /// Create an empty recording surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all recorded circles, in drawing order.
    #[must_use]
    pub fn circles(&self) -> &[RecordedCircle] {
        &self.circles
    }

    /// Returns all recorded strokes, in drawing order.
    #[must_use]
    pub fn strokes(&self) -> &[RecordedStroke] {
        &self.strokes
    }

    /// Returns every line stroked in `color`.
    pub fn lines_in(&self, color: Rgba) -> impl Iterator<Item = &RecordedLine> {
        self.strokes
            .iter()
            .filter(move |s| s.color == color)
            .flat_map(|s| s.lines.iter())
    }

    /// Returns `true` if every pushed rotation has been popped and no lines
    /// are left unstroked.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.rotations.is_empty() && self.pending.is_empty()
    }
}

impl Surface for RecordingSurface {
    fn fill_circle(&mut self, center: Point, radius: f32, color: Rgba) {
        self.circles.push(RecordedCircle {
            center,
            radius,
            color,
            filled: true,
        });
    }

    fn stroke_circle(&mut self, center: Point, radius: f32, color: Rgba) {
        self.circles.push(RecordedCircle {
            center,
            radius,
            color,
            filled: false,
        });
    }

    fn push_rotation(&mut self, degrees: f32, _pivot: Point) {
        self.rotations.push(degrees);
    }

    fn pop_rotation(&mut self) {
        self.rotations
            .pop()
            .expect("pop_rotation without matching push_rotation");
    }

    fn line(&mut self, from: Point, to: Point) {
        self.pending.push(RecordedLine {
            from,
            to,
            rotation: self.rotations.iter().sum(),
            depth: self.rotations.len(),
        });
    }

    fn stroke(&mut self, color: Rgba) {
        let lines = std::mem::take(&mut self.pending);
        self.strokes.push(RecordedStroke { color, lines });
    }
}
