//! Face geometry: tick and hand positions for a square canvas.
//!
//! Angles are in degrees, clockwise from twelve o'clock.

use clockface_core::surface::Point;

use crate::domain::time::ClockTime;

/// Major tick length as a fraction of the working radius.
pub const MAJOR_TICK_RATIO: f32 = 0.10;
/// Minor tick length as a fraction of the working radius.
pub const MINOR_TICK_RATIO: f32 = 0.05;
/// Minute hand length as a fraction of the working radius.
pub const MINUTE_HAND_RATIO: f32 = 0.80;
/// Hour hand length as a fraction of the working radius.
pub const HOUR_HAND_RATIO: f32 = 0.50;

/// Degrees between adjacent hour marks.
const DEGREES_PER_HOUR: u16 = 30;
/// Degrees between adjacent minute marks.
const DEGREES_PER_MINUTE: u16 = 6;

/// A line segment.
pub type Segment = (Point, Point);

/// Center and radii of a face drawn on a `size × size` canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceGeometry {
    /// Canvas center, rounded down to whole pixels.
    pub center: Point,
    /// Radius of the face disc and its border.
    pub face_radius: f32,
    /// Radius ticks and hands are measured against, one pixel inside the
    /// border.
    pub radius: f32,
}

impl FaceGeometry {
    /// Computes the geometry for a square canvas of `size` pixels.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn new(size: u32) -> Self {
        let c = (size / 2) as f32;
        Self {
            center: Point::new(c, c),
            face_radius: c,
            radius: c - 1.0,
        }
    }

    /// Returns four ticks of `length` on the vertical and horizontal axes
    /// (top, bottom, left, right), each with its outer end on the working
    /// radius.
    #[must_use]
    pub fn tick_cross(&self, length: f32) -> [Segment; 4] {
        let Point { x: cx, y: cy } = self.center;
        let r = self.radius;
        [
            (Point::new(cx, cy - r), Point::new(cx, cy - r + length)),
            (Point::new(cx, cy + r - length), Point::new(cx, cy + r)),
            (Point::new(cx - r, cy), Point::new(cx - r + length, cy)),
            (Point::new(cx + r - length, cy), Point::new(cx + r, cy)),
        ]
    }

    /// Returns an unrotated hand of `length`, pointing at twelve o'clock,
    /// from its tip to the center.
    #[must_use]
    pub fn hand(&self, length: f32) -> Segment {
        let Point { x: cx, y: cy } = self.center;
        (Point::new(cx, cy - length), self.center)
    }
}

/// Rotations that, applied to a four-fold tick cross, place all twelve
/// hour marks: 0°, 30° and 60°.
pub fn major_tick_rotations() -> impl Iterator<Item = f32> {
    (0..3_u16).map(|i| f32::from(i * DEGREES_PER_HOUR))
}

/// Rotations that, applied to a four-fold tick cross, place the 48 minute
/// marks not on an hour. Steps that are multiples of five land on hour marks
/// and are skipped.
pub fn minor_tick_rotations() -> impl Iterator<Item = f32> {
    (1..15_u16)
        .filter(|i| i % 5 != 0)
        .map(|i| f32::from(i * DEGREES_PER_MINUTE))
}

/// Minute hand angle: six degrees per minute.
#[must_use]
pub fn minute_hand_angle(time: ClockTime) -> f32 {
    f32::from(u16::from(time.minute()) * DEGREES_PER_MINUTE)
}

/// Hour hand angle: thirty degrees per hour plus half a degree per minute.
/// The minute contribution uses integer division, so odd minutes round down.
#[must_use]
pub fn hour_hand_angle(time: ClockTime) -> f32 {
    let hour = u16::from(time.hour()) * DEGREES_PER_HOUR;
    let minute = u16::from(time.minute()) / 2;
    f32::from(hour + minute)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(hour: u8, minute: u8) -> ClockTime {
        ClockTime::new(hour, minute).unwrap()
    }

    // --- geometry tests ---

    #[test]
    fn test_new_rounds_center_down() {
        let geometry = FaceGeometry::new(101);
        assert_eq!(geometry.center, Point::new(50.0, 50.0));
        assert!((geometry.face_radius - 50.0).abs() < f32::EPSILON);
        assert!((geometry.radius - 49.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_tick_cross_outer_ends_on_working_radius() {
        let geometry = FaceGeometry::new(200);
        let [top, bottom, left, right] = geometry.tick_cross(9.9);

        assert_eq!(top.0, Point::new(100.0, 1.0));
        assert_eq!(bottom.1, Point::new(100.0, 199.0));
        assert_eq!(left.0, Point::new(1.0, 100.0));
        assert_eq!(right.1, Point::new(199.0, 100.0));
        assert!((top.1.y - top.0.y - 9.9).abs() < 1e-4);
        assert!((right.1.x - right.0.x - 9.9).abs() < 1e-4);
    }

    #[test]
    fn test_hand_points_up_from_center() {
        let geometry = FaceGeometry::new(100);
        let (tip, base) = geometry.hand(40.0);
        assert_eq!(tip, Point::new(50.0, 10.0));
        assert_eq!(base, geometry.center);
    }

    // --- tick rotation tests ---

    #[test]
    fn test_major_tick_rotations_are_three_thirty_degree_steps() {
        let rotations: Vec<f32> = major_tick_rotations().collect();
        assert_eq!(rotations, vec![0.0, 30.0, 60.0]);
    }

    #[test]
    fn test_minor_tick_rotations_skip_hour_marks() {
        let rotations: Vec<f32> = minor_tick_rotations().collect();
        assert_eq!(rotations.len(), 12);
        assert!(rotations.iter().all(|r| r % 30.0 != 0.0));
        assert_eq!(rotations.first(), Some(&6.0));
        assert_eq!(rotations.last(), Some(&84.0));
    }

    // --- hand angle tests ---

    #[test]
    fn test_minute_hand_at_half_past_points_down() {
        assert!((minute_hand_angle(time(0, 30)) - 180.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_hour_hand_at_six_points_down() {
        assert!((hour_hand_angle(time(6, 0)) - 180.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_hour_hand_at_half_past_three() {
        assert!((hour_hand_angle(time(3, 30)) - 105.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_hour_hand_truncates_odd_minutes() {
        assert!((hour_hand_angle(time(3, 31)) - 105.0).abs() < f32::EPSILON);
        assert!((hour_hand_angle(time(11, 59)) - 359.0).abs() < f32::EPSILON);
    }
}
