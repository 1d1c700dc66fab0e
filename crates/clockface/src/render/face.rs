//! Clock face drawing.
//!
//! The drawing sequence is generic over `Surface`; `render` runs it on a
//! tiny-skia canvas and exports the image.

use clockface_core::error::ClockError;
use clockface_core::surface::{Point, Surface};
use image::RgbaImage;
use tracing::warn;

use super::geometry::{
    FaceGeometry, HOUR_HAND_RATIO, MAJOR_TICK_RATIO, MINOR_TICK_RATIO, MINUTE_HAND_RATIO,
    Segment, hour_hand_angle, major_tick_rotations, minor_tick_rotations, minute_hand_angle,
};
use super::skia::SkiaSurface;
use crate::domain::config::ResolvedConfig;

/// Renders `config` onto a new `size × size` canvas.
///
/// # Errors
///
/// Returns `ClockError::Render` if the canvas cannot be created (including a
/// zero `size`) or exported.
pub fn render(size: u32, config: &ResolvedConfig) -> Result<RgbaImage, ClockError> {
    let mut surface = SkiaSurface::new(size)
        .inspect_err(|e| warn!(size, error = %e, "canvas creation failed"))?;
    draw_face(&mut surface, &FaceGeometry::new(size), config);
    surface.into_image()
}

/// Draws the face, ticks and hands described by `config`.
///
/// Every rotation is pushed and popped around its own group, so groups never
/// compound.
pub fn draw_face<S: Surface + ?Sized>(
    surface: &mut S,
    geometry: &FaceGeometry,
    config: &ResolvedConfig,
) {
    let colors = &config.colors;
    let center = geometry.center;
    let r = geometry.radius;

    surface.fill_circle(center, geometry.face_radius, colors.background);
    surface.stroke_circle(center, geometry.face_radius, colors.border);

    let major = geometry.tick_cross(r * MAJOR_TICK_RATIO);
    for degrees in major_tick_rotations() {
        rotated(surface, degrees, center, |s| {
            draw_segments(s, &major);
            s.stroke(colors.major_tick);
        });
    }

    let minor = geometry.tick_cross(r * MINOR_TICK_RATIO);
    for degrees in minor_tick_rotations() {
        rotated(surface, degrees, center, |s| {
            draw_segments(s, &minor);
            s.stroke(colors.minor_tick);
        });
    }

    let minute_hand = geometry.hand(r * MINUTE_HAND_RATIO);
    rotated(surface, minute_hand_angle(config.time), center, |s| {
        draw_segments(s, &[minute_hand]);
        s.stroke(colors.minute_hand);
    });

    let hour_hand = geometry.hand(r * HOUR_HAND_RATIO);
    rotated(surface, hour_hand_angle(config.time), center, |s| {
        draw_segments(s, &[hour_hand]);
        s.stroke(colors.hour_hand);
    });
}

fn rotated<S, F>(surface: &mut S, degrees: f32, pivot: Point, draw: F)
where
    S: Surface + ?Sized,
    F: FnOnce(&mut S),
{
    surface.push_rotation(degrees, pivot);
    draw(surface);
    surface.pop_rotation();
}

fn draw_segments<S: Surface + ?Sized>(surface: &mut S, segments: &[Segment]) {
    for &(from, to) in segments {
        surface.line(from, to);
    }
}
