//! `Surface` implementation backed by a tiny-skia pixmap.

use std::fmt;

use clockface_core::color::Rgba;
use clockface_core::error::ClockError;
use clockface_core::surface::{Point, Surface};
use image::RgbaImage;
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Stroke, Transform};

/// A square, initially transparent raster canvas.
///
/// Line endpoints are mapped through the current rotation when added, so the
/// pending path is always stroked in canvas space.
pub struct SkiaSurface {
    pixmap: Pixmap,
    transform: Transform,
    saved: Vec<Transform>,
    path: PathBuilder,
    stroke: Stroke,
}

impl SkiaSurface {
    /// Creates a `size × size` canvas.
    ///
    /// # Errors
    ///
    /// Returns `ClockError::Render` if the canvas cannot be allocated, which
    /// includes a zero `size`.
    pub fn new(size: u32) -> Result<Self, ClockError> {
        let pixmap = Pixmap::new(size, size)
            .ok_or_else(|| ClockError::Render(format!("cannot allocate {size}x{size} canvas")))?;
        Ok(Self {
            pixmap,
            transform: Transform::identity(),
            saved: Vec::new(),
            path: PathBuilder::new(),
            stroke: Stroke::default(),
        })
    }

    /// Exports the canvas as a straight-alpha RGBA image.
    ///
    /// # Errors
    ///
    /// Returns `ClockError::Render` if the pixel buffer does not match the
    /// canvas dimensions.
    pub fn into_image(self) -> Result<RgbaImage, ClockError> {
        let (width, height) = (self.pixmap.width(), self.pixmap.height());
        let data: Vec<u8> = self
            .pixmap
            .pixels()
            .iter()
            .flat_map(|p| {
                let c = p.demultiply();
                [c.red(), c.green(), c.blue(), c.alpha()]
            })
            .collect();
        RgbaImage::from_raw(width, height, data).ok_or_else(|| {
            ClockError::Render(format!("pixel buffer does not fit {width}x{height}"))
        })
    }
}

impl fmt::Debug for SkiaSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SkiaSurface")
            .field("width", &self.pixmap.width())
            .field("height", &self.pixmap.height())
            .field("transform", &self.transform)
            .field("saved", &self.saved.len())
            .finish_non_exhaustive()
    }
}

fn paint(color: Rgba) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, color.a);
    paint.anti_alias = true;
    paint
}

impl Surface for SkiaSurface {
    fn fill_circle(&mut self, center: Point, radius: f32, color: Rgba) {
        // Degenerate radii produce no path; nothing to draw.
        if let Some(path) = PathBuilder::from_circle(center.x, center.y, radius) {
            self.pixmap.fill_path(
                &path,
                &paint(color),
                FillRule::Winding,
                self.transform,
                None,
            );
        }
    }

    fn stroke_circle(&mut self, center: Point, radius: f32, color: Rgba) {
        if let Some(path) = PathBuilder::from_circle(center.x, center.y, radius) {
            self.pixmap
                .stroke_path(&path, &paint(color), &self.stroke, self.transform, None);
        }
    }

    fn push_rotation(&mut self, degrees: f32, pivot: Point) {
        self.saved.push(self.transform);
        self.transform = self
            .transform
            .pre_concat(Transform::from_rotate_at(degrees, pivot.x, pivot.y));
    }

    fn pop_rotation(&mut self) {
        if let Some(transform) = self.saved.pop() {
            self.transform = transform;
        }
    }

    fn line(&mut self, from: Point, to: Point) {
        let mut points = [
            tiny_skia::Point::from_xy(from.x, from.y),
            tiny_skia::Point::from_xy(to.x, to.y),
        ];
        self.transform.map_points(&mut points);
        self.path.move_to(points[0].x, points[0].y);
        self.path.line_to(points[1].x, points[1].y);
    }

    fn stroke(&mut self, color: Rgba) {
        let builder = std::mem::take(&mut self.path);
        if let Some(path) = builder.finish() {
            self.pixmap.stroke_path(
                &path,
                &paint(color),
                &self.stroke,
                Transform::identity(),
                None,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_zero_size_returns_render_error() {
        match SkiaSurface::new(0).unwrap_err() {
            ClockError::Render(msg) => assert_eq!(msg, "cannot allocate 0x0 canvas"),
            other => panic!("expected Render, got {other:?}"),
        }
    }

    #[test]
    fn test_into_image_keeps_dimensions_and_starts_transparent() {
        let image = SkiaSurface::new(17).unwrap().into_image().unwrap();

        assert_eq!(image.dimensions(), (17, 17));
        assert_eq!(image.get_pixel(8, 8).0, [0, 0, 0, 0]);
    }

    #[test]
    fn test_fill_circle_covers_interior() {
        let mut surface = SkiaSurface::new(20).unwrap();
        surface.fill_circle(Point::new(10.0, 10.0), 10.0, Rgba::BLUE);

        let image = surface.into_image().unwrap();

        assert_eq!(image.get_pixel(10, 10).0, [0, 0, 255, 255]);
        assert_eq!(image.get_pixel(0, 0).0[3], 0);
    }

    #[test]
    fn test_rotated_line_lands_on_rotated_axis() {
        let mut surface = SkiaSurface::new(21).unwrap();
        let center = Point::new(10.5, 10.5);
        surface.push_rotation(90.0, center);
        surface.line(Point::new(10.5, 1.0), Point::new(10.5, 9.0));
        surface.stroke(Rgba::RED);
        surface.pop_rotation();

        let image = surface.into_image().unwrap();

        // A vertical line above the center rotated a quarter turn clockwise
        // lies to the right of the center.
        let px = image.get_pixel(15, 10).0;
        assert!(px[3] > 0);
        assert_eq!(px[..3], [255, 0, 0]);
        assert_eq!(image.get_pixel(10, 5).0[3], 0);
    }

    #[test]
    fn test_pop_restores_previous_transform() {
        let mut surface = SkiaSurface::new(21).unwrap();
        surface.push_rotation(90.0, Point::new(10.5, 10.5));
        surface.pop_rotation();
        surface.line(Point::new(10.5, 1.0), Point::new(10.5, 9.0));
        surface.stroke(Rgba::RED);

        let image = surface.into_image().unwrap();

        assert!(image.get_pixel(10, 5).0[3] > 0);
        assert_eq!(image.get_pixel(15, 10).0[3], 0);
    }
}
