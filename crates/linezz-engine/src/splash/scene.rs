use image::{GrayImage, Luma};

use crate::coords::{CornerRadii, Vec2};
use crate::sdf::{coverage, distance_to_line_segment, signed_distance_to_rounded_box};

use super::SplashError;

/// One primitive of the splash mask.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum SplashShape {
    /// Capsule around segment `a`–`b`.
    Stroke { a: Vec2, b: Vec2, half_width: f32 },
    RoundedBox { center: Vec2, half_extents: Vec2, radii: CornerRadii },
}

impl SplashShape {
    /// Signed distance from `p` to this shape.
    pub fn signed_distance(&self, p: Vec2) -> f32 {
        match *self {
            SplashShape::Stroke { a, b, half_width } => {
                distance_to_line_segment(p, a, b) - half_width
            }
            SplashShape::RoundedBox { center, half_extents, radii } => {
                signed_distance_to_rounded_box(p - center, half_extents, radii)
            }
        }
    }
}

/// Union of shapes evaluated on the CPU.
///
/// Scene space is centred on the canvas with +Y up; one unit is one pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct SplashScene {
    shapes: Vec<SplashShape>,
    aa_width: f32,
}

impl Default for SplashScene {
    fn default() -> Self {
        Self { shapes: Vec::new(), aa_width: 1.0 }
    }
}

impl SplashScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a stroke of total width `width` from `a` to `b`.
    pub fn stroke(mut self, a: Vec2, b: Vec2, width: f32) -> Self {
        self.shapes.push(SplashShape::Stroke { a, b, half_width: width * 0.5 });
        self
    }

    /// Appends a polyline as consecutive strokes. Fewer than two points adds nothing.
    pub fn polyline(mut self, points: &[Vec2], width: f32) -> Self {
        for pair in points.windows(2) {
            self = self.stroke(pair[0], pair[1], width);
        }
        self
    }

    pub fn rounded_box(mut self, center: Vec2, half_extents: Vec2, radii: CornerRadii) -> Self {
        self.shapes.push(SplashShape::RoundedBox { center, half_extents, radii });
        self
    }

    /// Width of the anti-aliasing band in pixels; `<= 0` disables it.
    ///
    /// Must be finite, checked by [`render_mask`](Self::render_mask).
    pub fn aa_width(mut self, aa_width: f32) -> Self {
        self.aa_width = aa_width;
        self
    }

    pub fn shapes(&self) -> &[SplashShape] {
        &self.shapes
    }

    /// The default splash: a rounded panel with a zig-zag stroke across it.
    pub fn linezz_logo() -> Self {
        let zigzag = [
            Vec2::new(-120.0, -40.0),
            Vec2::new(-60.0, 40.0),
            Vec2::new(0.0, -40.0),
            Vec2::new(60.0, 40.0),
            Vec2::new(120.0, -40.0),
        ];
        SplashScene::new()
            .rounded_box(
                Vec2::new(0.0, -110.0),
                Vec2::new(150.0, 24.0),
                CornerRadii::new(24.0, 8.0, 24.0, 8.0),
            )
            .polyline(&zigzag, 18.0)
    }

    /// Signed distance to the union of all shapes; `f32::INFINITY` when empty.
    ///
    /// A NaN from any shape makes the whole union NaN.
    pub fn signed_distance(&self, p: Vec2) -> f32 {
        self.shapes.iter().map(|s| s.signed_distance(p)).fold(f32::INFINITY, |acc, d| {
            if acc.is_nan() || d.is_nan() { f32::NAN } else { acc.min(d) }
        })
    }

    /// Rasterizes the scene into an 8-bit coverage mask.
    pub fn render_mask(&self, width: u32, height: u32) -> Result<GrayImage, SplashError> {
        if width == 0 || height == 0 {
            return Err(SplashError::EmptyCanvas { width, height });
        }
        if !self.aa_width.is_finite() {
            return Err(SplashError::InvalidAaWidth(self.aa_width));
        }

        let half_w = width as f32 * 0.5;
        let half_h = height as f32 * 0.5;
        let mut warned_nan = false;

        let mask = GrayImage::from_fn(width, height, |x, y| {
            // Pixel centre, image rows grow downward.
            let p = Vec2::new(x as f32 + 0.5 - half_w, half_h - (y as f32 + 0.5));
            let d = self.signed_distance(p);
            if d.is_nan() {
                if !warned_nan {
                    log::warn!("splash: NaN distance at pixel ({x}, {y}); leaving it empty");
                    warned_nan = true;
                }
                return Luma([0]);
            }
            Luma([(coverage(d, self.aa_width) * 255.0).round() as u8])
        });

        log::debug!(
            "splash: rendered {}x{} mask from {} shapes",
            width,
            height,
            self.shapes.len()
        );
        Ok(mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ── distances ─────────────────────────────────────────────────────────

    #[test]
    fn empty_scene_is_infinitely_far() {
        assert_eq!(SplashScene::new().signed_distance(Vec2::zero()), f32::INFINITY);
    }

    #[test]
    fn stroke_distance_subtracts_half_width() {
        let scene = SplashScene::new().stroke(Vec2::new(-10.0, 0.0), Vec2::new(10.0, 0.0), 4.0);
        assert_relative_eq!(scene.signed_distance(Vec2::new(0.0, 5.0)), 3.0);
        assert_relative_eq!(scene.signed_distance(Vec2::zero()), -2.0);
    }

    #[test]
    fn union_takes_nearest_shape() {
        let scene = SplashScene::new()
            .rounded_box(Vec2::new(-20.0, 0.0), Vec2::new(5.0, 5.0), CornerRadii::zero())
            .rounded_box(Vec2::new(20.0, 0.0), Vec2::new(5.0, 5.0), CornerRadii::zero());
        assert_relative_eq!(scene.signed_distance(Vec2::new(20.0, 0.0)), -5.0);
        assert_relative_eq!(scene.signed_distance(Vec2::zero()), 15.0);
    }

    #[test]
    fn nan_shape_poisons_union() {
        let scene = SplashScene::new()
            .rounded_box(Vec2::zero(), Vec2::new(5.0, 5.0), CornerRadii::zero())
            .stroke(Vec2::zero(), Vec2::new(1.0, 0.0), f32::NAN);
        assert!(scene.signed_distance(Vec2::zero()).is_nan());
    }

    #[test]
    fn polyline_adds_one_stroke_per_pair() {
        let pts = [Vec2::zero(), Vec2::new(1.0, 0.0), Vec2::new(1.0, 1.0)];
        assert_eq!(SplashScene::new().polyline(&pts, 1.0).shapes().len(), 2);
        assert!(SplashScene::new().polyline(&pts[..1], 1.0).shapes().is_empty());
    }

    // ── render_mask ───────────────────────────────────────────────────────

    #[test]
    fn empty_canvas_is_rejected() {
        let err = SplashScene::linezz_logo().render_mask(0, 16).unwrap_err();
        assert_eq!(err, SplashError::EmptyCanvas { width: 0, height: 16 });
    }

    #[test]
    fn non_finite_aa_width_is_rejected() {
        let err = SplashScene::linezz_logo().aa_width(f32::INFINITY).render_mask(64, 64).unwrap_err();
        assert_eq!(err, SplashError::InvalidAaWidth(f32::INFINITY));

        let err = SplashScene::linezz_logo().aa_width(f32::NAN).render_mask(64, 64).unwrap_err();
        assert!(matches!(err, SplashError::InvalidAaWidth(w) if w.is_nan()));
    }

    #[test]
    fn negative_aa_width_renders_hard_edges() {
        let mask = SplashScene::linezz_logo().aa_width(-1.0).render_mask(64, 64).unwrap();
        assert!(mask.pixels().all(|p| p.0[0] == 0 || p.0[0] == 255));
        assert!(mask.pixels().any(|p| p.0[0] == 255));
    }

    #[test]
    fn nan_shape_leaves_pixels_empty() {
        let scene = SplashScene::new()
            .rounded_box(Vec2::zero(), Vec2::new(8.0, 8.0), CornerRadii::zero())
            .stroke(Vec2::zero(), Vec2::new(1.0, 0.0), f32::NAN)
            .aa_width(0.0);
        assert!(scene.signed_distance(Vec2::new(0.5, 0.5)).is_nan());
        let mask = scene.render_mask(4, 4).unwrap();
        assert!(mask.pixels().all(|p| p.0[0] == 0));
    }

    #[test]
    fn mask_is_centred_with_y_up() {
        // A box in the upper half of scene space lands in the top image rows.
        let scene = SplashScene::new()
            .rounded_box(Vec2::new(0.0, 8.0), Vec2::new(4.0, 4.0), CornerRadii::zero())
            .aa_width(0.0);
        let mask = scene.render_mask(32, 32).unwrap();
        assert_eq!(mask.get_pixel(16, 8).0, [255]);
        assert_eq!(mask.get_pixel(16, 24).0, [0]);
        assert_eq!(mask.get_pixel(0, 0).0, [0]);
    }

    #[test]
    fn logo_has_inside_and_outside_pixels() {
        let mask = SplashScene::linezz_logo().render_mask(400, 300).unwrap();
        assert_eq!(mask.dimensions(), (400, 300));
        let inside = mask.pixels().filter(|p| p.0[0] == 255).count();
        let outside = mask.pixels().filter(|p| p.0[0] == 0).count();
        let edge = mask.pixels().filter(|p| p.0[0] != 0 && p.0[0] != 255).count();
        assert!(inside > 0);
        assert!(outside > inside);
        assert!(edge > 0, "anti-aliased edge pixels expected");
    }

    #[test]
    fn empty_scene_renders_blank() {
        let mask = SplashScene::new().render_mask(8, 8).unwrap();
        assert!(mask.pixels().all(|p| p.0[0] == 0));
    }
}
