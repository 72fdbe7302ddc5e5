/// Per-corner radii for a rounded box in distance-field space (+Y up).
///
/// Array order is top-right, bottom-right, top-left, bottom-left, which is the
/// lane order the shaders pack into a `float4`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CornerRadii {
    pub top_right: f32,
    pub bottom_right: f32,
    pub top_left: f32,
    pub bottom_left: f32,
}

impl CornerRadii {
    #[inline]
    pub const fn new(top_right: f32, bottom_right: f32, top_left: f32, bottom_left: f32) -> Self {
        Self { top_right, bottom_right, top_left, bottom_left }
    }

    /// Uniform radius on all four corners.
    #[inline]
    pub const fn all(r: f32) -> Self {
        Self { top_right: r, bottom_right: r, top_left: r, bottom_left: r }
    }

    /// No rounding.
    #[inline]
    pub const fn zero() -> Self {
        Self::all(0.0)
    }

    /// `[tr, br, tl, bl]`
    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.top_right, self.bottom_right, self.top_left, self.bottom_left]
    }

    /// Radius of the corner nearest to `(x, y)`.
    ///
    /// A point on an axis (`x == 0` or `y == 0`) resolves to the left or
    /// bottom corner respectively.
    #[inline]
    pub fn for_quadrant(self, x: f32, y: f32) -> f32 {
        let (top, bottom) = if x > 0.0 {
            (self.top_right, self.bottom_right)
        } else {
            (self.top_left, self.bottom_left)
        };
        if y > 0.0 { top } else { bottom }
    }
}

impl From<[f32; 4]> for CornerRadii {
    #[inline]
    fn from(r: [f32; 4]) -> Self {
        CornerRadii::new(r[0], r[1], r[2], r[3])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quadrant_selection() {
        let r = CornerRadii::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(r.for_quadrant(1.0, 1.0), 1.0);
        assert_eq!(r.for_quadrant(1.0, -1.0), 2.0);
        assert_eq!(r.for_quadrant(-1.0, 1.0), 3.0);
        assert_eq!(r.for_quadrant(-1.0, -1.0), 4.0);
    }

    #[test]
    fn axis_points_fall_to_left_and_bottom() {
        let r = CornerRadii::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(r.for_quadrant(0.0, 1.0), 3.0);
        assert_eq!(r.for_quadrant(1.0, 0.0), 2.0);
        assert_eq!(r.for_quadrant(0.0, 0.0), 4.0);
    }

    #[test]
    fn array_order_round_trips() {
        let r = CornerRadii::from([1.0, 2.0, 3.0, 4.0]);
        assert_eq!(r.top_left, 3.0);
        assert_eq!(r.to_array(), [1.0, 2.0, 3.0, 4.0]);
    }
}
