use crate::coords::{CornerRadii, Vec2};

/// Euclidean distance from `p` to the closest point on segment `a`–`b`.
///
/// A zero-length segment (`a == b`) is treated as the point `a`.
///
/// <https://iquilezles.org/articles/distfunctions2d/>
#[must_use]
pub fn distance_to_line_segment(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    let pa = p - a;
    let ba = b - a;
    let len_sq = ba.length_squared();
    if len_sq == 0.0 {
        return pa.length();
    }
    let h = (pa.dot(ba) / len_sq).clamp(0.0, 1.0);
    (pa - ba * h).length()
}

/// Signed distance from `p` to a box centred on the origin with per-corner
/// rounding. Negative inside, positive outside.
///
/// `half_extents` is the half-width and half-height. The corner radius is
/// picked by the quadrant `p` lies in (+Y is top).
///
/// <https://iquilezles.org/articles/distfunctions2d/>
#[must_use]
pub fn signed_distance_to_rounded_box(p: Vec2, half_extents: Vec2, radii: CornerRadii) -> f32 {
    let r = radii.for_quadrant(p.x, p.y);
    let q = p.abs() - half_extents + r;
    q.max_element().min(0.0) + q.max(Vec2::zero()).length() - r
}

/// True when `p` is within `half_width` of segment `a`–`b` (a capsule test).
#[inline]
pub fn segment_hit(p: Vec2, a: Vec2, b: Vec2, half_width: f32) -> bool {
    distance_to_line_segment(p, a, b) <= half_width
}

/// True when `p` is inside or on a rounded box centred at `center`.
#[inline]
pub fn rounded_box_contains(p: Vec2, center: Vec2, half_extents: Vec2, radii: CornerRadii) -> bool {
    signed_distance_to_rounded_box(p - center, half_extents, radii) <= 0.0
}
