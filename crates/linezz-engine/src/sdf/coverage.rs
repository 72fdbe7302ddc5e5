/// Anti-aliased coverage of a signed distance sample.
///
/// Returns 1 well inside, 0 well outside, and ramps linearly across a band of
/// `aa_width` centred on the edge. `aa_width <= 0` gives a hard step with the
/// edge itself counted as inside. A NaN distance stays NaN on the ramp.
#[inline]
pub fn coverage(signed_distance: f32, aa_width: f32) -> f32 {
    if aa_width <= 0.0 {
        return if signed_distance <= 0.0 { 1.0 } else { 0.0 };
    }
    (0.5 - signed_distance / aa_width).clamp(0.0, 1.0)
}
