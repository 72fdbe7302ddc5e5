//! 2D signed distance functions for hit-testing and mask rendering.
//!
//! All functions are pure and operate in distance-field space (+Y up, see
//! `coords`).

mod coverage;
mod distance;

pub use coverage::coverage;
pub use distance::{
    distance_to_line_segment,
    rounded_box_contains,
    segment_hit,
    signed_distance_to_rounded_box,
};
