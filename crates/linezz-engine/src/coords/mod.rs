//! Geometry types shared by the distance-field helpers and the splash mask.
//!
//! Distance-field space:
//! - Origin at the shape centre
//! - +X right, +Y up
//!
//! Image space (used only when rasterizing) is converted at the edge, see
//! `splash::SplashScene::render_mask`.

mod corner_radii;
mod vec2;

pub use corner_radii::CornerRadii;
pub use vec2::Vec2;
