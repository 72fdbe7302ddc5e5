//! CPU-side splash-screen mask.
//!
//! The splash screen draws its strokes and panels from the same distance
//! functions the shaders use; this module evaluates them on the CPU so the
//! mask can be previewed and tested without a device.

mod error;
mod scene;

pub use error::SplashError;
pub use scene::{SplashScene, SplashShape};
