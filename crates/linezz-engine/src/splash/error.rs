use std::fmt;

/// Errors from rasterizing a splash scene.
#[derive(Debug, Clone, PartialEq)]
pub enum SplashError {
    /// The requested mask has no pixels.
    EmptyCanvas { width: u32, height: u32 },
    /// The anti-aliasing band is infinite or NaN.
    InvalidAaWidth(f32),
}

impl fmt::Display for SplashError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplashError::EmptyCanvas { width, height } => {
                write!(f, "splash mask of {width}x{height} has no pixels")
            }
            SplashError::InvalidAaWidth(aa_width) => {
                write!(f, "anti-aliasing width must be finite, got {aa_width}")
            }
        }
    }
}

impl std::error::Error for SplashError {}
