//! Linezz engine crate.
//!
//! Leaf utilities shared by the drawing renderer: the packed solid-brush
//! vertex layout, 2D distance functions, and the splash-screen mask built on
//! them.

pub mod coords;
pub mod layout;
pub mod logging;
pub mod sdf;
pub mod splash;

/// Validates every vertex layout this crate hands to the GPU.
///
/// Sizes and offsets are already fixed at compile time; this re-checks the
/// attribute tables and is meant to run once at startup.
pub fn validate_vertex_layouts() -> Result<(), layout::LayoutError> {
    use layout::SolidBrushVertex;

    layout::verify_size::<SolidBrushVertex>(56)?;
    SolidBrushVertex::LAYOUT.validate()?;
    log::debug!(
        "SolidBrushVertex: {} bytes, {} attributes",
        SolidBrushVertex::STRIDE,
        SolidBrushVertex::ATTRIBUTES.len()
    );
    Ok(())
}
