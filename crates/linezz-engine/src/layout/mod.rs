//! GPU buffer layout types.
//!
//! Host-side mirrors of the shading language's packed vector types, and the
//! per-vertex records built from them. Shading-language packed vectors have
//! tighter alignment than their native counterparts:
//!
//! | Shader type     | Size     | Alignment |
//! |-----------------|----------|-----------|
//! | `float`         | 4 bytes  | 4 bytes   |
//! | `packed_float2` | 8 bytes  | 4 bytes   |
//! | `packed_float3` | 12 bytes | 4 bytes   |
//! | `packed_half3`  | 6 bytes  | 2 bytes   |
//!
//! Every record here is `#[repr(C)]` with explicit padding fields and is
//! checked at compile time, so a drift in size or offsets fails the build
//! instead of corrupting a vertex buffer.

/// Asserts a type's size and alignment at compile time.
macro_rules! assert_layout {
    ($t:ty, size = $size:expr, align = $align:expr) => {
        const _: () = {
            assert!(core::mem::size_of::<$t>() == $size, "GPU layout size mismatch");
            assert!(core::mem::align_of::<$t>() == $align, "GPU layout alignment mismatch");
        };
    };
}

/// Asserts a field's byte offset at compile time.
macro_rules! assert_offset {
    ($t:ty, $field:ident, $offset:expr) => {
        const _: () = assert!(
            core::mem::offset_of!($t, $field) == $offset,
            "GPU layout offset mismatch"
        );
    };
}

mod attribute;
mod error;
mod packed;
mod vertex;

pub use attribute::{VertexAttributeDesc, VertexFormat, VertexLayout, VertexSemantic, verify_size};
pub use error::LayoutError;
pub use packed::{PackedFloat2, PackedFloat3, PackedHalf3};
pub use vertex::{SolidBrushVertex, as_bytes, read_vertices};
