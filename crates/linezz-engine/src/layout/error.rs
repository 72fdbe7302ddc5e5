use std::fmt;

use super::VertexSemantic;

/// A vertex layout that does not match what the GPU will fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// A host type's size differs from the agreed record size.
    SizeMismatch { type_name: &'static str, actual: usize, expected: usize },
    ZeroStride,
    /// An attribute reads past the end of its record.
    OutOfBounds { semantic: VertexSemantic, end: usize, stride: usize },
    /// An attribute offset is not a multiple of its component size.
    Misaligned { semantic: VertexSemantic, offset: usize, align: usize },
    /// Two attributes share bytes.
    Overlap { first: VertexSemantic, second: VertexSemantic },
    DuplicateSemantic(VertexSemantic),
    /// A byte buffer does not hold a whole number of records.
    TruncatedBuffer { len: usize, stride: usize },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::SizeMismatch { type_name, actual, expected } => write!(
                f,
                "layout size mismatch for {type_name}: host={actual} bytes, expected={expected} bytes"
            ),
            LayoutError::ZeroStride => write!(f, "vertex layout has a zero stride"),
            LayoutError::OutOfBounds { semantic, end, stride } => write!(
                f,
                "attribute {semantic:?} ends at byte {end}, past the {stride}-byte stride"
            ),
            LayoutError::Misaligned { semantic, offset, align } => write!(
                f,
                "attribute {semantic:?} at offset {offset} is not {align}-byte aligned"
            ),
            LayoutError::Overlap { first, second } => {
                write!(f, "attributes {first:?} and {second:?} overlap")
            }
            LayoutError::DuplicateSemantic(semantic) => {
                write!(f, "attribute semantic {semantic:?} appears more than once")
            }
            LayoutError::TruncatedBuffer { len, stride } => write!(
                f,
                "buffer of {len} bytes is not a whole number of {stride}-byte vertices"
            ),
        }
    }
}

impl std::error::Error for LayoutError {}
