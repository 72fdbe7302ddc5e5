use super::LayoutError;

/// What a vertex attribute means to the mesh consumer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum VertexSemantic {
    Position,
    Normal,
    Bitangent,
    /// Material properties (roughness, metallic).
    Uv1,
    /// Distance along the stroke curve.
    Uv2,
    Color,
}

/// Storage format of one attribute.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum VertexFormat {
    Float,
    Float2,
    Float3,
    Half3,
}

impl VertexFormat {
    /// Bytes occupied by the attribute.
    pub const fn size(self) -> usize {
        match self {
            VertexFormat::Float => 4,
            VertexFormat::Float2 => 8,
            VertexFormat::Float3 => 12,
            VertexFormat::Half3 => 6,
        }
    }

    /// Bytes the GPU reads for this attribute, which can exceed [`size`](Self::size).
    pub const fn fetch_size(self) -> usize {
        self.to_wgpu().size() as usize
    }

    /// Offset alignment `wgpu` requires: `min(4, fetch size)`.
    pub const fn fetch_align(self) -> usize {
        let size = self.fetch_size();
        if size < 4 { size } else { 4 }
    }

    /// The closest format `wgpu` can fetch.
    ///
    /// There is no three-lane half format, so `Half3` widens to `Float16x4`;
    /// the record must leave two readable bytes after it.
    pub const fn to_wgpu(self) -> wgpu::VertexFormat {
        match self {
            VertexFormat::Float => wgpu::VertexFormat::Float32,
            VertexFormat::Float2 => wgpu::VertexFormat::Float32x2,
            VertexFormat::Float3 => wgpu::VertexFormat::Float32x3,
            VertexFormat::Half3 => wgpu::VertexFormat::Float16x4,
        }
    }
}

/// One attribute of an interleaved vertex record.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct VertexAttributeDesc {
    pub semantic: VertexSemantic,
    pub format: VertexFormat,
    /// Byte offset from the start of the record.
    pub offset: usize,
}

impl VertexAttributeDesc {
    pub const fn new(semantic: VertexSemantic, format: VertexFormat, offset: usize) -> Self {
        Self { semantic, format, offset }
    }

    /// One past the last byte of the host field.
    #[inline]
    pub const fn end(&self) -> usize {
        self.offset + self.format.size()
    }

    /// One past the last byte the GPU fetches.
    #[inline]
    pub const fn fetch_end(&self) -> usize {
        self.offset + self.format.fetch_size()
    }
}

/// Interleaved layout of a single vertex buffer.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct VertexLayout<'a> {
    pub stride: usize,
    pub attributes: &'a [VertexAttributeDesc],
}

impl<'a> VertexLayout<'a> {
    pub const fn new(stride: usize, attributes: &'a [VertexAttributeDesc]) -> Self {
        Self { stride, attributes }
    }

    /// Checks that every attribute's GPU fetch fits the stride and is aligned
    /// the way `wgpu` requires, and that no two host fields share bytes or a
    /// semantic.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.stride == 0 {
            return Err(LayoutError::ZeroStride);
        }

        for attr in self.attributes {
            let align = attr.format.fetch_align();
            if attr.offset % align != 0 {
                return Err(LayoutError::Misaligned {
                    semantic: attr.semantic,
                    offset: attr.offset,
                    align,
                });
            }
            if attr.fetch_end() > self.stride {
                return Err(LayoutError::OutOfBounds {
                    semantic: attr.semantic,
                    end: attr.fetch_end(),
                    stride: self.stride,
                });
            }
        }

        for (i, a) in self.attributes.iter().enumerate() {
            for b in &self.attributes[i + 1..] {
                if a.semantic == b.semantic {
                    return Err(LayoutError::DuplicateSemantic(a.semantic));
                }
                if a.offset < b.end() && b.offset < a.end() {
                    return Err(LayoutError::Overlap { first: a.semantic, second: b.semantic });
                }
            }
        }

        log::trace!(
            "vertex layout ok: stride={} attributes={}",
            self.stride,
            self.attributes.len()
        );
        Ok(())
    }

    /// Bytes of the stride no attribute covers.
    pub fn unused_bytes(&self) -> usize {
        let used: usize = self.attributes.iter().map(|a| a.format.size()).sum();
        self.stride.saturating_sub(used)
    }
}

/// Verifies a type's host size at runtime.
///
/// The records in this crate are already checked at compile time; this is for
/// startup checks against sizes that come from elsewhere (e.g. shader
/// reflection).
pub fn verify_size<T>(expected: usize) -> Result<(), LayoutError> {
    let actual = std::mem::size_of::<T>();
    if actual != expected {
        Err(LayoutError::SizeMismatch {
            type_name: std::any::type_name::<T>(),
            actual,
            expected,
        })
    } else {
        Ok(())
    }
}
