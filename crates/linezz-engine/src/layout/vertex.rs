use bytemuck::{Pod, Zeroable};

use super::{
    LayoutError, PackedFloat2, PackedFloat3, PackedHalf3, VertexAttributeDesc, VertexFormat,
    VertexLayout, VertexSemantic,
};

/// One vertex of a solid-brush stroke mesh (56 bytes).
///
///  offset  0  position             packed_float3   loc 0
///  offset 12  normal               packed_float3   loc 1
///  offset 24  bitangent            packed_float3   loc 2
///  offset 36  material_properties  packed_float2   loc 3  (.x = roughness, .y = metallic)
///  offset 44  curve_distance       float           loc 4
///  offset 48  color                packed_half3    loc 5
///  offset 54  _pad                 2 bytes
///
/// Shader-side equivalent:
/// ```metal
/// struct SolidBrushVertex {
///     packed_float3 position;
///     packed_float3 normal;
///     packed_float3 bitangent;
///     packed_float2 materialProperties;
///     float curveDistance;
///     packed_half3 color;
/// };
/// ```
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct SolidBrushVertex {
    pub position: PackedFloat3,
    /// Expected to be unit length.
    pub normal: PackedFloat3,
    /// Together with `normal`, spans the stroke's local frame.
    pub bitangent: PackedFloat3,
    pub material_properties: PackedFloat2,
    /// Arclength along the stroke curve; unbounded.
    pub curve_distance: f32,
    pub color: PackedHalf3,
    _pad: [u8; 2],
}

assert_layout!(SolidBrushVertex, size = 56, align = 4);
assert_offset!(SolidBrushVertex, position, 0);
assert_offset!(SolidBrushVertex, normal, 12);
assert_offset!(SolidBrushVertex, bitangent, 24);
assert_offset!(SolidBrushVertex, material_properties, 36);
assert_offset!(SolidBrushVertex, curve_distance, 44);
assert_offset!(SolidBrushVertex, color, 48);

impl SolidBrushVertex {
    pub const STRIDE: usize = std::mem::size_of::<SolidBrushVertex>();

    /// Attribute table as handed to the mesh consumer.
    pub const ATTRIBUTES: [VertexAttributeDesc; 6] = [
        VertexAttributeDesc::new(
            VertexSemantic::Position,
            VertexFormat::Float3,
            std::mem::offset_of!(SolidBrushVertex, position),
        ),
        VertexAttributeDesc::new(
            VertexSemantic::Normal,
            VertexFormat::Float3,
            std::mem::offset_of!(SolidBrushVertex, normal),
        ),
        VertexAttributeDesc::new(
            VertexSemantic::Bitangent,
            VertexFormat::Float3,
            std::mem::offset_of!(SolidBrushVertex, bitangent),
        ),
        VertexAttributeDesc::new(
            VertexSemantic::Uv1,
            VertexFormat::Float2,
            std::mem::offset_of!(SolidBrushVertex, material_properties),
        ),
        VertexAttributeDesc::new(
            VertexSemantic::Uv2,
            VertexFormat::Float,
            std::mem::offset_of!(SolidBrushVertex, curve_distance),
        ),
        VertexAttributeDesc::new(
            VertexSemantic::Color,
            VertexFormat::Half3,
            std::mem::offset_of!(SolidBrushVertex, color),
        ),
    ];

    pub const LAYOUT: VertexLayout<'static> = VertexLayout::new(Self::STRIDE, &Self::ATTRIBUTES);

    const WGPU_ATTRIBUTES: [wgpu::VertexAttribute; 6] = wgpu::vertex_attr_array![
        0 => Float32x3, // position
        1 => Float32x3, // normal
        2 => Float32x3, // bitangent
        3 => Float32x2, // material_properties
        4 => Float32,   // curve_distance
        5 => Float16x4  // color (.w reads _pad)
    ];

    pub fn new(
        position: [f32; 3],
        normal: [f32; 3],
        bitangent: [f32; 3],
        roughness: f32,
        metallic: f32,
        curve_distance: f32,
        color: [f32; 3],
    ) -> Self {
        Self {
            position: position.into(),
            normal: normal.into(),
            bitangent: bitangent.into(),
            material_properties: PackedFloat2::new(roughness, metallic),
            curve_distance,
            color: PackedHalf3::from_f32(color),
            _pad: [0; 2],
        }
    }

    #[inline]
    pub fn roughness(&self) -> f32 {
        self.material_properties.0[0]
    }

    #[inline]
    pub fn metallic(&self) -> f32 {
        self.material_properties.0[1]
    }

    #[inline]
    pub fn color_f32(&self) -> [f32; 3] {
        self.color.to_f32()
    }

    /// Vertex buffer layout for a `wgpu` render pipeline.
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: Self::STRIDE as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::WGPU_ATTRIBUTES,
        }
    }
}

/// Reinterprets a vertex slice as the bytes the GPU will fetch.
#[inline]
pub fn as_bytes(vertices: &[SolidBrushVertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

/// Decodes a tightly packed vertex buffer.
///
/// `bytes` may have any alignment.
pub fn read_vertices(bytes: &[u8]) -> Result<Vec<SolidBrushVertex>, LayoutError> {
    let stride = SolidBrushVertex::STRIDE;
    if bytes.len() % stride != 0 {
        return Err(LayoutError::TruncatedBuffer { len: bytes.len(), stride });
    }
    Ok(bytes
        .chunks_exact(stride)
        .map(bytemuck::pod_read_unaligned::<SolidBrushVertex>)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(curve_distance: f32) -> SolidBrushVertex {
        SolidBrushVertex::new(
            [1.0, 2.0, 3.0],
            [0.0, 1.0, 0.0],
            [1.0, 0.0, 0.0],
            0.25,
            0.75,
            curve_distance,
            [1.0, 0.5, 0.0],
        )
    }

    // ── layout ────────────────────────────────────────────────────────────

    #[test]
    fn record_is_56_bytes_with_4_byte_alignment() {
        assert_eq!(std::mem::size_of::<SolidBrushVertex>(), 56);
        assert_eq!(std::mem::align_of::<SolidBrushVertex>(), 4);
    }

    #[test]
    fn attribute_offsets_match_the_wire_format() {
        let offsets: Vec<usize> = SolidBrushVertex::ATTRIBUTES.iter().map(|a| a.offset).collect();
        assert_eq!(offsets, [0, 12, 24, 36, 44, 48]);
    }

    #[test]
    fn attribute_table_validates() {
        assert_eq!(SolidBrushVertex::LAYOUT.validate(), Ok(()));
        // Only the trailing pad is uncovered.
        assert_eq!(SolidBrushVertex::LAYOUT.unused_bytes(), 2);
    }

    #[test]
    fn fields_land_at_their_byte_offsets() {
        let v = sample(9.5);
        let bytes = bytemuck::bytes_of(&v);
        assert_eq!(&bytes[12..16], &0.0f32.to_ne_bytes());
        assert_eq!(&bytes[16..20], &1.0f32.to_ne_bytes());
        assert_eq!(&bytes[36..40], &0.25f32.to_ne_bytes());
        assert_eq!(&bytes[44..48], &9.5f32.to_ne_bytes());
        // half 1.0 = 0x3C00
        assert_eq!(&bytes[48..50], &0x3C00u16.to_ne_bytes());
        assert_eq!(&bytes[54..56], &[0u8, 0]);
    }

    // ── wgpu ──────────────────────────────────────────────────────────────

    #[test]
    fn wgpu_layout_mirrors_attribute_table() {
        let desc = SolidBrushVertex::desc();
        assert_eq!(desc.array_stride, 56);
        assert_eq!(desc.step_mode, wgpu::VertexStepMode::Vertex);
        assert_eq!(desc.attributes.len(), SolidBrushVertex::ATTRIBUTES.len());

        for (location, (gpu, attr)) in desc
            .attributes
            .iter()
            .zip(SolidBrushVertex::ATTRIBUTES.iter())
            .enumerate()
        {
            assert_eq!(gpu.shader_location as usize, location);
            assert_eq!(gpu.offset as usize, attr.offset, "{:?}", attr.semantic);
            assert_eq!(gpu.format, attr.format.to_wgpu());
            assert!(gpu.offset + gpu.format.size() <= desc.array_stride);
        }
    }

    // ── byte codec ────────────────────────────────────────────────────────

    #[test]
    fn buffer_bytes_decode_to_the_same_vertices() {
        let vertices = [sample(0.0), sample(1.5), sample(3.0)];
        let bytes = as_bytes(&vertices);
        assert_eq!(bytes.len(), 3 * 56);

        let decoded = read_vertices(bytes).unwrap();
        assert_eq!(decoded, vertices);
        assert_eq!(decoded[1].curve_distance, 1.5);
        assert_eq!(decoded[1].roughness(), 0.25);
        assert_eq!(decoded[1].metallic(), 0.75);
        assert_eq!(decoded[1].color_f32(), [1.0, 0.5, 0.0]);
    }

    #[test]
    fn unaligned_input_decodes() {
        let vertices = [sample(2.0)];
        let mut shifted = vec![0u8];
        shifted.extend_from_slice(as_bytes(&vertices));
        let decoded = read_vertices(&shifted[1..]).unwrap();
        assert_eq!(decoded[0], vertices[0]);
    }

    #[test]
    fn truncated_buffer_is_rejected() {
        let vertices = [sample(0.0), sample(1.0)];
        let bytes = as_bytes(&vertices);
        let err = read_vertices(&bytes[..100]).unwrap_err();
        assert_eq!(err, LayoutError::TruncatedBuffer { len: 100, stride: 56 });
    }

    #[test]
    fn empty_buffer_is_no_vertices() {
        assert!(read_vertices(&[]).unwrap().is_empty());
    }
}
