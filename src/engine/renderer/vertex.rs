// Vertex structures and quad mesh construction for 2D sprites

use crate::engine::assets::UvRect;
use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2};

/// Number of vertices in a sprite quad (two triangles, no index buffer)
pub const QUAD_VERTEX_COUNT: u32 = 6;

/// Vertex for 2D sprite rendering
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    /// Position in model space
    pub position: [f32; 2],
    /// Texture coordinates (UV)
    pub tex_coords: [f32; 2],
}

impl Vertex {
    /// Create a new vertex
    pub fn new(position: Vec2, tex_coords: Vec2) -> Self {
        Self {
            position: position.to_array(),
            tex_coords: tex_coords.to_array(),
        }
    }

    /// Get the vertex buffer layout descriptor
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                // Position
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                // Tex Coords
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x2,
                },
            ],
        }
    }
}

/// Per-draw model matrix, uploaded as instance data
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct InstanceRaw {
    pub model: [[f32; 4]; 4],
}

impl InstanceRaw {
    pub fn new(model: Mat4) -> Self {
        Self {
            model: model.to_cols_array_2d(),
        }
    }

    const ATTRIBS: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
        2 => Float32x4,
        3 => Float32x4,
        4 => Float32x4,
        5 => Float32x4,
    ];

    /// Instance buffer layout: one vec4 per matrix column at locations 2..=5
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<InstanceRaw>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBS,
        }
    }
}

/// An axis-aligned rectangle centred on the model origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    /// Half width and half height in world units
    pub half_extents: Vec2,
}

impl Quad {
    /// Unit square from -0.5 to 0.5
    pub const UNIT: Quad = Quad {
        half_extents: Vec2::splat(0.5),
    };

    /// Square quad with the given half extent
    pub const fn square(half_extent: f32) -> Self {
        Self {
            half_extents: Vec2::splat(half_extent),
        }
    }
}

impl Default for Quad {
    fn default() -> Self {
        Self::UNIT
    }
}

/// Build the two counter-clockwise triangles for `quad`, textured with `uv`.
///
/// UV origin is the top-left of the image, so the quad's bottom edge samples
/// `uv.max().y`.
pub fn mesh_for(quad: Quad, uv: UvRect) -> [Vertex; 6] {
    let h = quad.half_extents;
    let (u0, v0) = (uv.min().x, uv.min().y);
    let (u1, v1) = (uv.max().x, uv.max().y);

    let bottom_left = Vertex::new(Vec2::new(-h.x, -h.y), Vec2::new(u0, v1));
    let bottom_right = Vertex::new(Vec2::new(h.x, -h.y), Vec2::new(u1, v1));
    let top_right = Vertex::new(Vec2::new(h.x, h.y), Vec2::new(u1, v0));
    let top_left = Vertex::new(Vec2::new(-h.x, h.y), Vec2::new(u0, v0));

    [
        bottom_left,
        bottom_right,
        top_right,
        bottom_left,
        top_right,
        top_left,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::assets::AtlasGrid;

    #[test]
    fn test_vertex_layout_size() {
        assert_eq!(std::mem::size_of::<Vertex>(), 16);
        assert_eq!(std::mem::size_of::<InstanceRaw>(), 64);
    }

    #[test]
    fn test_unit_quad_full_texture() {
        let mesh = mesh_for(Quad::UNIT, UvRect::FULL);

        assert_eq!(mesh[0], Vertex::new(Vec2::new(-0.5, -0.5), Vec2::new(0.0, 1.0)));
        assert_eq!(mesh[1], Vertex::new(Vec2::new(0.5, -0.5), Vec2::new(1.0, 1.0)));
        assert_eq!(mesh[2], Vertex::new(Vec2::new(0.5, 0.5), Vec2::new(1.0, 0.0)));
        assert_eq!(mesh[3], mesh[0]);
        assert_eq!(mesh[4], mesh[2]);
        assert_eq!(mesh[5], Vertex::new(Vec2::new(-0.5, 0.5), Vec2::new(0.0, 0.0)));
    }

    #[test]
    fn test_atlas_frame_uvs_map_to_cell() {
        let uv = AtlasGrid::new(4, 1).frame_uv(2);
        let mesh = mesh_for(Quad::UNIT, uv);

        assert_eq!(mesh[0].tex_coords, [0.5, 1.0]);
        assert_eq!(mesh[2].tex_coords, [0.75, 0.0]);
    }

    #[test]
    fn test_triangles_are_counter_clockwise() {
        let mesh = mesh_for(Quad::square(0.8), UvRect::FULL);
        for tri in mesh.chunks(3) {
            let a = Vec2::from(tri[0].position);
            let b = Vec2::from(tri[1].position);
            let c = Vec2::from(tri[2].position);
            assert!((b - a).perp_dot(c - a) > 0.0);
        }
    }

    #[test]
    fn test_instance_from_matrix() {
        let model = Mat4::from_translation(glam::Vec3::new(1.0, 2.0, 0.0));
        let raw = InstanceRaw::new(model);
        assert_eq!(raw.model[3], [1.0, 2.0, 0.0, 1.0]);
    }
}
