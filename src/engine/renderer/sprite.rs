// Sprite rendering system

use super::texture::{Texture, TextureHandle, TextureManager};
use super::vertex::{mesh_for, InstanceRaw, Quad, Vertex, QUAD_VERTEX_COUNT};
use super::CameraUniform;
use crate::engine::assets::UvRect;
use glam::Mat4;
use log::warn;
use wgpu::util::DeviceExt;

/// One textured quad to draw this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteDraw {
    /// Texture to sample from
    pub texture: TextureHandle,
    /// Model transform applied to the quad
    pub model: Mat4,
    /// Quad geometry in model space
    pub quad: Quad,
    /// Region of the texture to show
    pub uv: UvRect,
}

impl SpriteDraw {
    /// Vertices for this sprite in model space
    pub fn mesh(&self) -> [Vertex; 6] {
        mesh_for(self.quad, self.uv)
    }
}

/// Sprites queued for the current frame, in draw order
#[derive(Debug, Default)]
pub struct DrawList {
    sprites: Vec<SpriteDraw>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a sprite (later sprites draw on top)
    pub fn push(&mut self, sprite: SpriteDraw) {
        self.sprites.push(sprite);
    }

    /// Clear all sprites
    pub fn clear(&mut self) {
        self.sprites.clear();
    }

    /// Queued sprites
    pub fn sprites(&self) -> &[SpriteDraw] {
        &self.sprites
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    /// Flatten all queued quads into one vertex array
    pub fn vertices(&self) -> Vec<Vertex> {
        self.sprites.iter().flat_map(|sprite| sprite.mesh()).collect()
    }

    /// One model matrix per queued quad
    pub fn instances(&self) -> Vec<InstanceRaw> {
        self.sprites
            .iter()
            .map(|sprite| InstanceRaw::new(sprite.model))
            .collect()
    }
}

/// GPU buffers built from a draw list for a single frame
pub struct FrameBuffers {
    vertex_buffer: wgpu::Buffer,
    instance_buffer: wgpu::Buffer,
}

/// Sprite renderer drawing each queued quad as one instance
pub struct SpriteRenderer {
    render_pipeline: wgpu::RenderPipeline,
    camera_buffer: wgpu::Buffer,
    camera_bind_group: wgpu::BindGroup,
}

impl SpriteRenderer {
    /// Create a new sprite renderer
    pub fn new(
        device: &wgpu::Device,
        config: &wgpu::SurfaceConfiguration,
        texture_bind_group_layout: &wgpu::BindGroupLayout,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Sprite Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/sprite.wgsl").into()),
        });

        let camera_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Camera Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Sprite Pipeline Layout"),
            bind_group_layouts: &[&camera_bind_group_layout, texture_bind_group_layout],
            push_constant_ranges: &[],
        });

        let render_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Sprite Render Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: "vs_main",
                buffers: &[Vertex::desc(), InstanceRaw::desc()],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: "fs_main",
                targets: &[Some(wgpu::ColorTargetState {
                    format: config.format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: Some(wgpu::Face::Back),
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
        });

        let camera_uniform = CameraUniform {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
        };

        let camera_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Camera Buffer"),
            contents: bytemuck::cast_slice(&[camera_uniform]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let camera_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Camera Bind Group"),
            layout: &camera_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: camera_buffer.as_entire_binding(),
            }],
        });

        Self {
            render_pipeline,
            camera_buffer,
            camera_bind_group,
        }
    }

    /// Upload the frame's quads. Returns `None` when there is nothing to draw.
    pub fn prepare(&self, device: &wgpu::Device, draws: &DrawList) -> Option<FrameBuffers> {
        if draws.is_empty() {
            return None;
        }

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Sprite Vertex Buffer"),
            contents: bytemuck::cast_slice(&draws.vertices()),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let instance_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Sprite Instance Buffer"),
            contents: bytemuck::cast_slice(&draws.instances()),
            usage: wgpu::BufferUsages::VERTEX,
        });

        Some(FrameBuffers {
            vertex_buffer,
            instance_buffer,
        })
    }

    /// Record draw calls for every queued sprite
    pub fn render<'a>(
        &'a self,
        render_pass: &mut wgpu::RenderPass<'a>,
        buffers: &'a FrameBuffers,
        draws: &DrawList,
        textures: &'a TextureManager,
    ) {
        render_pass.set_pipeline(&self.render_pipeline);
        render_pass.set_bind_group(0, &self.camera_bind_group, &[]);
        render_pass.set_vertex_buffer(0, buffers.vertex_buffer.slice(..));
        render_pass.set_vertex_buffer(1, buffers.instance_buffer.slice(..));

        for (i, sprite) in draws.sprites().iter().enumerate() {
            let Some(texture) = textures.get(sprite.texture) else {
                warn!("Skipping sprite with unknown texture {:?}", sprite.texture);
                continue;
            };
            Self::draw_quad(render_pass, texture, i as u32);
        }
    }

    fn draw_quad<'a>(render_pass: &mut wgpu::RenderPass<'a>, texture: &'a Texture, index: u32) {
        let first_vertex = index * QUAD_VERTEX_COUNT;
        render_pass.set_bind_group(1, &texture.bind_group, &[]);
        render_pass.draw(first_vertex..first_vertex + QUAD_VERTEX_COUNT, index..index + 1);
    }

    /// Get a reference to the camera buffer
    pub fn camera_buffer(&self) -> &wgpu::Buffer {
        &self.camera_buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::assets::AtlasGrid;
    use glam::Vec3;

    fn draw(texture: usize, x: f32) -> SpriteDraw {
        SpriteDraw {
            texture: TextureHandle(texture),
            model: Mat4::from_translation(Vec3::new(x, 0.0, 0.0)),
            quad: Quad::UNIT,
            uv: UvRect::FULL,
        }
    }

    #[test]
    fn test_draw_list_keeps_order() {
        let mut list = DrawList::new();
        assert!(list.is_empty());

        list.push(draw(0, 1.0));
        list.push(draw(1, 2.0));

        assert_eq!(list.len(), 2);
        assert_eq!(list.sprites()[0].texture, TextureHandle(0));
        assert_eq!(list.sprites()[1].texture, TextureHandle(1));
    }

    #[test]
    fn test_vertices_six_per_sprite() {
        let mut list = DrawList::new();
        list.push(draw(0, 0.0));
        list.push(SpriteDraw {
            uv: AtlasGrid::new(6, 1).frame_uv(3),
            ..draw(1, 0.0)
        });

        let vertices = list.vertices();
        assert_eq!(vertices.len(), 12);
        assert_eq!(&vertices[6..], &list.sprites()[1].mesh()[..]);
    }

    #[test]
    fn test_instances_carry_model_matrix() {
        let mut list = DrawList::new();
        list.push(draw(0, 3.0));

        let instances = list.instances();
        assert_eq!(instances.len(), 1);
        assert_eq!(instances[0].model[3][0], 3.0);
    }

    #[test]
    fn test_clear() {
        let mut list = DrawList::new();
        list.push(draw(0, 0.0));
        list.clear();
        assert!(list.is_empty());
    }
}
