// Texture loading and management system

use crate::engine::assets::AssetLoader;
use anyhow::Result;
use image::GenericImageView;
use log::info;
use std::collections::HashMap;

/// Handle to a loaded texture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub(crate) usize);

impl TextureHandle {
    /// Position of the texture in its manager
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A loaded texture with GPU resources
pub struct Texture {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub sampler: wgpu::Sampler,
    pub bind_group: wgpu::BindGroup,
    pub width: u32,
    pub height: u32,
}

impl Texture {
    /// Bind group layout shared by every sprite texture (group 1 in the sprite shader)
    pub fn bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
        device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Texture Bind Group Layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        multisampled: false,
                        view_dimension: wgpu::TextureViewDimension::D2,
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        })
    }

    /// Create a texture from a decoded image
    pub fn from_image(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        layout: &wgpu::BindGroupLayout,
        img: &image::DynamicImage,
        label: Option<&str>,
    ) -> Self {
        let rgba = img.to_rgba8();
        let dimensions = img.dimensions();
        Self::from_rgba(device, queue, layout, &rgba, dimensions, label)
    }

    /// Create a solid color texture
    pub fn from_color(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        layout: &wgpu::BindGroupLayout,
        color: [u8; 4],
        label: Option<&str>,
    ) -> Self {
        Self::from_rgba(device, queue, layout, &color, (1, 1), label)
    }

    fn from_rgba(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        layout: &wgpu::BindGroupLayout,
        rgba: &[u8],
        dimensions: (u32, u32),
        label: Option<&str>,
    ) -> Self {
        let size = wgpu::Extent3d {
            width: dimensions.0,
            height: dimensions.1,
            depth_or_array_layers: 1,
        };

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label,
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        queue.write_texture(
            wgpu::ImageCopyTexture {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            rgba,
            wgpu::ImageDataLayout {
                offset: 0,
                bytes_per_row: Some(4 * dimensions.0),
                rows_per_image: Some(dimensions.1),
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        // Pixel art: no filtering between texels
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Nearest,
            min_filter: wgpu::FilterMode::Nearest,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label,
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&sampler),
                },
            ],
        });

        Self {
            texture,
            view,
            sampler,
            bind_group,
            width: dimensions.0,
            height: dimensions.1,
        }
    }
}

/// Manages texture loading and caching
pub struct TextureManager {
    loader: AssetLoader,
    bind_group_layout: wgpu::BindGroupLayout,
    textures: Vec<Texture>,
    path_to_handle: HashMap<String, TextureHandle>,
}

impl TextureManager {
    /// Create a new texture manager reading assets through `loader`
    pub fn new(device: &wgpu::Device, loader: AssetLoader) -> Self {
        Self {
            loader,
            bind_group_layout: Texture::bind_group_layout(device),
            textures: Vec::new(),
            path_to_handle: HashMap::new(),
        }
    }

    /// Load a texture from an asset path
    pub fn load_texture(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        name: &str,
    ) -> Result<TextureHandle> {
        // Check if already loaded
        if let Some(&handle) = self.path_to_handle.get(name) {
            return Ok(handle);
        }

        let img = self.loader.load_image(name)?;
        let texture = Texture::from_image(device, queue, &self.bind_group_layout, &img, Some(name));
        info!("Loaded texture {} ({}x{})", name, texture.width, texture.height);

        let handle = self.push(texture);
        self.path_to_handle.insert(name.to_string(), handle);

        Ok(handle)
    }

    /// Create a solid color texture
    pub fn create_color_texture(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        color: [u8; 4],
        label: &str,
    ) -> TextureHandle {
        let texture = Texture::from_color(device, queue, &self.bind_group_layout, color, Some(label));
        self.push(texture)
    }

    fn push(&mut self, texture: Texture) -> TextureHandle {
        let handle = TextureHandle(self.textures.len());
        self.textures.push(texture);
        handle
    }

    /// Get a texture by handle
    pub fn get(&self, handle: TextureHandle) -> Option<&Texture> {
        self.textures.get(handle.index())
    }

    /// Layout every texture bind group is created against
    pub fn bind_group_layout(&self) -> &wgpu::BindGroupLayout {
        &self.bind_group_layout
    }

    /// Get the number of loaded textures
    pub fn texture_count(&self) -> usize {
        self.textures.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Texture creation needs a GPU device; only the handle is testable here.

    #[test]
    fn test_handle_index() {
        let handle = TextureHandle(3);
        assert_eq!(handle.index(), 3);
        assert_eq!(handle, TextureHandle(3));
        assert_ne!(handle, TextureHandle(4));
    }
}
