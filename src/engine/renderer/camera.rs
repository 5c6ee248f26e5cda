// Orthographic camera for 2D rendering

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2};

/// Default visible half height in world units
pub const DEFAULT_HALF_HEIGHT: f32 = 3.75;

/// 2D camera looking at a fixed-height slice of the world
#[derive(Debug, Clone)]
pub struct Camera {
    /// Camera position in world space
    pub position: Vec2,
    /// Half of the visible height in world units
    half_height: f32,
    /// Viewport width / height
    aspect: f32,
    /// View-projection matrix
    view_proj: Mat4,
}

impl Camera {
    /// Create a camera for a viewport of the given pixel size
    pub fn new(position: Vec2, viewport_width: f32, viewport_height: f32) -> Self {
        let mut camera = Self {
            position,
            half_height: DEFAULT_HALF_HEIGHT,
            aspect: Self::aspect_of(viewport_width, viewport_height),
            view_proj: Mat4::IDENTITY,
        };
        camera.update_view_proj();
        camera
    }

    fn aspect_of(width: f32, height: f32) -> f32 {
        if width > 0.0 && height > 0.0 {
            width / height
        } else {
            1.0
        }
    }

    /// Update the view-projection matrix
    fn update_view_proj(&mut self) {
        let half = self.half_extents();

        self.view_proj = Mat4::orthographic_rh(
            self.position.x - half.x,
            self.position.x + half.x,
            self.position.y - half.y,
            self.position.y + half.y,
            -1.0,
            1.0,
        );
    }

    /// Resize the viewport, keeping the visible height fixed
    pub fn resize(&mut self, width: f32, height: f32) {
        self.aspect = Self::aspect_of(width, height);
        self.update_view_proj();
    }

    /// Half width and half height of the visible area in world units
    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.half_height * self.aspect, self.half_height)
    }

    /// Get the view-projection matrix
    pub fn view_proj_matrix(&self) -> Mat4 {
        self.view_proj
    }
}

/// Camera uniform for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    /// Create a new camera uniform from a camera
    pub fn new(camera: &Camera) -> Self {
        Self {
            view_proj: camera.view_proj_matrix().to_cols_array_2d(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use glam::Vec4;

    #[test]
    fn test_lander_window_sees_ten_by_seven_and_a_half() {
        let camera = Camera::new(Vec2::ZERO, 1280.0, 960.0);
        let half = camera.half_extents();

        assert_abs_diff_eq!(half.x, 5.0, epsilon = 1e-5);
        assert_abs_diff_eq!(half.y, 3.75);
    }

    #[test]
    fn test_corner_maps_to_clip_edge() {
        let camera = Camera::new(Vec2::ZERO, 1280.0, 960.0);
        let clip = camera.view_proj_matrix() * Vec4::new(5.0, 3.75, 0.0, 1.0);

        assert_abs_diff_eq!(clip.x, 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(clip.y, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_resize_keeps_height() {
        let mut camera = Camera::new(Vec2::ZERO, 1280.0, 960.0);
        camera.resize(1920.0, 960.0);

        let half = camera.half_extents();
        assert_abs_diff_eq!(half.y, 3.75);
        assert_abs_diff_eq!(half.x, 7.5);
    }

    #[test]
    fn test_zero_sized_viewport_is_safe() {
        let camera = Camera::new(Vec2::ZERO, 0.0, 0.0);
        assert!(camera.view_proj_matrix().is_finite());
    }

    #[test]
    fn test_camera_uniform_matches_matrix() {
        let camera = Camera::new(Vec2::new(1.0, -2.0), 640.0, 480.0);
        let uniform = CameraUniform::new(&camera);
        assert_eq!(uniform.view_proj, camera.view_proj_matrix().to_cols_array_2d());
    }
}
