// The player-controlled lander

use super::animation::SpriteAnimator;
use super::config::LanderConfig;
use super::state::RenderState;
use crate::core::math::{clamp, heading, within_distance};
use crate::engine::assets::UvRect;
use crate::engine::renderer::{DrawList, SpriteDraw, TextureHandle};
use glam::{Mat4, Vec2, Vec3};

/// Textures for each render state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanderTextures {
    /// Single-frame sprite shown with the engine off
    pub idle: TextureHandle,
    /// Thrust animation sheet
    pub moving: TextureHandle,
}

/// Ship falling under gravity, steered by rotation and thrust
#[derive(Debug, Clone)]
pub struct Lander {
    config: LanderConfig,

    // Kinematics
    position: Vec2,
    velocity: Vec2,
    /// Facing angle in degrees, counter-clockwise from up
    angle: f32,
    accelerating: bool,

    // Rendering
    animator: SpriteAnimator,
    model_matrix: Mat4,
    textures: Option<LanderTextures>,
}

impl Lander {
    /// Create a lander at the configured spawn point and velocity
    pub fn new(config: LanderConfig) -> Self {
        let mut lander = Self {
            config,
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            angle: 0.0,
            accelerating: false,
            animator: SpriteAnimator::new(config.atlas, config.frame_advance),
            model_matrix: Mat4::IDENTITY,
            textures: None,
        };
        lander.set_position(config.spawn_position);
        lander.set_velocity(config.spawn_velocity);
        lander
    }

    /// Attach the textures used by [`Lander::render`]
    pub fn set_textures(&mut self, textures: LanderTextures) {
        self.textures = Some(textures);
    }

    pub fn config(&self) -> &LanderConfig {
        &self.config
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Move the lander, keeping its velocity
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
        self.update_model_matrix();
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Replace the velocity. Clamping happens on the next update.
    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn is_accelerating(&self) -> bool {
        self.accelerating
    }

    pub fn set_accelerating(&mut self, accelerating: bool) {
        self.accelerating = accelerating;
    }

    pub fn render_state(&self) -> RenderState {
        RenderState::from_accelerating(self.accelerating)
    }

    /// Current thrust animation frame
    pub fn animation_frame(&self) -> usize {
        self.animator.current_frame()
    }

    pub fn model_matrix(&self) -> Mat4 {
        self.model_matrix
    }

    /// Turn counter-clockwise by one rotation step
    pub fn rotate_left(&mut self) {
        self.angle += self.config.rotation_step;
    }

    /// Turn clockwise by one rotation step
    pub fn rotate_right(&mut self) {
        self.angle -= self.config.rotation_step;
    }

    /// Acceleration added by the engine at the current angle
    pub fn thrust_vector(&self) -> Vec2 {
        heading(self.angle) * self.config.thrust
    }

    /// Advance kinematics by `dt` seconds
    pub fn update(&mut self, dt: f32) {
        if self.accelerating {
            self.velocity += self.thrust_vector();
        }
        self.velocity += self.config.gravity;
        self.velocity = self.clamp_velocity(self.velocity);

        self.position += self.velocity * self.config.speed_scale * dt;
        self.update_model_matrix();
    }

    fn clamp_velocity(&self, velocity: Vec2) -> Vec2 {
        let (min_x, max_x) = self.config.horizontal_bounds();
        let (min_y, max_y) = self.config.vertical_bounds();
        Vec2::new(clamp(velocity.x, min_x, max_x), clamp(velocity.y, min_y, max_y))
    }

    fn update_model_matrix(&mut self) {
        let rotation = (self.config.base_rotation + self.angle).to_radians();
        self.model_matrix = Mat4::from_translation(Vec3::new(self.position.x, self.position.y, 0.0))
            * Mat4::from_rotation_z(rotation);
    }

    /// Whether the lander is close enough to touch `target`
    pub fn check_collision(&self, target: Vec2) -> bool {
        within_distance(self.position, target, self.config.collision_distance)
    }

    /// Queue this frame's sprite. Without textures nothing is drawn.
    pub fn render(&mut self, draws: &mut DrawList, dt: f32) {
        let Some(textures) = self.textures else {
            return;
        };

        match self.render_state() {
            RenderState::Idle => draws.push(SpriteDraw {
                texture: textures.idle,
                model: self.model_matrix,
                quad: self.config.quad,
                uv: UvRect::FULL,
            }),
            RenderState::Accelerating => {
                draws.push(SpriteDraw {
                    texture: textures.moving,
                    model: self.model_matrix,
                    quad: self.config.quad,
                    uv: self.animator.current_uv(),
                });
                self.animator.advance(dt);
            }
        }
    }
}
