// Lunar Lander game state: one lander, a row of boxes and the round outcome

use super::lander::{
    default_layout, BoxObstacle, ConfigError, GameOutcome, Lander, LanderConfig, LanderTextures,
    ObstacleKind, RenderState,
};
use crate::engine::app::{AppFlow, Game, WindowSettings};
use crate::engine::assets::{AtlasGrid, UvRect};
use crate::engine::input::{Action, InputManager};
use crate::engine::renderer::{DrawList, Quad, Renderer, SpriteDraw, TextureHandle};
use anyhow::{Context, Result};
use glam::Vec4;
use log::{debug, info, warn};

/// Ship sprite with the engine off
pub const SHIP_IDLE_SPRITE: &str = "sprites/ship_idle.png";
/// Ship thrust animation sheet
pub const SHIP_MOVING_SPRITE: &str = "sprites/ship_move.png";

/// Bottom edge of the view; falling past it loses the round
pub const BOTTOM_EDGE: f32 = -3.75;

const GOAL_COLOR: [u8; 4] = [40, 180, 60, 255];
const HAZARD_COLOR: [u8; 4] = [200, 40, 40, 255];

const PLAYING_BACKGROUND: Vec4 = Vec4::ONE;
const WON_BACKGROUND: Vec4 = Vec4::new(0.85, 1.0, 0.85, 1.0);
const LOST_BACKGROUND: Vec4 = Vec4::new(1.0, 0.85, 0.85, 1.0);

#[derive(Debug, Clone, Copy)]
struct BoxTextures {
    goal: TextureHandle,
    hazard: TextureHandle,
}

/// Owned state of a Lunar Lander round
#[derive(Debug)]
pub struct LanderGame {
    lander: Lander,
    obstacles: Vec<BoxObstacle>,
    outcome: GameOutcome,
    box_textures: Option<BoxTextures>,
}

impl LanderGame {
    /// New round with the default box layout
    pub fn new(config: LanderConfig) -> Result<Self, ConfigError> {
        Self::with_obstacles(config, default_layout())
    }

    /// New round with a custom set of boxes
    pub fn with_obstacles(
        config: LanderConfig,
        obstacles: Vec<BoxObstacle>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            lander: Lander::new(config),
            obstacles,
            outcome: GameOutcome::Playing,
            box_textures: None,
        })
    }

    /// Apply held controls to the lander. Ignored once the round is over.
    pub fn apply_input(&mut self, input: &InputManager) {
        if self.outcome.is_over() {
            return;
        }

        if input.is_pressed(Action::RotateLeft) {
            self.lander.rotate_left();
        }
        if input.is_pressed(Action::RotateRight) {
            self.lander.rotate_right();
        }

        let accelerating = input.is_pressed(Action::Thrust);
        if accelerating != self.lander.is_accelerating() {
            debug!(
                "Lander render state -> {:?} at frame {}",
                RenderState::from_accelerating(accelerating),
                self.lander.animation_frame()
            );
        }
        self.lander.set_accelerating(accelerating);
    }

    /// Advance the lander and resolve contacts. Does nothing once the round is over.
    pub fn step(&mut self, dt: f32) {
        if self.outcome.is_over() {
            return;
        }

        self.lander.update(dt);

        let hit = self
            .obstacles
            .iter()
            .find(|obstacle| self.lander.check_collision(obstacle.position()))
            .map(|obstacle| obstacle.kind());

        self.outcome = self.outcome.after_contact(hit);
        if !self.outcome.is_over() && self.lander.position().y < BOTTOM_EDGE {
            self.outcome = GameOutcome::Lost;
        }
        if self.outcome.is_over() {
            self.lander.set_accelerating(false);
            let position = self.lander.position();
            let verb = match self.outcome {
                GameOutcome::Won => "Landed",
                _ => "Crashed",
            };
            info!(
                "{} at ({:.2}, {:.2}) heading {:.0} degrees",
                verb,
                position.x,
                position.y,
                self.lander.angle()
            );
        }
    }

    /// Queue boxes, then the lander on top
    pub fn draw(&mut self, draws: &mut DrawList, dt: f32) {
        if let Some(textures) = self.box_textures {
            for obstacle in &self.obstacles {
                let texture = match obstacle.kind() {
                    ObstacleKind::Goal => textures.goal,
                    ObstacleKind::Hazard => textures.hazard,
                };
                draws.push(SpriteDraw {
                    texture,
                    model: obstacle.model_matrix(),
                    quad: Quad::UNIT,
                    uv: UvRect::FULL,
                });
            }
        }

        self.lander.render(draws, dt);
    }

    fn set_textures(&mut self, lander: LanderTextures, boxes: BoxTextures) {
        self.lander.set_textures(lander);
        self.box_textures = Some(boxes);
    }
}

fn check_atlas_fit(atlas: AtlasGrid, name: &str, width: u32, height: u32) {
    if !atlas.fits_image(width, height) {
        warn!(
            "{} is {}x{}, which does not split evenly into a {}x{} grid",
            name, width, height, atlas.columns, atlas.rows
        );
    }
}

impl Game for LanderGame {
    fn window_settings(&self) -> WindowSettings {
        WindowSettings {
            title: "Lunar Lander",
            width: 1280,
            height: 960,
            resizable: false,
        }
    }

    fn load(&mut self, renderer: &mut Renderer) -> Result<()> {
        let idle = renderer
            .load_texture(SHIP_IDLE_SPRITE)
            .context("loading idle ship sprite")?;
        let moving = renderer
            .load_texture(SHIP_MOVING_SPRITE)
            .context("loading ship thrust sheet")?;

        if let Some(sheet) = renderer.texture_manager().get(moving) {
            check_atlas_fit(
                self.lander.config().atlas,
                SHIP_MOVING_SPRITE,
                sheet.width,
                sheet.height,
            );
        }

        let boxes = BoxTextures {
            goal: renderer.create_color_texture(GOAL_COLOR, "Goal Box"),
            hazard: renderer.create_color_texture(HAZARD_COLOR, "Hazard Box"),
        };

        self.set_textures(LanderTextures { idle, moving }, boxes);
        info!(
            "Lander ready with {} boxes and {} textures",
            self.obstacles.len(),
            renderer.texture_manager().texture_count()
        );
        Ok(())
    }

    fn update(&mut self, input: &InputManager, dt: f32) -> AppFlow {
        self.apply_input(input);
        self.step(dt);
        AppFlow::Continue
    }

    fn render(&mut self, draws: &mut DrawList, dt: f32) {
        self.draw(draws, dt);
    }

    fn clear_color(&self) -> Vec4 {
        match self.outcome {
            GameOutcome::Playing => PLAYING_BACKGROUND,
            GameOutcome::Won => WON_BACKGROUND,
            GameOutcome::Lost => LOST_BACKGROUND,
        }
    }
}
