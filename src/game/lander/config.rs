// Lander tuning - one struct, a preset per demo variant

use super::animation::FrameAdvance;
use crate::engine::assets::AtlasGrid;
use crate::engine::renderer::Quad;
use glam::Vec2;

/// Tuning values for the lander's kinematics, collision and sprite.
///
/// Velocities are in world units per tick before `speed_scale` is applied;
/// accelerations are added once per update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LanderConfig {
    // Kinematics
    /// Added to velocity every update
    pub gravity: Vec2,
    /// Magnitude of the thrust added while accelerating
    pub thrust: f32,
    /// Lowest vertical velocity (negative); its negation is the highest
    pub min_gravity_velocity: f32,
    /// Horizontal velocity is clamped to +/- this value
    pub max_horizontal_velocity: f32,
    /// Velocity multiplier applied when integrating position
    pub speed_scale: f32,
    /// Degrees turned per tick while a rotate key is held
    pub rotation_step: f32,
    /// Where the lander starts
    pub spawn_position: Vec2,
    /// Velocity the lander starts with
    pub spawn_velocity: Vec2,

    // Collision
    /// Distance at or below which the lander touches a box
    pub collision_distance: f32,

    // Sprite
    /// Fixed rotation (degrees) between the sprite art and "up"
    pub base_rotation: f32,
    /// Sprite geometry
    pub quad: Quad,
    /// Layout of the thrust animation sheet
    pub atlas: AtlasGrid,
    /// How the thrust animation advances
    pub frame_advance: FrameAdvance,
}

/// Invalid lander tuning
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("min_gravity_velocity must be <= 0 (got {0})")]
    InvertedVerticalClamp(f32),

    #[error("max_horizontal_velocity must be >= 0 (got {0})")]
    NegativeHorizontalClamp(f32),

    #[error("{field} must be positive (got {value})")]
    NonPositive { field: &'static str, value: f32 },

    #[error("atlas must have at least one cell (got {columns}x{rows})")]
    EmptyAtlas { columns: u32, rows: u32 },
}

impl Default for LanderConfig {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl LanderConfig {
    /// Tuning used by the Lunar Lander game
    pub const STANDARD: LanderConfig = LanderConfig {
        gravity: Vec2::new(0.0, -0.02),
        thrust: 0.05,
        min_gravity_velocity: -1.5,
        max_horizontal_velocity: 1.0,
        speed_scale: 2.0,
        rotation_step: 1.0,
        spawn_position: Vec2::ZERO,
        spawn_velocity: Vec2::ZERO,

        collision_distance: 0.5,

        // Ship art points right; rotate so the nose points up
        base_rotation: 90.0,
        quad: Quad::UNIT,
        // 1152 x 192 sheet of 192 x 192 frames
        atlas: AtlasGrid::new(6, 1),
        frame_advance: FrameAdvance::PerRender,
    };

    /// Heavier, faster tuning from the first prototype, with a larger ship
    pub const ARCADE: LanderConfig = LanderConfig {
        gravity: Vec2::new(0.0, -0.1),
        thrust: 0.2,
        min_gravity_velocity: -1.5,
        max_horizontal_velocity: 1.0,
        speed_scale: 5.0,
        rotation_step: 1.0,
        spawn_position: Vec2::ZERO,
        spawn_velocity: Vec2::ZERO,

        collision_distance: 0.5,

        base_rotation: 0.0,
        // 192 px art at 240 px per unit
        quad: Quad::square(0.8),
        atlas: AtlasGrid::new(6, 1),
        frame_advance: FrameAdvance::PerRender,
    };

    /// Tuning used by the Lunar Lander game
    pub fn standard() -> Self {
        Self::STANDARD
    }

    /// Prototype tuning
    pub fn arcade() -> Self {
        Self::ARCADE
    }

    /// Check the invariants the update step relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.min_gravity_velocity <= 0.0) {
            return Err(ConfigError::InvertedVerticalClamp(self.min_gravity_velocity));
        }
        if !(self.max_horizontal_velocity >= 0.0) {
            return Err(ConfigError::NegativeHorizontalClamp(
                self.max_horizontal_velocity,
            ));
        }

        Self::positive("speed_scale", self.speed_scale)?;
        Self::positive("collision_distance", self.collision_distance)?;
        Self::positive("quad.half_extents.x", self.quad.half_extents.x)?;
        Self::positive("quad.half_extents.y", self.quad.half_extents.y)?;
        if let FrameAdvance::PerSecond(fps) = self.frame_advance {
            Self::positive("frame_advance fps", fps)?;
        }

        if self.atlas.columns == 0 || self.atlas.rows == 0 {
            return Err(ConfigError::EmptyAtlas {
                columns: self.atlas.columns,
                rows: self.atlas.rows,
            });
        }

        Ok(())
    }

    fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
        if value > 0.0 {
            Ok(())
        } else {
            Err(ConfigError::NonPositive { field, value })
        }
    }

    /// Vertical velocity bounds as (min, max)
    pub fn vertical_bounds(&self) -> (f32, f32) {
        (self.min_gravity_velocity, -self.min_gravity_velocity)
    }

    /// Horizontal velocity bounds as (min, max)
    pub fn horizontal_bounds(&self) -> (f32, f32) {
        (-self.max_horizontal_velocity, self.max_horizontal_velocity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_valid() {
        assert_eq!(LanderConfig::standard().validate(), Ok(()));
        assert_eq!(LanderConfig::arcade().validate(), Ok(()));
    }

    #[test]
    fn test_default_is_standard() {
        assert_eq!(LanderConfig::default(), LanderConfig::STANDARD);
    }

    #[test]
    fn test_bounds_are_symmetric() {
        let config = LanderConfig::standard();
        assert_eq!(config.vertical_bounds(), (-1.5, 1.5));
        assert_eq!(config.horizontal_bounds(), (-1.0, 1.0));
    }

    #[test]
    fn test_positive_vertical_clamp_rejected() {
        let config = LanderConfig {
            min_gravity_velocity: 1.5,
            ..LanderConfig::STANDARD
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvertedVerticalClamp(1.5))
        );
    }

    #[test]
    fn test_nan_clamp_rejected() {
        let config = LanderConfig {
            max_horizontal_velocity: f32::NAN,
            ..LanderConfig::STANDARD
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NegativeHorizontalClamp(_))
        ));
    }

    #[test]
    fn test_zero_speed_scale_rejected() {
        let config = LanderConfig {
            speed_scale: 0.0,
            ..LanderConfig::STANDARD
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonPositive {
                field: "speed_scale",
                value: 0.0
            })
        );
    }

    #[test]
    fn test_empty_atlas_rejected() {
        let config = LanderConfig {
            atlas: AtlasGrid::new(0, 1),
            ..LanderConfig::STANDARD
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::EmptyAtlas { columns: 0, rows: 1 })
        );
    }

    #[test]
    fn test_zero_fps_rejected() {
        let config = LanderConfig {
            frame_advance: FrameAdvance::PerSecond(0.0),
            ..LanderConfig::STANDARD
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_error_message() {
        let err = ConfigError::InvertedVerticalClamp(2.0);
        assert_eq!(err.to_string(), "min_gravity_velocity must be <= 0 (got 2)");
    }
}
