// Lander system
//
// Everything the Lunar Lander round is made of:
// - The lander actor and its kinematics
// - Tuning presets
// - Render state and round outcome
// - Thrust animation
// - Box obstacles

pub mod animation;
pub mod config;
pub mod lander;
pub mod obstacle;
pub mod state;

pub use animation::{FrameAdvance, SpriteAnimator};
pub use config::{ConfigError, LanderConfig};
pub use lander::{Lander, LanderTextures};
pub use obstacle::{default_layout, BoxObstacle, ObstacleKind};
pub use state::{GameOutcome, RenderState};
