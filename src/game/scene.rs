// Plain window cleared to one color every frame

use crate::engine::app::{Game, WindowSettings};
use glam::Vec4;

/// Background of the simple scene
pub const SCENE_CLEAR_COLOR: Vec4 = Vec4::new(0.1922, 0.549, 0.9059, 1.0);

/// A scene with nothing in it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneGame {
    clear_color: Vec4,
}

impl Default for SceneGame {
    fn default() -> Self {
        Self::new(SCENE_CLEAR_COLOR)
    }
}

impl SceneGame {
    pub fn new(clear_color: Vec4) -> Self {
        Self { clear_color }
    }
}

impl Game for SceneGame {
    fn window_settings(&self) -> WindowSettings {
        WindowSettings {
            title: "Hello, World!",
            width: 640,
            height: 480,
            resizable: false,
        }
    }

    fn clear_color(&self) -> Vec4 {
        self.clear_color
    }
}
