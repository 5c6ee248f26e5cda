// Input manager - tracks held actions from keyboard events

use super::action::{default_bindings, Action, InputSource};
use std::collections::{HashMap, HashSet};
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::PhysicalKey;

/// Keyboard-to-action state for a single local player
#[derive(Debug)]
pub struct InputManager {
    /// Mapping from input sources to actions
    bindings: HashMap<InputSource, Action>,

    /// Actions that are currently held
    pressed: HashSet<Action>,

    /// Actions that went down since the last `update`
    just_pressed: HashSet<Action>,
}

impl InputManager {
    /// Create a new input manager with the default bindings
    pub fn new() -> Self {
        Self::from_bindings(default_bindings())
    }

    /// Create an input manager from a list of bindings
    pub fn from_bindings(bindings: Vec<(InputSource, Action)>) -> Self {
        Self {
            bindings: bindings.into_iter().collect(),
            pressed: HashSet::new(),
            just_pressed: HashSet::new(),
        }
    }

    /// Get the action bound to an input source
    pub fn get_action(&self, source: InputSource) -> Option<Action> {
        self.bindings.get(&source).copied()
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        if let PhysicalKey::Code(key_code) = event.physical_key {
            if let Some(action) = self.get_action(InputSource::key(key_code)) {
                match event.state {
                    ElementState::Pressed => {
                        if !event.repeat {
                            self.press(action);
                        }
                    }
                    ElementState::Released => self.release(action),
                }
            }
        }
    }

    /// Register an action press
    pub fn press(&mut self, action: Action) {
        if self.pressed.insert(action) {
            self.just_pressed.insert(action);
        }
    }

    /// Register an action release
    pub fn release(&mut self, action: Action) {
        self.pressed.remove(&action);
    }

    /// Roll over per-frame state. Call once per frame after the update.
    pub fn update(&mut self) {
        self.just_pressed.clear();
    }

    /// Check if an action is currently held
    pub fn is_pressed(&self, action: Action) -> bool {
        self.pressed.contains(&action)
    }

    /// Check if an action went down this frame
    pub fn just_pressed(&self, action: Action) -> bool {
        self.just_pressed.contains(&action)
    }

    /// Release everything (e.g. when the window loses focus)
    pub fn reset_all(&mut self) {
        self.pressed.clear();
        self.just_pressed.clear();
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}
