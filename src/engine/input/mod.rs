// Input handling system
//
// Maps physical keys to game actions and tracks which actions are held.
//
// ## Architecture
//
// - `action`: Defines game actions and default key bindings
// - `manager`: Tracks pressed state from winit keyboard events
//
// ## Usage Example
//
// ```rust
// use lunar_lander::engine::input::{Action, InputManager};
//
// let mut input = InputManager::new();
//
// // In your event loop, process keyboard events
// input.process_keyboard_event(&key_event);
//
// if input.is_pressed(Action::Thrust) {
//     // fire the engine this tick
// }
//
// // At the end of each frame, roll over the per-frame state
// input.update();
// ```

pub mod action;
pub mod manager;

pub use action::{Action, InputSource};
pub use manager::InputManager;
