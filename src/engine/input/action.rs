// Game action definitions and mappings

use winit::keyboard::KeyCode;

/// Represents all possible in-game actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Ship control
    RotateLeft,
    RotateRight,
    Thrust,

    // Meta actions
    Quit,
}

/// Represents an input source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSource {
    Keyboard(KeyCode),
}

impl InputSource {
    /// Create a keyboard input source
    pub fn key(code: KeyCode) -> Self {
        Self::Keyboard(code)
    }
}

/// Default keyboard bindings
pub fn default_bindings() -> Vec<(InputSource, Action)> {
    vec![
        (InputSource::key(KeyCode::ArrowLeft), Action::RotateLeft),
        (InputSource::key(KeyCode::ArrowRight), Action::RotateRight),
        (InputSource::key(KeyCode::Space), Action::Thrust),
        (InputSource::key(KeyCode::KeyQ), Action::Quit),
        (InputSource::key(KeyCode::Escape), Action::Quit),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_source_keyboard_creation() {
        let source = InputSource::key(KeyCode::Space);
        assert_eq!(source, InputSource::Keyboard(KeyCode::Space));
    }

    #[test]
    fn test_default_bindings_cover_ship_controls() {
        let bindings = default_bindings();
        for action in [Action::RotateLeft, Action::RotateRight, Action::Thrust, Action::Quit] {
            assert!(
                bindings.iter().any(|(_, a)| *a == action),
                "{:?} has no default binding",
                action
            );
        }
    }

    #[test]
    fn test_quit_bound_to_q() {
        let bindings = default_bindings();
        assert!(bindings.contains(&(InputSource::key(KeyCode::KeyQ), Action::Quit)));
    }

    #[test]
    fn test_no_duplicate_inputs() {
        let bindings = default_bindings();
        let mut seen_sources = std::collections::HashSet::new();
        for (source, _) in bindings {
            assert!(
                seen_sources.insert(source),
                "Duplicate input source found in default bindings"
            );
        }
    }
}
