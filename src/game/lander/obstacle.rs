// Boxes the lander can touch

use glam::{Mat4, Vec2, Vec3};

/// What touching a box means
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObstacleKind {
    /// Landing pad: touching it wins
    Goal,
    /// Touching it loses
    Hazard,
}

/// Height of the box row, just above the bottom edge of the view
pub const GROUND_LEVEL: f32 = -3.25;

/// A stationary unit box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxObstacle {
    position: Vec2,
    kind: ObstacleKind,
}

impl BoxObstacle {
    pub fn new(position: Vec2, kind: ObstacleKind) -> Self {
        Self { position, kind }
    }

    pub fn goal(position: Vec2) -> Self {
        Self::new(position, ObstacleKind::Goal)
    }

    pub fn hazard(position: Vec2) -> Self {
        Self::new(position, ObstacleKind::Hazard)
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn kind(&self) -> ObstacleKind {
        self.kind
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(Vec3::new(self.position.x, self.position.y, 0.0))
    }
}

/// Number of boxes in the default row
pub const DEFAULT_BOX_COUNT: usize = 9;

/// A row of boxes on integer x from -4 to 4, with the pad at x = 3.
/// The spawn column x = 0 lies over a hazard.
pub fn default_layout() -> Vec<BoxObstacle> {
    (0..DEFAULT_BOX_COUNT)
        .map(|i| {
            let position = Vec2::new(i as f32 - 4.0, GROUND_LEVEL);
            if i == 7 {
                BoxObstacle::goal(position)
            } else {
                BoxObstacle::hazard(position)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_default_layout_has_one_goal() {
        let layout = default_layout();
        assert_eq!(layout.len(), DEFAULT_BOX_COUNT);

        let goals: Vec<_> = layout
            .iter()
            .filter(|b| b.kind() == ObstacleKind::Goal)
            .collect();
        assert_eq!(goals.len(), 1);
        assert_abs_diff_eq!(goals[0].position().x, 3.0);
        assert_abs_diff_eq!(goals[0].position().y, GROUND_LEVEL);
    }

    #[test]
    fn test_layout_centres_on_integers() {
        let layout = default_layout();
        assert_abs_diff_eq!(layout[0].position().x, -4.0);
        assert_abs_diff_eq!(layout[DEFAULT_BOX_COUNT - 1].position().x, 4.0);

        for (i, obstacle) in layout.iter().enumerate() {
            assert_eq!(obstacle.position().x, i as f32 - 4.0);
        }
    }

    #[test]
    fn test_spawn_column_is_over_a_hazard() {
        let below_spawn = default_layout()
            .into_iter()
            .find(|b| b.position().x == 0.0)
            .map(|b| b.kind());
        assert_eq!(below_spawn, Some(ObstacleKind::Hazard));
    }

    #[test]
    fn test_model_matrix_translates() {
        let obstacle = BoxObstacle::goal(Vec2::new(1.0, -2.0));
        let origin = obstacle.model_matrix().transform_point3(Vec3::ZERO);
        assert_eq!(origin, Vec3::new(1.0, -2.0, 0.0));
    }
}
