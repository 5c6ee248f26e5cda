// Lander render state and round outcome

use super::obstacle::ObstacleKind;

/// Which sprite the lander shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RenderState {
    /// Engine off: single static sprite
    #[default]
    Idle,
    /// Engine on: animated thrust sheet
    Accelerating,
}

impl RenderState {
    pub fn from_accelerating(accelerating: bool) -> Self {
        if accelerating {
            Self::Accelerating
        } else {
            Self::Idle
        }
    }
}

/// Result of the current round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameOutcome {
    #[default]
    Playing,
    /// Touched the landing pad
    Won,
    /// Touched a hazard
    Lost,
}

impl GameOutcome {
    /// Whether the round has ended
    pub fn is_over(&self) -> bool {
        !matches!(self, Self::Playing)
    }

    /// Outcome after touching `hit`. Won and Lost never change.
    pub fn after_contact(self, hit: Option<ObstacleKind>) -> Self {
        match (self, hit) {
            (Self::Playing, Some(ObstacleKind::Goal)) => Self::Won,
            (Self::Playing, Some(ObstacleKind::Hazard)) => Self::Lost,
            (outcome, _) => outcome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_state_from_flag() {
        assert_eq!(RenderState::from_accelerating(false), RenderState::Idle);
        assert_eq!(RenderState::from_accelerating(true), RenderState::Accelerating);
        assert_eq!(RenderState::default(), RenderState::Idle);
    }

    #[test]
    fn test_playing_resolves_on_contact() {
        let playing = GameOutcome::default();
        assert!(!playing.is_over());
        assert_eq!(playing.after_contact(None), GameOutcome::Playing);
        assert_eq!(playing.after_contact(Some(ObstacleKind::Goal)), GameOutcome::Won);
        assert_eq!(playing.after_contact(Some(ObstacleKind::Hazard)), GameOutcome::Lost);
    }

    #[test]
    fn test_outcome_is_terminal() {
        assert_eq!(
            GameOutcome::Won.after_contact(Some(ObstacleKind::Hazard)),
            GameOutcome::Won
        );
        assert_eq!(
            GameOutcome::Lost.after_contact(Some(ObstacleKind::Goal)),
            GameOutcome::Lost
        );
        assert!(GameOutcome::Won.is_over());
        assert!(GameOutcome::Lost.is_over());
    }
}
