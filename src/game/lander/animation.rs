// Thrust animation playback over a grid sprite sheet

use crate::engine::assets::{AtlasGrid, UvRect};

/// When the animation steps to its next frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum FrameAdvance {
    /// One frame per rendered frame
    #[default]
    PerRender,
    /// A fixed number of frames per second, independent of frame rate
    PerSecond(f32),
}

/// Cycles through the cells of an [`AtlasGrid`]
#[derive(Debug, Clone)]
pub struct SpriteAnimator {
    grid: AtlasGrid,
    advance: FrameAdvance,
    /// Current frame index, always below `grid.frame_count()`
    current_frame: usize,
    /// Time accumulated toward the next frame (`PerSecond` only)
    frame_timer: f32,
}

impl SpriteAnimator {
    pub fn new(grid: AtlasGrid, advance: FrameAdvance) -> Self {
        Self {
            grid,
            advance,
            current_frame: 0,
            frame_timer: 0.0,
        }
    }

    /// Current frame index
    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    /// UV rectangle of the current frame
    pub fn current_uv(&self) -> UvRect {
        self.grid.frame_uv(self.current_frame)
    }

    /// Step after drawing a frame. `dt` only matters for `PerSecond`.
    pub fn advance(&mut self, dt: f32) {
        match self.advance {
            FrameAdvance::PerRender => self.next_frame(),
            FrameAdvance::PerSecond(fps) => {
                if fps <= 0.0 {
                    return;
                }
                let frame_duration = 1.0 / fps;
                self.frame_timer += dt;
                while self.frame_timer >= frame_duration {
                    self.frame_timer -= frame_duration;
                    self.next_frame();
                }
            }
        }
    }

    fn next_frame(&mut self) {
        let count = self.grid.frame_count().max(1);
        self.current_frame = (self.current_frame + 1) % count;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_per_render_cycles_through_sheet() {
        let mut animator = SpriteAnimator::new(AtlasGrid::new(6, 1), FrameAdvance::PerRender);

        let frames: Vec<usize> = (0..8)
            .map(|_| {
                let frame = animator.current_frame();
                animator.advance(0.0);
                frame
            })
            .collect();

        assert_eq!(frames, vec![0, 1, 2, 3, 4, 5, 0, 1]);
    }

    #[test]
    fn test_current_uv_follows_frame() {
        let mut animator = SpriteAnimator::new(AtlasGrid::new(6, 1), FrameAdvance::PerRender);
        animator.advance(0.0);
        animator.advance(0.0);

        let uv = animator.current_uv();
        assert_abs_diff_eq!(uv.offset.x, 2.0 / 6.0);
        assert_abs_diff_eq!(uv.size.x, 1.0 / 6.0);
        assert_abs_diff_eq!(uv.offset.y, 0.0);
    }

    #[test]
    fn test_per_second_ignores_frame_rate() {
        let mut animator =
            SpriteAnimator::new(AtlasGrid::new(6, 1), FrameAdvance::PerSecond(10.0));

        // Half a frame: no step yet
        animator.advance(0.05);
        assert_eq!(animator.current_frame(), 0);

        // 0.25 s total at 10 fps
        animator.advance(0.2);
        assert_eq!(animator.current_frame(), 2);
    }

    #[test]
    fn test_per_second_catches_up_on_long_frame() {
        let mut animator =
            SpriteAnimator::new(AtlasGrid::new(6, 1), FrameAdvance::PerSecond(4.0));
        animator.advance(2.0);
        // 8 frames elapsed on a 6 frame sheet
        assert_eq!(animator.current_frame(), 2);
    }

    #[test]
    fn test_default_advance_is_per_render() {
        assert_eq!(FrameAdvance::default(), FrameAdvance::PerRender);
    }
}
