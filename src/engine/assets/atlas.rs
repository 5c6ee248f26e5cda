// Texture atlas addressing for grid-packed sprite sheets

use glam::Vec2;

/// A normalized sub-rectangle of a texture (0.0 to 1.0, origin top-left)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UvRect {
    /// Top-left corner
    pub offset: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl UvRect {
    /// The whole texture
    pub const FULL: UvRect = UvRect {
        offset: Vec2::ZERO,
        size: Vec2::ONE,
    };

    /// Top-left corner
    pub fn min(&self) -> Vec2 {
        self.offset
    }

    /// Bottom-right corner
    pub fn max(&self) -> Vec2 {
        self.offset + self.size
    }
}

impl Default for UvRect {
    fn default() -> Self {
        Self::FULL
    }
}

/// A sprite sheet laid out as equally sized cells, read row by row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtlasGrid {
    /// Number of columns in the sheet
    pub columns: u32,
    /// Number of rows in the sheet
    pub rows: u32,
}

impl AtlasGrid {
    pub const fn new(columns: u32, rows: u32) -> Self {
        Self { columns, rows }
    }

    /// A single image used as one frame
    pub const SINGLE: AtlasGrid = AtlasGrid::new(1, 1);

    /// Total number of cells
    pub fn frame_count(&self) -> usize {
        (self.columns * self.rows) as usize
    }

    /// Size of one cell in UV space
    pub fn cell_size(&self) -> Vec2 {
        Vec2::new(1.0 / self.columns as f32, 1.0 / self.rows as f32)
    }

    /// UV rectangle of frame `index`.
    ///
    /// Indices past the last cell wrap back to the first, so a free-running
    /// counter can be passed straight in.
    pub fn frame_uv(&self, index: usize) -> UvRect {
        let columns = self.columns as usize;
        let rows = self.rows as usize;
        let col = index % columns;
        let row = (index / columns) % rows;

        UvRect {
            offset: Vec2::new(
                col as f32 / self.columns as f32,
                row as f32 / self.rows as f32,
            ),
            size: self.cell_size(),
        }
    }

    /// Check that an image of the given pixel size splits evenly into cells
    pub fn fits_image(&self, width: u32, height: u32) -> bool {
        width % self.columns == 0 && height % self.rows == 0
    }
}

impl Default for AtlasGrid {
    fn default() -> Self {
        Self::SINGLE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_first_frame_of_strip() {
        let grid = AtlasGrid::new(6, 1);
        let uv = grid.frame_uv(0);

        assert_eq!(uv.offset, Vec2::new(0.0, 0.0));
        assert_abs_diff_eq!(uv.size.x, 1.0 / 6.0);
        assert_eq!(uv.size.y, 1.0);
    }

    #[test]
    fn test_index_wraps_to_first_column() {
        let grid = AtlasGrid::new(6, 1);
        assert_eq!(grid.frame_uv(6), grid.frame_uv(0));
        assert_eq!(grid.frame_uv(13), grid.frame_uv(1));
    }

    #[test]
    fn test_last_frame_of_strip() {
        let grid = AtlasGrid::new(6, 1);
        let uv = grid.frame_uv(5);

        assert_abs_diff_eq!(uv.offset.x, 5.0 / 6.0);
        assert_abs_diff_eq!(uv.max().x, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_multi_row_grid() {
        let grid = AtlasGrid::new(4, 2);
        assert_eq!(grid.frame_count(), 8);

        let uv = grid.frame_uv(5);
        assert_eq!(uv.offset, Vec2::new(0.25, 0.5));
        assert_eq!(uv.size, Vec2::new(0.25, 0.5));

        // Past the last row wraps to the top
        assert_eq!(grid.frame_uv(8), grid.frame_uv(0));
    }

    #[test]
    fn test_single_grid_is_full_texture() {
        assert_eq!(AtlasGrid::SINGLE.frame_uv(0), UvRect::FULL);
        assert_eq!(AtlasGrid::SINGLE.frame_uv(3), UvRect::FULL);
    }

    #[test]
    fn test_fits_image() {
        let grid = AtlasGrid::new(6, 1);
        assert!(grid.fits_image(1152, 192));
        assert!(!grid.fits_image(1000, 192));
    }
}
