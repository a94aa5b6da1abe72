//! Pixel grid rasterizer
//!
//! Sprites are authored on a 32×32 logical grid and emitted onto a 64-unit
//! canvas, so each logical cell becomes a 2×2 square. Silhouettes are stored
//! as run-length [`Segment`]s, one horizontal strip per entry.

use crate::color::Paint;
use crate::document::Primitive;

/// Side of the output canvas in canvas units.
pub const CANVAS_SIZE: u32 = 64;

/// Side of the logical pixel grid in cells.
pub const GRID_SIZE: u32 = 32;

/// A horizontal run of cells: `(row, start_column, width)`.
pub type Segment = (u32, u32, u32);

/// Maps logical grid cells onto canvas-space rectangles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelGrid {
    canvas: u32,
    cells: u32,
}

impl PixelGrid {
    /// Grid used by every sprite: 32×32 cells on a 64×64 canvas.
    pub const SPRITE: PixelGrid = PixelGrid { canvas: CANVAS_SIZE, cells: GRID_SIZE };

    /// Create a grid. `cells` must divide `canvas` for square output.
    pub fn new(canvas: u32, cells: u32) -> Self {
        Self { canvas, cells: cells.max(1) }
    }

    /// Canvas units per logical cell.
    pub fn cell_size(&self) -> u32 {
        self.canvas / self.cells
    }

    pub fn canvas_size(&self) -> u32 {
        self.canvas
    }

    /// Convert a grid coordinate or length to canvas units.
    pub fn scale(&self, n: u32) -> f64 {
        f64::from(n * self.cell_size())
    }

    /// One filled rectangle covering `w`×`h` cells at grid position (x, y).
    ///
    /// ```
    /// use patterndex::color::Color;
    /// use patterndex::document::Primitive;
    /// use patterndex::grid::PixelGrid;
    ///
    /// let rect = PixelGrid::SPRITE.cell(3, 4, 2, 1, Color::WHITE);
    /// assert_eq!(rect, Primitive::rect(6.0, 8.0, 4.0, 2.0, Color::WHITE));
    /// ```
    pub fn cell(&self, x: u32, y: u32, w: u32, h: u32, fill: impl Into<Paint>) -> Primitive {
        Primitive::rect(self.scale(x), self.scale(y), self.scale(w), self.scale(h), fill)
    }

    /// Expand run-length segments into one single-row rectangle each.
    pub fn rows(&self, segments: &[Segment], fill: impl Into<Paint>) -> Vec<Primitive> {
        let fill = fill.into();
        segments.iter().map(|&(row, col, width)| self.cell(col, row, width, 1, fill)).collect()
    }
}

impl Default for PixelGrid {
    fn default() -> Self {
        Self::SPRITE
    }
}

/// Accumulates grid primitives for one fragment.
#[derive(Debug, Default)]
pub struct Fragment {
    grid: PixelGrid,
    primitives: Vec<Primitive>,
}

impl Fragment {
    pub fn new(grid: PixelGrid) -> Self {
        Self { grid, primitives: Vec::new() }
    }

    /// Append a band of row segments.
    pub fn rows(&mut self, segments: &[Segment], fill: impl Into<Paint>) -> &mut Self {
        let band = self.grid.rows(segments, fill);
        self.primitives.extend(band);
        self
    }

    /// Append a single rectangle of cells.
    pub fn cell(&mut self, x: u32, y: u32, w: u32, h: u32, fill: impl Into<Paint>) -> &mut Self {
        let rect = self.grid.cell(x, y, w, h, fill);
        self.primitives.push(rect);
        self
    }

    /// Append an arbitrary primitive.
    pub fn push(&mut self, primitive: Primitive) -> &mut Self {
        self.primitives.push(primitive);
        self
    }

    pub fn grid(&self) -> PixelGrid {
        self.grid
    }

    pub fn finish(self) -> Vec<Primitive> {
        self.primitives
    }
}
