//! Grid partitioner.
//!
//! Splits an image into a row/column grid of fixed-size crop rectangles. The
//! enumeration order is row-major with the column varying fastest; tile file
//! names are derived from it, so it must stay stable.

use std::iter::FusedIterator;

/// One grid cell: its indices and the pixel offset of its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub row: u32,
    pub column: u32,
    /// `column * tile_width`
    pub x: u32,
    /// `row * tile_height`
    pub y: u32,
}

/// Grid geometry for one image at one tile size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileGrid {
    pub tile_width: u32,
    pub tile_height: u32,
    pub num_columns: u32,
    pub num_rows: u32,
}

impl TileGrid {
    /// Compute the grid covering an `image_width` x `image_height` image.
    ///
    /// Any image with positive dimensions yields at least one cell.
    ///
    /// # Panics
    ///
    /// Panics if a tile dimension is zero.
    pub fn new(image_width: u32, image_height: u32, tile_width: u32, tile_height: u32) -> Self {
        assert!(
            tile_width > 0 && tile_height > 0,
            "tile dimensions must be non-zero"
        );

        Self {
            tile_width,
            tile_height,
            num_columns: image_width.div_ceil(tile_width),
            num_rows: image_height.div_ceil(tile_height),
        }
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.num_columns as usize * self.num_rows as usize
    }

    /// Whether the grid has no cells (only for zero-sized images).
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The cell at `(row, column)`, if it lies inside the grid.
    pub fn cell(&self, row: u32, column: u32) -> Option<Cell> {
        (row < self.num_rows && column < self.num_columns).then(|| Cell {
            row,
            column,
            x: column * self.tile_width,
            y: row * self.tile_height,
        })
    }

    /// Whether `cell` sits in the last row or the last column.
    pub fn is_edge(&self, cell: &Cell) -> bool {
        cell.row + 1 == self.num_rows || cell.column + 1 == self.num_columns
    }

    /// Iterate the cells in row-major order.
    pub fn cells(&self) -> Cells {
        Cells {
            grid: *self,
            next: 0,
        }
    }
}

impl IntoIterator for &TileGrid {
    type Item = Cell;
    type IntoIter = Cells;

    fn into_iter(self) -> Self::IntoIter {
        self.cells()
    }
}

/// Partition an image into grid cells, row-major.
pub fn partition(image_width: u32, image_height: u32, tile_width: u32, tile_height: u32) -> Cells {
    TileGrid::new(image_width, image_height, tile_width, tile_height).cells()
}

/// Row-major iterator over the cells of a [`TileGrid`].
///
/// Call [`TileGrid::cells`] again for a fresh pass.
#[derive(Debug, Clone)]
pub struct Cells {
    grid: TileGrid,
    next: usize,
}

impl Iterator for Cells {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        if self.next >= self.grid.len() {
            return None;
        }
        let columns = self.grid.num_columns as usize;
        let row = (self.next / columns) as u32;
        let column = (self.next % columns) as u32;
        self.next += 1;
        self.grid.cell(row, column)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.grid.len().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Cells {}

impl FusedIterator for Cells {}
