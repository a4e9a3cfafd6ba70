//! Tile emitter and edge extension policy.
//!
//! For every cell of a level's grid the emitter crops the scaled image,
//! pads undersized edge tiles when asked to, and hands the tile to the sink.
//!
//! # Edge Extension
//!
//! A tile is padded only when all three hold:
//! - extension is enabled
//! - the cell is in the last row or the last column
//! - the crop came back smaller than the requested tile size
//!
//! A corner cell of an image that divides evenly is therefore never padded.
//! Padding keeps the pixels at the top-left and fills the rest with full
//! transparency, since tiles are composited over other map layers.

use std::path::Path;

use tracing::{debug, info};

use crate::bitmap::Bitmap;
use crate::error::TileError;
use crate::output::{tile_file_name, TileSink};

use super::grid::{Cell, TileGrid};
use super::planner::ZoomTask;
use super::summary::LevelSummary;

/// Whether a cropped tile of `tile_size` at `cell` must be padded.
#[inline]
pub fn needs_extension(grid: &TileGrid, cell: &Cell, tile_size: (u32, u32)) -> bool {
    grid.is_edge(cell) && tile_size != (grid.tile_width, grid.tile_height)
}

/// Cuts one zoom level into tiles.
#[derive(Debug, Clone)]
pub struct TileEmitter<'a> {
    tile_width: u32,
    tile_height: u32,
    extend_incomplete_tiles: bool,
    prefix: &'a str,
    extension: &'a str,
}

impl<'a> TileEmitter<'a> {
    /// Create an emitter for `tile_width` x `tile_height` tiles named
    /// `{prefix}_{column}_{row}.{extension}`.
    pub fn new(
        tile_width: u32,
        tile_height: u32,
        extend_incomplete_tiles: bool,
        prefix: &'a str,
        extension: &'a str,
    ) -> Self {
        Self {
            tile_width,
            tile_height,
            extend_incomplete_tiles,
            prefix,
            extension,
        }
    }

    /// Tile `image` into `task.output_dir`.
    ///
    /// The directory must already exist. Cells are emitted in grid order and
    /// the first failing crop, extend or write aborts the level.
    pub fn emit_level<B, S>(
        &self,
        image: &B,
        task: &ZoomTask,
        sink: &mut S,
    ) -> Result<LevelSummary, TileError>
    where
        B: Bitmap,
        S: TileSink<B>,
    {
        let (width, height) = image.dimensions();
        let grid = TileGrid::new(width, height, self.tile_width, self.tile_height);

        info!(
            "Tiling image into columns: {}, rows: {}",
            grid.num_columns, grid.num_rows
        );

        let mut tiles_written = 0;
        let mut tiles_extended = 0;

        for cell in grid.cells() {
            let extended = self.emit_cell(image, &grid, &cell, &task.output_dir, sink)?;
            tiles_written += 1;
            if extended {
                tiles_extended += 1;
            }
        }

        Ok(LevelSummary {
            zoom_label: task.zoom_label,
            scale_factor: task.scale_factor,
            output_dir: task.output_dir.display().to_string(),
            width,
            height,
            columns: grid.num_columns,
            rows: grid.num_rows,
            tiles_written,
            tiles_extended,
        })
    }

    /// Crop, maybe extend, and write one cell. Returns whether it was padded.
    fn emit_cell<B, S>(
        &self,
        image: &B,
        grid: &TileGrid,
        cell: &Cell,
        output_dir: &Path,
        sink: &mut S,
    ) -> Result<bool, TileError>
    where
        B: Bitmap,
        S: TileSink<B>,
    {
        debug!(
            "crop {} {}, {}, {}",
            cell.x, cell.y, self.tile_width, self.tile_height
        );
        let mut tile = image.crop(cell.x, cell.y, self.tile_width, self.tile_height)?;

        let extend =
            self.extend_incomplete_tiles && needs_extension(grid, cell, tile.dimensions());
        if extend {
            tile = tile.extend(self.tile_width, self.tile_height)?;
        }

        let path = output_dir.join(tile_file_name(
            self.prefix,
            cell.column,
            cell.row,
            self.extension,
        ));

        debug!("Saving tile: {}, {}...", cell.row, cell.column);
        sink.write_tile(tile, &path)?;
        debug!("Saving tile: {}, {}... saved", cell.row, cell.column);

        Ok(extend)
    }
}
