//! Run summary reported after a pyramid has been written.

use serde::Serialize;

/// Outcome of one zoom level.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LevelSummary {
    /// Zoom label, absent in single-level mode
    pub zoom_label: Option<u32>,
    pub scale_factor: f64,
    pub output_dir: String,
    /// Width of the scaled image tiled at this level
    pub width: u32,
    /// Height of the scaled image tiled at this level
    pub height: u32,
    pub columns: u32,
    pub rows: u32,
    pub tiles_written: usize,
    /// Edge tiles padded out to the full tile size
    pub tiles_extended: usize,
}

/// Outcome of a whole run, highest zoom level first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PyramidSummary {
    pub source: String,
    pub source_width: u32,
    pub source_height: u32,
    pub tile_width: u32,
    pub tile_height: u32,
    pub levels: Vec<LevelSummary>,
}

impl PyramidSummary {
    /// Total tiles written across all levels.
    pub fn total_tiles(&self) -> usize {
        self.levels.iter().map(|l| l.tiles_written).sum()
    }

    /// Total padded edge tiles across all levels.
    pub fn total_extended(&self) -> usize {
        self.levels.iter().map(|l| l.tiles_extended).sum()
    }
}
