use std::fs;
use std::path::Path;

use crate::bitmap::Bitmap;
use crate::error::TileError;

// =============================================================================
// Tile Sink
// =============================================================================

/// Destination for finished tiles.
pub trait TileSink<B: Bitmap> {
    /// Create `dir` and any missing parents. Must be idempotent.
    fn create_dir_all(&mut self, dir: &Path) -> Result<(), TileError>;

    /// Persist `tile` at `path`.
    ///
    /// The sink takes ownership of the tile buffer; it is dropped once written.
    fn write_tile(&mut self, tile: B, path: &Path) -> Result<(), TileError>;
}

/// Filesystem-backed sink. Tiles are encoded with [`Bitmap::write`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FsTileSink;

impl FsTileSink {
    /// Create a new filesystem sink.
    pub fn new() -> Self {
        Self
    }
}

impl<B: Bitmap> TileSink<B> for FsTileSink {
    fn create_dir_all(&mut self, dir: &Path) -> Result<(), TileError> {
        fs::create_dir_all(dir).map_err(|e| TileError::CreateDir {
            path: dir.display().to_string(),
            message: e.to_string(),
        })
    }

    fn write_tile(&mut self, tile: B, path: &Path) -> Result<(), TileError> {
        tile.write(path)?;
        Ok(())
    }
}

// =============================================================================
// Naming
// =============================================================================

/// File name for the tile at `(column, row)`.
///
/// ```
/// assert_eq!(tileup::output::tile_file_name("map_tile", 3, 1, "png"), "map_tile_3_1.png");
/// ```
pub fn tile_file_name(prefix: &str, column: u32, row: u32, extension: &str) -> String {
    format!("{}_{}_{}.{}", prefix, column, row, extension)
}

/// Tile file extension for a source image: an explicit override wins,
/// otherwise the source path's own extension is reused.
pub fn tile_extension(source: &Path, override_ext: Option<&str>) -> Option<String> {
    match override_ext {
        Some(ext) => Some(ext.trim_start_matches('.').to_string()),
        None => source
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_string),
    }
}

// =============================================================================
// Tests
// =============================================================================
