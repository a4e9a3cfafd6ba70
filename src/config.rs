//! Configuration for tileup.
//!
//! Two layers:
//! - [`Config`]: the command line, parsed by clap. Every option can also be set
//!   through a `TILEUP_`-prefixed environment variable.
//! - [`TilerOptions`]: the immutable options struct the library works from,
//!   fixed before any tiling starts.
//!
//! # Environment Variables
//!
//! - `TILEUP_TILE_WIDTH` - Tile width in pixels (default: 256)
//! - `TILEUP_TILE_HEIGHT` - Tile height in pixels (default: 256)
//! - `TILEUP_AUTO_ZOOM_LEVELS` - Number of zoom levels to generate (default: none)
//! - `TILEUP_PREFIX` - Tile filename prefix (default: map_tile)
//! - `TILEUP_OUTPUT_DIR` - Output directory (default: .)
//! - `TILEUP_EXTEND_INCOMPLETE_TILES` - Pad edge tiles to full size (default: true)
//! - `TILEUP_EXTENSION` - Tile file extension (default: the input's extension)
//! - `TILEUP_FILTER` - Resampling filter for lower zoom levels (default: triangle)

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

use crate::bitmap::ResampleFilter;
use crate::error::TileError;

// =============================================================================
// Default Values
// =============================================================================

/// Default tile width and height in pixels.
pub const DEFAULT_TILE_SIZE: u32 = 256;

/// Default tile filename prefix.
pub const DEFAULT_FILENAME_PREFIX: &str = "map_tile";

/// Default output directory.
pub const DEFAULT_OUTPUT_DIR: &str = ".";

// =============================================================================
// Tiler Options
// =============================================================================

/// Options for one pyramid run.
///
/// Verbosity is not part of this struct: tile-by-tile progress is logged at
/// `debug` level and shown when the subscriber enables it.
#[derive(Debug, Clone, PartialEq)]
pub struct TilerOptions {
    pub tile_width: u32,
    pub tile_height: u32,

    /// Number of zoom levels. `None`, zero or negative means a single
    /// native-resolution level written straight into `output_dir`.
    pub auto_zoom_levels: Option<i64>,

    pub filename_prefix: String,
    pub output_dir: PathBuf,

    /// Pad undersized edge tiles to the full tile size with transparency.
    pub extend_incomplete_tiles: bool,

    /// Tile file extension. Defaults to the source image's extension.
    pub extension: Option<String>,

    /// Filter used when scaling down for lower zoom levels.
    pub filter: ResampleFilter,
}

impl Default for TilerOptions {
    fn default() -> Self {
        Self {
            tile_width: DEFAULT_TILE_SIZE,
            tile_height: DEFAULT_TILE_SIZE,
            auto_zoom_levels: None,
            filename_prefix: DEFAULT_FILENAME_PREFIX.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            extend_incomplete_tiles: true,
            extension: None,
            filter: ResampleFilter::default(),
        }
    }
}

impl TilerOptions {
    /// Reject options no run could succeed with.
    pub fn validate(&self) -> Result<(), TileError> {
        if self.tile_width == 0 || self.tile_height == 0 {
            return Err(TileError::InvalidOptions(format!(
                "tile size must be positive, got {}x{}",
                self.tile_width, self.tile_height
            )));
        }
        if self.filename_prefix.is_empty() {
            return Err(TileError::InvalidOptions(
                "filename prefix must not be empty".to_string(),
            ));
        }
        if let Some(ref ext) = self.extension {
            if ext.trim_start_matches('.').is_empty() {
                return Err(TileError::InvalidOptions(
                    "extension must not be empty".to_string(),
                ));
            }
        }
        Ok(())
    }
}

// =============================================================================
// CLI Arguments
// =============================================================================

/// How the run summary is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human readable lines
    #[default]
    Text,
    /// A single JSON document
    Json,
}

/// tileup - Slice a large image into map tiles.
///
/// Cuts the input into a grid of fixed-size tiles, optionally for several
/// zoom levels, ready for Leaflet or Google Maps style tile layers.
#[derive(Parser, Debug, Clone)]
#[command(name = "tileup")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Image to tile.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    // =========================================================================
    // Tile Configuration
    // =========================================================================
    /// Tile width in pixels.
    #[arg(long, default_value_t = DEFAULT_TILE_SIZE, env = "TILEUP_TILE_WIDTH")]
    pub tile_width: u32,

    /// Tile height in pixels.
    #[arg(long, default_value_t = DEFAULT_TILE_SIZE, env = "TILEUP_TILE_HEIGHT")]
    pub tile_height: u32,

    /// Pad tiles in the last row and column to the full tile size.
    ///
    /// Padding is transparent and anchored at the top-left corner.
    #[arg(
        long,
        default_value_t = true,
        action = ArgAction::Set,
        env = "TILEUP_EXTEND_INCOMPLETE_TILES"
    )]
    pub extend_incomplete_tiles: bool,

    // =========================================================================
    // Zoom Configuration
    // =========================================================================
    /// Number of zoom levels to generate (at most 20).
    ///
    /// Levels are written to OUTPUT_DIR/20, OUTPUT_DIR/19, ... each at half
    /// the scale of the previous one. Zero or negative values disable this.
    #[arg(
        short = 'z',
        long,
        allow_negative_numbers = true,
        env = "TILEUP_AUTO_ZOOM_LEVELS"
    )]
    pub auto_zoom_levels: Option<i64>,

    /// Resampling filter for scaled zoom levels.
    #[arg(long, value_enum, default_value_t = ResampleFilter::default(), env = "TILEUP_FILTER")]
    pub filter: ResampleFilter,

    // =========================================================================
    // Output Configuration
    // =========================================================================
    /// Directory to write tiles into.
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR, env = "TILEUP_OUTPUT_DIR")]
    pub output_dir: PathBuf,

    /// Tile filename prefix.
    #[arg(long = "prefix", default_value = DEFAULT_FILENAME_PREFIX, env = "TILEUP_PREFIX")]
    pub filename_prefix: String,

    /// Tile file extension, e.g. `png`. Defaults to the input's extension.
    #[arg(long, env = "TILEUP_EXTENSION")]
    pub extension: Option<String>,

    /// Summary output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::default())]
    pub format: OutputFormat,

    // =========================================================================
    // Logging Configuration
    // =========================================================================
    /// Log every tile as it is cropped and saved.
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Config {
    /// Validate the configuration and return an error message if invalid.
    pub fn validate(&self) -> Result<(), String> {
        self.tiler_options().validate().map_err(|e| e.to_string())
    }

    /// The library options described by this command line.
    pub fn tiler_options(&self) -> TilerOptions {
        TilerOptions {
            tile_width: self.tile_width,
            tile_height: self.tile_height,
            auto_zoom_levels: self.auto_zoom_levels,
            filename_prefix: self.filename_prefix.clone(),
            output_dir: self.output_dir.clone(),
            extend_incomplete_tiles: self.extend_incomplete_tiles,
            extension: self.extension.clone(),
            filter: self.filter,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
