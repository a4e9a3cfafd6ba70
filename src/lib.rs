//! # tileup
//!
//! Slice one large raster image into fixed-size tiles for map-style viewers
//! such as Leaflet or Google Maps tile layers.
//!
//! For every requested zoom level the source is scaled by a power of two and
//! cut into a complete, non-overlapping grid of tiles. Tiles in the last row
//! and column that come up short are padded to the full tile size with
//! transparent pixels, unless that is turned off.
//!
//! ## Architecture
//!
//! - [`pyramid`] - zoom planning, grid partitioning, tile emission
//! - [`bitmap`] - the pixel buffer capability and its `image` crate backend
//! - [`output`] - tile sinks and the tile naming contract
//! - [`config`] - CLI and library options
//! - [`error`] - error types
//!
//! ## Output Layout
//!
//! ```text
//! single level:  OUTPUT_DIR/{prefix}_{column}_{row}.{ext}
//! pyramid:       OUTPUT_DIR/20/{prefix}_{column}_{row}.{ext}
//!                OUTPUT_DIR/19/...
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use tileup::TilerOptions;
//!
//! let options = TilerOptions {
//!     auto_zoom_levels: Some(4),
//!     output_dir: "tiles".into(),
//!     ..TilerOptions::default()
//! };
//!
//! let summary = tileup::run("world.png", &options)?;
//! println!("wrote {} tiles", summary.total_tiles());
//! # Ok::<(), tileup::TileError>(())
//! ```

pub mod bitmap;
pub mod config;
pub mod error;
pub mod output;
pub mod pyramid;

// Re-export commonly used types
pub use bitmap::{Bitmap, RasterImage, ResampleFilter};
pub use config::{Config, OutputFormat, TilerOptions, DEFAULT_FILENAME_PREFIX, DEFAULT_TILE_SIZE};
pub use error::{BitmapError, TileError};
pub use output::{tile_extension, tile_file_name, FsTileSink, TileSink};
pub use pyramid::{
    needs_extension, partition, plan_zoom_levels, run, Cell, LevelSummary, PyramidSummary,
    TileEmitter, TileGrid, Tiler, ZoomTask, MAX_ZOOM_LEVELS,
};
