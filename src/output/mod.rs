//! Tile output.
//!
//! Finished tiles leave the pyramid core through a [`TileSink`]. The sink owns
//! directory creation and the final write, so the core stays free of
//! filesystem calls and can be driven against an in-memory sink in tests.
//!
//! Tile files are named `{prefix}_{column}_{row}.{ext}`; see
//! [`tile_file_name`].

mod sink;

pub use sink::{tile_extension, tile_file_name, FsTileSink, TileSink};
