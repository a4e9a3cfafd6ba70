//! Tile pyramid generation.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │                 Tiler                   │
//! │   (one pass per zoom level, in order)   │
//! └──────┬─────────────────────────┬────────┘
//!        │                         │
//!        ▼                         ▼
//! ┌──────────────┐        ┌─────────────────┐
//! │ Zoom Planner │        │   TileEmitter   │
//! │ (ZoomTask    │        │ (crop, extend,  │
//! │  list)       │        │  hand to sink)  │
//! └──────────────┘        └────────┬────────┘
//!                                  │
//!                                  ▼
//!                         ┌─────────────────┐
//!                         │    TileGrid     │
//!                         │ (row-major      │
//!                         │  cells)         │
//!                         └─────────────────┘
//! ```
//!
//! # Components
//!
//! - [`plan_zoom_levels`]: turns a zoom level count into scale factors and
//!   output directories (`20`, `19`, ...)
//! - [`TileGrid`] / [`partition`]: the row/column grid and its cells
//! - [`TileEmitter`]: per-level tiling with the edge extension policy
//! - [`Tiler`]: runs every level against a [`Bitmap`](crate::bitmap::Bitmap)
//!   and a [`TileSink`](crate::output::TileSink)
//! - [`PyramidSummary`]: what a run produced

mod emitter;
mod grid;
mod planner;
mod summary;
mod tiler;

pub use emitter::{needs_extension, TileEmitter};
pub use grid::{partition, Cell, Cells, TileGrid};
pub use planner::{
    normalize_zoom_levels, plan_zoom_levels, ZoomTask, MAX_ZOOM_LEVELS, TOP_ZOOM_LABEL,
};
pub use summary::{LevelSummary, PyramidSummary};
pub use tiler::{run, Tiler};
