//! Zoom planner.
//!
//! Turns an optional "number of zoom levels" request into the ordered list of
//! scale factors and output directories to tile.

use std::path::{Path, PathBuf};

use tracing::warn;

/// Maximum number of zoom levels in one pyramid.
pub const MAX_ZOOM_LEVELS: u32 = 20;

/// Label of the full-resolution level. Lower levels count down from here.
pub const TOP_ZOOM_LABEL: u32 = 20;

/// One tiling pass over a uniformly scaled copy of the source.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoomTask {
    /// Scale relative to the source, in `(0, 1]`
    pub scale_factor: f64,

    /// Directory receiving this level's tiles
    pub output_dir: PathBuf,

    /// Zoom label (`20`, `19`, ...), `None` in single-level mode
    pub zoom_label: Option<u32>,
}

impl ZoomTask {
    /// Whether this level is the source at native resolution.
    pub fn is_native(&self) -> bool {
        self.scale_factor == 1.0
    }
}

/// Normalize a requested zoom level count.
///
/// Counts above [`MAX_ZOOM_LEVELS`] are capped with a warning. Zero or negative
/// counts disable auto zoom entirely.
pub fn normalize_zoom_levels(requested: Option<i64>) -> Option<u32> {
    match requested {
        Some(levels) if levels > i64::from(MAX_ZOOM_LEVELS) => {
            warn!("Auto zoom levels hard limited to {}", MAX_ZOOM_LEVELS);
            Some(MAX_ZOOM_LEVELS)
        }
        Some(levels) if levels <= 0 => None,
        Some(levels) => Some(levels as u32),
        None => None,
    }
}

/// Build the ordered task list, highest zoom first.
///
/// Without auto zoom a single native-scale task writes straight into
/// `base_output_dir`. With `n` levels, task `i` has scale `2^-i` and writes to
/// `base_output_dir/{20 - i}`.
pub fn plan_zoom_levels(auto_zoom_levels: Option<i64>, base_output_dir: &Path) -> Vec<ZoomTask> {
    let Some(levels) = normalize_zoom_levels(auto_zoom_levels) else {
        return vec![ZoomTask {
            scale_factor: 1.0,
            output_dir: base_output_dir.to_path_buf(),
            zoom_label: None,
        }];
    };

    let mut tasks = Vec::with_capacity(levels as usize);
    let mut scale_factor = 1.0;
    for label in (TOP_ZOOM_LABEL + 1 - levels..=TOP_ZOOM_LABEL).rev() {
        tasks.push(ZoomTask {
            scale_factor,
            output_dir: base_output_dir.join(label.to_string()),
            zoom_label: Some(label),
        });
        scale_factor /= 2.0;
    }

    tasks
}
