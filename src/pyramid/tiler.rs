//! Pyramid orchestration.
//!
//! ```text
//! plan_zoom_levels ──► for each ZoomTask
//!                        1. scale source (skipped at 1.0)
//!                        2. create output dir
//!                        3. TileEmitter: partition ─► crop ─► extend? ─► sink
//! ```
//!
//! Levels are processed strictly in plan order. Each level derives its own
//! scaled copy from the untouched source. The first error stops the run;
//! levels already written stay on disk.

use std::path::Path;

use tracing::info;

use crate::bitmap::{Bitmap, RasterImage};
use crate::config::TilerOptions;
use crate::error::TileError;
use crate::output::{tile_extension, FsTileSink, TileSink};

use super::emitter::TileEmitter;
use super::planner::{plan_zoom_levels, ZoomTask};
use super::summary::PyramidSummary;

/// Builds a tile pyramid from one source bitmap.
///
/// # Example
///
/// ```no_run
/// use tileup::{FsTileSink, RasterImage, Tiler, TilerOptions};
///
/// let source = RasterImage::open("world.png")?;
/// let options = TilerOptions {
///     auto_zoom_levels: Some(3),
///     output_dir: "tiles".into(),
///     ..TilerOptions::default()
/// };
///
/// let mut tiler = Tiler::new(source, FsTileSink::new(), options, "png")?;
/// let summary = tiler.run()?;
/// println!("{} tiles written", summary.total_tiles());
/// # Ok::<(), tileup::TileError>(())
/// ```
pub struct Tiler<B: Bitmap, S: TileSink<B>> {
    source: B,
    sink: S,
    options: TilerOptions,
    extension: String,
    source_name: String,
}

impl<B: Bitmap, S: TileSink<B>> Tiler<B, S> {
    /// Create a tiler writing `{prefix}_{column}_{row}.{extension}` tiles.
    ///
    /// # Errors
    ///
    /// Returns [`TileError::InvalidOptions`] if the options or the extension
    /// are unusable.
    pub fn new(
        source: B,
        sink: S,
        options: TilerOptions,
        extension: impl Into<String>,
    ) -> Result<Self, TileError> {
        options.validate()?;

        let extension = extension.into().trim_start_matches('.').to_string();
        if extension.is_empty() {
            return Err(TileError::InvalidOptions(
                "tile file extension must not be empty".to_string(),
            ));
        }

        Ok(Self {
            source,
            sink,
            options,
            extension,
            source_name: String::new(),
        })
    }

    /// Name reported as the source in the run summary.
    pub fn with_source_name(mut self, name: impl Into<String>) -> Self {
        self.source_name = name.into();
        self
    }

    /// The zoom levels a run will produce, highest first.
    pub fn tasks(&self) -> Vec<ZoomTask> {
        plan_zoom_levels(self.options.auto_zoom_levels, &self.options.output_dir)
    }

    /// Generate every planned zoom level.
    ///
    /// # Errors
    ///
    /// Stops at the first level that cannot be scaled ([`TileError::Scale`]),
    /// whose directory cannot be created, or whose tiles cannot be cropped,
    /// extended or written. Nothing is written for the failing level's
    /// remaining cells.
    pub fn run(&mut self) -> Result<PyramidSummary, TileError> {
        let tasks = self.tasks();
        let emitter = TileEmitter::new(
            self.options.tile_width,
            self.options.tile_height,
            self.options.extend_incomplete_tiles,
            &self.options.filename_prefix,
            &self.extension,
        );

        let mut levels = Vec::with_capacity(tasks.len());
        for task in &tasks {
            let scaled;
            let image = if task.is_native() {
                &self.source
            } else {
                scaled = scale_for_task(&self.source, task, &self.options)?;
                &scaled
            };

            info!(
                "Level {}: scale {}, {} x {}",
                task.zoom_label.map_or_else(|| "-".to_string(), |l| l.to_string()),
                task.scale_factor,
                image.width(),
                image.height()
            );

            self.sink.create_dir_all(&task.output_dir)?;
            let level = emitter.emit_level(image, task, &mut self.sink)?;
            levels.push(level);
        }

        info!("Finished.");

        let (source_width, source_height) = self.source.dimensions();
        Ok(PyramidSummary {
            source: self.source_name.clone(),
            source_width,
            source_height,
            tile_width: self.options.tile_width,
            tile_height: self.options.tile_height,
            levels,
        })
    }

    /// Consume the tiler and return its sink.
    pub fn into_sink(self) -> S {
        self.sink
    }
}

/// Scale the source for a zoom level, naming the scale and tile size on failure.
fn scale_for_task<B: Bitmap>(
    source: &B,
    task: &ZoomTask,
    options: &TilerOptions,
) -> Result<B, TileError> {
    source
        .scale(task.scale_factor)
        .map_err(|e| TileError::Scale {
            scale: task.scale_factor,
            tile_width: options.tile_width,
            tile_height: options.tile_height,
            message: e.to_string(),
        })
}

/// Tile the image at `source_path` onto the filesystem.
///
/// Options are validated and the tile extension resolved before the source is
/// decoded; a source that cannot be decoded aborts before any planning.
///
/// # Logging
///
/// Progress is reported through `tracing` under the `tileup` target: `info`
/// for the source, each level and completion, `warn` when the zoom level count
/// is capped. Tile-by-tile crop and save progress is logged at `debug`, so a
/// caller wanting verbose output enables that level in its subscriber, e.g.
/// `RUST_LOG=tileup=debug` with `tracing_subscriber::EnvFilter`.
pub fn run(
    source_path: impl AsRef<Path>,
    options: &TilerOptions,
) -> Result<PyramidSummary, TileError> {
    let source_path = source_path.as_ref();
    options.validate()?;

    let extension = tile_extension(source_path, options.extension.as_deref()).ok_or_else(|| {
        TileError::InvalidOptions(format!(
            "cannot derive a tile extension from {}; set one explicitly",
            source_path.display()
        ))
    })?;

    let source = RasterImage::open(source_path)?.with_filter(options.filter);
    info!(
        "Opened {}, {} x {}",
        source_path.display(),
        source.width(),
        source.height()
    );

    Tiler::new(source, FsTileSink::new(), options.clone(), extension)?
        .with_source_name(source_path.display().to_string())
        .run()
}
