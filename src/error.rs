use thiserror::Error;

/// Errors raised by a [`Bitmap`](crate::bitmap::Bitmap) implementation.
#[derive(Debug, Clone, Error)]
pub enum BitmapError {
    /// Source image could not be opened or is not a supported format
    #[error("Could not open image {path}: {message}")]
    Decode { path: String, message: String },

    /// Uniform resize was rejected
    #[error("Cannot resize by factor {factor}: {message}")]
    Resize { factor: f64, message: String },

    /// Crop rectangle does not intersect the bitmap
    #[error("Invalid crop {width}x{height} at ({x}, {y}): {message}")]
    Crop {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        message: String,
    },

    /// Canvas extension to the requested size is impossible
    #[error("Cannot extend tile to {width}x{height}: {message}")]
    Extend {
        width: u32,
        height: u32,
        message: String,
    },

    /// Encoding or writing the bitmap failed
    #[error("Could not write {path}: {message}")]
    Encode { path: String, message: String },
}

/// Errors that abort pyramid generation.
#[derive(Debug, Clone, Error)]
pub enum TileError {
    /// Error from the bitmap backend (decode, crop, extend, encode)
    #[error(transparent)]
    Bitmap(#[from] BitmapError),

    /// A zoom level could not be produced from the source image
    #[error(
        "Failed to scale image, are you sure the original image is large enough to scale \
         down this far ({scale}) with this tilesize ({tile_width}x{tile_height})? {message}"
    )]
    Scale {
        scale: f64,
        tile_width: u32,
        tile_height: u32,
        message: String,
    },

    /// Output directory could not be created
    #[error("Could not create directory {path}: {message}")]
    CreateDir { path: String, message: String },

    /// Options rejected before any work started
    #[error("Invalid options: {0}")]
    InvalidOptions(String),
}
