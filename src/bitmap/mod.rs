//! Bitmap capability.
//!
//! The pyramid core never touches pixels directly. Everything it needs from
//! an image buffer goes through the [`Bitmap`] trait: dimensions, uniform
//! scaling, clipped crops, transparent padding and encoding to disk.
//!
//! [`RasterImage`] is the production implementation, backed by the `image`
//! crate.

mod raster;

pub use raster::{RasterImage, ResampleFilter};

use std::path::Path;

use crate::error::BitmapError;

/// An addressable 2-D pixel buffer.
///
/// Every operation returns a new buffer; the receiver is never mutated, so a
/// loaded source image can be shared read-only across zoom levels.
pub trait Bitmap: Sized {
    /// Width in pixels.
    fn width(&self) -> u32;

    /// Height in pixels.
    fn height(&self) -> u32;

    /// `(width, height)` in pixels.
    fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    /// Return a copy uniformly scaled by `factor`.
    fn scale(&self, factor: f64) -> Result<Self, BitmapError>;

    /// Return the `width` x `height` region at `(x, y)`, clipped to the
    /// available pixels. The result may be smaller than requested.
    fn crop(&self, x: u32, y: u32, width: u32, height: u32) -> Result<Self, BitmapError>;

    /// Pad out to exactly `width` x `height`, keeping the existing pixels at
    /// the top-left corner and filling the rest with full transparency.
    fn extend(&self, width: u32, height: u32) -> Result<Self, BitmapError>;

    /// Encode to `path`, choosing the format from its extension.
    fn write(&self, path: &Path) -> Result<(), BitmapError>;
}
