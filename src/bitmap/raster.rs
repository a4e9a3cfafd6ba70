//! `image`-crate backed bitmap.

use std::mem;
use std::path::Path;

use clap::ValueEnum;
use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageBuffer, ImageFormat, Pixel};

use super::Bitmap;
use crate::error::BitmapError;

// =============================================================================
// Resample Filter
// =============================================================================

/// Resampling filter used when building lower zoom levels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ResampleFilter {
    /// Nearest neighbour
    Nearest,
    /// Linear (box-like averaging when halving)
    #[default]
    Triangle,
    /// Cubic
    CatmullRom,
    /// Gaussian
    Gaussian,
    /// Lanczos with window 3
    Lanczos3,
}

impl From<ResampleFilter> for FilterType {
    fn from(filter: ResampleFilter) -> Self {
        match filter {
            ResampleFilter::Nearest => FilterType::Nearest,
            ResampleFilter::Triangle => FilterType::Triangle,
            ResampleFilter::CatmullRom => FilterType::CatmullRom,
            ResampleFilter::Gaussian => FilterType::Gaussian,
            ResampleFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

// =============================================================================
// Raster Image
// =============================================================================

/// A decoded raster image.
#[derive(Debug, Clone)]
pub struct RasterImage {
    image: DynamicImage,
    filter: ResampleFilter,
}

impl RasterImage {
    /// Wrap an already decoded image.
    pub fn new(image: DynamicImage) -> Self {
        Self {
            image,
            filter: ResampleFilter::default(),
        }
    }

    /// Decode an image file.
    ///
    /// The format is guessed from the file contents, falling back to the
    /// extension.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, BitmapError> {
        let path = path.as_ref();
        let decode_error = |message: String| BitmapError::Decode {
            path: path.display().to_string(),
            message,
        };

        let image = image::ImageReader::open(path)
            .map_err(|e| decode_error(e.to_string()))?
            .with_guessed_format()
            .map_err(|e| decode_error(e.to_string()))?
            .decode()
            .map_err(|e| decode_error(e.to_string()))?;

        Ok(Self::new(image))
    }

    /// Use `filter` for subsequent [`Bitmap::scale`] calls.
    pub fn with_filter(mut self, filter: ResampleFilter) -> Self {
        self.filter = filter;
        self
    }

    /// The resampling filter in use.
    pub fn filter(&self) -> ResampleFilter {
        self.filter
    }

    /// Borrow the underlying image.
    pub fn as_image(&self) -> &DynamicImage {
        &self.image
    }

    fn derive(&self, image: DynamicImage) -> Self {
        Self {
            image,
            filter: self.filter,
        }
    }
}

impl Bitmap for RasterImage {
    fn width(&self) -> u32 {
        self.image.width()
    }

    fn height(&self) -> u32 {
        self.image.height()
    }

    fn scale(&self, factor: f64) -> Result<Self, BitmapError> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(BitmapError::Resize {
                factor,
                message: "factor must be a positive number".to_string(),
            });
        }
        if factor == 1.0 {
            return Ok(self.clone());
        }

        let (width, height) = scaled_dimensions(self.dimensions(), factor);
        if width == 0 || height == 0 {
            return Err(BitmapError::Resize {
                factor,
                message: format!(
                    "{}x{} image would shrink to {}x{}",
                    self.width(),
                    self.height(),
                    width,
                    height
                ),
            });
        }

        let resized = self.image.resize_exact(width, height, self.filter.into());
        Ok(self.derive(resized))
    }

    fn crop(&self, x: u32, y: u32, width: u32, height: u32) -> Result<Self, BitmapError> {
        let crop_error = |message: &str| BitmapError::Crop {
            x,
            y,
            width,
            height,
            message: message.to_string(),
        };

        if width == 0 || height == 0 {
            return Err(crop_error("requested size is empty"));
        }
        if x >= self.width() || y >= self.height() {
            return Err(crop_error("origin lies outside the image"));
        }

        // Clip to the pixels that actually exist.
        let width = width.min(self.width() - x);
        let height = height.min(self.height() - y);

        Ok(self.derive(self.image.crop_imm(x, y, width, height)))
    }

    fn extend(&self, width: u32, height: u32) -> Result<Self, BitmapError> {
        if width < self.width() || height < self.height() {
            return Err(BitmapError::Extend {
                width,
                height,
                message: format!(
                    "tile is already {}x{}, extension cannot shrink it",
                    self.width(),
                    self.height()
                ),
            });
        }

        let too_large = || BitmapError::Extend {
            width,
            height,
            message: "canvas does not fit in memory".to_string(),
        };

        // Keep the source bit depth; only an alpha channel is added.
        let padded = match &self.image {
            DynamicImage::ImageLuma8(_) | DynamicImage::ImageLumaA8(_) => {
                let tile = self.image.to_luma_alpha8();
                DynamicImage::ImageLumaA8(pad(&tile, width, height).ok_or_else(too_large)?)
            }
            DynamicImage::ImageLuma16(_) | DynamicImage::ImageLumaA16(_) => {
                let tile = self.image.to_luma_alpha16();
                DynamicImage::ImageLumaA16(pad(&tile, width, height).ok_or_else(too_large)?)
            }
            DynamicImage::ImageRgb16(_) | DynamicImage::ImageRgba16(_) => {
                let tile = self.image.to_rgba16();
                DynamicImage::ImageRgba16(pad(&tile, width, height).ok_or_else(too_large)?)
            }
            DynamicImage::ImageRgb32F(_) | DynamicImage::ImageRgba32F(_) => {
                let tile = self.image.to_rgba32f();
                DynamicImage::ImageRgba32F(pad(&tile, width, height).ok_or_else(too_large)?)
            }
            _ => {
                let tile = self.image.to_rgba8();
                DynamicImage::ImageRgba8(pad(&tile, width, height).ok_or_else(too_large)?)
            }
        };

        Ok(self.derive(padded))
    }

    fn write(&self, path: &Path) -> Result<(), BitmapError> {
        let encode_error = |message: String| BitmapError::Encode {
            path: path.display().to_string(),
            message,
        };

        let format = ImageFormat::from_path(path).map_err(|e| encode_error(e.to_string()))?;

        let result = if supports_alpha(format) {
            self.image.save_with_format(path, format)
        } else {
            DynamicImage::ImageRgb8(self.image.to_rgb8()).save_with_format(path, format)
        };

        result.map_err(|e| encode_error(e.to_string()))
    }
}

// =============================================================================
// Utility Functions
// =============================================================================

/// Dimensions after scaling by `factor`, rounded to the nearest pixel.
#[inline]
pub(crate) fn scaled_dimensions((width, height): (u32, u32), factor: f64) -> (u32, u32) {
    let scale = |v: u32| (f64::from(v) * factor).round() as u32;
    (scale(width), scale(height))
}

/// Copy `tile` onto a zeroed (fully transparent) `width` x `height` canvas.
///
/// Returns `None` when the canvas byte size overflows.
fn pad<P: Pixel>(
    tile: &ImageBuffer<P, Vec<P::Subpixel>>,
    width: u32,
    height: u32,
) -> Option<ImageBuffer<P, Vec<P::Subpixel>>> {
    let bytes = (width as usize)
        .checked_mul(height as usize)?
        .checked_mul(usize::from(P::CHANNEL_COUNT))?
        .checked_mul(mem::size_of::<P::Subpixel>())?;
    if bytes > isize::MAX as usize {
        return None;
    }

    let mut canvas = ImageBuffer::new(width, height);
    imageops::replace(&mut canvas, tile, 0, 0);
    Some(canvas)
}

/// Whether `format` can store an alpha channel.
fn supports_alpha(format: ImageFormat) -> bool {
    !matches!(format, ImageFormat::Jpeg)
}

// =============================================================================
// Tests
// =============================================================================
