//! Resampling and grayscale conversion.

use image::{DynamicImage, imageops::FilterType};

use crate::error::AsciiError;

/// A single-channel luminance grid stored row-major.
///
/// Sample `i` belongs to row `i / width` and column `i % width`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayRaster {
    width: u32,
    height: u32,
    samples: Vec<u8>,
}

impl GrayRaster {
    /// Wraps row-major samples, returning `None` unless
    /// `samples.len() == width * height`.
    pub fn from_raw(width: u32, height: u32, samples: Vec<u8>) -> Option<Self> {
        let expected = (width as usize).checked_mul(height as usize)?;
        (samples.len() == expected).then_some(Self { width, height, samples })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    /// Iterates over the rows of the raster, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        // `max(1)` keeps `chunks_exact` happy for zero-width rasters, which
        // never hold any samples anyway.
        self.samples.chunks_exact((self.width as usize).max(1))
    }
}

/// Height of the resized image for a given character width, preserving the
/// source aspect ratio.
///
/// The product is truncated toward zero, not rounded.
///
/// # Examples
///
/// ```
/// # use libartify::target_height;
/// assert_eq!(target_height(200, 100, 50), 25);
/// assert_eq!(target_height(3, 2, 100), 66);
/// ```
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn target_height(width: u32, height: u32, target_width: u32) -> u32 {
    if width == 0 {
        return 0;
    }
    let ratio = f64::from(height) / f64::from(width);
    (f64::from(target_width) * ratio) as u32
}

/// Perceptual luma of an RGB triple, using the ITU-R BT.601 weights
/// `0.299 R + 0.587 G + 0.114 B`.
///
/// The weights are scaled by 2^16 so the sum stays in integer math; adding
/// half a unit before the shift rounds to nearest.
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    let sum = 19_595 * u32::from(r) + 38_470 * u32::from(g) + 7_471 * u32::from(b);
    ((sum + 0x8000) >> 16) as u8
}

/// Resizes `image` to `target_width` columns and converts it to grayscale.
///
/// The height follows from the source aspect ratio (see [`target_height`]).
/// Any alpha channel is ignored.
///
/// # Errors
///
/// Returns [`AsciiError::EmptyTarget`] when either side of the target size
/// is zero, which happens for extreme aspect ratios.
pub fn resize_and_grayscale(
    image: &DynamicImage,
    target_width: u32,
    filter: FilterType,
) -> Result<GrayRaster, AsciiError> {
    let new_height = target_height(image.width(), image.height(), target_width);

    log::debug!(
        "resizing {}x{} -> {target_width}x{new_height} ({filter:?})",
        image.width(),
        image.height(),
    );

    if target_width == 0 || new_height == 0 {
        return Err(AsciiError::EmptyTarget {
            width: target_width,
            height: new_height,
        });
    }

    let resized = image
        .resize_exact(target_width, new_height, filter)
        .into_rgb8();

    let samples = resized
        .pixels()
        .map(|pixel| {
            let [r, g, b] = pixel.0;
            luma(r, g, b)
        })
        .collect();

    Ok(GrayRaster {
        width: target_width,
        height: new_height,
        samples,
    })
}
