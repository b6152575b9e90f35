//! A library for converting images to plain ASCII art.
//!
//! The pipeline is: decode, resize to a target character width (keeping the
//! aspect ratio), convert to grayscale, then map every luminance sample to a
//! glyph of a character ramp ordered from black to white.
//!
//! # Examples
//!
//! Basic usage:
//!
//! ```no_run
//! use std::fs::File;
//! use libartify::{AsciiBuilder, FilterType};
//!
//! let file = File::open("image.png")?;
//! let ascii = AsciiBuilder::new(file)
//!     .width(80)
//!     .charset(" .:-=+*#%@")
//!     .filter_type(FilterType::Lanczos3)
//!     .make_ascii()?;
//!
//! println!("{}", ascii);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::io::{BufReader, Read, Seek};

use image::ImageReader;

pub use image::imageops::FilterType;

pub use charset::{DEFAULT_RAMP, Ramp, map_sample_to_char};
pub use error::AsciiError;
pub use raster::{GrayRaster, luma, resize_and_grayscale, target_height};

pub mod charset;
pub mod error;
pub mod raster;

/// Character width used when none is configured.
pub const DEFAULT_WIDTH: u32 = 100;

/// Resampling filters exposed to users.
///
/// Only the smooth, high-quality members of [`FilterType`] are offered;
/// nearest-neighbour and friends lose too much detail at small widths.
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Filter {
    /// Cubic filter. Slightly softer, a bit faster.
    CatmullRom,

    /// Lanczos with window 3. Highest quality.
    #[default]
    Lanczos3,
}

impl From<Filter> for FilterType {
    fn from(filter: Filter) -> Self {
        match filter {
            Filter::CatmullRom => FilterType::CatmullRom,
            Filter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

/// Renders a grayscale raster as text, one line per raster row.
///
/// Line breaks go between rows; the last row is not followed by one.
///
/// # Examples
///
/// ```
/// use libartify::{GrayRaster, assemble};
///
/// let raster = GrayRaster::from_raw(3, 2, vec![0, 128, 255, 255, 128, 0]).unwrap();
/// let ramp: Vec<char> = " .:#@".chars().collect();
/// assert_eq!(assemble(&raster, &ramp), " :@\n@: ");
/// ```
pub fn assemble(raster: &GrayRaster, ramp: &[char]) -> String {
    let mut frame =
        String::with_capacity(raster.samples().len() + raster.height() as usize);

    for (y, row) in raster.rows().enumerate() {
        if y != 0 {
            frame.push('\n');
        }
        frame.extend(row.iter().map(|&s| map_sample_to_char(i64::from(s), ramp)));
    }

    frame
}

/// Builder for converting images to ASCII art.
///
/// # Type Parameters
///
/// * `R` - A readable and seekable source (e.g., `File`, `Cursor<Vec<u8>>`)
///
/// # Examples
///
/// ```no_run
/// use std::fs::File;
/// use libartify::{AsciiBuilder, FilterType};
///
/// let file = File::open("photo.jpg")?;
/// let ascii = AsciiBuilder::new(file)
///     .width(120)
///     .invert(true)
///     .filter_type(FilterType::CatmullRom)
///     .make_ascii()?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct AsciiBuilder<R: Read + Seek> {
    image: BufReader<R>,
    width: u32,
    ramp: Ramp,
    invert: bool,
    filter_type: FilterType,
}

impl<R: Read + Seek> AsciiBuilder<R> {
    /// Creates a new ASCII art builder from an image source.
    ///
    /// # Returns
    ///
    /// A builder with default settings:
    /// - Width of [`DEFAULT_WIDTH`] characters
    /// - The [`DEFAULT_RAMP`] charset
    /// - No inversion
    /// - Lanczos3 filtering
    pub fn new(image: R) -> Self {
        Self {
            image: BufReader::new(image),
            width: DEFAULT_WIDTH,
            ramp: Ramp::default(),
            invert: false,
            filter_type: FilterType::Lanczos3,
        }
    }

    /// Generates the ASCII art string from the configured image.
    ///
    /// The source is dropped as soon as it has been decoded.
    ///
    /// # Returns
    ///
    /// The rendered rows joined by `\n`, without a trailing line break.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The width is zero
    /// - Reading from the source fails
    /// - The image format cannot be determined or decoding fails
    /// - The image is so wide that the derived height is zero
    pub fn make_ascii(self) -> Result<String, AsciiError> {
        if self.width == 0 {
            return Err(AsciiError::InvalidWidth);
        }

        let image = ImageReader::new(self.image)
            .with_guessed_format()?
            .decode()?;

        let raster = resize_and_grayscale(&image, self.width, self.filter_type)?;
        drop(image);

        let ramp = if self.invert {
            self.ramp.reversed()
        } else {
            self.ramp
        };

        log::trace!(
            "mapping {} samples onto a {}-glyph ramp",
            raster.samples().len(),
            ramp.len()
        );

        Ok(assemble(&raster, ramp.as_slice()))
    }

    /// Sets the output width in characters. The height follows from the
    /// image's aspect ratio.
    ///
    /// # Notes
    ///
    /// Characters are usually taller than they are wide, so the output looks
    /// vertically stretched in most terminals.
    #[inline]
    pub fn width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    /// Sets a custom character set, ordered from black to white.
    #[inline]
    pub fn charset(mut self, charset: &str) -> Self {
        self.ramp = Ramp::new(charset);
        self
    }

    #[inline]
    pub fn ramp(mut self, ramp: Ramp) -> Self {
        self.ramp = ramp;
        self
    }

    /// Reverses the ramp so that black maps to its last glyph.
    #[inline]
    pub fn invert(mut self, invert: bool) -> Self {
        self.invert = invert;
        self
    }

    /// Sets the image resampling filter type.
    ///
    /// # Notes
    ///
    /// - `Nearest`: Fastest but lowest quality
    /// - `Triangle`: Good balance of speed and quality
    /// - `CatmullRom`: High quality
    /// - `Lanczos3`: Highest quality but slowest
    #[inline]
    pub fn filter_type(mut self, filter_type: FilterType) -> Self {
        self.filter_type = filter_type;
        self
    }
}
