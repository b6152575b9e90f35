//! Error types for ASCII art conversion operations.

use std::{error::Error, fmt, io};

use image::ImageError;

/// Errors that can occur during ASCII art generation.
#[derive(Debug)]
pub enum AsciiError {
    /// Reading the image source failed.
    Io(io::Error),

    /// The decoder rejected the image, or resizing it failed.
    ImageFormat(ImageError),

    /// `make_ascii()` was called with a width of zero.
    InvalidWidth,

    /// The image cannot be resized to a size with a zero side, e.g. a
    /// 1000x1 strip rendered 100 characters wide.
    EmptyTarget { width: u32, height: u32 },
}

impl AsciiError {
    /// `true` when the input is not something the decoder understands:
    /// an unknown format or corrupt data.
    pub fn is_undecodable(&self) -> bool {
        matches!(
            self,
            Self::ImageFormat(ImageError::Unsupported(_) | ImageError::Decoding(_))
        )
    }
}

impl fmt::Display for AsciiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::ImageFormat(err) => write!(f, "{err}"),
            Self::InvalidWidth => {
                write!(f, "the target width must be at least one character")
            }
            Self::EmptyTarget { width, height } => write!(
                f,
                "cannot resize to {width}x{height}: the image is too wide for this width"
            ),
        }
    }
}

impl Error for AsciiError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::ImageFormat(err) => Some(err),
            Self::InvalidWidth | Self::EmptyTarget { .. } => None,
        }
    }
}

impl From<io::Error> for AsciiError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<ImageError> for AsciiError {
    fn from(err: ImageError) -> Self {
        Self::ImageFormat(err)
    }
}
