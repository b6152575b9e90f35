use std::{
    error::Error,
    fmt::Display,
    io,
    path::{Path, PathBuf},
};

use libartify::AsciiError;

/// Everything that can go wrong while rendering one input.
///
/// These are reported as a single line on stdout and never abort the
/// process. `Io`, `Ascii` and `Output` cover the unexpected failures.
#[derive(Debug)]
pub enum ArtifyError {
    NotFound(PathBuf),
    InvalidImage(PathBuf),
    Io(io::Error),
    Ascii(AsciiError),
    Output(PathBuf, io::Error),
}

#[allow(clippy::enum_glob_use)]
use ArtifyError::*;

impl ArtifyError {
    /// Sorts an I/O failure on `path` into the not-found or unexpected kind.
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => NotFound(path.to_path_buf()),
            _ => Io(err),
        }
    }

    /// Sorts a conversion failure on `path` into the invalid-image or
    /// unexpected kind.
    pub fn from_ascii(path: &Path, err: AsciiError) -> Self {
        match err {
            err if err.is_undecodable() => InvalidImage(path.to_path_buf()),
            AsciiError::Io(err) => Self::from_io(path, err),
            err => Ascii(err),
        }
    }
}

impl Error for ArtifyError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Io(e) => Some(e),
            Ascii(e) => Some(e),
            Output(_, e) => Some(e),
            _ => None,
        }
    }
}

impl Display for ArtifyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotFound(path) => {
                write!(f, "Error: File not found at '{}'", path.display())
            }
            InvalidImage(path) => write!(
                f,
                "Error: '{}' is not a valid image file",
                path.display()
            ),
            Io(e) => write!(f, "An error occurred: {e}"),
            Ascii(e) => write!(f, "An error occurred: {e}"),
            Output(path, e) => write!(
                f,
                "An error occurred: could not write '{}': {e}",
                path.display()
            ),
        }
    }
}

macro_rules! map_error {
   ($($from:ty => $enum_variant:tt,)*) => {
        $(impl From<$from> for ArtifyError {
            fn from(value: $from) -> Self {
                Self::$enum_variant(value)
            }
        })*
    };
}

map_error! {
    io::Error => Io,
    AsciiError => Ascii,
}
