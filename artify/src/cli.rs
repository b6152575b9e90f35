use std::path::PathBuf;

use clap::{Parser, crate_version, value_parser};
use libartify::{DEFAULT_RAMP, DEFAULT_WIDTH, Filter};
use log::LevelFilter;
use terminal_size::{Width, terminal_size};

/// Convert an image to ASCII art.
#[derive(Parser, Debug)]
#[command(version(crate_version!()), about)]
pub struct Args {
    /// Path to the input image file. Several images are rendered one after
    /// the other, in the given order
    #[arg(required = true)]
    pub images: Vec<PathBuf>,

    /// Custom character ramp, ordered from black to white
    #[arg(long, default_value = DEFAULT_RAMP, allow_hyphen_values = true)]
    pub chars: String,

    /// Output width in characters. The height follows the aspect ratio
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_WIDTH,
        value_parser = value_parser!(u32).range(1..)
    )]
    pub width: u32,

    /// Use the terminal's width instead of --width
    #[arg(long)]
    pub fit: bool,

    /// Reverses the ramp, for dark text on a light background
    #[arg(long)]
    pub invert: bool,

    /// Resampling filter used when shrinking the image
    #[arg(short, long, value_enum, default_value_t = Filter::Lanczos3)]
    pub filter: Filter,

    /// Writes the ASCII art to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Log verbosity: off, error, warn, info, debug or trace
    #[arg(long, default_value = "warn")]
    pub log_level: LevelFilter,
}

impl Args {
    /// The character width to render at, honouring `--fit`.
    pub fn resolve_width(&self) -> u32 {
        if !self.fit {
            return self.width;
        }

        match terminal_size() {
            Some((Width(columns), _)) if columns > 0 => u32::from(columns),
            _ => {
                log::warn!(
                    "Could not detect the terminal's window size, using a width of {}",
                    self.width
                );
                self.width
            }
        }
    }
}
