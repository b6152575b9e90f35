use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use libartify::{AsciiBuilder, FilterType, Ramp};
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

use crate::{cli::Args, error::ArtifyError};

pub type Rendering = Result<String, ArtifyError>;

/// Renders image files with one fixed set of options.
#[derive(Debug, Clone)]
pub struct Converter {
    width: u32,
    ramp: Ramp,
    invert: bool,
    filter: FilterType,
}

impl Converter {
    pub fn new(args: &Args) -> Self {
        let ramp = Ramp::new(&args.chars);
        if ramp.is_empty() {
            log::warn!(
                "Empty character ramp, every pixel will render as the default ramp's first glyph"
            );
        }

        Self {
            width: args.resolve_width(),
            ramp,
            invert: args.invert,
            filter: args.filter.into(),
        }
    }

    /// Renders a single image file.
    pub fn render(&self, path: &Path) -> Rendering {
        if !path.is_file() {
            return Err(ArtifyError::NotFound(path.to_path_buf()));
        }

        let file = File::open(path).map_err(|e| ArtifyError::from_io(path, e))?;

        log::info!("Rendering {} at {} columns", path.display(), self.width);

        AsciiBuilder::new(file)
            .width(self.width)
            .ramp(self.ramp.clone())
            .invert(self.invert)
            .filter_type(self.filter)
            .make_ascii()
            .map_err(|e| ArtifyError::from_ascii(path, e))
    }

    /// Renders every image independently, in parallel. Results keep the
    /// order of `paths`.
    pub fn render_all(&self, paths: &[PathBuf]) -> Vec<Rendering> {
        paths.par_iter().map(|path| self.render(path)).collect()
    }
}

/// Prints every rendering to stdout, errors included.
pub fn print_all(renderings: &[Rendering]) {
    for rendering in renderings {
        match rendering {
            Ok(ascii) => println!("{ascii}"),
            Err(e) => println!("{e}"),
        }
    }
}

/// Prints the failed renderings to stdout, then writes the successful ones to
/// `output`. Returns how many renderings were written.
pub fn write_all(
    renderings: &[Rendering],
    output: &Path,
) -> Result<usize, ArtifyError> {
    for e in renderings.iter().filter_map(|r| r.as_ref().err()) {
        println!("{e}");
    }

    write_successes(renderings, output)
        .map_err(|e| ArtifyError::Output(output.to_path_buf(), e))
}

fn write_successes(renderings: &[Rendering], output: &Path) -> io::Result<usize> {
    let mut writer = BufWriter::new(File::create(output)?);
    let mut written = 0;

    for ascii in renderings.iter().filter_map(|r| r.as_ref().ok()) {
        writeln!(writer, "{ascii}")?;
        written += 1;
    }

    writer.flush()?;
    Ok(written)
}
