use clap::Parser;

use crate::{
    cli::Args,
    colours::{BOLD, GREEN, RESET, YELLOW},
    primitives::{Converter, print_all, write_all},
};

mod cli;
mod colours;
mod error;
mod primitives;

// Failures are printed, never turned into a non-zero exit status.
fn main() {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level)
        .init();

    let converter = Converter::new(&args);
    let renderings = converter.render_all(&args.images);

    let Some(output) = args.output.as_deref() else {
        print_all(&renderings);
        return;
    };

    match write_all(&renderings, output) {
        Ok(0) => eprintln!("{YELLOW}Nothing was written to {}{RESET}", output.display()),
        Ok(written) => eprintln!(
            "{GREEN}{BOLD}Success!{RESET} Wrote {written} rendering(s) to {}",
            output.display()
        ),
        Err(e) => println!("{e}"),
    }
}
