//! Binary that reads a tree from standard in (or a file), computes a maximum independent set and
//! writes its size and vertices to standard out.

use std::error;
use std::fs::File;
use std::io;
use std::path::PathBuf;

use log::LevelFilter;
use structopt::StructOpt;
use tree_mis::driver::{self, DriverOptions};
use tree_mis::logger::build_logger_for_verbosity;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "mis",
    about = "Computes a maximum independent set of a tree."
)]
struct Opt {
    /// Input file: `N`, then `N - 1` edges `u v`, then an optional root.
    /// `stdin` if not specified.
    #[structopt(short, long, parse(from_os_str))]
    input: Option<PathBuf>,

    /// Verbose mode (-v, -vv, -vvv, etc.)
    #[structopt(short, long, parse(from_occurrences))]
    verbose: usize,

    /// Skips checking that the input is a tree
    #[structopt(short, long)]
    trusting: bool,
}

pub fn main() -> Result<(), Box<dyn error::Error>> {
    let opt = Opt::from_args();
    build_logger_for_verbosity(LevelFilter::Warn, opt.verbose);

    let options = DriverOptions { trusting: opt.trusting };
    let stdout = io::stdout();
    let stdout = stdout.lock();
    match opt.input {
        Some(path) => driver::run(File::open(path)?, stdout, &options)?,
        None => driver::run(io::stdin().lock(), stdout, &options)?,
    };
    Ok(())
}
