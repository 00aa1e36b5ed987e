use std::{io::Write, path::PathBuf};

use argh::FromArgs;
use log::{error, info, warn};
use sangria_core::{Kind, Options, Symbol, pixel::Threshold};

use crate::{
    error::{Error, Result},
    image_source,
};

#[derive(FromArgs, Debug)]
/// Convert an image into a C++ uint8_t array.
pub struct Args {
    /// input image path
    #[argh(positional)]
    pub input: String,

    /// array name, derived from the input file name by default
    #[argh(option, short = 'n')]
    pub name: Option<String>,

    /// directory the .cpp file is written to
    #[argh(option, short = 'o', default = "PathBuf::from(\".\")")]
    pub output_dir: PathBuf,

    /// brightness cutoff for monochrome output
    #[argh(option, short = 't', default = "Threshold::DEFAULT.0")]
    pub threshold: u8,
}

impl Args {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            name: None,
            output_dir: PathBuf::from("."),
            threshold: Threshold::DEFAULT.0,
        }
    }
}

/// Command line arguments without the program name.
pub fn env_args() -> Vec<String> {
    std::env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect()
}

/// Parse the command line of `kind`.
///
/// Returns `None` when there is nothing to convert: `--help` was printed, or the
/// arguments were unusable and the usage line was printed instead.
pub fn parse_args(kind: Kind, argv: &[&str], out: &mut impl Write) -> Result<Option<Args>> {
    match Args::from_args(&[kind.tool_name()], argv) {
        Ok(args) => Ok(Some(args)),
        Err(early) if early.status.is_ok() => {
            out.write_all(early.output.as_bytes()).map_err(Error::Console)?;
            Ok(None)
        }
        Err(early) => {
            warn!("{}", early.output.trim_end());
            writeln!(out, "Usage> {kind} {}", kind.input_hint()).map_err(Error::Console)?;
            Ok(None)
        }
    }
}

/// Convert `args.input` and write `<name>.cpp`, returning the written path.
///
/// The output file is only created once the whole array has been rendered.
pub fn run(kind: Kind, args: &Args, out: &mut impl Write) -> Result<PathBuf> {
    image_source::init()?;

    writeln!(out, "Input  name: {}", args.input).map_err(Error::Console)?;
    let symbol = match &args.name {
        Some(name) => Symbol::new(name)?,
        None => Symbol::from_path(&args.input)?,
    };
    writeln!(out, "Output name: {symbol}").map_err(Error::Console)?;

    let image = image_source::load(&args.input)?;
    if !kind.uses_threshold() && args.threshold != Threshold::DEFAULT.0 {
        info!("{kind} ignores the threshold option");
    }
    let options = Options {
        threshold: Threshold(args.threshold),
    };
    let source = sangria_core::convert(kind, &image, &symbol, &options)?;

    let path = args.output_dir.join(format!("{symbol}.cpp"));
    std::fs::write(&path, source).map_err(|source| Error::Write {
        path: path.clone(),
        source,
    })?;
    info!("Wrote {}", path.display());
    writeln!(out, "Success!!").map_err(Error::Console)?;
    Ok(path)
}

/// Parse `argv`, convert, and report failures on `out`.
///
/// Failures are reported, never propagated, so the process exit status stays 0.
pub fn execute(kind: Kind, argv: &[&str], out: &mut impl Write) {
    let result = parse_args(kind, argv, out).and_then(|args| match args {
        Some(args) => run(kind, &args, out).map(Some),
        None => Ok(None),
    });
    if let Err(err) = result {
        error!("{kind} failed: {err:?}");
        if let Err(console) = writeln!(out, "ERROR: {err}") {
            error!("Cannot report failure: {console}");
        }
    }
}
