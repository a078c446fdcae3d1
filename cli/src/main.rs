use clap::error::ErrorKind;
use clap::Parser;
use pixpack::{convert, ConvertError, PixelFormat};
use std::ffi::OsString;
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;
use tracing::warn;

#[derive(Debug, Parser)]
struct Args {
    /// rgb332 or rgb565
    #[arg(allow_hyphen_values = true)]
    format: String,
    #[arg(allow_hyphen_values = true)]
    file_input: PathBuf,
    #[arg(allow_hyphen_values = true)]
    file_output: PathBuf,
    /// Extra arguments are accepted and ignored
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    rest: Vec<OsString>,
    /// Also save the quantised image as a regular image file
    #[arg(long)]
    preview: Option<PathBuf>,
    #[arg(short, long)]
    verbose: bool,
}

fn run(args: &Args) -> Result<(), ConvertError> {
    let format: PixelFormat = args.format.parse()?;
    if !args.rest.is_empty() {
        warn!("Ignoring {} extra argument(s): {:?}", args.rest.len(), args.rest);
    }
    convert(
        format,
        &args.file_input,
        &args.file_output,
        args.preview.as_deref(),
    )
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp) => err.exit(),
        Err(_) => {
            let program = std::env::args().next().unwrap_or_else(|| "pixpack".to_string());
            println!("usage: {program} <rgb332 or rgb565> <input-file> <output-file>");
            return;
        }
    };

    let level = if args.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(&args) {
        println!("error: {err}");
    }
}
