use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use bin2array::{convert, ConversionRequest, Mode};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Converts files into a C source file of byte-array constants
#[derive(Parser, Debug)]
#[command(name = "bin2array", version, about)]
struct Cli {
    /// Name of output file
    output: PathBuf,

    /// Name of input file(s), the symbol is derived from the path
    input: Vec<PathBuf>,

    /// Name of C variable, then input file
    #[arg(
        short = 'n',
        long,
        num_args = 2,
        value_names = ["NAME", "FILE"],
        value_parser = clap::value_parser!(OsString),
        action = clap::ArgAction::Append
    )]
    name_and_input: Vec<OsString>,

    /// Embed arbitrary bytes, without the NUL check and terminator
    #[arg(short, long)]
    binary: bool,
}

impl Cli {
    fn into_request(self) -> ConversionRequest {
        // num_args = 2 guarantees complete pairs
        let named = self
            .name_and_input
            .chunks_exact(2)
            .map(|pair| {
                (
                    pair[0].to_string_lossy().into_owned(),
                    PathBuf::from(&pair[1]),
                )
            })
            .collect::<Vec<_>>();
        ConversionRequest::new(
            self.output,
            self.input,
            named,
            Mode::from_binary_flag(self.binary),
        )
    }
}

fn run(cli: Cli) -> Result<()> {
    let request = cli.into_request();
    convert(&request)
        .with_context(|| format!("failed to generate {}", request.output().display()))?;
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
