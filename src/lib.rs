mod formater;
pub use formater::{c_identifier, is_c_identifier};

mod helper;
pub use helper::{write_declaration, EmitError, BYTES_PER_LINE};

mod error;
pub use error::ConvertError;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    /// NUL-free payload, terminated with a `0` entry.
    #[default]
    Text,
    /// Arbitrary payload, no terminator.
    Binary,
}

impl Mode {
    pub fn from_binary_flag(binary: bool) -> Self {
        if binary {
            Mode::Binary
        } else {
            Mode::Text
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub symbol: String,
    pub input: PathBuf,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConversionRequest {
    output: PathBuf,
    entries: Vec<Entry>,
    mode: Mode,
}

impl ConversionRequest {
    /// Positional `inputs` get a symbol derived from their path and come
    /// first, `named` inputs keep the symbol they were given.
    pub fn new(
        output: impl AsRef<Path>,
        inputs: impl IntoIterator<Item = PathBuf>,
        named: impl IntoIterator<Item = (String, PathBuf)>,
        mode: Mode,
    ) -> Self {
        let mut entries: Vec<Entry> = inputs
            .into_iter()
            .map(|input| Entry {
                symbol: c_identifier(&input.to_string_lossy()),
                input,
            })
            .collect();
        entries.extend(named.into_iter().map(|(symbol, input)| {
            if !is_c_identifier(&symbol) {
                tracing::warn!(
                    "symbol '{}' for {} is not a valid C identifier, using it verbatim",
                    symbol,
                    input.display()
                );
            }
            Entry { symbol, input }
        }));
        Self {
            output: output.as_ref().to_path_buf(),
            entries,
            mode,
        }
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub declarations: usize,
    pub bytes: u64,
}

/// Generate the output file for `request`.
///
/// On any failure the output file is removed before the error is returned,
/// so a build never picks up a truncated file.
pub fn convert(request: &ConversionRequest) -> Result<Summary, ConvertError> {
    match write_output(request) {
        Ok(summary) => {
            tracing::info!(
                "wrote {} declaration(s), {} byte(s) to {}",
                summary.declarations,
                summary.bytes,
                request.output.display()
            );
            Ok(summary)
        }
        Err(err) => Err(discard_output(&request.output, err)),
    }
}

fn write_output(request: &ConversionRequest) -> Result<Summary, ConvertError> {
    let output_err = |source| ConvertError::OutputAccess {
        path: request.output.clone(),
        source,
    };
    let file = File::create(&request.output).map_err(output_err)?;
    let mut out = BufWriter::new(file);

    let mut summary = Summary::default();
    for entry in &request.entries {
        tracing::debug!("embedding {} as {}", entry.input.display(), entry.symbol);
        let input = File::open(&entry.input).map_err(|source| {
            ConvertError::InputAccess {
                path: entry.input.clone(),
                source,
            }
        })?;
        let bytes = write_declaration(&mut out, &entry.symbol, input, request.mode)
            .map_err(|err| match err {
                EmitError::Read(source) => ConvertError::InputAccess {
                    path: entry.input.clone(),
                    source,
                },
                EmitError::Write(source) => output_err(source),
                EmitError::Nul { offset } => ConvertError::NulByte {
                    path: entry.input.clone(),
                    offset,
                },
            })?;
        summary.declarations += 1;
        summary.bytes += bytes;
    }

    out.flush().map_err(output_err)?;
    Ok(summary)
}

fn discard_output(path: &Path, original: ConvertError) -> ConvertError {
    tracing::debug!("removing partial output {}", path.display());
    match std::fs::remove_file(path) {
        Ok(()) => original,
        Err(err) if err.kind() == io::ErrorKind::NotFound => original,
        Err(cleanup) => {
            tracing::warn!(
                "failed to remove partial output {}: {}",
                path.display(),
                cleanup
            );
            ConvertError::Cleanup {
                path: path.to_path_buf(),
                cleanup,
                original: Box::new(original),
            }
        }
    }
}
