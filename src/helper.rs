use std::io::{self, BufRead, Read, Write};

use crate::Mode;

/// Values emitted before the line is wrapped.
pub const BYTES_PER_LINE: usize = 21;

#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    #[error("failed to read input")]
    Read(#[source] io::Error),
    #[error("failed to write declaration")]
    Write(#[source] io::Error),
    #[error("NUL byte at offset {offset} in text mode")]
    Nul { offset: u64 },
}

/// Write one `static const char` declaration for everything readable from
/// `input`, returning the number of payload bytes consumed.
pub fn write_declaration<R: Read, W: Write>(
    out: &mut W,
    symbol: &str,
    input: R,
    mode: Mode,
) -> Result<u64, EmitError> {
    writeln!(out, "static const char {symbol}[] = ").map_err(EmitError::Write)?;
    out.write_all(b"{").map_err(EmitError::Write)?;

    let mut input = io::BufReader::new(input);
    let mut offset: u64 = 0;
    let mut line_count = 0;
    loop {
        let buf = match input.fill_buf() {
            Ok(buf) if buf.is_empty() => break,
            Ok(buf) => buf,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(EmitError::Read(err)),
        };
        let consumed = buf.len();
        for &byte in buf {
            if mode == Mode::Text && byte == 0 {
                return Err(EmitError::Nul { offset });
            }
            write!(out, "0x{byte:02x}, ").map_err(EmitError::Write)?;
            offset += 1;
            line_count += 1;
            if line_count == BYTES_PER_LINE {
                out.write_all(b"\n ").map_err(EmitError::Write)?;
                line_count = 0;
            }
        }
        input.consume(consumed);
    }

    if mode == Mode::Text {
        out.write_all(b"\n0").map_err(EmitError::Write)?;
    }
    out.write_all(b"\n};\n\n").map_err(EmitError::Write)?;
    Ok(offset)
}
