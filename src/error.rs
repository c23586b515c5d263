use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConvertError {
    #[error("cannot read input {}", .path.display())]
    InputAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot write output {}", .path.display())]
    OutputAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Text mode payloads end up as NUL-terminated strings.
    #[error("{} contains a NUL byte at offset {offset}, use binary mode to embed it", .path.display())]
    NulByte { path: PathBuf, offset: u64 },
    /// Removing the partial output failed. The aborting error stays the
    /// source so it is still reported.
    #[error("failed to remove partial output {}: {cleanup}", .path.display())]
    Cleanup {
        path: PathBuf,
        cleanup: io::Error,
        #[source]
        original: Box<ConvertError>,
    },
}

impl ConvertError {
    /// The failure that aborted the run, looking through a failed cleanup.
    pub fn original(&self) -> &ConvertError {
        match self {
            ConvertError::Cleanup { original, .. } => original.original(),
            other => other,
        }
    }
}
