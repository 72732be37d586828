use std::num::ParseFloatError;
use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Source errors – fatal, raised before ingestion starts
// ---------------------------------------------------------------------------

/// Failure to open an input source.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("cannot open input file {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// ---------------------------------------------------------------------------
// Rejected lines – recovered locally by the reader
// ---------------------------------------------------------------------------

/// Why a single input line was not turned into a sample.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RejectReason {
    #[error("blank line")]
    Blank,
    #[error("line is not valid UTF-8")]
    NotUtf8,
    #[error("not a number: {0}")]
    NotANumber(#[from] ParseFloatError),
}
