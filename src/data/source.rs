use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::error::SourceError;

// ---------------------------------------------------------------------------
// SourceDescriptor – where the samples come from
// ---------------------------------------------------------------------------

/// Input source: a named file or the process's standard input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceDescriptor {
    File(PathBuf),
    Stdin,
}

impl SourceDescriptor {
    /// Build a descriptor from the optional positional argument.
    /// A missing argument or `-` selects standard input.
    pub fn from_arg(arg: Option<PathBuf>) -> Self {
        match arg {
            Some(path) if path.as_os_str() != "-" => SourceDescriptor::File(path),
            _ => SourceDescriptor::Stdin,
        }
    }

    /// Open the source for line-oriented reading.
    ///
    /// The returned reader owns the file handle; dropping it closes the file.
    pub fn open(&self) -> Result<Box<dyn BufRead>, SourceError> {
        log::info!("Reading from {self}");
        match self {
            SourceDescriptor::File(path) => {
                let file = open_file(path)?;
                Ok(Box::new(BufReader::new(file)))
            }
            SourceDescriptor::Stdin => Ok(Box::new(io::stdin().lock())),
        }
    }
}

impl fmt::Display for SourceDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceDescriptor::File(path) => write!(f, "{}", path.display()),
            SourceDescriptor::Stdin => write!(f, "<stdin>"),
        }
    }
}

fn open_file(path: &Path) -> Result<File, SourceError> {
    File::open(path).map_err(|source| SourceError::Open {
        path: path.to_path_buf(),
        source,
    })
}
