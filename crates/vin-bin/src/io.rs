//! Persistence of the submitted buffer.
//!
//! A verbatim dump of the live character content plus a trailing newline,
//! to a file or stdout. Failure here is fatal to the process (the engine
//! owns no retry policy); the typed error keeps the path in the message.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("cannot create output file {path}: {source}")]
    Create {
        path: PathBuf,
        source: io::Error,
    },
    #[error("cannot write output: {0}")]
    Write(#[from] io::Error),
}

/// Write `content` (plus newline) to the target and flush.
pub fn persist(target: &OutputTarget, content: &str) -> Result<(), PersistError> {
    match target {
        OutputTarget::Stdout => {
            let mut out = io::stdout().lock();
            writeln!(out, "{content}")?;
            out.flush()?;
        }
        OutputTarget::File(path) => {
            let mut file = File::create(path).map_err(|source| PersistError::Create {
                path: path.clone(),
                source,
            })?;
            writeln!(file, "{content}")?;
            file.flush()?;
        }
    }
    info!(target: "runtime.io", bytes = content.len(), "persisted");
    Ok(())
}
