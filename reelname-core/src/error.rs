use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Conditions that abort a run before any entry is processed.
#[derive(Debug, Error)]
pub enum RenameError {
    #[error("directory not found: {}", .0.display())]
    MissingDirectory(PathBuf),

    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("cannot read directory {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
