// Tue Aug 04 2026 - Alex

use std::path::PathBuf;
use thiserror::Error;
use zip::result::ZipError;

#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("Cannot open archive {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Archive {path} is not a readable container: {source}")]
    Corrupt { path: PathBuf, source: ZipError },
    #[error("Cannot access entry #{index}: {source}")]
    Entry { index: usize, source: ZipError },
    #[error("Cannot read entry {name}: {source}")]
    Read {
        name: String,
        source: std::io::Error,
    },
}
