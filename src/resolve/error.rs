// Tue Aug 04 2026 - Alex

use crate::archive::ArchiveError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("Archive error: {0}")]
    Archive(#[from] ArchiveError),
    #[error("No native payload in archive {0}")]
    NoNativePayload(String),
    #[error("Cannot extract native payload: {0}")]
    Extract(#[from] std::io::Error),
    #[error("Failed to load library: {0}")]
    Load(String),
    #[error("Missing export: {0}")]
    MissingExport(String),
    #[error("ABI version mismatch: expected {expected}, got {actual}")]
    AbiVersionMismatch { expected: u32, actual: u32 },
    #[error("Symbol not registered: {0}")]
    NotRegistered(String),
}
