// Tue Aug 04 2026 - Alex

pub mod container;
pub mod descriptor;
pub mod error;

pub use container::{ArchiveRef, EntryMeta, ZipContainer};
pub use error::ArchiveError;
