// Tue Aug 04 2026 - Alex

use crate::archive::ArchiveRef;
use crate::config::normalize_extension;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Cannot read plugin directory {path}: {source}")]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub struct DirectoryScanner {
    directory: PathBuf,
    extensions: Vec<String>,
}

impl DirectoryScanner {
    pub fn new(path: &Path, extensions: &[String]) -> Self {
        // A file path stands in for its parent directory.
        let directory = if path.is_dir() {
            path.to_path_buf()
        } else {
            path.parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| path.to_path_buf())
        };

        let extensions = if extensions.is_empty() {
            vec![crate::config::DEFAULT_EXTENSION.to_string()]
        } else {
            extensions
                .iter()
                .map(|ext| normalize_extension(ext))
                .collect()
        };

        Self {
            directory,
            extensions,
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    pub fn scan(&self) -> Result<Vec<ArchiveRef>, ScanError> {
        let entries = fs::read_dir(&self.directory).map_err(|source| ScanError::Unreadable {
            path: self.directory.clone(),
            source,
        })?;

        let mut archives = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    log::debug!("Skipping unreadable directory entry: {}", e);
                    continue;
                }
            };
            let path = entry.path();
            let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
                continue;
            };
            let lower = name.to_lowercase();
            if let Some(extension) = self
                .extensions
                .iter()
                .find(|ext| lower.ends_with(ext.as_str()))
            {
                archives.push(ArchiveRef::new(path, extension.clone()));
            }
        }

        log::debug!(
            "Found {} archive candidate(s) in {}",
            archives.len(),
            self.directory.display()
        );
        Ok(archives)
    }
}
