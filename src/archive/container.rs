// Tue Aug 04 2026 - Alex

use crate::archive::error::ArchiveError;
use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use zip::ZipArchive;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveRef {
    path: PathBuf,
    extension: String,
}

impl ArchiveRef {
    pub fn new(path: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            extension: extension.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn file_name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("<archive>")
    }
}

impl fmt::Display for ArchiveRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

#[derive(Debug, Clone)]
pub struct EntryMeta {
    pub name: String,
    pub is_dir: bool,
}

pub struct ZipContainer {
    path: PathBuf,
    archive: ZipArchive<File>,
}

impl ZipContainer {
    pub fn open(path: &Path) -> Result<Self, ArchiveError> {
        let file = File::open(path).map_err(|source| ArchiveError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let archive = ZipArchive::new(file).map_err(|source| ArchiveError::Corrupt {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            archive,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn entry_count(&self) -> usize {
        self.archive.len()
    }

    pub fn entry_meta(&mut self, index: usize) -> Result<EntryMeta, ArchiveError> {
        let entry = self
            .archive
            .by_index(index)
            .map_err(|source| ArchiveError::Entry { index, source })?;
        Ok(EntryMeta {
            name: entry.name().to_string(),
            is_dir: entry.is_dir(),
        })
    }

    pub fn read_entry(&mut self, index: usize) -> Result<String, ArchiveError> {
        let mut entry = self
            .archive
            .by_index(index)
            .map_err(|source| ArchiveError::Entry { index, source })?;
        let name = entry.name().to_string();
        let mut content = String::new();
        entry
            .read_to_string(&mut content)
            .map_err(|source| ArchiveError::Read { name, source })?;
        Ok(content)
    }

    pub fn read_entry_bytes(&mut self, index: usize) -> Result<Vec<u8>, ArchiveError> {
        let mut entry = self
            .archive
            .by_index(index)
            .map_err(|source| ArchiveError::Entry { index, source })?;
        let name = entry.name().to_string();
        let mut content = Vec::new();
        entry
            .read_to_end(&mut content)
            .map_err(|source| ArchiveError::Read { name, source })?;
        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    fn temp_path(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("apl-container-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir.join(tag)
    }

    fn write_archive(path: &Path, entries: &[(&str, &str)]) {
        let file = File::create(path).unwrap();
        let mut writer = zip::ZipWriter::new(file);
        let options = SimpleFileOptions::default();
        for (name, content) in entries {
            writer.start_file(name.to_string(), options).unwrap();
            writer.write_all(content.as_bytes()).unwrap();
        }
        writer.finish().unwrap();
    }

    #[test]
    fn test_open_and_list_entries() {
        let path = temp_path("list.jar");
        write_archive(
            &path,
            &[
                ("meta-inf/services/com.example.impl.Foo", "com.example.Plugin\n"),
                ("readme.txt", "hello"),
            ],
        );

        let mut container = ZipContainer::open(&path).unwrap();
        assert_eq!(container.entry_count(), 2);

        let meta = container.entry_meta(0).unwrap();
        assert_eq!(meta.name, "meta-inf/services/com.example.impl.Foo");
        assert!(!meta.is_dir);

        let content = container.read_entry(0).unwrap();
        assert_eq!(content, "com.example.Plugin\n");
    }

    #[test]
    fn test_directory_entries_are_flagged() {
        let path = temp_path("dirs.jar");
        let file = File::create(&path).unwrap();
        let mut writer = zip::ZipWriter::new(file);
        let options = SimpleFileOptions::default();
        writer.add_directory("meta-inf/services/", options).unwrap();
        writer.finish().unwrap();

        let mut container = ZipContainer::open(&path).unwrap();
        assert_eq!(container.entry_count(), 1);
        assert!(container.entry_meta(0).unwrap().is_dir);
    }

    #[test]
    fn test_corrupt_archive_fails_to_open() {
        let path = temp_path("corrupt.jar");
        std::fs::write(&path, b"this is not a zip archive").unwrap();
        assert!(ZipContainer::open(&path).is_err());
    }

    #[test]
    fn test_missing_archive_fails_to_open() {
        let path = temp_path("missing.jar");
        let _ = std::fs::remove_file(&path);
        assert!(ZipContainer::open(&path).is_err());
    }
}
