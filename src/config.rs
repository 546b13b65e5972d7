// Tue Aug 04 2026 - Alex

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_EXTENSION: &str = "jar";
pub const DEFAULT_MAX_WORKERS: usize = 5;
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 100;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoaderConfig {
    pub plugin_dir: PathBuf,
    pub extensions: Vec<String>,
    pub max_workers: usize,
    pub poll_interval_ms: u64,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            plugin_dir: PathBuf::from("plugins"),
            extensions: vec![DEFAULT_EXTENSION.to_string()],
            max_workers: DEFAULT_MAX_WORKERS,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }
}

impl LoaderConfig {
    pub fn new(plugin_dir: impl Into<PathBuf>) -> Self {
        Self {
            plugin_dir: plugin_dir.into(),
            ..Default::default()
        }
    }

    pub fn with_extensions(mut self, extensions: Vec<String>) -> Self {
        self.set_extensions(&extensions);
        self
    }

    pub fn with_max_workers(mut self, max_workers: usize) -> Self {
        self.max_workers = max_workers;
        self
    }

    pub fn with_auto_workers(mut self) -> Self {
        self.max_workers = num_cpus::get().max(1);
        self
    }

    pub fn with_poll_interval_ms(mut self, poll_interval_ms: u64) -> Self {
        self.poll_interval_ms = poll_interval_ms;
        self
    }

    pub fn set_extensions(&mut self, extensions: &[String]) {
        if extensions.is_empty() {
            self.extensions = vec![DEFAULT_EXTENSION.to_string()];
        } else {
            self.extensions = extensions
                .iter()
                .map(|ext| normalize_extension(ext))
                .collect();
        }
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn from_file(path: &Path) -> Result<Self, String> {
        let data = fs::read_to_string(path)
            .map_err(|e| format!("Cannot read config file {}: {}", path.display(), e))?;
        serde_json::from_str(&data)
            .map_err(|e| format!("Cannot parse config file {}: {}", path.display(), e))
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.extensions.is_empty() {
            return Err("At least one archive extension must be configured".to_string());
        }
        if self.extensions.iter().any(|ext| ext.is_empty()) {
            return Err("Archive extensions must not be empty".to_string());
        }
        if self.max_workers == 0 {
            return Err("max_workers must be greater than 0".to_string());
        }
        if self.poll_interval_ms == 0 {
            return Err("poll_interval_ms must be greater than 0".to_string());
        }
        Ok(())
    }
}

pub fn normalize_extension(extension: &str) -> String {
    let trimmed = extension.strip_prefix('.').unwrap_or(extension);
    trimmed.to_lowercase()
}
