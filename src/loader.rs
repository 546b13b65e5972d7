// Tue Aug 04 2026 - Alex

use crate::config::LoaderConfig;
use crate::cursor::PluginCursor;
use crate::orchestrator::aggregator::ResultAggregator;
use crate::orchestrator::discovery::DiscoveryTask;
use crate::orchestrator::scheduler::WorkerPool;
use crate::plugin::DiscoveredPlugin;
use crate::resolve::{DylibResolver, SymbolResolver};
use crate::scanner::{DirectoryScanner, ScanError};
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error(transparent)]
    Scan(#[from] ScanError),
}

// Discovers and loads service implementations from archives in a directory.
// Every `load` scans the directory fresh and appends its discoveries to a
// cumulative collection that only grows for the lifetime of the loader.
pub struct PluginLoader {
    config: LoaderConfig,
    resolver: Arc<dyn SymbolResolver>,
    plugins: Vec<DiscoveredPlugin>,
}

impl PluginLoader {
    pub fn new(plugin_dir: impl Into<PathBuf>) -> Self {
        Self::with_config(LoaderConfig::new(plugin_dir))
    }

    pub fn with_config(config: LoaderConfig) -> Self {
        Self {
            config,
            resolver: Arc::new(DylibResolver::new()),
            plugins: Vec::new(),
        }
    }

    pub fn with_resolver(mut self, resolver: Arc<dyn SymbolResolver>) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    pub fn set_extensions(&mut self, extensions: &[String]) {
        self.config.set_extensions(extensions);
    }

    pub fn load(&mut self, service_name: &str) -> Result<usize, LoaderError> {
        self.config.validate().map_err(LoaderError::Config)?;

        let scanner = DirectoryScanner::new(&self.config.plugin_dir, &self.config.extensions);
        let archives = scanner.scan()?;
        log::info!(
            "Scanning {} archive(s) in {} for {}",
            archives.len(),
            scanner.directory().display(),
            service_name
        );

        let mut aggregator = ResultAggregator::new();
        for archive in archives {
            aggregator.add_task(DiscoveryTask::new(
                archive,
                service_name,
                Arc::clone(&self.resolver),
            ));
        }

        let pool =
            WorkerPool::with_poll_interval(self.config.max_workers, self.config.poll_interval());
        pool.submit(aggregator.pool_tasks());
        pool.wait_until_done();

        let added = aggregator.drain_into(&mut self.plugins);
        log::info!(
            "Discovered {} implementation(s) of {} ({} loaded in total)",
            added,
            service_name,
            self.plugins.len()
        );
        Ok(added)
    }

    pub fn plugins(&self) -> &[DiscoveredPlugin] {
        &self.plugins
    }

    pub fn plugin_count(&self) -> usize {
        self.plugins.len()
    }

    pub fn cursor(&self) -> PluginCursor<'_> {
        PluginCursor::new(&self.plugins)
    }
}
