// Tue Aug 04 2026 - Alex

use crate::archive::{descriptor, ArchiveRef, ZipContainer};
use crate::plugin::DiscoveredPlugin;
use crate::resolve::SymbolResolver;
use parking_lot::Mutex;
use std::sync::Arc;

// One unit of discovery work: a single archive, a single target service
// name, and a private result list nobody else writes to. Every failure is
// local; a broken archive simply contributes nothing.
pub struct DiscoveryTask {
    archive: ArchiveRef,
    service_name: String,
    resolver: Arc<dyn SymbolResolver>,
    results: Mutex<Vec<DiscoveredPlugin>>,
}

impl DiscoveryTask {
    pub fn new(
        archive: ArchiveRef,
        service_name: impl Into<String>,
        resolver: Arc<dyn SymbolResolver>,
    ) -> Self {
        Self {
            archive,
            service_name: service_name.into(),
            resolver,
            results: Mutex::new(Vec::new()),
        }
    }

    pub fn archive(&self) -> &ArchiveRef {
        &self.archive
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    pub fn job(self: &Arc<Self>) -> impl FnOnce() + Send + 'static {
        let task = Arc::clone(self);
        move || task.run()
    }

    pub fn run(&self) {
        let mut container = match ZipContainer::open(self.archive.path()) {
            Ok(container) => container,
            Err(e) => {
                log::warn!("Skipping archive {}: {}", self.archive, e);
                return;
            }
        };

        for index in 0..container.entry_count() {
            let meta = match container.entry_meta(index) {
                Ok(meta) => meta,
                Err(e) => {
                    log::debug!("Skipping entry #{} in {}: {}", index, self.archive, e);
                    continue;
                }
            };
            if meta.is_dir || !descriptor::is_descriptor_path(&meta.name) {
                continue;
            }

            let content = match container.read_entry(index) {
                Ok(content) => content,
                Err(e) => {
                    log::debug!("Skipping entry {} in {}: {}", meta.name, self.archive, e);
                    continue;
                }
            };
            if !descriptor::names_service(&content, &self.service_name) {
                continue;
            }

            let symbol = descriptor::implementation_name(&meta.name);
            match self.resolver.resolve(self.archive.path(), symbol) {
                Ok(instance) => {
                    log::debug!("Loaded {} from {}", symbol, self.archive);
                    self.results.lock().push(DiscoveredPlugin::new(
                        self.archive.clone(),
                        symbol,
                        instance,
                    ));
                }
                Err(e) => {
                    log::debug!("Cannot load {} from {}: {}", symbol, self.archive, e);
                }
            }
        }
    }

    pub fn result_count(&self) -> usize {
        self.results.lock().len()
    }

    // Only called from the orchestrator after the pool's completion barrier,
    // once the worker that populated the list has finished.
    pub fn take_results(&self) -> Vec<DiscoveredPlugin> {
        std::mem::take(&mut *self.results.lock())
    }
}
