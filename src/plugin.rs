// Tue Aug 04 2026 - Alex

use crate::archive::ArchiveRef;
use std::any::Any;
use std::fmt;

pub trait Plugin: Send {
    fn name(&self) -> &str;
    fn as_any(&self) -> &dyn Any;
}

pub type PluginConstructor = fn() -> Box<dyn Plugin>;

pub struct DiscoveredPlugin {
    archive: ArchiveRef,
    symbol: String,
    instance: Box<dyn Plugin>,
}

impl DiscoveredPlugin {
    pub fn new(archive: ArchiveRef, symbol: impl Into<String>, instance: Box<dyn Plugin>) -> Self {
        Self {
            archive,
            symbol: symbol.into(),
            instance,
        }
    }

    pub fn archive(&self) -> &ArchiveRef {
        &self.archive
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn instance(&self) -> &dyn Plugin {
        self.instance.as_ref()
    }

    pub fn into_instance(self) -> Box<dyn Plugin> {
        self.instance
    }
}

impl fmt::Debug for DiscoveredPlugin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiscoveredPlugin")
            .field("archive", &self.archive)
            .field("symbol", &self.symbol)
            .finish()
    }
}
