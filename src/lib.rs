// Wed Aug 05 2026 - Alex

#![allow(dead_code)]

pub mod archive;
pub mod config;
pub mod cursor;
pub mod loader;
pub mod orchestrator;
pub mod plugin;
pub mod resolve;
pub mod scanner;
pub mod utils;

pub use archive::ArchiveRef;
pub use config::LoaderConfig;
pub use cursor::PluginCursor;
pub use loader::{LoaderError, PluginLoader};
pub use orchestrator::{DiscoveryTask, ResultAggregator, WorkerPool};
pub use plugin::{DiscoveredPlugin, Plugin, PluginConstructor};
pub use resolve::{DylibResolver, RegistryResolver, SymbolResolver};
pub use scanner::DirectoryScanner;
