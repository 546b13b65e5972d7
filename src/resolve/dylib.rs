// Tue Aug 04 2026 - Alex

use crate::archive::ZipContainer;
use crate::plugin::Plugin;
use crate::resolve::error::ResolveError;
use crate::resolve::resolver::SymbolResolver;
use libloading::Library;
use std::any::Any;
use std::fs;
use std::path::{Path, PathBuf};

pub const ABI_VERSION: u32 = 1;

// Resolves symbols from the native payload an archive carries: the first
// entry whose name ends with the platform dylib suffix is extracted to a
// per-archive scratch location and opened with its own Library handle, so
// two archives can never interfere with each other's resolution.
pub struct DylibResolver {
    scratch_dir: PathBuf,
}

impl Default for DylibResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl DylibResolver {
    pub fn new() -> Self {
        Self {
            scratch_dir: std::env::temp_dir().join("archive-plugin-loader"),
        }
    }

    pub fn with_scratch_dir(mut self, scratch_dir: impl Into<PathBuf>) -> Self {
        self.scratch_dir = scratch_dir.into();
        self
    }

    fn extract_payload(&self, archive: &Path) -> Result<PathBuf, ResolveError> {
        let mut container = ZipContainer::open(archive)?;

        let suffix = std::env::consts::DLL_SUFFIX;
        let mut payload = None;
        for index in 0..container.entry_count() {
            let meta = container.entry_meta(index)?;
            if !meta.is_dir && meta.name.ends_with(suffix) {
                payload = Some((index, meta.name));
                break;
            }
        }
        let (index, entry_name) =
            payload.ok_or_else(|| ResolveError::NoNativePayload(archive.display().to_string()))?;

        let bytes = container.read_entry_bytes(index)?;

        let stem = archive
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("archive");
        let base = match entry_name.rfind('/') {
            Some(split) => &entry_name[split + 1..],
            None => entry_name.as_str(),
        };
        let dir = self.scratch_dir.join(format!("{}-{}", stem, bytes.len()));
        fs::create_dir_all(&dir)?;
        let target = dir.join(base);
        fs::write(&target, &bytes)?;

        log::debug!(
            "Extracted native payload {} from {} to {}",
            entry_name,
            archive.display(),
            target.display()
        );
        Ok(target)
    }
}

impl SymbolResolver for DylibResolver {
    fn resolve(&self, archive: &Path, symbol: &str) -> Result<Box<dyn Plugin>, ResolveError> {
        let payload = self.extract_payload(archive)?;

        unsafe {
            let library =
                Library::new(&payload).map_err(|e| ResolveError::Load(e.to_string()))?;

            if let Ok(version_fn) =
                library.get::<extern "C" fn() -> u32>(b"plugin_abi_version\0")
            {
                let version = version_fn();
                if version != ABI_VERSION {
                    return Err(ResolveError::AbiVersionMismatch {
                        expected: ABI_VERSION,
                        actual: version,
                    });
                }
            }

            let export = constructor_export(symbol);
            let create_fn = library
                .get::<fn() -> Box<dyn Plugin>>(export.as_bytes())
                .map_err(|e| ResolveError::MissingExport(e.to_string()))?;

            let inner = create_fn();
            Ok(Box::new(DylibPlugin {
                inner,
                _library: library,
            }))
        }
    }
}

// Export name for a symbol's constructor: `create_` followed by the symbol
// lowercased with every non-alphanumeric character replaced by `_`.
pub fn constructor_export(symbol: &str) -> String {
    let mut export = String::with_capacity(symbol.len() + 8);
    export.push_str("create_");
    for c in symbol.chars() {
        if c.is_ascii_alphanumeric() {
            export.push(c.to_ascii_lowercase());
        } else {
            export.push('_');
        }
    }
    export.push('\0');
    export
}

// Keeps the Library alive for as long as the instance it produced.
struct DylibPlugin {
    inner: Box<dyn Plugin>,
    _library: Library,
}

impl Plugin for DylibPlugin {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn as_any(&self) -> &dyn Any {
        self.inner.as_any()
    }
}
