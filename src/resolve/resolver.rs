// Tue Aug 04 2026 - Alex

use crate::plugin::Plugin;
use crate::resolve::error::ResolveError;
use std::path::Path;

// Capability boundary for dynamic code loading: given a symbol name and the
// archive it was declared in, produce a loaded, invokable instance. The
// resolution mechanism is platform business; the discovery pipeline only
// sees this trait.
pub trait SymbolResolver: Send + Sync {
    fn resolve(&self, archive: &Path, symbol: &str) -> Result<Box<dyn Plugin>, ResolveError>;
}
