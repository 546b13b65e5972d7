// Tue Aug 04 2026 - Alex

use crate::plugin::{Plugin, PluginConstructor};
use crate::resolve::error::ResolveError;
use crate::resolve::resolver::SymbolResolver;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::path::Path;

// Compile-time alternative to dynamic loading: implementations register a
// constructor under their symbol name, and archives merely declare which
// symbols they ship. Useful for embedded targets and for exercising the
// discovery pipeline without native libraries.
pub struct RegistryResolver {
    constructors: RwLock<HashMap<String, PluginConstructor>>,
}

impl Default for RegistryResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistryResolver {
    pub fn new() -> Self {
        Self {
            constructors: RwLock::new(HashMap::new()),
        }
    }

    pub fn register(&self, symbol: &str, constructor: PluginConstructor) {
        self.constructors
            .write()
            .insert(symbol.to_string(), constructor);
    }

    pub fn is_registered(&self, symbol: &str) -> bool {
        self.constructors.read().contains_key(symbol)
    }

    pub fn registered_count(&self) -> usize {
        self.constructors.read().len()
    }
}

impl SymbolResolver for RegistryResolver {
    fn resolve(&self, _archive: &Path, symbol: &str) -> Result<Box<dyn Plugin>, ResolveError> {
        let constructors = self.constructors.read();
        let constructor = constructors
            .get(symbol)
            .ok_or_else(|| ResolveError::NotRegistered(symbol.to_string()))?;
        Ok(constructor())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::any::Any;

    struct StubPlugin;

    impl Plugin for StubPlugin {
        fn name(&self) -> &str {
            "com.example.impl.Stub"
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    fn make_stub() -> Box<dyn Plugin> {
        Box::new(StubPlugin)
    }

    #[test]
    fn test_registered_symbol_resolves() {
        let registry = RegistryResolver::new();
        registry.register("com.example.impl.Stub", make_stub);
        assert!(registry.is_registered("com.example.impl.Stub"));

        let plugin = registry
            .resolve(Path::new("/plugins/a.jar"), "com.example.impl.Stub")
            .unwrap();
        assert_eq!(plugin.name(), "com.example.impl.Stub");
    }

    #[test]
    fn test_unregistered_symbol_is_an_error() {
        let registry = RegistryResolver::new();
        let result = registry.resolve(Path::new("/plugins/a.jar"), "com.example.impl.Missing");
        assert!(matches!(result, Err(ResolveError::NotRegistered(_))));
    }
}
