use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{Config, Descriptor, PackageKey};

/// A named, versioned unit owning its configs.
///
/// Configs are kept in declaration order. Packages with the same name and
/// different versions are unrelated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    name: String,
    version: String,
    configs: IndexMap<String, Arc<Config>>,
}

impl Package {
    /// Create a package with no configs
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            configs: IndexMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn key(&self) -> PackageKey {
        PackageKey::new(&self.name, &self.version)
    }

    /// Add a config, replacing any existing config with the same name.
    ///
    /// A replaced config keeps its original position.
    pub fn add_config(&mut self, config: Config) {
        self.configs.insert(config.name().to_string(), Arc::new(config));
    }

    /// Look up a config by name
    pub fn config(&self, name: &str) -> Option<&Arc<Config>> {
        self.configs.get(name)
    }

    /// Iterate over configs in declaration order
    pub fn configs(&self) -> impl Iterator<Item = &Arc<Config>> {
        self.configs.values()
    }

    /// Names of all configs in declaration order
    pub fn config_names(&self) -> impl Iterator<Item = &str> {
        self.configs.keys().map(String::as_str)
    }

    /// Descriptor for one of this package's configs
    pub fn descriptor(&self, config: impl Into<String>) -> Descriptor {
        Descriptor::new(&self.name, &self.version, config)
    }
}
