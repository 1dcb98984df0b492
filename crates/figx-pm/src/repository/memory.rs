use std::collections::HashMap;
use std::sync::Arc;

use super::Repository;
use crate::error::{PlanError, Result};
use crate::package::{Package, PackageKey};

/// In-memory package repository.
#[derive(Debug, Clone, Default)]
pub struct MemoryRepository {
    packages: HashMap<PackageKey, Arc<Package>>,
}

impl MemoryRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository holding the given packages
    pub fn with_packages(packages: impl IntoIterator<Item = Package>) -> Self {
        let mut repo = Self::new();
        for package in packages {
            repo.write(package);
        }
        repo
    }

    /// Number of stored packages
    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    pub fn contains(&self, name: &str, version: &str) -> bool {
        self.packages.contains_key(&PackageKey::new(name, version))
    }

    /// All stored package keys, sorted by name then version
    pub fn list_packages(&self) -> Vec<PackageKey> {
        let mut keys: Vec<PackageKey> = self.packages.keys().cloned().collect();
        keys.sort();
        keys
    }
}

impl Repository for MemoryRepository {
    fn write(&mut self, package: Package) {
        let key = package.key();
        log::trace!("Writing package {}", key);
        self.packages.insert(key, Arc::new(package));
    }

    fn lookup_package(&self, name: &str, version: &str) -> Result<Arc<Package>> {
        self.packages
            .get(&PackageKey::new(name, version))
            .cloned()
            .ok_or_else(|| PlanError::PackageNotFound {
                name: name.to_string(),
                version: version.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::package::{Descriptor, PackageBuilder};

    fn sample() -> MemoryRepository {
        MemoryRepository::with_packages([
            PackageBuilder::new("foo", "1.2.3")
                .config("default")
                .include("bar", "4.5.6", "default")
                .end()
                .build(),
            PackageBuilder::new("bar", "4.5.6").config("default").end().build(),
        ])
    }

    #[test]
    fn test_lookup_package() {
        let repo = sample();
        let pkg = repo.lookup_package("foo", "1.2.3").unwrap();
        assert_eq!(pkg.name(), "foo");
        assert_eq!(pkg.version(), "1.2.3");
    }

    #[test]
    fn test_lookup_package_other_version_not_found() {
        let repo = sample();
        let err = repo.lookup_package("foo", "1.2.4").unwrap_err();
        assert_eq!(
            err,
            PlanError::PackageNotFound {
                name: "foo".to_string(),
                version: "1.2.4".to_string(),
            }
        );
    }

    #[test]
    fn test_lookup_config() {
        let repo = sample();
        let config = repo
            .lookup_config(&Descriptor::new("foo", "1.2.3", "default"))
            .unwrap();
        assert_eq!(config.name(), "default");
        assert_eq!(config.includes(), &[Descriptor::new("bar", "4.5.6", "default")]);
    }

    #[test]
    fn test_lookup_config_missing_config() {
        let repo = sample();
        let descriptor = Descriptor::new("foo", "1.2.3", "debug");
        let err = repo.lookup_config(&descriptor).unwrap_err();
        assert_eq!(err, PlanError::ConfigNotFound { descriptor });
    }

    #[test]
    fn test_lookup_config_missing_package() {
        let repo = sample();
        let err = repo
            .lookup_config(&Descriptor::new("baz", "7.8.9", "default"))
            .unwrap_err();
        assert!(matches!(err, PlanError::PackageNotFound { ref name, .. } if name == "baz"));
    }

    #[test]
    fn test_write_replaces_same_key() {
        let mut repo = sample();
        repo.write(PackageBuilder::new("bar", "4.5.6").config("debug").end().build());

        assert_eq!(repo.len(), 2);
        let bar = repo.lookup_package("bar", "4.5.6").unwrap();
        assert!(bar.config("default").is_none());
        assert!(bar.config("debug").is_some());
    }

    #[test]
    fn test_versions_are_distinct_packages() {
        let mut repo = sample();
        repo.write(PackageBuilder::new("bar", "5.0.0").config("default").end().build());

        assert_eq!(repo.len(), 3);
        assert!(repo.contains("bar", "4.5.6"));
        assert!(repo.contains("bar", "5.0.0"));
    }

    #[test]
    fn test_list_packages_sorted() {
        let repo = sample();
        assert_eq!(
            repo.list_packages(),
            vec![PackageKey::new("bar", "4.5.6"), PackageKey::new("foo", "1.2.3")]
        );
        assert!(MemoryRepository::new().is_empty());
    }
}
