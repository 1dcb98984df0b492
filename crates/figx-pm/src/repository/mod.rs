//! Package storage consumed by the planner.
//!
//! The planner only needs to look packages up by name and exact version.
//! [`MemoryRepository`] is the in-process implementation; a persistent store
//! implements the same trait.

mod memory;

pub use memory::MemoryRepository;

use std::sync::Arc;

use crate::error::{PlanError, Result};
use crate::package::{Config, Descriptor, Package};

/// Lookup of packages by (name, version).
///
/// A repository is populated before planning and is only read while a plan
/// is being computed.
pub trait Repository {
    /// Insert a package, replacing any package with the same name and version
    fn write(&mut self, package: Package);

    /// Find the package stored under `name/version`
    fn lookup_package(&self, name: &str, version: &str) -> Result<Arc<Package>>;

    /// Find the config a descriptor refers to
    fn lookup_config(&self, descriptor: &Descriptor) -> Result<Arc<Config>> {
        let package = self.lookup_package(descriptor.name(), descriptor.version())?;
        package
            .config(descriptor.config())
            .cloned()
            .ok_or_else(|| PlanError::ConfigNotFound {
                descriptor: descriptor.clone(),
            })
    }
}
