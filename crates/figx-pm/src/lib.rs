//! Dependency planning for fig packages.
//!
//! A package is a named, versioned collection of configurations. Each
//! configuration lists the `name/version:config` descriptors it includes.
//! The [`Planner`] walks those includes starting from a root descriptor and
//! produces a build plan: every required descriptor exactly once, with each
//! dependency ahead of the descriptors that need it.
//!
//! ```
//! use figx_pm::{Descriptor, MemoryRepository, PackageBuilder, Planner, Repository};
//!
//! let mut repo = MemoryRepository::new();
//! repo.write(
//!     PackageBuilder::new("foo", "1.2.3")
//!         .config("default").include("bar", "4.5.6", "default").end()
//!         .build(),
//! );
//! repo.write(PackageBuilder::new("bar", "4.5.6").config("default").end().build());
//!
//! let plan = Planner::new(&repo)
//!     .plan(&Descriptor::new("foo", "1.2.3", "default"))
//!     .unwrap();
//! assert_eq!(plan[0], Descriptor::new("bar", "4.5.6", "default"));
//! ```

pub mod error;
pub mod package;
pub mod planner;
pub mod repository;

pub use error::{DescriptorParseError, PlanError, Result};
pub use package::{
    Config, ConfigBuilder, Descriptor, Package, PackageBuilder, PackageKey, DEFAULT_CONFIG,
};
pub use planner::{DependencyTree, Planner, PlannerOptions, Traversal};
pub use repository::{MemoryRepository, Repository};
