// Package model for fig packages
//
// A package is identified by name and version and owns a set of named
// configs. Each config lists the descriptors it includes.

mod builder;
mod config;
mod descriptor;
mod package;

pub use builder::{ConfigBuilder, PackageBuilder};
pub use config::Config;
pub use descriptor::{Descriptor, PackageKey};
pub use package::Package;

/// Config name used when a descriptor does not name one.
pub const DEFAULT_CONFIG: &str = "default";
