//! Error types for repository lookups and planning.

use thiserror::Error;

use crate::package::Descriptor;

/// Result type for planner and repository operations.
pub type Result<T> = std::result::Result<T, PlanError>;

/// Why a plan could not be produced.
///
/// Every variant aborts the whole `plan` call; there is no partial result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// The repository has no package under this name and version.
    #[error("package {name}/{version} not found")]
    PackageNotFound { name: String, version: String },

    /// The package exists but does not define the requested config.
    #[error("{}", describe_missing_config(.descriptor))]
    ConfigNotFound { descriptor: Descriptor },

    /// The includes loop back onto a descriptor that is still being resolved.
    ///
    /// `cycle` starts at the repeated descriptor and ends at the one whose
    /// include closed the loop.
    #[error("cyclic dependency: {}", format_cycle(.cycle))]
    CyclicDependency { cycle: Vec<Descriptor> },
}

impl PlanError {
    /// The descriptors forming the loop, if this is a cycle error.
    pub fn cycle(&self) -> Option<&[Descriptor]> {
        match self {
            PlanError::CyclicDependency { cycle } => Some(cycle),
            _ => None,
        }
    }
}

fn describe_missing_config(descriptor: &Descriptor) -> String {
    format!(
        "config \"{}\" not found in package {}",
        descriptor.config(),
        descriptor.package_key()
    )
}

/// Format a cycle as "a -> b -> a".
fn format_cycle(cycle: &[Descriptor]) -> String {
    let mut parts: Vec<String> = cycle.iter().map(|d| d.to_string()).collect();
    if let Some(first) = cycle.first() {
        parts.push(first.to_string());
    }
    parts.join(" -> ")
}

/// A descriptor string that is not of the form `name/version[:config]`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DescriptorParseError {
    #[error("descriptor \"{0}\" has no package name")]
    MissingName(String),

    #[error("descriptor \"{0}\" has no version")]
    MissingVersion(String),

    #[error("descriptor \"{0}\" has an empty config name")]
    EmptyConfig(String),

    #[error("descriptor \"{0}\" has a '/' or ':' inside a name, version or config")]
    StraySeparator(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_not_found_message() {
        let err = PlanError::PackageNotFound {
            name: "foo".to_string(),
            version: "1.2.3".to_string(),
        };
        assert_eq!(err.to_string(), "package foo/1.2.3 not found");
        assert!(err.cycle().is_none());
    }

    #[test]
    fn test_config_not_found_message() {
        let err = PlanError::ConfigNotFound {
            descriptor: Descriptor::new("foo", "1.2.3", "debug"),
        };
        assert_eq!(err.to_string(), "config \"debug\" not found in package foo/1.2.3");
    }

    #[test]
    fn test_cyclic_dependency_message() {
        let err = PlanError::CyclicDependency {
            cycle: vec![
                Descriptor::new("foo", "1.2.3", "a"),
                Descriptor::new("foo", "1.2.3", "b"),
            ],
        };
        assert_eq!(
            err.to_string(),
            "cyclic dependency: foo/1.2.3:a -> foo/1.2.3:b -> foo/1.2.3:a"
        );
        assert_eq!(err.cycle().map(|c| c.len()), Some(2));
    }
}
