use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::DEFAULT_CONFIG;
use crate::error::DescriptorParseError;

/// Identity of one resolvable unit: a config of a specific package version.
///
/// Equality, hashing and ordering are structural over all three fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Descriptor {
    name: String,
    version: String,
    config: String,
}

impl Descriptor {
    /// Create a descriptor for `name/version:config`
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        config: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            config: config.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn config(&self) -> &str {
        &self.config
    }

    /// The (name, version) pair identifying the owning package
    pub fn package_key(&self) -> PackageKey {
        PackageKey::new(&self.name, &self.version)
    }

    /// Whether both descriptors point into the same package version
    pub fn same_package(&self, other: &Descriptor) -> bool {
        self.name == other.name && self.version == other.version
    }
}

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}:{}", self.name, self.version, self.config)
    }
}

impl FromStr for Descriptor {
    type Err = DescriptorParseError;

    /// Parse `name/version[:config]`; the config defaults to `default`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((name, rest)) = s.split_once('/') else {
            return Err(if s.is_empty() || s.starts_with(':') {
                DescriptorParseError::MissingName(s.to_string())
            } else {
                DescriptorParseError::MissingVersion(s.to_string())
            });
        };

        if name.is_empty() || name.starts_with(':') {
            return Err(DescriptorParseError::MissingName(s.to_string()));
        }
        if name.contains(':') {
            return Err(DescriptorParseError::StraySeparator(s.to_string()));
        }

        let (version, config) = match rest.split_once(':') {
            Some((version, config)) => (version, Some(config)),
            None => (rest, None),
        };

        if version.is_empty() {
            return Err(DescriptorParseError::MissingVersion(s.to_string()));
        }
        if version.contains('/') {
            return Err(DescriptorParseError::StraySeparator(s.to_string()));
        }

        let config = match config {
            Some("") => return Err(DescriptorParseError::EmptyConfig(s.to_string())),
            Some(config) if config.contains([':', '/']) => {
                return Err(DescriptorParseError::StraySeparator(s.to_string()))
            }
            Some(config) => config,
            None => DEFAULT_CONFIG,
        };

        Ok(Descriptor::new(name, version, config))
    }
}

/// Repository key of a package: its name and exact version.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PackageKey {
    pub name: String,
    pub version: String,
}

impl PackageKey {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

impl fmt::Display for PackageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.name, self.version)
    }
}
