use serde::{Deserialize, Serialize};

use super::Descriptor;

/// A named subset of a package's build requirements.
///
/// The order of `includes` is the declared dependency order and decides the
/// order in which the planner visits them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    name: String,
    includes: Vec<Descriptor>,
}

impl Config {
    /// Create a config with no includes
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            includes: Vec::new(),
        }
    }

    /// Create a config with the given includes, in declared order
    pub fn with_includes(name: impl Into<String>, includes: Vec<Descriptor>) -> Self {
        Self {
            name: name.into(),
            includes,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The descriptors this config depends on, in declared order
    pub fn includes(&self) -> &[Descriptor] {
        &self.includes
    }

    pub(crate) fn push_include(&mut self, descriptor: Descriptor) {
        self.includes.push(descriptor);
    }
}
