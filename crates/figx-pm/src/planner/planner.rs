use std::collections::BTreeSet;

use super::tree::{self, DependencyTree};
use super::visit::Visitation;
use crate::error::Result;
use crate::package::{Descriptor, PackageKey};
use crate::repository::Repository;

/// How the planner walks the include graph.
///
/// Both strategies visit descriptors in the same order and produce the same
/// plans and errors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Traversal {
    /// Explicit work stack; depth is bounded only by memory
    #[default]
    Iterative,
    /// Native recursion, one call frame per level
    Recursive,
}

/// Options controlling a [`Planner`].
#[derive(Debug, Clone, Default)]
pub struct PlannerOptions {
    pub traversal: Traversal,
}

impl PlannerOptions {
    /// Create options with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the traversal strategy
    pub fn traversal(mut self, traversal: Traversal) -> Self {
        self.traversal = traversal;
        self
    }
}

/// Resolves a root descriptor into an ordered, duplicate-free build plan.
///
/// The planner borrows its repository, so several planners can share one
/// populated repository, including across threads.
pub struct Planner<'a, R: Repository + ?Sized> {
    repository: &'a R,
    options: PlannerOptions,
}

impl<'a, R: Repository + ?Sized> Planner<'a, R> {
    /// Create a planner reading from `repository`
    pub fn new(repository: &'a R) -> Self {
        Self {
            repository,
            options: PlannerOptions::default(),
        }
    }

    /// Replace the planner options
    pub fn with_options(mut self, options: PlannerOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &PlannerOptions {
        &self.options
    }

    /// Compute the build plan for `root`.
    ///
    /// Includes are visited depth-first in declared order and each descriptor
    /// is emitted after all of its includes, so every dependency precedes its
    /// dependents. A descriptor reached again after it was emitted is
    /// skipped; one reached again while still in progress is a cycle.
    pub fn plan(&self, root: &Descriptor) -> Result<Vec<Descriptor>> {
        log::debug!("Planning {} ({:?})", root, self.options.traversal);

        let visitation = Visitation::new(self.repository);
        let result = match self.options.traversal {
            Traversal::Iterative => visitation.run_iterative(root),
            Traversal::Recursive => visitation.run_recursive(root),
        };

        match &result {
            Ok(plan) => log::debug!("Planned {} with {} entries", root, plan.len()),
            Err(e) => log::debug!("Planning {} failed: {}", root, e),
        }
        result
    }

    /// Dependency tree of `root`, children in declared include order
    pub fn tree(&self, root: &Descriptor) -> Result<DependencyTree> {
        log::debug!("Building dependency tree for {}", root);
        tree::build(self.repository, root)
    }

    /// Packages `root` depends on, sorted, without the root's own package
    pub fn list_dependencies(&self, root: &Descriptor) -> Result<Vec<PackageKey>> {
        let root_key = root.package_key();
        let keys: BTreeSet<PackageKey> = self
            .plan(root)?
            .iter()
            .map(Descriptor::package_key)
            .filter(|key| *key != root_key)
            .collect();
        Ok(keys.into_iter().collect())
    }

    /// Every config `root` depends on, sorted, without `root` itself
    pub fn list_dependency_configs(&self, root: &Descriptor) -> Result<Vec<Descriptor>> {
        let mut configs: Vec<Descriptor> = self
            .plan(root)?
            .into_iter()
            .filter(|d| d != root)
            .collect();
        configs.sort();
        Ok(configs)
    }
}
