use std::sync::Arc;

use indexmap::IndexSet;

use crate::error::{PlanError, Result};
use crate::package::{Config, Descriptor};
use crate::repository::Repository;

/// Bookkeeping for a single depth-first walk.
///
/// A descriptor is unvisited, in progress (on `active`), or resolved (in
/// `resolved`). The two sets never share an element.
pub(super) struct Visitation<'a, R: Repository + ?Sized> {
    repository: &'a R,
    /// The active path, outermost first.
    active: IndexSet<Descriptor>,
    /// Resolved descriptors in emission order.
    resolved: IndexSet<Descriptor>,
}

/// A descriptor being expanded, with the position of its next include.
#[derive(Debug)]
pub(super) struct Frame {
    pub descriptor: Descriptor,
    config: Arc<Config>,
    next: usize,
}

impl Frame {
    /// The next include to visit, in declared order
    pub fn next_include(&mut self) -> Option<Descriptor> {
        let include = self.config.includes().get(self.next)?.clone();
        self.next += 1;
        Some(include)
    }
}

impl<'a, R: Repository + ?Sized> Visitation<'a, R> {
    pub fn new(repository: &'a R) -> Self {
        Self {
            repository,
            active: IndexSet::new(),
            resolved: IndexSet::new(),
        }
    }

    /// Start visiting a descriptor.
    ///
    /// Returns `None` when it is already resolved; otherwise see [`begin`](Self::begin).
    pub fn enter(&mut self, descriptor: &Descriptor) -> Result<Option<Frame>> {
        if self.resolved.contains(descriptor) {
            log::trace!("Skipping resolved {}", descriptor);
            return Ok(None);
        }
        self.begin(descriptor).map(Some)
    }

    /// Mark an unresolved descriptor in progress and load its config.
    ///
    /// Fails with the active path slice when the descriptor is already in
    /// progress.
    pub fn begin(&mut self, descriptor: &Descriptor) -> Result<Frame> {
        if let Some(start) = self.active.get_index_of(descriptor) {
            let cycle: Vec<Descriptor> = self.active.iter().skip(start).cloned().collect();
            log::debug!("Cycle detected at {} ({} descriptors)", descriptor, cycle.len());
            return Err(PlanError::CyclicDependency { cycle });
        }

        log::trace!("Visiting {}", descriptor);
        self.active.insert(descriptor.clone());
        let config = self.repository.lookup_config(descriptor)?;

        Ok(Frame {
            descriptor: descriptor.clone(),
            config,
            next: 0,
        })
    }

    /// Mark the innermost in-progress descriptor resolved and emit it
    pub fn finish(&mut self, frame: Frame) {
        let popped = self.active.pop();
        debug_assert_eq!(popped.as_ref(), Some(&frame.descriptor));
        self.resolved.insert(frame.descriptor);
    }

    /// Resolve `root` with an explicit work stack
    pub fn run_iterative(mut self, root: &Descriptor) -> Result<Vec<Descriptor>> {
        let mut stack: Vec<Frame> = vec![self.begin(root)?];

        while let Some(top) = stack.last_mut() {
            match top.next_include() {
                Some(include) => {
                    if let Some(frame) = self.enter(&include)? {
                        stack.push(frame);
                    }
                }
                None => {
                    if let Some(done) = stack.pop() {
                        self.finish(done);
                    }
                }
            }
        }

        Ok(self.into_plan())
    }

    /// Resolve `root` by plain recursion
    pub fn run_recursive(mut self, root: &Descriptor) -> Result<Vec<Descriptor>> {
        self.visit(root)?;
        Ok(self.into_plan())
    }

    fn visit(&mut self, descriptor: &Descriptor) -> Result<()> {
        let Some(mut frame) = self.enter(descriptor)? else {
            return Ok(());
        };
        while let Some(include) = frame.next_include() {
            self.visit(&include)?;
        }
        self.finish(frame);
        Ok(())
    }

    fn into_plan(self) -> Vec<Descriptor> {
        self.resolved.into_iter().collect()
    }
}
