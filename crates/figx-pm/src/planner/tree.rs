use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use super::visit::{Frame, Visitation};
use crate::error::Result;
use crate::package::Descriptor;
use crate::repository::Repository;

/// A descriptor with the dependency trees of its includes, in declared order.
///
/// A dependency reached along several paths appears under every parent that
/// includes it; the repeated subtrees are shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyTree {
    descriptor: Descriptor,
    children: Vec<Arc<DependencyTree>>,
}

impl DependencyTree {
    pub fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }

    pub fn children(&self) -> &[Arc<DependencyTree>] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Total number of nodes, counting repeated subtrees every time
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut pending: Vec<&DependencyTree> = vec![self];
        while let Some(node) = pending.pop() {
            count += 1;
            pending.extend(node.children.iter().map(Arc::as_ref));
        }
        count
    }
}

impl fmt::Display for DependencyTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pending: Vec<(&DependencyTree, usize)> = vec![(self, 0)];
        while let Some((node, depth)) = pending.pop() {
            if depth > 0 {
                writeln!(f)?;
            }
            write!(f, "{:indent$}{}", "", node.descriptor, indent = depth * 4)?;
            pending.extend(node.children.iter().rev().map(|c| (c.as_ref(), depth + 1)));
        }
        Ok(())
    }
}

// Unlinks children one level at a time so deep trees do not drop recursively.
impl Drop for DependencyTree {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(child) = pending.pop() {
            if let Ok(mut node) = Arc::try_unwrap(child) {
                pending.append(&mut node.children);
            }
        }
    }
}

struct TreeFrame {
    frame: Frame,
    children: Vec<Arc<DependencyTree>>,
}

impl TreeFrame {
    fn new(frame: Frame) -> Self {
        Self {
            frame,
            children: Vec::new(),
        }
    }

    fn into_node(self) -> (Frame, DependencyTree) {
        let node = DependencyTree {
            descriptor: self.frame.descriptor.clone(),
            children: self.children,
        };
        (self.frame, node)
    }
}

/// Build the dependency tree of `root`.
///
/// Walks in the same order as planning, so cycles and missing entries fail
/// exactly as `plan` does. Subtrees of resolved descriptors are reused.
pub(super) fn build<R: Repository + ?Sized>(
    repository: &R,
    root: &Descriptor,
) -> Result<DependencyTree> {
    let mut visitation = Visitation::new(repository);
    let mut built: HashMap<Descriptor, Arc<DependencyTree>> = HashMap::new();
    let mut root_frame = TreeFrame::new(visitation.begin(root)?);
    // Frames below the root, innermost last.
    let mut stack: Vec<TreeFrame> = Vec::new();

    loop {
        let top = stack.last_mut().unwrap_or(&mut root_frame);
        if let Some(include) = top.frame.next_include() {
            match visitation.enter(&include)? {
                Some(frame) => stack.push(TreeFrame::new(frame)),
                None => {
                    if let Some(subtree) = built.get(&include) {
                        top.children.push(Arc::clone(subtree));
                    }
                }
            }
            continue;
        }

        let Some(done) = stack.pop() else { break };
        let (frame, node) = done.into_node();
        visitation.finish(frame);
        let node = Arc::new(node);
        built.insert(node.descriptor.clone(), Arc::clone(&node));
        stack
            .last_mut()
            .unwrap_or(&mut root_frame)
            .children
            .push(node);
    }

    let (frame, tree) = root_frame.into_node();
    visitation.finish(frame);
    Ok(tree)
}
