//! Build plan resolution.
//!
//! The [`Planner`] turns a root [`Descriptor`](crate::Descriptor) into the
//! ordered list of descriptors it needs, dependencies first.
//!
//! # Algorithm
//!
//! A depth-first walk from the root over each config's includes, in declared
//! order. Every descriptor is in one of three states:
//!
//! - **unvisited**: not seen yet; it is marked in progress, its config is
//!   loaded and its includes are visited
//! - **in progress**: on the active path; reaching it again is a cycle,
//!   reported as the path slice from that descriptor to the current one
//! - **resolved**: already emitted; skipped
//!
//! A descriptor is emitted when its last include is resolved. Any lookup
//! failure or cycle aborts the walk without a partial plan.
//!
//! # Example
//!
//! ```
//! use figx_pm::{Descriptor, MemoryRepository, PackageBuilder, Planner, Repository};
//!
//! let mut repo = MemoryRepository::new();
//! repo.write(
//!     PackageBuilder::new("foo", "1.2.3")
//!         .config("default").include_config("debug").end()
//!         .config("debug").end()
//!         .build(),
//! );
//!
//! let plan = Planner::new(&repo).plan(&"foo/1.2.3".parse::<Descriptor>().unwrap()).unwrap();
//! assert_eq!(
//!     plan,
//!     vec![
//!         Descriptor::new("foo", "1.2.3", "debug"),
//!         Descriptor::new("foo", "1.2.3", "default"),
//!     ]
//! );
//! ```

mod planner;
mod tree;
mod visit;


pub use planner::{Planner, PlannerOptions, Traversal};
pub use tree::DependencyTree;
