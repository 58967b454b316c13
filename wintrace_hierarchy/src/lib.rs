// Copyright 2026 the Wintrace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wintrace Hierarchy: an immutable snapshot model of a window-manager hierarchy.
//!
//! This crate models one point-in-time capture of a window manager's container
//! tree (displays, display areas, tasks, task fragments, activities) as a plain
//! owned data structure, and answers the queries trace-assertion tooling asks of
//! it: "what are the root tasks of this display", "does this subtree contain
//! this activity", "which task display area hosts it".
//!
//! - Represents the captured hierarchy as a closed set of node types over a
//!   shared [`WindowContainer`] base.
//! - Derives stacking views on demand: the capture stores children top-to-bottom
//!   in dump order, and the accessors un-invert that into bottom-first stack
//!   order for consumers reasoning about stacking semantics.
//! - Reclassifies organizer-created tasks: [`DisplayContent::root_tasks`]
//!   promotes their children to root level, since organizer tasks are framework
//!   plumbing rather than real stacks.
//!
//! ## Not a parser
//!
//! This crate does not read platform dumps, talk to a device, or serialize
//! anything. An upstream builder parses the raw capture and constructs these
//! nodes with all attributes already in semantic form; once built, a snapshot is
//! immutable and every query is a pure function of the tree. There is no cached
//! index: each query walks the subtree it is asked about, which keeps results
//! trivially consistent and makes concurrent reads safe without locking.
//!
//! ## API overview
//!
//! - [`WindowContainer`]: base node data and generic descendant traversal
//!   ([`WindowContainer::descendants`], [`WindowContainer::collect_descendants`]).
//! - [`WindowNode`]: the closed node sum type with downcast accessors.
//! - [`Task`]: stack-ordered child views ([`Task::tasks`], [`Task::activities`],
//!   [`Task::task_fragments`], [`Task::top_task`]), resumed-activity aggregation
//!   ([`Task::resumed_activities`]), and lookup helpers ([`Task::get_task`],
//!   [`Task::get_activity`], [`Task::contains_activity`]).
//! - [`DisplayContent`]: display attributes, [`DisplayContent::root_tasks`],
//!   [`DisplayContent::contains_activity`], and
//!   [`DisplayContent::get_task_display_area`].
//! - [`DisplayArea`], [`Activity`], [`TaskFragment`]: the remaining node types.
//! - [`HierarchyError`]: the single fatal error, raised when a capture violates
//!   the one-task-display-area-per-activity invariant. Every other query
//!   expresses "nothing found" as an empty result, never an error.
//!
//! ## Example
//!
//! ```rust
//! use wintrace_hierarchy::{DisplayContent, Task, WindowContainer, WindowNode};
//!
//! let task = Task {
//!     task_id: 7,
//!     root_task_id: 7,
//!     ..Task::default()
//! };
//! let display = DisplayContent {
//!     base: WindowContainer {
//!         children: vec![WindowNode::Task(task)],
//!         ..WindowContainer::default()
//!     },
//!     ..DisplayContent::default()
//! };
//!
//! let roots = display.root_tasks();
//! assert_eq!(roots.len(), 1);
//! assert_eq!(roots[0].task_id, 7);
//! ```
//!
//! Geometry is expressed in terms of [`kurbo::Rect`], which matches the rest of
//! the Wintrace crates; bounds that were absent in the capture read as
//! [`kurbo::Rect::ZERO`] rather than a missing-value state.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod activity;
mod container;
mod display;
mod error;
mod task;

pub use activity::Activity;
pub use container::{Descendants, WindowContainer, WindowNode};
pub use display::{DisplayArea, DisplayContent, DisplayFlags};
pub use error::HierarchyError;
pub use task::{Task, TaskFragment};
