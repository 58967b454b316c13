// Copyright 2026 the Wintrace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Base container data, the closed node sum type, and descendant traversal.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::activity::Activity;
use crate::display::{DisplayArea, DisplayContent};
use crate::task::{Task, TaskFragment};

/// Data shared by every node in a captured hierarchy.
///
/// A container exclusively owns its children. The child sequence is stored in
/// capture order, which is top-to-bottom in the on-screen stacking: index 0 is
/// the topmost child. The tree is built once by the dump parser and never
/// mutated afterwards, so every query on it is deterministic.
#[derive(Clone, Debug, Default)]
pub struct WindowContainer {
    /// Category tag as captured (for example `"WindowToken"` or `"Task"`).
    pub kind: String,
    /// Display title of the node.
    pub title: String,
    /// Capture-assigned token, used for identity across snapshots.
    pub token: String,
    /// Requested orientation of the container.
    pub orientation: i32,
    /// Whether the container was visible when captured.
    pub visible: bool,
    /// Child nodes, topmost first.
    pub children: Vec<WindowNode>,
}

impl WindowContainer {
    /// Display name of the container. Subtypes may use a different name; this
    /// default is the title.
    pub fn name(&self) -> String {
        self.title.clone()
    }

    /// Deterministic identity string used to match equivalent nodes across
    /// captures. Uniqueness is not enforced by this layer.
    pub fn stable_id(&self) -> String {
        format!("{} {} {}", self.kind, self.token, self.title)
    }

    /// Iterate all descendants of this container, excluding the container
    /// itself.
    ///
    /// The traversal is depth-first pre-order and preserves each level's stored
    /// child order, so repeated calls on the same tree yield the same sequence.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: self.children.iter().rev().collect(),
        }
    }

    /// Collect all descendants that downcast through `project` and satisfy
    /// `predicate`, in traversal order.
    ///
    /// `project` is a runtime type-tag check, typically one of the
    /// [`WindowNode`] downcast accessors such as [`WindowNode::as_task`]. An
    /// empty result means the subtree simply has no matching nodes; it is not
    /// an error.
    ///
    /// ```
    /// use wintrace_hierarchy::{Task, WindowContainer, WindowNode};
    ///
    /// let root = WindowContainer {
    ///     children: vec![WindowNode::Task(Task {
    ///         task_id: 3,
    ///         root_task_id: 3,
    ///         ..Task::default()
    ///     })],
    ///     ..WindowContainer::default()
    /// };
    /// let roots = root.collect_descendants(WindowNode::as_task, |t| t.is_root_task());
    /// assert_eq!(roots.len(), 1);
    /// ```
    pub fn collect_descendants<'t, T: ?Sized>(
        &'t self,
        project: impl Fn(&'t WindowNode) -> Option<&'t T>,
        mut predicate: impl FnMut(&T) -> bool,
    ) -> Vec<&'t T> {
        self.descendants()
            .filter_map(project)
            .filter(|node| predicate(node))
            .collect()
    }
}

/// Depth-first pre-order iterator over the descendants of a container.
///
/// Created by [`WindowContainer::descendants`].
#[derive(Clone, Debug)]
pub struct Descendants<'t> {
    // Reversed so that the stored child order pops first.
    stack: Vec<&'t WindowNode>,
}

impl<'t> Iterator for Descendants<'t> {
    type Item = &'t WindowNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        for child in node.base().children.iter().rev() {
            self.stack.push(child);
        }
        Some(node)
    }
}

/// A node in a captured window-manager hierarchy.
///
/// The set of node categories is closed: a capture contains displays, display
/// areas, tasks, task fragments, activities, and generic containers for
/// everything else the platform dumps (tokens, feature containers, and so on).
/// Each variant embeds a [`WindowContainer`] carrying the shared identity and
/// child data.
#[derive(Clone, Debug)]
pub enum WindowNode {
    /// A generic container with no modeled attributes beyond the base data.
    Container(WindowContainer),
    /// A display.
    DisplayContent(DisplayContent),
    /// A sub-partition of a display that can host tasks.
    DisplayArea(DisplayArea),
    /// An entry in the task hierarchy.
    Task(Task),
    /// A fragment of a task hosting a subset of its activities.
    TaskFragment(TaskFragment),
    /// An activity.
    Activity(Activity),
}

impl WindowNode {
    /// The base container data embedded in this node.
    pub fn base(&self) -> &WindowContainer {
        match self {
            Self::Container(c) => c,
            Self::DisplayContent(d) => &d.base,
            Self::DisplayArea(a) => &a.base,
            Self::Task(t) => &t.base,
            Self::TaskFragment(f) => &f.base,
            Self::Activity(a) => &a.base,
        }
    }

    /// Category tag of this node.
    pub fn kind(&self) -> &str {
        match self {
            Self::DisplayContent(_) => DisplayContent::KIND,
            _ => &self.base().kind,
        }
    }

    /// Display name of this node.
    pub fn name(&self) -> String {
        match self {
            Self::DisplayContent(d) => d.name(),
            Self::Task(t) => t.name(),
            _ => self.base().name(),
        }
    }

    /// Deterministic identity string of this node.
    pub fn stable_id(&self) -> String {
        match self {
            Self::DisplayContent(d) => d.stable_id(),
            Self::Task(t) => t.stable_id(),
            _ => self.base().stable_id(),
        }
    }

    /// Downcast to a [`Task`].
    pub fn as_task(&self) -> Option<&Task> {
        match self {
            Self::Task(t) => Some(t),
            _ => None,
        }
    }

    /// Downcast to a [`TaskFragment`].
    pub fn as_task_fragment(&self) -> Option<&TaskFragment> {
        match self {
            Self::TaskFragment(f) => Some(f),
            _ => None,
        }
    }

    /// Downcast to an [`Activity`].
    pub fn as_activity(&self) -> Option<&Activity> {
        match self {
            Self::Activity(a) => Some(a),
            _ => None,
        }
    }

    /// Downcast to a [`DisplayContent`].
    pub fn as_display_content(&self) -> Option<&DisplayContent> {
        match self {
            Self::DisplayContent(d) => Some(d),
            _ => None,
        }
    }

    /// Downcast to a [`DisplayArea`].
    pub fn as_display_area(&self) -> Option<&DisplayArea> {
        match self {
            Self::DisplayArea(a) => Some(a),
            _ => None,
        }
    }
}
