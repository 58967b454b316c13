// Copyright 2026 the Wintrace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tasks and task fragments, with their derived stacking views.

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use hashbrown::HashSet;
use kurbo::Rect;

use crate::activity::Activity;
use crate::container::{WindowContainer, WindowNode};

/// One entry in the task hierarchy of a capture.
///
/// All derived views below are pure functions of the current subtree and are
/// recomputed on every call; nothing is cached. The capture stores children
/// top-to-bottom in on-screen order, while the stacking convention used by
/// trace assertions is bottom-first, so [`Task::tasks`],
/// [`Task::task_fragments`], and [`Task::activities`] un-invert the stored
/// order for consumers reasoning about stacking.
#[derive(Clone, Debug, Default)]
pub struct Task {
    /// Base container data. A task's children are only tasks, task fragments,
    /// and activities; the dump parser guarantees this.
    pub base: WindowContainer,
    /// Activity type of the task (home, standard, and so on, as captured).
    pub activity_type: i32,
    /// Whether the task fills its display.
    pub is_fullscreen: bool,
    /// Task bounds on the display.
    pub bounds: Rect,
    /// Identifier of this task, unique within a capture.
    pub task_id: i32,
    /// Identifier of the root task of this task's stack. Equal to
    /// [`Task::task_id`] iff this task is itself a root.
    pub root_task_id: i32,
    /// Identifier of the display owning this task.
    pub display_id: i32,
    /// Bounds the task last had while not fullscreen.
    pub last_non_fullscreen_bounds: Rect,
    /// Component name of the activity the task really hosts.
    pub real_activity: String,
    /// Component name the task was originally started with.
    pub orig_activity: String,
    /// Resize mode of the task.
    pub resize_mode: i32,
    /// Raw resumed-activity string from the capture; empty when no activity in
    /// this task is resumed. See [`Task::resumed_activities`] for the derived
    /// recursive view.
    pub resumed_activity: String,
    /// Whether the task's bounds were animating when captured.
    pub animating_bounds: bool,
    /// Surface width of the task.
    pub surface_width: i32,
    /// Surface height of the task.
    pub surface_height: i32,
    /// True when a window-organizer component, not the platform itself,
    /// created this task. Organizer tasks are unwrapped by
    /// [`crate::DisplayContent::root_tasks`].
    pub created_by_organizer: bool,
    /// Minimum width of the task.
    pub min_width: i32,
    /// Minimum height of the task.
    pub min_height: i32,
}

impl Task {
    /// Display name of the task: its id.
    pub fn name(&self) -> String {
        self.task_id.to_string()
    }

    /// Identity string of the task: the base stable id plus the task id.
    pub fn stable_id(&self) -> String {
        format!("{} {}", self.base.stable_id(), self.task_id)
    }

    /// Whether this task is the root of its stack.
    pub fn is_root_task(&self) -> bool {
        self.task_id == self.root_task_id
    }

    /// Whether the task holds no child tasks and no activities. Task fragments
    /// alone do not make a task non-empty.
    pub fn is_empty(&self) -> bool {
        self.tasks().is_empty() && self.activities().is_empty()
    }

    /// Immediate child tasks in stack order (bottom of the visual stack
    /// first), i.e. the reverse of the stored capture order.
    pub fn tasks(&self) -> Vec<&Self> {
        self.base
            .children
            .iter()
            .rev()
            .filter_map(WindowNode::as_task)
            .collect()
    }

    /// Immediate child task fragments in stack order.
    pub fn task_fragments(&self) -> Vec<&TaskFragment> {
        self.base
            .children
            .iter()
            .rev()
            .filter_map(WindowNode::as_task_fragment)
            .collect()
    }

    /// Immediate child activities in stack order.
    pub fn activities(&self) -> Vec<&Activity> {
        self.base
            .children
            .iter()
            .rev()
            .filter_map(WindowNode::as_activity)
            .collect()
    }

    /// The top task in the stack, or `None` if there are no child tasks.
    // The capture stores children from top to bottom, so after the un-invert
    // in `tasks()` the first element is the one that was stored last.
    pub fn top_task(&self) -> Option<&Self> {
        self.tasks().first().copied()
    }

    /// The resumed activities of this task and, recursively, of all its child
    /// tasks. Empty strings are never included and duplicates collapse.
    pub fn resumed_activities(&self) -> HashSet<&str> {
        let mut result = HashSet::new();
        self.collect_resumed_activities(&mut result);
        result
    }

    fn collect_resumed_activities<'t>(&'t self, out: &mut HashSet<&'t str>) {
        if !self.resumed_activity.is_empty() {
            out.insert(self.resumed_activity.as_str());
        }
        for task in self.tasks() {
            task.collect_resumed_activities(out);
        }
    }

    /// First immediate child task satisfying `predicate`, searched in stack
    /// order. Falls back to this task itself if no child matches but the
    /// predicate holds for `self`. Does not recurse into grandchildren.
    pub fn get_task(&self, predicate: impl Fn(&Self) -> bool) -> Option<&Self> {
        self.tasks()
            .into_iter()
            .find(|t| predicate(t))
            .or_else(|| predicate(self).then_some(self))
    }

    /// [`Task::get_task`] matching on the task id.
    pub fn get_task_by_id(&self, task_id: i32) -> Option<&Self> {
        self.get_task(|t| t.task_id == task_id)
    }

    /// Apply `visitor` to every immediate child task in stack order. Does not
    /// recurse.
    pub fn for_all_tasks(&self, mut visitor: impl FnMut(&Self)) {
        for task in self.tasks() {
            visitor(task);
        }
    }

    /// First activity satisfying `predicate`, searching this task's own
    /// activities first, then the activities of each immediate child task (one
    /// level only), in stack order.
    pub fn get_activity(&self, predicate: impl Fn(&Activity) -> bool) -> Option<&Activity> {
        self.activities()
            .into_iter()
            .find(|a| predicate(a))
            .or_else(|| {
                self.tasks()
                    .into_iter()
                    .flat_map(|t| t.activities())
                    .find(|a| predicate(a))
            })
    }

    /// [`Task::get_activity`] matching any activity whose title contains
    /// `activity_name` as a substring.
    pub fn get_activity_by_name(&self, activity_name: &str) -> Option<&Activity> {
        self.get_activity(|activity| activity.title().contains(activity_name))
    }

    /// Whether any activity reachable by [`Task::get_activity_by_name`]
    /// matches.
    pub fn contains_activity(&self, activity_name: &str) -> bool {
        self.get_activity_by_name(activity_name).is_some()
    }
}

/// A fragment of a task hosting a subset of its activities.
#[derive(Clone, Debug, Default)]
pub struct TaskFragment {
    /// Base container data.
    pub base: WindowContainer,
    /// Activity type of the fragment.
    pub activity_type: i32,
    /// Identifier of the display owning the fragment.
    pub display_id: i32,
    /// Minimum width of the fragment.
    pub min_width: i32,
    /// Minimum height of the fragment.
    pub min_height: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn base(title: &str, children: Vec<WindowNode>) -> WindowContainer {
        WindowContainer {
            kind: "Task".to_string(),
            title: title.to_string(),
            token: "7c41e09".to_string(),
            children,
            ..WindowContainer::default()
        }
    }

    fn task(task_id: i32, root_task_id: i32, children: Vec<WindowNode>) -> Task {
        Task {
            base: base("Task", children),
            task_id,
            root_task_id,
            ..Task::default()
        }
    }

    fn activity(title: &str) -> WindowNode {
        WindowNode::Activity(Activity {
            base: base(title, vec![]),
            ..Activity::default()
        })
    }

    fn fragment() -> WindowNode {
        WindowNode::TaskFragment(TaskFragment {
            base: base("TaskFragment", vec![]),
            ..TaskFragment::default()
        })
    }

    #[test]
    fn is_root_task_iff_ids_match() {
        assert!(task(5, 5, vec![]).is_root_task());
        assert!(!task(5, 4, vec![]).is_root_task());
    }

    #[test]
    fn child_views_partition_children_and_reverse_stored_order() {
        let t = task(
            1,
            1,
            vec![
                WindowNode::Task(task(2, 1, vec![])),
                activity("Foo"),
                fragment(),
                WindowNode::Task(task(3, 1, vec![])),
                activity("Bar"),
            ],
        );

        // Reversed storage order per kind.
        let task_ids: Vec<_> = t.tasks().iter().map(|c| c.task_id).collect();
        assert_eq!(task_ids, vec![3, 2]);

        let titles: Vec<_> = t.activities().iter().map(|a| a.title()).collect();
        assert_eq!(titles, vec!["Bar", "Foo"]);

        assert_eq!(t.task_fragments().len(), 1);

        // Every child lands in exactly one view.
        let partitioned = t.tasks().len() + t.activities().len() + t.task_fragments().len();
        assert_eq!(partitioned, t.base.children.len());
    }

    #[test]
    fn top_task_is_the_first_in_stack_order() {
        let t = task(
            1,
            1,
            vec![
                WindowNode::Task(task(2, 1, vec![])),
                WindowNode::Task(task(3, 1, vec![])),
            ],
        );
        assert_eq!(t.top_task().map(|c| c.task_id), Some(3));
        assert!(task(1, 1, vec![]).top_task().is_none());
    }

    #[test]
    fn emptiness_ignores_task_fragments() {
        assert!(task(1, 1, vec![]).is_empty());
        assert!(task(1, 1, vec![fragment()]).is_empty());
        assert!(!task(1, 1, vec![activity("Foo")]).is_empty());
        assert!(!task(1, 1, vec![WindowNode::Task(task(2, 1, vec![]))]).is_empty());
    }

    #[test]
    fn resumed_activities_deduplicate_and_skip_empty_strings() {
        let mut inner = task(2, 1, vec![]);
        inner.resumed_activity = "com.example/.Main".to_string();
        let mut nested = task(3, 1, vec![WindowNode::Task(inner)]);
        nested.resumed_activity = "com.example/.Main".to_string();
        // Own resumed activity is empty and must not appear.
        let t = task(1, 1, vec![WindowNode::Task(nested)]);

        let resumed = t.resumed_activities();
        assert_eq!(resumed.len(), 1);
        assert!(resumed.contains("com.example/.Main"));
        assert!(!resumed.contains(""));
    }

    #[test]
    fn get_task_searches_children_then_falls_back_to_self() {
        let t = task(1, 1, vec![WindowNode::Task(task(2, 1, vec![]))]);

        assert_eq!(t.get_task_by_id(2).map(|c| c.task_id), Some(2));
        // No child matches, but self does.
        assert_eq!(t.get_task_by_id(1).map(|c| c.task_id), Some(1));
        // Neither children nor self match.
        assert!(t.get_task_by_id(42).is_none());
    }

    #[test]
    fn get_task_does_not_recurse_into_grandchildren() {
        let grandchild = task(3, 1, vec![]);
        let child = task(2, 1, vec![WindowNode::Task(grandchild)]);
        let t = task(1, 1, vec![WindowNode::Task(child)]);
        assert!(t.get_task_by_id(3).is_none());
    }

    #[test]
    fn for_all_tasks_visits_immediate_children_in_stack_order() {
        let t = task(
            1,
            1,
            vec![
                WindowNode::Task(task(2, 1, vec![])),
                WindowNode::Task(task(3, 1, vec![WindowNode::Task(task(4, 1, vec![]))])),
            ],
        );
        let mut seen = Vec::new();
        t.for_all_tasks(|c| seen.push(c.task_id));
        assert_eq!(seen, vec![3, 2]);
    }

    #[test]
    fn get_activity_checks_own_activities_before_child_tasks() {
        let child = task(2, 1, vec![activity("Shared")]);
        let t = task(1, 1, vec![WindowNode::Task(child), activity("Shared")]);

        let found = t.get_activity(|a| a.title() == "Shared").unwrap();
        // The match in our own child list wins over the nested one.
        assert!(core::ptr::eq(found, t.activities()[0]));
    }

    #[test]
    fn get_activity_recurses_exactly_one_level() {
        let grandchild = task(3, 1, vec![activity("Deep")]);
        let child = task(2, 1, vec![WindowNode::Task(grandchild)]);
        let t = task(1, 1, vec![WindowNode::Task(child)]);
        assert!(t.get_activity_by_name("Deep").is_none());
    }

    #[test]
    fn activity_lookup_matches_by_title_substring() {
        let t = task(1, 1, vec![activity("com.example/.LauncherActivity")]);
        assert!(t.contains_activity("Launcher"));
        assert!(t.contains_activity("com.example/.LauncherActivity"));
        assert!(!t.contains_activity("Settings"));
    }

    #[test]
    fn stable_id_appends_the_task_id() {
        let t = task(12, 12, vec![]);
        assert_eq!(t.stable_id(), "Task 7c41e09 Task 12");
        assert_eq!(t.name(), "12");
    }
}
