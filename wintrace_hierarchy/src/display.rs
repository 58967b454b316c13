// Copyright 2026 the Wintrace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Displays and display areas, including root-task reclassification.

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use kurbo::Rect;

use crate::container::{WindowContainer, WindowNode};
use crate::error::HierarchyError;
use crate::task::Task;

bitflags::bitflags! {
    /// Raw display flag word as captured.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct DisplayFlags: u32 {
        /// The display supports protected buffers.
        const SUPPORTS_PROTECTED_BUFFERS = 1 << 0;
        /// The display has a secure video output.
        const SECURE = 1 << 1;
        /// The display is private to the owning application.
        const PRIVATE = 1 << 2;
        /// The display is a presentation display.
        const PRESENTATION = 1 << 3;
        /// The display has a round shape.
        const ROUND = 1 << 4;
    }
}

impl Default for DisplayFlags {
    fn default() -> Self {
        Self::empty()
    }
}

/// One physical or logical display in a capture.
///
/// The three pinned/stable bounds rectangles are optional upstream; the
/// accessor methods of the same names substitute [`Rect::ZERO`] when absent,
/// so callers never handle a missing-value state.
#[derive(Clone, Debug, Default)]
pub struct DisplayContent {
    /// Base container data.
    pub base: WindowContainer,
    /// Identifier of the display, unique within a capture.
    pub id: i32,
    /// Identifier of the root task holding focus on this display.
    pub focused_root_task_id: i32,
    /// Component name of the resumed activity on this display.
    pub resumed_activity: String,
    /// Whether the display hosts at most a single task.
    pub single_task_instance: bool,
    /// Raw default bounds of the pinned stack, when captured. Prefer the
    /// accessor of the same name.
    pub default_pinned_stack_bounds: Option<Rect>,
    /// Raw movement bounds of the pinned stack, when captured. Prefer the
    /// accessor of the same name.
    pub pinned_stack_movement_bounds: Option<Rect>,
    /// Raw stable bounds of the display, when captured. Prefer the accessor of
    /// the same name.
    pub stable_bounds: Option<Rect>,
    /// Full bounds of the display.
    pub display_rect: Rect,
    /// Bounds of the display available to applications.
    pub app_rect: Rect,
    /// Pixel density of the display.
    pub dpi: i32,
    /// Captured display flags.
    pub flags: DisplayFlags,
    /// Surface size of the display.
    pub surface_size: i32,
    /// Window name of the application holding focus.
    pub focused_app: String,
    /// Name of the last window transition.
    pub last_transition: String,
    /// State of the app transition animation.
    pub app_transition_state: String,
    /// Rotation of the display.
    pub rotation: i32,
    /// Last requested orientation of the display.
    pub last_orientation: i32,
}

impl DisplayContent {
    /// Category tag of every display node.
    pub const KIND: &'static str = "Display";

    /// Display name: the string form of the id.
    pub fn name(&self) -> String {
        self.id.to_string()
    }

    /// Identity string: the kind tag followed by the title.
    pub fn stable_id(&self) -> String {
        format!("{}{}", Self::KIND, self.base.title)
    }

    /// Default bounds of the pinned stack, or [`Rect::ZERO`] when the capture
    /// had none.
    pub fn default_pinned_stack_bounds(&self) -> Rect {
        self.default_pinned_stack_bounds.unwrap_or(Rect::ZERO)
    }

    /// Movement bounds of the pinned stack, or [`Rect::ZERO`] when the capture
    /// had none.
    pub fn pinned_stack_movement_bounds(&self) -> Rect {
        self.pinned_stack_movement_bounds.unwrap_or(Rect::ZERO)
    }

    /// Stable bounds of the display, or [`Rect::ZERO`] when the capture had
    /// none.
    pub fn stable_bounds(&self) -> Rect {
        self.stable_bounds.unwrap_or(Rect::ZERO)
    }

    /// The top-level tasks of this display, with organizer-created tasks
    /// unwrapped.
    ///
    /// Tasks created by a window organizer are framework plumbing (for
    /// example, picture-in-picture coordinators) rather than real stacks, so
    /// they never appear in the result; their immediate child tasks are
    /// promoted to root level in their place. The resulting positional order,
    /// including the reversal applied to each organizer task's children, is a
    /// behavioral contract consumers depend on for display-order reasoning.
    pub fn root_tasks(&self) -> Vec<&Task> {
        let mut tasks: Vec<&Task> = self
            .base
            .collect_descendants(WindowNode::as_task, |t| t.is_root_task());

        // Pull organizer-created tasks out, walking back to front so removal
        // by index stays valid.
        let mut organized: Vec<&Task> = Vec::new();
        for i in (0..tasks.len()).rev() {
            if tasks[i].created_by_organizer {
                organized.push(tasks.remove(i));
            }
        }

        // Promote each organizer task's immediate children in its place, in
        // reverse stored child order.
        for task in organized.iter().rev() {
            for child in task.base.children.iter().rev() {
                if let Some(t) = child.as_task() {
                    tasks.push(t);
                }
            }
        }

        tasks
    }

    /// Whether any root task of this display contains an activity whose title
    /// contains `activity_name`.
    pub fn contains_activity(&self, activity_name: &str) -> bool {
        self.root_tasks()
            .iter()
            .any(|t| t.contains_activity(activity_name))
    }

    /// The task display area of this display containing the named activity,
    /// or `Ok(None)` when no area contains it (for example, the activity is
    /// not placed yet).
    ///
    /// A well-formed capture places an activity in at most one task display
    /// area per display; more than one match means the capture is malformed
    /// and fails with [`HierarchyError::AmbiguousTaskDisplayArea`].
    pub fn get_task_display_area(
        &self,
        activity_name: &str,
    ) -> Result<Option<&DisplayArea>, HierarchyError> {
        let areas = self.base.collect_descendants(WindowNode::as_display_area, |area| {
            area.is_task_display_area && area.contains_activity(activity_name)
        });

        if areas.len() > 1 {
            return Err(HierarchyError::AmbiguousTaskDisplayArea {
                display_id: self.id,
                activity: activity_name.to_string(),
                count: areas.len(),
            });
        }

        Ok(areas.first().copied())
    }
}

/// A sub-partition of a display that can host window containers.
#[derive(Clone, Debug, Default)]
pub struct DisplayArea {
    /// Base container data.
    pub base: WindowContainer,
    /// Whether this area is a task display area, the subtype relevant to task
    /// placement.
    pub is_task_display_area: bool,
}

impl DisplayArea {
    /// Whether any descendant activity's title contains `activity_name`.
    pub fn contains_activity(&self, activity_name: &str) -> bool {
        self.base
            .descendants()
            .filter_map(WindowNode::as_activity)
            .any(|a| a.title().contains(activity_name))
    }
}
