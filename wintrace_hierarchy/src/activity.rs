// Copyright 2026 the Wintrace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Activity nodes.

use alloc::string::String;

use crate::container::WindowContainer;

/// An activity captured in the hierarchy. The activity's title (its component
/// name as dumped) lives in the base container.
#[derive(Clone, Debug, Default)]
pub struct Activity {
    /// Base container data.
    pub base: WindowContainer,
    /// Lifecycle state of the activity at capture time.
    pub state: String,
    /// Whether the activity was visible.
    pub visible: bool,
    /// Whether the activity is the front activity of its task.
    pub front_of_task: bool,
    /// Identifier of the process hosting the activity.
    pub proc_id: i32,
    /// Whether the activity is translucent.
    pub is_translucent: bool,
}

impl Activity {
    /// Title of the activity, used by substring lookups.
    pub fn title(&self) -> &str {
        &self.base.title
    }
}
