// Copyright 2026 the Wintrace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type for hierarchy invariant violations.

use alloc::string::String;

use thiserror::Error;

/// A fatal violation of a hierarchy invariant, indicating a malformed capture.
///
/// Queries that merely find nothing return an empty result or `None`; this
/// error is reserved for captures that break a domain invariant and is never
/// retried or recovered from internally.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum HierarchyError {
    /// More than one task display area on one display claims the same
    /// activity. A well-formed capture places an activity in at most one task
    /// display area per display.
    #[error(
        "display #{display_id}: {count} task display areas contain activity \"{activity}\", expected at most one"
    )]
    AmbiguousTaskDisplayArea {
        /// Identifier of the display whose subtree is malformed.
        display_id: i32,
        /// The activity name that was looked up.
        activity: String,
        /// How many task display areas matched.
        count: usize,
    },
}
