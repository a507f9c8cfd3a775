//! Per-invocation configuration.

use serde::{Deserialize, Serialize};

/// Options supplied by the calling pipeline for one filter invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterOptions {
    /// Keep only unfinished work: completed items have their content
    /// blanked during the rewrite, and everything outside task-list
    /// structure (bar leading non-content tags) is pruned afterwards.
    pub todo_only: bool,
}
