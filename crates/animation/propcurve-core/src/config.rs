//! Writer configuration.

use serde::{Deserialize, Serialize};

/// Sizing hints for [`crate::AnimatedComponentWriter`].
/// Keep this minimal; expand as needed without breaking API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WriterConfig {
    /// Initial capacity of the accumulated dotted path, in bytes.
    pub path_capacity: usize,
    /// Initial capacity of the segment stack (maximum expected nesting depth).
    pub depth_capacity: usize,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            path_capacity: 128,
            depth_capacity: 16,
        }
    }
}
