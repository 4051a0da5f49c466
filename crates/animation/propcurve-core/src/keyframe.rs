//! Keyframe: a single (time, value) anchor of a piecewise-linear curve.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Immutable sample anchor.
///
/// Curves order keyframes by `time` alone (see [`Keyframe::cmp_time`]); `value`
/// never takes part in ordering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    pub time: f32,
    pub value: f32,
}

impl Keyframe {
    #[inline]
    pub const fn new(time: f32, value: f32) -> Self {
        Self { time, value }
    }

    /// Total order on `time` only, used for bulk sorting.
    #[inline]
    pub fn cmp_time(&self, other: &Self) -> Ordering {
        self.time.total_cmp(&other.time)
    }
}

impl From<(f32, f32)> for Keyframe {
    fn from((time, value): (f32, f32)) -> Self {
        Self { time, value }
    }
}
