//! Keyframe curves and the hinted sampling algorithm.
//!
//! Model:
//! - A curve owns keyframes sorted ascending by time (every mutation keeps this).
//! - Sampling maps the query time into the curve domain via [`WrapMode`], finds the
//!   first keyframe strictly after it ("upper bound"), and interpolates linearly with
//!   the keyframe before it.
//! - Callers feed the returned index back in as a hint. For monotonically advancing
//!   playback the hint neighbourhood check resolves the segment without a binary
//!   search, so repeated sampling is amortized O(1).

use serde::{Deserialize, Serialize};

use crate::keyframe::Keyframe;

/// Policy mapping an out-of-domain query time back into `[0, last.time]`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WrapMode {
    /// Clamp into `[0, last.time]`.
    #[default]
    Once,
    /// Periodic wrap with period `last.time`.
    Loop,
}

/// Result of [`AnimationCurve::evaluate`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sample {
    /// Index of the keyframe at or before the sampled time; `None` for an empty curve.
    /// Pass it back as the hint of the next call.
    pub index: Option<usize>,
    pub value: f32,
}

impl Sample {
    /// Sample of a curve without keyframes.
    pub const EMPTY: Sample = Sample {
        index: None,
        value: 0.0,
    };
}

/// Piecewise-linear curve over ascending keyframes.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "CurveRepr")]
pub struct AnimationCurve {
    keyframes: Vec<Keyframe>,
    #[serde(default)]
    wrap_mode: WrapMode,
}

impl AnimationCurve {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_wrap_mode(mut self, mode: WrapMode) -> Self {
        self.wrap_mode = mode;
        self
    }

    #[inline]
    pub fn keyframes(&self) -> &[Keyframe] {
        &self.keyframes
    }

    /// Replace all keyframes. Input order is irrelevant; keys are stably sorted by time,
    /// so keys sharing a time keep their relative input order.
    pub fn set_keyframes(&mut self, mut keyframes: Vec<Keyframe>) {
        keyframes.sort_by(Keyframe::cmp_time);
        self.keyframes = keyframes;
    }

    #[inline]
    pub fn wrap_mode(&self) -> WrapMode {
        self.wrap_mode
    }

    pub fn set_wrap_mode(&mut self, mode: WrapMode) {
        self.wrap_mode = mode;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.keyframes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keyframes.is_empty()
    }

    /// Time of the last keyframe (0.0 for an empty curve).
    pub fn duration(&self) -> f32 {
        self.keyframes.last().map_or(0.0, |k| k.time)
    }

    /// Insert `keyframe` at its lower-bound position and return the resulting index.
    ///
    /// A key whose time equals existing keys lands before them.
    pub fn add_keyframe(&mut self, keyframe: impl Into<Keyframe>) -> usize {
        let keyframe = keyframe.into();
        let index = self.keyframes.partition_point(|k| k.time < keyframe.time);
        self.keyframes.insert(index, keyframe);
        index
    }

    /// Sample the curve at `time`.
    ///
    /// `hint` is the index returned by the previous call; out-of-range hints (including
    /// the last index) fall back to a full binary search.
    pub fn evaluate(&self, time: f32, hint: Option<usize>) -> Sample {
        let (Some(first), Some(last)) = (self.keyframes.first(), self.keyframes.last()) else {
            return Sample::EMPTY;
        };

        let t = self.wrap_time(time, last.time);
        let upper = self.upper_bound(t, hint);
        let n = self.keyframes.len();

        if upper == n {
            return Sample {
                index: Some(n - 1),
                value: last.value,
            };
        }
        if upper == 0 {
            return Sample {
                index: Some(0),
                value: first.value,
            };
        }

        // prev.time <= t < next.time, so the span is strictly positive.
        let prev = &self.keyframes[upper - 1];
        let next = &self.keyframes[upper];
        let value = prev.value + (next.value - prev.value) * (t - prev.time) / (next.time - prev.time);
        Sample {
            index: Some(upper - 1),
            value,
        }
    }

    /// Sample in the integral tick domain. Interpolation still happens in `f32`.
    #[inline]
    pub fn evaluate_ticks(&self, ticks: u32, hint: Option<usize>) -> Sample {
        self.evaluate(ticks as f32, hint)
    }

    fn wrap_time(&self, time: f32, end: f32) -> f32 {
        match self.wrap_mode {
            // A non-positive period has no meaningful wrap; fall through to clamping.
            WrapMode::Loop if end > 0.0 => time.rem_euclid(end),
            _ => time.max(0.0).min(end),
        }
    }

    /// Index of the first keyframe with `time > t`. A hint is only trusted when it
    /// and its successor exist; probes `h-1..=h+2` before narrowing the binary search.
    fn upper_bound(&self, t: f32, hint: Option<usize>) -> usize {
        let keys = &self.keyframes;
        let n = keys.len();
        let after = |k: &Keyframe| k.time <= t;

        let Some(h) = hint.filter(|&h| h + 1 < n) else {
            return keys.partition_point(after);
        };

        if t < keys[h].time {
            if h == 0 {
                return 0;
            }
            if keys[h - 1].time <= t {
                return h;
            }
            return keys[..h - 1].partition_point(after);
        }

        if t < keys[h + 1].time {
            return h + 1;
        }
        if h + 2 >= n {
            return n;
        }
        if t < keys[h + 2].time {
            return h + 2;
        }
        h + 2 + keys[h + 2..].partition_point(after)
    }
}

impl FromIterator<Keyframe> for AnimationCurve {
    fn from_iter<I: IntoIterator<Item = Keyframe>>(iter: I) -> Self {
        let mut curve = AnimationCurve::new();
        curve.set_keyframes(iter.into_iter().collect());
        curve
    }
}

/// Deserialization shape; re-establishes the sort invariant on load.
#[derive(Deserialize)]
struct CurveRepr {
    keyframes: Vec<Keyframe>,
    #[serde(default)]
    wrap_mode: WrapMode,
}

impl From<CurveRepr> for AnimationCurve {
    fn from(repr: CurveRepr) -> Self {
        let mut curve = AnimationCurve::new().with_wrap_mode(repr.wrap_mode);
        curve.set_keyframes(repr.keyframes);
        curve
    }
}
