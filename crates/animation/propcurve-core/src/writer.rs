//! Writes sampled curve values into arbitrary [`Property`] targets.
//!
//! The writer walks the target depth-first in the order its `accept` implementation
//! declares fields, joining named levels with `.` into a dotted path. At every numeric
//! leaf the path is looked up in the [`AnimatedComponent`]; a hit overwrites the leaf
//! with the curve sampled at the requested time, a miss leaves it untouched. Text,
//! sequences and opaque handles are walked past but never written.
//!
//! Paths are matched exactly (case-sensitive). A clip authored against a different
//! field layout simply writes nothing.

use crate::config::WriterConfig;
use crate::data::AnimatedComponent;
use crate::property::{AnimatableComponent, NumericMut, Property, PropertyVisitor};
use crate::scratch::PathScratch;
use crate::state::{AnimationStates, ComponentAnimationState};

/// Reusable writer. Holds only a path scratch buffer, so one instance can serve any
/// number of (curve set, target) pairs without reallocating.
#[derive(Debug, Default)]
pub struct AnimatedComponentWriter {
    scratch: PathScratch,
}

impl AnimatedComponentWriter {
    pub fn new() -> Self {
        Self::with_config(&WriterConfig::default())
    }

    pub fn with_config(cfg: &WriterConfig) -> Self {
        Self {
            scratch: PathScratch::new(cfg),
        }
    }

    /// Write every property of `source` sampled at `time` into `dest`.
    ///
    /// With `state`, each matched property reads its previous segment index as the
    /// sampling hint and stores the new one.
    pub fn write<C: Property + ?Sized>(
        &mut self,
        source: &AnimatedComponent,
        time: f32,
        dest: &mut C,
        state: Option<&mut ComponentAnimationState>,
    ) {
        if source.is_empty() {
            return;
        }
        self.scratch.begin();
        let mut writer = PropertyWriter {
            source,
            time,
            scratch: &mut self.scratch,
            state,
        };
        dest.accept(&mut writer);
        debug_assert_eq!(writer.scratch.depth(), 0, "unbalanced enter/exit in accept()");
    }

    /// [`write`](Self::write) in the integral tick domain.
    pub fn write_ticks<C: Property + ?Sized>(
        &mut self,
        source: &AnimatedComponent,
        ticks: u32,
        dest: &mut C,
        state: Option<&mut ComponentAnimationState>,
    ) {
        self.write(source, ticks as f32, dest, state);
    }

    /// [`write`](Self::write) using the hint cache stored under `C::KIND`.
    pub fn write_component<C: AnimatableComponent>(
        &mut self,
        source: &AnimatedComponent,
        time: f32,
        dest: &mut C,
        states: &mut AnimationStates,
    ) {
        self.write(source, time, dest, Some(states.component_mut(C::KIND)));
    }
}

struct PropertyWriter<'a> {
    source: &'a AnimatedComponent,
    time: f32,
    scratch: &'a mut PathScratch,
    state: Option<&'a mut ComponentAnimationState>,
}

impl PropertyVisitor for PropertyWriter<'_> {
    #[inline]
    fn enter(&mut self, name: Option<&str>) {
        self.scratch.push(name);
    }

    #[inline]
    fn exit(&mut self) {
        self.scratch.pop();
    }

    fn visit_numeric(&mut self, mut value: NumericMut<'_>) {
        let path = self.scratch.path();
        let Some(property) = self.source.properties.get(path) else {
            return;
        };

        let slot = self.state.as_deref_mut().map(|s| s.property_mut(path));
        let hint = slot.as_ref().and_then(|s| s.current_index);
        let sample = property.curve.evaluate(self.time, hint);

        value.set_from_f32(sample.value);
        if let Some(slot) = slot {
            slot.current_index = sample.index;
        }
    }
}
