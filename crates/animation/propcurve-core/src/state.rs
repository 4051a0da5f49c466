//! Per-instance sampling state.
//!
//! Owned by whoever binds a clip to a live object; passed by `&mut` into every
//! writer call. The cached index per property is fed back to
//! [`AnimationCurve::evaluate`](crate::AnimationCurve::evaluate) as its hint.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::ids::ComponentKind;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyAnimationState {
    pub current_index: Option<usize>,
}

/// Hint cache for one component, keyed by dotted property path.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentAnimationState {
    pub properties: HashMap<String, PropertyAnimationState>,
}

impl ComponentAnimationState {
    /// State slot for `path`, allocating the key only on first use.
    #[inline]
    pub fn property_mut(&mut self, path: &str) -> &mut PropertyAnimationState {
        self.properties.entry_ref(path).or_default()
    }

    pub fn property(&self, path: &str) -> Option<&PropertyAnimationState> {
        self.properties.get(path)
    }

    /// Forget all hints (e.g. after a seek backwards).
    pub fn reset(&mut self) {
        self.properties
            .values_mut()
            .for_each(|s| s.current_index = None);
    }
}

/// Hint caches for every component of one bound instance.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimationStates {
    pub components: HashMap<ComponentKind, ComponentAnimationState>,
}

impl AnimationStates {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn component_mut(&mut self, kind: ComponentKind) -> &mut ComponentAnimationState {
        self.components.entry(kind).or_default()
    }

    pub fn component(&self, kind: ComponentKind) -> Option<&ComponentAnimationState> {
        self.components.get(&kind)
    }

    pub fn reset(&mut self) {
        self.components
            .values_mut()
            .for_each(ComponentAnimationState::reset);
    }

    pub fn clear(&mut self) {
        self.components.clear();
    }
}
