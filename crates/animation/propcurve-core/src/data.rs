//! Hierarchical clip data model.
//!
//! entity path ('/'-separated) -> component kind -> dotted property path -> curve.
//! A clip is authored once and then treated as read-only while it plays.

use std::collections::BTreeMap;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::curve::AnimationCurve;
use crate::ids::ComponentKind;
use crate::property::AnimatableComponent;

/// One animated leaf: exactly one curve.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimatedProperty {
    pub curve: AnimationCurve,
}

impl From<AnimationCurve> for AnimatedProperty {
    fn from(curve: AnimationCurve) -> Self {
        Self { curve }
    }
}

/// Curves of one component kind at one entity path, keyed by dotted property path
/// (e.g. `"position.x"`).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimatedComponent {
    pub properties: HashMap<String, AnimatedProperty>,
}

impl AnimatedComponent {
    pub fn property(&self, path: &str) -> Option<&AnimatedProperty> {
        self.properties.get(path)
    }

    pub fn set_curve(&mut self, path: impl Into<String>, curve: AnimationCurve) {
        self.properties.insert(path.into(), AnimatedProperty { curve });
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

/// Node of the animated hierarchy, mirroring the application's entity tree.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimatedEntity {
    #[serde(default)]
    pub components: HashMap<ComponentKind, AnimatedComponent>,
    /// Ordered for deterministic persistence.
    #[serde(default)]
    pub children: BTreeMap<String, AnimatedEntity>,
}

impl AnimatedEntity {
    pub fn component(&self, kind: ComponentKind) -> Option<&AnimatedComponent> {
        self.components.get(&kind)
    }

    pub fn child(&self, name: &str) -> Option<&AnimatedEntity> {
        self.children.get(name)
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self
            .children
            .values()
            .map(AnimatedEntity::node_count)
            .sum::<usize>()
    }
}

/// Split a relative entity path into its non-empty segments.
/// `""` and `"/"` yield nothing (the root); stray separators are ignored.
fn path_segments(relative_path: &str) -> impl Iterator<Item = &str> {
    relative_path.split('/').filter(|seg| !seg.is_empty())
}

/// Authoring container: a tree of [`AnimatedEntity`] rooted at the animated object.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimationClip {
    root_entity: AnimatedEntity,
}

impl AnimationClip {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the curve for `(kind, property_name)` on the entity at
    /// `relative_path`, creating intermediate entities on demand.
    ///
    /// An empty `property_name` drops the curve (the entity path is still created).
    pub fn set_curve(
        &mut self,
        kind: ComponentKind,
        relative_path: &str,
        property_name: &str,
        curve: AnimationCurve,
    ) {
        let mut entity = &mut self.root_entity;
        for seg in path_segments(relative_path) {
            entity = entity.children.entry(seg.to_owned()).or_default();
        }

        if property_name.is_empty() {
            return;
        }

        entity
            .components
            .entry(kind)
            .or_default()
            .properties
            .insert(property_name.to_owned(), AnimatedProperty { curve });
    }

    /// [`set_curve`](Self::set_curve) keyed by `C::KIND`.
    pub fn set_component_curve<C: AnimatableComponent>(
        &mut self,
        relative_path: &str,
        property_name: &str,
        curve: AnimationCurve,
    ) {
        self.set_curve(C::KIND, relative_path, property_name, curve);
    }

    #[inline]
    pub fn root_entity(&self) -> &AnimatedEntity {
        &self.root_entity
    }

    pub fn set_root_entity(&mut self, entity: AnimatedEntity) {
        self.root_entity = entity;
    }

    /// Look up the entity at `relative_path` without creating anything.
    pub fn entity(&self, relative_path: &str) -> Option<&AnimatedEntity> {
        path_segments(relative_path).try_fold(&self.root_entity, |entity, seg| entity.child(seg))
    }
}

impl From<AnimatedEntity> for AnimationClip {
    fn from(root_entity: AnimatedEntity) -> Self {
        Self { root_entity }
    }
}
