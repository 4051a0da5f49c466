//! Name-resolved mirror of a clip for persistence layers.
//!
//! [`ComponentKind`] ids are opaque, so a stored clip keys components by kind *name*
//! instead. Conversion in either direction goes through a [`ComponentKindNames`]
//! lookup; entries that cannot be resolved are skipped (and logged), never fatal.
//! Everything else (keyframe order, wrap modes, exact property paths, child names)
//! is carried over verbatim.
//!
//! The types derive serde; picking an on-disk format is up to the caller. The JSON
//! helpers below are a convenience over `serde_json`.

use std::collections::BTreeMap;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::data::{AnimatedComponent, AnimatedEntity, AnimationClip};
use crate::error::ClipError;
use crate::ids::ComponentKind;
use crate::property::AnimatableComponent;

/// Resolves component kinds to and from their stable names.
pub trait ComponentKindNames {
    fn kind_name(&self, kind: ComponentKind) -> Option<&str>;
    fn kind_for_name(&self, name: &str) -> Option<ComponentKind>;
}

/// Standalone name table, for tooling that has no component registry at hand.
#[derive(Clone, Debug, Default)]
pub struct KindNameTable {
    names: HashMap<ComponentKind, String>,
}

impl KindNameTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>) -> ComponentKind {
        let name = name.into();
        let kind = ComponentKind::named(&name);
        self.names.insert(kind, name);
        kind
    }

    pub fn with<C: AnimatableComponent>(mut self) -> Self {
        self.insert(C::NAME);
        self
    }
}

impl ComponentKindNames for KindNameTable {
    fn kind_name(&self, kind: ComponentKind) -> Option<&str> {
        self.names.get(&kind).map(String::as_str)
    }

    fn kind_for_name(&self, name: &str) -> Option<ComponentKind> {
        let kind = ComponentKind::named(name);
        self.names
            .get(&kind)
            .filter(|known| known.as_str() == name)
            .map(|_| kind)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StoredEntity {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub components: BTreeMap<String, AnimatedComponent>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub children: BTreeMap<String, StoredEntity>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StoredClip {
    pub root_entity: StoredEntity,
}

fn child_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_owned()
    } else {
        format!("{parent}/{name}")
    }
}

impl StoredEntity {
    fn from_entity<N>(entity: &AnimatedEntity, names: &N, path: &str) -> Self
    where
        N: ComponentKindNames + ?Sized,
    {
        let mut components = BTreeMap::new();
        for (&kind, component) in &entity.components {
            match names.kind_name(kind) {
                Some(name) => {
                    components.insert(name.to_owned(), component.clone());
                }
                None => log::warn!(
                    "stored clip: no name for component kind {kind} at '/{path}'; skipping"
                ),
            }
        }

        let children = entity
            .children
            .iter()
            .map(|(name, child)| {
                let stored = StoredEntity::from_entity(child, names, &child_path(path, name));
                (name.clone(), stored)
            })
            .collect();

        StoredEntity {
            components,
            children,
        }
    }

    fn into_entity<N>(self, names: &N, path: &str) -> AnimatedEntity
    where
        N: ComponentKindNames + ?Sized,
    {
        let mut components = HashMap::with_capacity(self.components.len());
        for (name, component) in self.components {
            match names.kind_for_name(&name) {
                Some(kind) => {
                    components.insert(kind, component);
                }
                None => log::warn!(
                    "stored clip: unknown component '{name}' at '/{path}'; skipping"
                ),
            }
        }

        let children = self
            .children
            .into_iter()
            .map(|(name, child)| {
                let entity = child.into_entity(names, &child_path(path, &name));
                (name, entity)
            })
            .collect();

        AnimatedEntity {
            components,
            children,
        }
    }
}

impl AnimationClip {
    pub fn to_stored<N>(&self, names: &N) -> StoredClip
    where
        N: ComponentKindNames + ?Sized,
    {
        StoredClip {
            root_entity: StoredEntity::from_entity(self.root_entity(), names, ""),
        }
    }

    pub fn from_stored<N>(stored: StoredClip, names: &N) -> Self
    where
        N: ComponentKindNames + ?Sized,
    {
        AnimationClip::from(stored.root_entity.into_entity(names, ""))
    }
}

/// Parse a JSON stored clip and resolve it into an [`AnimationClip`].
pub fn parse_stored_clip_json<N>(s: &str, names: &N) -> Result<AnimationClip, ClipError>
where
    N: ComponentKindNames + ?Sized,
{
    let stored: StoredClip = serde_json::from_str(s).map_err(ClipError::Parse)?;
    Ok(AnimationClip::from_stored(stored, names))
}

/// Serialize `clip` as pretty-printed JSON, keyed by component names.
pub fn stored_clip_to_json<N>(clip: &AnimationClip, names: &N) -> Result<String, ClipError>
where
    N: ComponentKindNames + ?Sized,
{
    serde_json::to_string_pretty(&clip.to_stored(names)).map_err(ClipError::Serialize)
}
