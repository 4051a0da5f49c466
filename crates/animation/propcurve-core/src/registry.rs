//! Component-kind dispatch.
//!
//! A binder knows which [`AnimatedEntity`] node applies to which live entity, but not
//! the concrete component types behind each [`ComponentKind`]. The registry closes that
//! gap: each registered type installs a type-erased handler that fetches the component
//! from the application's [`ComponentStore`] and runs the writer on it.

use std::any::TypeId;
use std::marker::PhantomData;

use hashbrown::HashMap;

use crate::data::{AnimatedComponent, AnimatedEntity};
use crate::error::RegistryError;
use crate::ids::ComponentKind;
use crate::property::AnimatableComponent;
use crate::state::{AnimationStates, ComponentAnimationState};
use crate::stored_clip::ComponentKindNames;
use crate::writer::AnimatedComponentWriter;

/// Access to live components, implemented by the application's scene/ECS layer.
pub trait ComponentStore {
    type Entity: Copy;

    /// The component of type `C` on `entity`, if it has one.
    fn component_mut<C: 'static>(&mut self, entity: Self::Entity) -> Option<&mut C>;
}

/// Type-erased writer for one component kind.
pub trait ComponentHandler<S: ComponentStore> {
    fn kind(&self) -> ComponentKind;
    fn name(&self) -> &'static str;

    /// Write `source` into the entity's component. A missing component is a no-op.
    fn write_properties(
        &self,
        writer: &mut AnimatedComponentWriter,
        store: &mut S,
        entity: S::Entity,
        source: &AnimatedComponent,
        time: f32,
        state: Option<&mut ComponentAnimationState>,
    );
}

struct TypedHandler<C>(PhantomData<fn() -> C>);

impl<S, C> ComponentHandler<S> for TypedHandler<C>
where
    S: ComponentStore,
    C: AnimatableComponent + 'static,
{
    fn kind(&self) -> ComponentKind {
        C::KIND
    }

    fn name(&self) -> &'static str {
        C::NAME
    }

    fn write_properties(
        &self,
        writer: &mut AnimatedComponentWriter,
        store: &mut S,
        entity: S::Entity,
        source: &AnimatedComponent,
        time: f32,
        state: Option<&mut ComponentAnimationState>,
    ) {
        let Some(component) = store.component_mut::<C>(entity) else {
            return;
        };
        writer.write(source, time, component, state);
    }
}

struct Registration<S: ComponentStore> {
    type_id: TypeId,
    handler: Box<dyn ComponentHandler<S>>,
}

/// Map from component kind to its handler.
pub struct ComponentRegistry<S: ComponentStore> {
    handlers: HashMap<ComponentKind, Registration<S>>,
}

impl<S: ComponentStore> Default for ComponentRegistry<S> {
    fn default() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }
}

impl<S: ComponentStore> ComponentRegistry<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `C` under `C::KIND`. Registering the same type again is a no-op; a
    /// different type whose name hashes to an already-used kind is rejected.
    pub fn register<C: AnimatableComponent + 'static>(&mut self) -> Result<(), RegistryError> {
        let type_id = TypeId::of::<C>();
        if let Some(existing) = self.handlers.get(&C::KIND) {
            if existing.type_id == type_id {
                return Ok(());
            }
            return Err(RegistryError::KindCollision {
                kind: C::KIND,
                existing: existing.handler.name(),
                requested: C::NAME,
            });
        }

        log::debug!("register animated component '{}' as {}", C::NAME, C::KIND);
        self.handlers.insert(
            C::KIND,
            Registration {
                type_id,
                handler: Box::new(TypedHandler::<C>(PhantomData)),
            },
        );
        Ok(())
    }

    pub fn handler(&self, kind: ComponentKind) -> Option<&dyn ComponentHandler<S>> {
        self.handlers.get(&kind).map(|r| r.handler.as_ref())
    }

    pub fn is_registered(&self, kind: ComponentKind) -> bool {
        self.handlers.contains_key(&kind)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Apply every component curve set of one animated node to `entity`.
    /// Kinds without a registered handler are skipped.
    pub fn write_entity(
        &self,
        writer: &mut AnimatedComponentWriter,
        store: &mut S,
        entity: S::Entity,
        animated: &AnimatedEntity,
        time: f32,
        states: &mut AnimationStates,
    ) {
        for (&kind, component) in &animated.components {
            let Some(handler) = self.handler(kind) else {
                continue;
            };
            handler.write_properties(
                writer,
                store,
                entity,
                component,
                time,
                Some(states.component_mut(kind)),
            );
        }
    }
}

impl<S: ComponentStore> ComponentKindNames for ComponentRegistry<S> {
    fn kind_name(&self, kind: ComponentKind) -> Option<&str> {
        self.handler(kind).map(|h| h.name())
    }

    fn kind_for_name(&self, name: &str) -> Option<ComponentKind> {
        let kind = ComponentKind::named(name);
        self.handler(kind)
            .filter(|h| h.name() == name)
            .map(|_| kind)
    }
}
