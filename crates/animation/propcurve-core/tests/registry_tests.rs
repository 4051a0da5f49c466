use std::any::{Any, TypeId};
use std::collections::HashMap;

use propcurve_core::{
    animatable_component, AnimatableComponent, AnimatedComponentWriter, AnimationClip,
    AnimationCurve, AnimationStates, ComponentKind, ComponentKindNames, ComponentRegistry,
    ComponentStore, RegistryError,
};

/// Minimal component store keyed by (entity, type).
#[derive(Default)]
struct World {
    components: HashMap<(u32, TypeId), Box<dyn Any>>,
}

impl World {
    fn insert<C: 'static>(&mut self, entity: u32, component: C) {
        self.components
            .insert((entity, TypeId::of::<C>()), Box::new(component));
    }

    fn get<C: 'static>(&self, entity: u32) -> &C {
        self.components
            .get(&(entity, TypeId::of::<C>()))
            .and_then(|c| c.downcast_ref::<C>())
            .expect("component present")
    }
}

impl ComponentStore for World {
    type Entity = u32;

    fn component_mut<C: 'static>(&mut self, entity: u32) -> Option<&mut C> {
        self.components
            .get_mut(&(entity, TypeId::of::<C>()))
            .and_then(|c| c.downcast_mut::<C>())
    }
}

#[derive(Debug, Default)]
struct Transform {
    x: f32,
    y: f32,
}
animatable_component!(Transform = "Transform" { x, y });

#[derive(Debug, Default)]
struct Opacity {
    alpha: f32,
}
animatable_component!(Opacity = "Opacity" { alpha });

#[derive(Debug, Default)]
struct Unregistered {
    v: f32,
}
animatable_component!(Unregistered = "Unregistered" { v });

#[derive(Debug, Default)]
struct FakeTransform {
    x: f32,
}
animatable_component!(FakeTransform = "Transform" { x });

fn ramp(end: f32, value: f32) -> AnimationCurve {
    let mut c = AnimationCurve::new();
    c.add_keyframe((0.0, 0.0));
    c.add_keyframe((end, value));
    c
}

#[test]
fn register_is_idempotent_and_detects_collisions() {
    let mut registry: ComponentRegistry<World> = ComponentRegistry::new();
    registry.register::<Transform>().expect("register Transform");
    registry.register::<Transform>().expect("re-register Transform");
    assert_eq!(registry.len(), 1);

    let err = registry
        .register::<FakeTransform>()
        .expect_err("same kind, different type");
    match err {
        RegistryError::KindCollision {
            kind,
            existing,
            requested,
        } => {
            assert_eq!(kind, Transform::KIND);
            assert_eq!(existing, "Transform");
            assert_eq!(requested, "Transform");
        }
    }
    assert_eq!(registry.len(), 1);
}

#[test]
fn handler_lookup_and_names() {
    let mut registry: ComponentRegistry<World> = ComponentRegistry::new();
    registry.register::<Transform>().expect("register");
    registry.register::<Opacity>().expect("register");

    let handler = registry.handler(Opacity::KIND).expect("opacity handler");
    assert_eq!(handler.kind(), Opacity::KIND);
    assert_eq!(handler.name(), "Opacity");
    assert!(registry.handler(Unregistered::KIND).is_none());

    assert_eq!(registry.kind_name(Transform::KIND), Some("Transform"));
    assert_eq!(registry.kind_for_name("Opacity"), Some(Opacity::KIND));
    assert_eq!(registry.kind_for_name("Unregistered"), None);
    assert_eq!(registry.kind_name(ComponentKind::named("Nope")), None);
}

#[test]
fn write_entity_dispatches_registered_kinds_only() {
    let mut registry: ComponentRegistry<World> = ComponentRegistry::new();
    registry.register::<Transform>().expect("register");
    registry.register::<Opacity>().expect("register");

    let mut clip = AnimationClip::new();
    clip.set_component_curve::<Transform>("", "x", ramp(10.0, 10.0));
    clip.set_component_curve::<Transform>("", "y", ramp(10.0, -10.0));
    clip.set_component_curve::<Opacity>("", "alpha", ramp(10.0, 1.0));
    clip.set_component_curve::<Unregistered>("", "v", ramp(10.0, 5.0));

    let mut world = World::default();
    world.insert(1, Transform::default());
    world.insert(1, Unregistered { v: 42.0 });
    // Entity 1 has no Opacity: that curve set is a no-op.

    let mut writer = AnimatedComponentWriter::new();
    let mut states = AnimationStates::new();
    registry.write_entity(
        &mut writer,
        &mut world,
        1,
        clip.root_entity(),
        4.0,
        &mut states,
    );

    let t = world.get::<Transform>(1);
    assert_eq!(t.x, 4.0);
    assert_eq!(t.y, -4.0);
    assert_eq!(world.get::<Unregistered>(1).v, 42.0);

    let tstate = states.component(Transform::KIND).expect("transform state");
    assert_eq!(tstate.property("x").and_then(|s| s.current_index), Some(0));
    assert!(states.component(Unregistered::KIND).is_none());
}

#[test]
fn child_nodes_are_applied_by_the_binder() {
    let mut registry: ComponentRegistry<World> = ComponentRegistry::new();
    registry.register::<Opacity>().expect("register");

    let mut clip = AnimationClip::new();
    clip.set_component_curve::<Opacity>("", "alpha", ramp(2.0, 1.0));
    clip.set_component_curve::<Opacity>("arm/hand", "alpha", ramp(2.0, 0.5));

    let mut world = World::default();
    world.insert(10, Opacity::default());
    world.insert(11, Opacity::default());

    // A binder maps entity 10 to the root and entity 11 to "arm/hand".
    let bindings = [(10u32, ""), (11u32, "arm/hand")];
    let mut states: HashMap<u32, AnimationStates> = HashMap::new();
    let mut writer = AnimatedComponentWriter::new();
    for (entity, path) in bindings {
        let node = clip.entity(path).expect("bound node");
        registry.write_entity(
            &mut writer,
            &mut world,
            entity,
            node,
            1.0,
            states.entry(entity).or_default(),
        );
    }

    assert_eq!(world.get::<Opacity>(10).alpha, 0.5);
    assert_eq!(world.get::<Opacity>(11).alpha, 0.25);
}
