//! propcurve core (engine-agnostic)
//!
//! Samples keyframed curves and writes the sampled values into structured component
//! values addressed by dotted property paths. Two pieces do the work:
//!
//! - [`AnimationCurve::evaluate`]: wrap-mode aware, hint-accelerated sampling of a
//!   piecewise-linear curve (amortized O(1) under advancing time).
//! - [`AnimatedComponentWriter`]: walks any [`Property`] implementor and overwrites the
//!   numeric leaves whose dotted path has a curve in an [`AnimatedComponent`].
//!
//! Binding clips to a scene, scheduling ticks and choosing a storage format are left to
//! the application; [`ComponentRegistry`] and the stored-clip types are the seams it
//! plugs into.

pub mod config;
pub mod curve;
pub mod data;
pub mod error;
pub mod ids;
pub mod keyframe;
pub mod property;
pub mod registry;
pub mod scratch;
pub mod state;
pub mod stored_clip;
pub mod writer;

// Re-exports for consumers (binders, tools)
pub use config::WriterConfig;
pub use curve::{AnimationCurve, Sample, WrapMode};
pub use data::{AnimatedComponent, AnimatedEntity, AnimatedProperty, AnimationClip};
pub use error::{ClipError, RegistryError};
pub use ids::ComponentKind;
pub use keyframe::Keyframe;
pub use property::{AnimatableComponent, NumericMut, Property, PropertyVisitor};
pub use registry::{ComponentHandler, ComponentRegistry, ComponentStore};
pub use state::{AnimationStates, ComponentAnimationState, PropertyAnimationState};
pub use stored_clip::{
    parse_stored_clip_json, stored_clip_to_json, ComponentKindNames, KindNameTable, StoredClip,
    StoredEntity,
};
pub use writer::AnimatedComponentWriter;
