//! Error types for the fallible outer surfaces (registration and stored clips).
//! Sampling and writing never fail.

use thiserror::Error;

use crate::ids::ComponentKind;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("component kind {kind} is already registered as '{existing}'; cannot register '{requested}'")]
    KindCollision {
        kind: ComponentKind,
        existing: &'static str,
        requested: &'static str,
    },
}

#[derive(Debug, Error)]
pub enum ClipError {
    #[error("stored clip json parse error: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("serialize stored clip: {0}")]
    Serialize(#[source] serde_json::Error),
}
