//! Stored clip fixtures shared by the propcurve test suites.
//!
//! `fixtures/manifest.json` maps a fixture name to its JSON file and the component
//! kind names the clip references, so a test can build a name table that resolves
//! some kinds and deliberately leaves others out.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Deserialize;

static MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    serde_json::from_str(include_str!("../../../../fixtures/manifest.json"))
        .expect("fixtures/manifest.json should parse")
});

#[derive(Debug, Deserialize)]
struct Manifest {
    clips: BTreeMap<String, ClipEntry>,
}

#[derive(Debug, Deserialize)]
struct ClipEntry {
    path: String,
    /// Component kind names used anywhere in the clip, sorted.
    #[serde(default)]
    kinds: Vec<String>,
}

pub mod clips {
    use super::*;

    fn entry(name: &str) -> Result<&'static ClipEntry> {
        MANIFEST.clips.get(name).with_context(|| {
            let known: Vec<&str> = MANIFEST.clips.keys().map(String::as_str).collect();
            format!("unknown clip fixture '{name}' (known: {})", known.join(", "))
        })
    }

    /// Fixture names in sorted order.
    pub fn names() -> Vec<&'static str> {
        MANIFEST.clips.keys().map(String::as_str).collect()
    }

    /// Absolute path of the fixture's JSON file.
    pub fn path(name: &str) -> Result<PathBuf> {
        let entry = entry(name)?;
        Ok(PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("../../../fixtures")
            .join(&entry.path))
    }

    pub fn json(name: &str) -> Result<String> {
        let path = path(name)?;
        fs::read_to_string(&path)
            .with_context(|| format!("failed to read clip fixture {}", path.display()))
    }

    /// Deserialize the fixture straight into `T` (e.g. a stored clip type).
    pub fn load<T: DeserializeOwned>(name: &str) -> Result<T> {
        let text = json(name)?;
        serde_json::from_str(&text).with_context(|| format!("clip fixture '{name}' is not valid"))
    }

    /// Component kind names the fixture references.
    pub fn kinds(name: &str) -> Result<&'static [String]> {
        Ok(&entry(name)?.kinds)
    }
}
