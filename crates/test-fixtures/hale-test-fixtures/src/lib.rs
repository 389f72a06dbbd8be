//! Shared JSON fixtures for hale-rs tests.
//!
//! Fixtures live under `fixtures/` at the repository root and are listed in
//! `fixtures/manifest.json`. Consumers deserialize into their own types so
//! this crate stays dependency-light.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Deserialize;

static MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    let raw = include_str!("../../../../fixtures/manifest.json");
    serde_json::from_str(raw).expect("fixtures manifest should parse")
});

#[derive(Debug, Deserialize)]
struct Manifest {
    records: HashMap<String, String>,
    forms: HashMap<String, String>,
}

fn fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../../fixtures")
}

fn read_to_string(rel: &str) -> Result<String> {
    let path = fixtures_root().join(rel);
    fs::read_to_string(&path)
        .with_context(|| format!("failed to read fixture at {}", path.display()))
}

fn load_json<T: DeserializeOwned>(rel: &str) -> Result<T> {
    let raw = read_to_string(rel)?;
    serde_json::from_str(&raw).with_context(|| format!("failed to parse fixture {rel}"))
}

/// Load a named intake record fixture into the caller's record type.
pub fn load_record<T: DeserializeOwned>(name: &str) -> Result<T> {
    let rel = MANIFEST
        .records
        .get(name)
        .ok_or_else(|| anyhow!("unknown record fixture: {name}"))?;
    load_json(rel)
}

/// Load a named step-form sequence fixture.
pub fn load_forms<T: DeserializeOwned>(name: &str) -> Result<T> {
    let rel = MANIFEST
        .forms
        .get(name)
        .ok_or_else(|| anyhow!("unknown forms fixture: {name}"))?;
    load_json(rel)
}

/// Names of all record fixtures, for exhaustiveness checks.
pub fn record_names() -> Vec<&'static str> {
    MANIFEST.records.keys().map(|k| k.as_str()).collect()
}
