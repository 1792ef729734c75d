//! Deserializable representation of the snapshot payloads.
//!
//! The types mirror the upstream API shape (`/api/pokemon`, `/api/types`)
//! so loaders and tests can reason about creature records without ad-hoc
//! JSON handling. Use `CatalogIndex` for validation and id lookup; use these
//! structs when the raw payload surface is required (images, stats, maps).

use crate::catalog::identity::{CreatureId, LocalizedText, TypeId};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// One catalog entry as delivered by the creature payload.
pub struct Creature {
    pub id: CreatureId,
    pub name: LocalizedText,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_shiny: Option<String>,
    pub stats: Stats,
    pub height: f64,
    pub weight: f64,
    pub generation: u32,
    pub types: Vec<TypeId>,
    #[serde(
        rename = "evolvedFrom",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub evolved_from: Option<BTreeMap<CreatureId, String>>,
    #[serde(rename = "evolvesTo", default, skip_serializing_if = "Option::is_none")]
    pub evolves_to: Option<BTreeMap<CreatureId, String>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// Fixed stat block; `hp` is absent from some upstream records.
pub struct Stats {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hp: Option<u32>,
    pub atk: u32,
    pub def: u32,
    pub vit: u32,
    pub spe_atk: u32,
    pub spe_def: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// One type taxonomy entry as delivered by the type payload.
pub struct CreatureType {
    pub id: TypeId,
    pub name: LocalizedText,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SnapshotPayload<T> {
    data: Vec<T>,
}

/// Normalize a snapshot payload into the `{"data": [...]}` wrapper.
///
/// The upstream API always wraps collections, but fixtures and hand-rolled
/// exports often ship the bare array; both forms are accepted everywhere a
/// payload is read.
pub(crate) fn normalize_snapshot_value(value: Value) -> Value {
    match value {
        Value::Array(items) => {
            let mut wrapper = serde_json::Map::new();
            wrapper.insert("data".to_string(), Value::Array(items));
            Value::Object(wrapper)
        }
        other => other,
    }
}

/// Parse a creature payload from a JSON string (wrapped or bare array).
pub fn creatures_from_str(input: &str) -> Result<Vec<Creature>> {
    let value: Value = serde_json::from_str(input).context("parsing creature payload")?;
    let payload: SnapshotPayload<Creature> =
        serde_json::from_value(normalize_snapshot_value(value))
            .context("deserializing creature payload")?;
    Ok(payload.data)
}

/// Parse a type payload from a JSON string (wrapped or bare array).
pub fn types_from_str(input: &str) -> Result<Vec<CreatureType>> {
    let value: Value = serde_json::from_str(input).context("parsing type payload")?;
    let payload: SnapshotPayload<CreatureType> =
        serde_json::from_value(normalize_snapshot_value(value))
            .context("deserializing type payload")?;
    Ok(payload.data)
}

/// Read and parse a creature payload from disk without schema validation.
pub fn load_creatures_from_path(path: &Path) -> Result<Vec<Creature>> {
    let data =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    creatures_from_str(&data).with_context(|| format!("loading {}", path.display()))
}

/// Read and parse a type payload from disk without schema validation.
pub fn load_types_from_path(path: &Path) -> Result<Vec<CreatureType>> {
    let data =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    types_from_str(&data).with_context(|| format!("loading {}", path.display()))
}
