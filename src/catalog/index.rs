//! Indexed view of a loaded catalog snapshot.
//!
//! The index validates both payloads against their schemas, enforces id
//! uniqueness, and provides the lookups the grid needs: creature by id and
//! localized type names. It is intentionally strict about the snapshot
//! itself (duplicates, empty collections) and intentionally tolerant about
//! cross-references, which are expected to dangle in real exports.

use crate::catalog::model::{
    Creature, CreatureType, load_creatures_from_path, load_types_from_path,
    normalize_snapshot_value,
};
use crate::catalog::{CreatureId, Language, LocalizedText, TypeId};
use crate::schema_loader::load_json_schema;
use anyhow::{Context, Result, bail};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

const CREATURE_SCHEMA_FILE: &str = "creature_snapshot.schema.json";
const TYPE_SCHEMA_FILE: &str = "type_snapshot.schema.json";

#[derive(Debug)]
/// Catalog snapshot plus derived lookup maps.
///
/// Creatures keep their payload order; every query that returns a sequence
/// treats that order as the tie-break, so the index never reorders.
pub struct CatalogIndex {
    creatures: Vec<Creature>,
    by_id: BTreeMap<CreatureId, usize>,
    types: Vec<CreatureType>,
    type_names: BTreeMap<TypeId, LocalizedText>,
}

impl CatalogIndex {
    /// Load and validate a full snapshot from the two payload files.
    ///
    /// Both payloads are checked against their schema before parsing, then
    /// the combined snapshot is checked for duplicate ids and empty records.
    pub fn load(creatures_path: &Path, types_path: &Path) -> Result<Self> {
        validate_against_schema(creatures_path, CREATURE_SCHEMA_FILE, "creature snapshot")?;
        validate_against_schema(types_path, TYPE_SCHEMA_FILE, "type snapshot")?;

        let creatures = load_creatures_from_path(creatures_path)?;
        let types = load_types_from_path(types_path)?;
        Self::from_parts(creatures, types)
    }

    /// Build an index from already-parsed collections.
    pub fn from_parts(creatures: Vec<Creature>, types: Vec<CreatureType>) -> Result<Self> {
        let by_id = index_creatures(&creatures)?;
        let type_names = index_types(&types)?;
        Ok(Self {
            creatures,
            by_id,
            types,
            type_names,
        })
    }

    /// Resolve a creature by id.
    ///
    /// Returns `None` instead of erroring; missing ids are expected data
    /// (dangling evolution links), not exceptional conditions.
    pub fn creature(&self, id: CreatureId) -> Option<&Creature> {
        self.by_id.get(&id).map(|pos| &self.creatures[*pos])
    }

    /// The full creature sequence in payload order.
    pub fn creatures(&self) -> &[Creature] {
        &self.creatures
    }

    /// The type taxonomy in payload order, for selector rendering.
    pub fn types(&self) -> &[CreatureType] {
        &self.types
    }

    /// Localized name for a type id, or the language's sentinel when the id
    /// is not in the taxonomy. Never fails.
    pub fn type_name(&self, id: TypeId, lang: Language) -> &str {
        match self.type_names.get(&id) {
            Some(name) => name.get(lang),
            None => lang.unknown_label(),
        }
    }

    /// Localized names for every type a creature lists, in list order.
    pub fn type_names_for(&self, creature: &Creature, lang: Language) -> Vec<&str> {
        creature
            .types
            .iter()
            .map(|id| self.type_name(*id, lang))
            .collect()
    }
}

fn index_creatures(creatures: &[Creature]) -> Result<BTreeMap<CreatureId, usize>> {
    if creatures.is_empty() {
        bail!("snapshot contains no creatures");
    }

    let mut map = BTreeMap::new();
    for (pos, creature) in creatures.iter().enumerate() {
        if map.insert(creature.id, pos).is_some() {
            bail!("duplicate creature id {}", creature.id);
        }
        if creature.types.is_empty() {
            bail!("creature {} lists no types", creature.id);
        }
        validate_name(&creature.name, &format!("creature {}", creature.id))?;
    }
    Ok(map)
}

fn index_types(types: &[CreatureType]) -> Result<BTreeMap<TypeId, LocalizedText>> {
    if types.is_empty() {
        bail!("snapshot contains no types");
    }

    let mut map = BTreeMap::new();
    for entry in types {
        if map.insert(entry.id, entry.name.clone()).is_some() {
            bail!("duplicate type id {}", entry.id);
        }
        validate_name(&entry.name, &format!("type {}", entry.id))?;
    }
    Ok(map)
}

fn validate_name(name: &LocalizedText, what: &str) -> Result<()> {
    if name.fr.trim().is_empty() || name.en.trim().is_empty() {
        bail!("{what} is missing a localized name");
    }
    Ok(())
}

fn validate_against_schema(payload_path: &Path, schema_file: &str, what: &str) -> Result<()> {
    let payload_file = File::open(payload_path)
        .with_context(|| format!("opening {} {}", what, payload_path.display()))?;
    let payload_value: Value = serde_json::from_reader(BufReader::new(payload_file))
        .with_context(|| format!("parsing {} {}", what, payload_path.display()))?;
    let payload_value = normalize_snapshot_value(payload_value);

    let schema_path = resolve_schema_path(payload_path, schema_file);
    let schema = load_json_schema(&schema_path)
        .with_context(|| format!("loading payload schema {}", schema_path.display()))?;

    if let Err(errors) = schema.compiled.validate(&payload_value) {
        let details = errors
            .map(|err| err.to_string())
            .collect::<Vec<_>>()
            .join("\n");
        bail!(
            "{} {} failed schema validation:\n{}",
            what,
            payload_path.display(),
            details
        );
    }
    Ok(())
}

fn resolve_schema_path(payload_path: &Path, schema_file: &str) -> PathBuf {
    if let Some(base) = payload_path.parent().and_then(|p| p.parent()) {
        let candidate = base.join("schema").join(schema_file);
        if candidate.exists() {
            return candidate;
        }
    }

    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("schema")
        .join(schema_file)
}
