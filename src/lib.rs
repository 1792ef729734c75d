//! Catalog query engine for a bilingual creature grid.
//!
//! The crate holds an immutable snapshot of creatures and their type
//! taxonomy and answers the queries a grid viewer needs: find-by-id,
//! filter/search, stable sorting under eight keys, and a one-level
//! evolution expansion for the detail overlay. Loading is the only fallible
//! boundary: payloads are schema-validated and index-checked up front, and
//! every query after that is a pure, total function over the snapshot.

use anyhow::{Result, bail};
use std::{
    env, fs,
    path::{Path, PathBuf},
};

pub mod catalog;
mod schema_loader;

pub use catalog::{
    CatalogIndex, Creature, CreatureId, CreatureType, EvolutionLink, EvolutionView, GridFilter,
    Language, LocalizedText, SnapshotCell, SortKey, Stats, TypeId, build_evolution_view,
    creatures_from_str, filter_creatures, load_creatures_from_path, load_types_from_path,
    sort_creatures, types_from_str,
};

pub const CREATURES_FILE: &str = "creatures.json";
pub const TYPES_FILE: &str = "types.json";

/// Returns true when `candidate` looks like a snapshot data directory.
///
/// Both payload files must be present; a directory with only one of them is
/// treated as no data at all rather than a partial snapshot.
fn is_data_dir(candidate: &Path) -> bool {
    candidate.join(CREATURES_FILE).is_file() && candidate.join(TYPES_FILE).is_file()
}

/// Verifies that an explicit `DEXGRID_DATA` hint points at a valid data dir.
fn data_dir_from_hint(hint: &str) -> Option<PathBuf> {
    if hint.is_empty() {
        return None;
    }
    let hint_path = PathBuf::from(hint);
    if !hint_path.exists() || !is_data_dir(&hint_path) {
        return None;
    }
    fs::canonicalize(hint_path).ok()
}

/// Locate the snapshot data directory.
///
/// Honors `DEXGRID_DATA` when it points at a real data dir, then falls back
/// to the build-time hint (the repo's `data/` directory). Callers can treat
/// failure as fatal because the binaries cannot run without a snapshot.
pub fn find_data_dir() -> Result<PathBuf> {
    if let Ok(env_dir) = env::var("DEXGRID_DATA") {
        if let Some(dir) = data_dir_from_hint(&env_dir) {
            return Ok(dir);
        }
    }

    if let Some(hint) = option_env!("DEXGRID_DATA_HINT") {
        if let Some(dir) = data_dir_from_hint(hint) {
            return Ok(dir);
        }
    }

    bail!(
        "Unable to locate a snapshot data directory. Set DEXGRID_DATA to a directory containing {CREATURES_FILE} and {TYPES_FILE}."
    );
}

/// Default creature payload path inside the discovered data directory.
pub fn default_creatures_path() -> Result<PathBuf> {
    Ok(find_data_dir()?.join(CREATURES_FILE))
}

/// Default type payload path inside the discovered data directory.
pub fn default_types_path() -> Result<PathBuf> {
    Ok(find_data_dir()?.join(TYPES_FILE))
}
