//! Creature catalog wiring.
//!
//! This module wraps the snapshot payloads (creatures plus the type
//! taxonomy) so the grid can load a validated index and run its queries.
//! Callers use `CatalogIndex` for lookups, the `query` functions for the
//! grid sequence, and `build_evolution_view` for the detail overlay.

pub mod evolution;
pub mod identity;
pub mod index;
pub mod model;
pub mod query;
pub mod snapshot;

pub use evolution::{EvolutionLink, EvolutionView, build_evolution_view};
pub use identity::{CreatureId, Language, LocalizedText, TypeId};
pub use index::CatalogIndex;
pub use model::{Creature, CreatureType, Stats, load_creatures_from_path, load_types_from_path};
pub use query::{GridFilter, SortKey, filter_creatures, sort_creatures};
pub use snapshot::SnapshotCell;

pub use model::{creatures_from_str, types_from_str};
