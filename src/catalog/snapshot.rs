//! Holds the active catalog snapshot for a viewer session.
//!
//! The cell lets the host replace the whole snapshot on reload while queries
//! only ever observe a complete index or none at all. Lookups before the
//! first install resolve to "absent" rather than erroring, matching the
//! grid's behavior while the initial load is still in flight.

use crate::catalog::identity::CreatureId;
use crate::catalog::index::CatalogIndex;
use crate::catalog::model::Creature;

#[derive(Debug, Default)]
/// Host-side holder for the current `CatalogIndex`.
pub struct SnapshotCell {
    current: Option<CatalogIndex>,
}

impl SnapshotCell {
    /// Install a freshly loaded snapshot, replacing any previous one whole.
    pub fn install(&mut self, index: CatalogIndex) {
        self.current = Some(index);
    }

    /// The active snapshot, if one has been installed.
    pub fn current(&self) -> Option<&CatalogIndex> {
        self.current.as_ref()
    }

    /// Resolve a creature against the active snapshot.
    ///
    /// `None` both for unknown ids and before the first install.
    pub fn creature(&self, id: CreatureId) -> Option<&Creature> {
        self.current.as_ref().and_then(|index| index.creature(id))
    }
}
