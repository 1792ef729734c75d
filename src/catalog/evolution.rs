//! One-level evolution expansion for the detail overlay.
//!
//! Each link in a creature's `evolvedFrom`/`evolvesTo` maps is resolved
//! against the index exactly once; no recursion into grandparents or
//! grandchildren, since the payload only carries immediate links. Callers
//! wanting a full chain walk it themselves with repeated calls.

use crate::catalog::identity::CreatureId;
use crate::catalog::index::CatalogIndex;
use crate::catalog::model::Creature;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Clone, Debug, PartialEq, Serialize)]
/// One resolved evolution edge.
///
/// `creature` stays `None` when the referenced id is not in the snapshot:
/// dangling links are kept as placeholders carrying the id and descriptor
/// rather than dropped, so the overlay can still render `#<id>`.
pub struct EvolutionLink {
    pub id: CreatureId,
    pub descriptor: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creature: Option<Creature>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
/// A creature with both evolution directions expanded one level.
pub struct EvolutionView {
    pub creature: Creature,
    pub evolved_from: Vec<EvolutionLink>,
    pub evolves_to: Vec<EvolutionLink>,
}

/// Expand both evolution directions of `creature` against `index`.
///
/// Links come out in ascending id order (the map order), which keeps the
/// overlay deterministic across reloads.
pub fn build_evolution_view(creature: &Creature, index: &CatalogIndex) -> EvolutionView {
    EvolutionView {
        creature: creature.clone(),
        evolved_from: resolve_links(creature.evolved_from.as_ref(), index),
        evolves_to: resolve_links(creature.evolves_to.as_ref(), index),
    }
}

impl CatalogIndex {
    /// Evolution view for the creature with the given id, or `None` when the
    /// id is not in the snapshot.
    pub fn evolution_view(&self, id: CreatureId) -> Option<EvolutionView> {
        self.creature(id)
            .map(|creature| build_evolution_view(creature, self))
    }
}

fn resolve_links(
    map: Option<&BTreeMap<CreatureId, String>>,
    index: &CatalogIndex,
) -> Vec<EvolutionLink> {
    let Some(map) = map else {
        return Vec::new();
    };
    map.iter()
        .map(|(id, descriptor)| EvolutionLink {
            id: *id,
            descriptor: descriptor.clone(),
            creature: index.creature(*id).cloned(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::model::{creatures_from_str, types_from_str};
    use serde_json::json;

    fn family_index() -> CatalogIndex {
        let creatures = creatures_from_str(
            &json!([
                {
                    "id": 1,
                    "name": {"fr": "Bulbizarre", "en": "Bulbasaur"},
                    "image": "sprites/1.png",
                    "stats": {"atk": 49, "def": 49, "vit": 45, "spe_atk": 65, "spe_def": 65},
                    "height": 0.7,
                    "weight": 6.9,
                    "generation": 1,
                    "types": [1, 2],
                    "evolvesTo": {"2": "level 16"}
                },
                {
                    "id": 2,
                    "name": {"fr": "Herbizarre", "en": "Ivysaur"},
                    "image": "sprites/2.png",
                    "stats": {"atk": 62, "def": 63, "vit": 60, "spe_atk": 80, "spe_def": 80},
                    "height": 1.0,
                    "weight": 13.0,
                    "generation": 1,
                    "types": [1, 2],
                    "evolvedFrom": {"1": "level 16"},
                    "evolvesTo": {"3": "level 32"}
                },
                {
                    "id": 25,
                    "name": {"fr": "Pikachu", "en": "Pikachu"},
                    "image": "sprites/25.png",
                    "stats": {"atk": 55, "def": 40, "vit": 90, "spe_atk": 50, "spe_def": 50},
                    "height": 0.4,
                    "weight": 6.0,
                    "generation": 1,
                    "types": [5]
                }
            ])
            .to_string(),
        )
        .expect("creatures parse");
        let types = types_from_str(
            &json!([
                {"id": 1, "name": {"fr": "Plante", "en": "Grass"}},
                {"id": 2, "name": {"fr": "Poison", "en": "Poison"}},
                {"id": 5, "name": {"fr": "Électrik", "en": "Electric"}}
            ])
            .to_string(),
        )
        .expect("types parse");
        CatalogIndex::from_parts(creatures, types).expect("index builds")
    }

    #[test]
    fn expands_one_level_in_both_directions() {
        let index = family_index();
        let view = index.evolution_view(CreatureId(2)).expect("ivysaur known");

        assert_eq!(view.evolved_from.len(), 1);
        let from = &view.evolved_from[0];
        assert_eq!(from.id, CreatureId(1));
        assert_eq!(from.descriptor, "level 16");
        assert_eq!(
            from.creature.as_ref().map(|c| c.name.en.as_str()),
            Some("Bulbasaur")
        );

        // Venusaur (#3) is not in the snapshot; the link survives as a
        // placeholder instead of disappearing.
        assert_eq!(view.evolves_to.len(), 1);
        let to = &view.evolves_to[0];
        assert_eq!(to.id, CreatureId(3));
        assert_eq!(to.descriptor, "level 32");
        assert!(to.creature.is_none());
    }

    #[test]
    fn leaf_creature_has_empty_view() {
        let index = family_index();
        let view = index.evolution_view(CreatureId(25)).expect("pikachu known");
        assert!(view.evolved_from.is_empty());
        assert!(view.evolves_to.is_empty());
    }

    #[test]
    fn unknown_id_yields_no_view() {
        let index = family_index();
        assert!(index.evolution_view(CreatureId(999)).is_none());
    }

    #[test]
    fn placeholder_links_serialize_without_creature_field() {
        let index = family_index();
        let view = index.evolution_view(CreatureId(2)).expect("ivysaur known");
        let json = serde_json::to_value(&view.evolves_to[0]).expect("link serializes");
        assert_eq!(json.get("id").and_then(|v| v.as_u64()), Some(3));
        assert!(json.get("creature").is_none());
    }

    #[test]
    fn expansion_does_not_recurse() {
        let index = family_index();
        let view = index.evolution_view(CreatureId(1)).expect("bulbasaur known");
        let child = view.evolves_to[0]
            .creature
            .as_ref()
            .expect("ivysaur resolves");
        // The child is a plain snapshot record; its own links stay as raw
        // maps, not further views.
        assert!(child.evolves_to.as_ref().is_some_and(|m| m.len() == 1));
    }
}
