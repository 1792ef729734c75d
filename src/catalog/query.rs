//! Grid query operations: filter, search, and sort over a creature sequence.
//!
//! Every operation copies its input and the sort is stable, so filtering and
//! sorting commute: the grid gets the same sequence whichever it applies
//! first. Selector state maps onto `GridFilter` and `SortKey` exactly as the
//! option bar emits it, including the "all" sentinels.

use crate::catalog::identity::{Language, TypeId};
use crate::catalog::model::Creature;
use std::cmp::Ordering;

/// The eight grid orderings, named after the option values the selector
/// emits (`id_asc`, `name_desc`, ...).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SortKey {
    IdAsc,
    IdDesc,
    NameAsc,
    NameDesc,
    WeightAsc,
    WeightDesc,
    HeightAsc,
    HeightDesc,
}

impl SortKey {
    /// Parse a selector value. Unrecognized input degrades to `id_asc`;
    /// sort keys come straight from the UI and must never fail.
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "id_desc" => SortKey::IdDesc,
            "name_asc" => SortKey::NameAsc,
            "name_desc" => SortKey::NameDesc,
            "weight_asc" => SortKey::WeightAsc,
            "weight_desc" => SortKey::WeightDesc,
            "height_asc" => SortKey::HeightAsc,
            "height_desc" => SortKey::HeightDesc,
            _ => SortKey::IdAsc,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::IdAsc => "id_asc",
            SortKey::IdDesc => "id_desc",
            SortKey::NameAsc => "name_asc",
            SortKey::NameDesc => "name_desc",
            SortKey::WeightAsc => "weight_asc",
            SortKey::WeightDesc => "weight_desc",
            SortKey::HeightAsc => "height_asc",
            SortKey::HeightDesc => "height_desc",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
/// Current selector state: `None` means "all" for the two dropdowns, and an
/// empty search string matches every creature.
pub struct GridFilter {
    pub generation: Option<u32>,
    pub type_id: Option<TypeId>,
    pub search: String,
}

/// Keep the creatures matching every active selector, in input order.
pub fn filter_creatures(creatures: &[Creature], filter: &GridFilter) -> Vec<Creature> {
    creatures
        .iter()
        .filter(|creature| matches_filter(creature, filter))
        .cloned()
        .collect()
}

fn matches_filter(creature: &Creature, filter: &GridFilter) -> bool {
    filter
        .generation
        .map_or(true, |generation| creature.generation == generation)
        && filter
            .type_id
            .map_or(true, |type_id| creature.types.contains(&type_id))
        && creature.name.matches(&filter.search)
}

/// Return a copy of `creatures` ordered by `key`.
///
/// Name keys compare collation-folded names in the active language; id and
/// size keys ignore the language. The sort is stable, so records comparing
/// equal keep their snapshot order.
pub fn sort_creatures(creatures: &[Creature], key: SortKey, lang: Language) -> Vec<Creature> {
    let mut sorted = creatures.to_vec();
    sorted.sort_by(|a, b| compare(a, b, key, lang));
    sorted
}

fn compare(a: &Creature, b: &Creature, key: SortKey, lang: Language) -> Ordering {
    match key {
        SortKey::IdAsc => a.id.cmp(&b.id),
        SortKey::IdDesc => b.id.cmp(&a.id),
        SortKey::NameAsc => collation_key(a.name.get(lang)).cmp(&collation_key(b.name.get(lang))),
        SortKey::NameDesc => collation_key(b.name.get(lang)).cmp(&collation_key(a.name.get(lang))),
        SortKey::WeightAsc => a.weight.total_cmp(&b.weight),
        SortKey::WeightDesc => b.weight.total_cmp(&a.weight),
        SortKey::HeightAsc => a.height.total_cmp(&b.height),
        SortKey::HeightDesc => b.height.total_cmp(&a.height),
    }
}

/// Primary-strength collation key for name ordering: lowercased with the
/// accents and ligatures of the two supported languages folded to their base
/// letters, so "Évoli" sorts with the E names instead of after "Z".
pub(crate) fn collation_key(name: &str) -> String {
    let mut key = String::with_capacity(name.len());
    for c in name.chars().flat_map(char::to_lowercase) {
        match c {
            'à' | 'â' | 'ä' | 'á' | 'ã' | 'å' => key.push('a'),
            'é' | 'è' | 'ê' | 'ë' => key.push('e'),
            'î' | 'ï' | 'í' | 'ì' => key.push('i'),
            'ô' | 'ö' | 'ó' | 'ò' | 'õ' => key.push('o'),
            'ù' | 'û' | 'ü' | 'ú' => key.push('u'),
            'ç' => key.push('c'),
            'ñ' => key.push('n'),
            'ÿ' => key.push('y'),
            'œ' => key.push_str("oe"),
            'æ' => key.push_str("ae"),
            other => key.push(other),
        }
    }
    key
}
