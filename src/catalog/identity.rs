use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier for a creature in the catalog snapshot.
///
/// Evolution maps key on this id, so it also appears as a JSON object key
/// (a decimal string) in the upstream payload shape.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CreatureId(pub u32);

/// Stable identifier for a type (category) entry.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeId(pub u32);

impl fmt::Display for CreatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The two languages every snapshot record must carry.
///
/// The loader enforces that both strings are present, so queries can index a
/// `LocalizedText` by language without a fallback chain.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Language {
    Fr,
    En,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Fr => "fr",
            Language::En => "en",
        }
    }

    /// Parse a language selector; anything other than "en" selects French,
    /// the upstream app's default.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "en" => Language::En,
            _ => Language::Fr,
        }
    }

    /// Sentinel shown when a type id resolves to nothing.
    pub fn unknown_label(&self) -> &'static str {
        match self {
            Language::Fr => "Inconnu",
            Language::En => "Unknown",
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
/// Localized name record with both required languages.
pub struct LocalizedText {
    pub fr: String,
    pub en: String,
}

impl LocalizedText {
    pub fn get(&self, lang: Language) -> &str {
        match lang {
            Language::Fr => &self.fr,
            Language::En => &self.en,
        }
    }

    /// True when `needle` is a case-insensitive substring of either language.
    ///
    /// The grid search matches both names regardless of the active display
    /// language, so a user typing "ivy" still finds "Herbizarre".
    pub fn matches(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        let needle = needle.to_lowercase();
        self.fr.to_lowercase().contains(&needle) || self.en.to_lowercase().contains(&needle)
    }
}
