//! Shard file records exactly as they appear on disk.
//!
//! Optional fields stay optional here; `normalize` checks presence once and
//! downstream code only sees `PokemonEntity`. Identifiers are accepted as JSON
//! strings or numbers because the name tables are not consistent about it.

use crate::catalog::model::RegionalDexId;
use crate::language::Language;
use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;

#[derive(Clone, Debug, Deserialize)]
/// One creature (or form) entry from a generation or form shard.
pub struct RawPokemon {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    /// Source-language name; display names come from the name tables instead.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "formId", default, deserialize_with = "opt_string_or_number")]
    pub form_id: Option<String>,
    #[serde(rename = "localId", default)]
    pub local_id: Option<RegionalDexId>,
    #[serde(rename = "type")]
    pub types: Vec<String>,
    #[serde(default)]
    pub abilities: Vec<RawAbility>,
    pub status: RawStatus,
    #[serde(default)]
    pub egg_groups: Vec<String>,
    #[serde(default)]
    pub mega_evolve: Option<bool>,
}

#[derive(Clone, Debug, Deserialize)]
/// Ability as stored in shards; a leading `*` marks a hidden ability.
pub struct RawAbility {
    pub name: String,
    #[serde(default)]
    pub terastallised: Option<bool>,
}

#[derive(Clone, Debug, Deserialize)]
#[allow(non_snake_case)]
pub struct RawStatus {
    #[serde(deserialize_with = "string_or_number")]
    pub H: String,
    #[serde(deserialize_with = "string_or_number")]
    pub A: String,
    #[serde(deserialize_with = "string_or_number")]
    pub B: String,
    #[serde(deserialize_with = "string_or_number")]
    pub C: String,
    #[serde(deserialize_with = "string_or_number")]
    pub D: String,
    #[serde(deserialize_with = "string_or_number")]
    pub S: String,
}

#[derive(Clone, Debug, Deserialize)]
/// Mega evolution (or primal reversion / ultra burst) profile.
pub struct RawMega {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub types: Vec<String>,
    #[serde(default)]
    pub abilities: Vec<RawAbility>,
    pub status: RawStatus,
    #[serde(default)]
    pub egg_groups: Vec<String>,
}

/// `mega.json`: base id → every mega profile that base can take.
pub type RawMegaTable = BTreeMap<String, Vec<RawMega>>;

#[derive(Clone, Debug, Deserialize)]
pub struct LocalizedName {
    pub ja: String,
    pub en: String,
}

impl LocalizedName {
    pub fn get(&self, lang: Language) -> &str {
        match lang {
            Language::Ja => &self.ja,
            Language::En => &self.en,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
/// Entry of a `gen<N>_name.json` or `mega_name.json` table.
pub struct RawName {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub name: LocalizedName,
}

#[derive(Clone, Debug, Deserialize)]
/// Entry of a `form_name.json` table: every named form of one base id.
pub struct RawFormNames {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub names: Vec<RawFormName>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RawFormName {
    #[serde(rename = "formId", deserialize_with = "string_or_number")]
    pub form_id: String,
    pub ja: String,
    pub en: String,
}

impl RawFormName {
    pub fn get(&self, lang: Language) -> &str {
        match lang {
            Language::Ja => &self.ja,
            Language::En => &self.en,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Number(serde_json::Number),
}

impl From<StringOrNumber> for String {
    fn from(value: StringOrNumber) -> Self {
        match value {
            StringOrNumber::String(value) => value,
            StringOrNumber::Number(value) => value.to_string(),
        }
    }
}

pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    StringOrNumber::deserialize(deserializer).map(String::from)
}

pub(crate) fn opt_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<StringOrNumber>::deserialize(deserializer)?.map(String::from))
}
