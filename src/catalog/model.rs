//! Normalized catalog entities.
//!
//! Field names and order are the public JSON shape, so a serialized
//! `PokemonEntity` stays wire compatible with existing clients. Use
//! `normalize` to build these from shard records; nothing else constructs them.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Regional dex numbers. A present key means the creature is in that dex.
pub struct RegionalDexId {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::catalog::raw::opt_string_or_number"
    )]
    pub galar: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::catalog::raw::opt_string_or_number"
    )]
    pub paldea: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
/// Base stats in their source spelling. `total` is computed at normalization
/// and never written out.
pub struct StatBlock {
    #[serde(rename = "H")]
    pub hp: String,
    #[serde(rename = "A")]
    pub attack: String,
    #[serde(rename = "B")]
    pub defense: String,
    #[serde(rename = "C")]
    pub sp_attack: String,
    #[serde(rename = "D")]
    pub sp_defense: String,
    #[serde(rename = "S")]
    pub speed: String,
    #[serde(skip_serializing, default)]
    pub total: u32,
}

impl StatBlock {
    pub const LABELS: [&'static str; 6] = ["H", "A", "B", "C", "D", "S"];
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityEntry {
    pub name: String,
    pub hidden: bool,
    #[serde(
        rename = "terastallised",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub terastallized: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Alternate profile a base creature can take in battle.
pub struct MegaEvolutionVariant {
    pub name: String,
    #[serde(rename = "type")]
    pub types: Vec<String>,
    pub ability: Vec<AbilityEntry>,
    pub base_stats: StatBlock,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// One catalog record. `id` is unique only together with `form_id`.
pub struct PokemonEntity {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form_id: Option<String>,
    #[serde(rename = "localId", default, skip_serializing_if = "Option::is_none")]
    pub regional_dex_id: Option<RegionalDexId>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form_name: Option<String>,
    #[serde(rename = "type")]
    pub types: Vec<String>,
    pub ability: Vec<AbilityEntry>,
    pub egg_group: Vec<String>,
    pub base_stats: StatBlock,
    pub generation: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mega_evolution: Option<Vec<MegaEvolutionVariant>>,
}

impl PokemonEntity {
    /// National dex number; normalization rejects ids that are not a `u64`.
    pub fn national_number(&self) -> u64 {
        self.id.parse().unwrap_or_default()
    }

    pub fn in_galar_pokedex(&self) -> bool {
        self.regional_dex_id
            .as_ref()
            .is_some_and(|local| local.galar.is_some())
    }

    pub fn can_mega_evolve(&self) -> bool {
        self.mega_evolution.is_some()
    }
}
