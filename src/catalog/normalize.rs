//! Raw shard record → `PokemonEntity`.

use crate::catalog::model::{AbilityEntry, MegaEvolutionVariant, PokemonEntity, StatBlock};
use crate::catalog::names::NameTables;
use crate::catalog::raw::{RawAbility, RawMega, RawMegaTable, RawStatus};
use crate::catalog::shards::ShardRecord;
use crate::error::{PokedexError, PokedexResult};
use crate::language::Language;
use crate::translation::{translate_ability, translate_egg_groups, translate_types};

const HIDDEN_MARKER: char = '*';

/// Builds entities for one language from a loaded shard set.
pub struct Normalizer<'a> {
    lang: Language,
    names: &'a NameTables,
    megas: &'a RawMegaTable,
}

impl<'a> Normalizer<'a> {
    pub fn new(lang: Language, names: &'a NameTables, megas: &'a RawMegaTable) -> Self {
        Self { lang, names, megas }
    }

    pub fn normalize(&self, record: &ShardRecord) -> PokedexResult<PokemonEntity> {
        let raw = &record.raw;
        if !raw.id.chars().all(|c| c.is_ascii_digit()) || raw.id.parse::<u64>().is_err() {
            return Err(PokedexError::InvalidId {
                id: raw.id.clone(),
                file: record.source.clone(),
            });
        }

        let name = self.names.name(&raw.id, self.lang)?.to_string();
        let form_name = match &raw.form_id {
            Some(form_id) => Some(
                self.names
                    .form_name(&raw.id, form_id, self.lang)?
                    .to_string(),
            ),
            None => None,
        };

        let mega_evolution = if raw.mega_evolve.unwrap_or(false) {
            self.mega_variants(&raw.id)?
        } else {
            None
        };

        Ok(PokemonEntity {
            id: raw.id.clone(),
            form_id: raw.form_id.clone(),
            regional_dex_id: raw.local_id.clone(),
            name,
            form_name,
            types: translate_types(&raw.types, self.lang)?,
            ability: parse_abilities(&raw.abilities, self.lang)?,
            egg_group: translate_egg_groups(&raw.egg_groups, self.lang)?,
            base_stats: stat_block(&raw.id, &raw.status)?,
            generation: record.generation,
            mega_evolution,
        })
    }

    /// Variants for `id`, or `None` when the mega table has nothing for it.
    fn mega_variants(&self, id: &str) -> PokedexResult<Option<Vec<MegaEvolutionVariant>>> {
        match self.megas.get(id) {
            Some(variants) if !variants.is_empty() => variants
                .iter()
                .map(|mega| self.mega_variant(mega))
                .collect::<PokedexResult<Vec<_>>>()
                .map(Some),
            _ => Ok(None),
        }
    }

    fn mega_variant(&self, mega: &RawMega) -> PokedexResult<MegaEvolutionVariant> {
        Ok(MegaEvolutionVariant {
            name: self.names.name(&mega.id, self.lang)?.to_string(),
            types: translate_types(&mega.types, self.lang)?,
            ability: parse_abilities(&mega.abilities, self.lang)?,
            base_stats: stat_block(&mega.id, &mega.status)?,
        })
    }
}

/// Strip the hidden marker and localize each ability.
pub fn parse_abilities(raw: &[RawAbility], lang: Language) -> PokedexResult<Vec<AbilityEntry>> {
    raw.iter()
        .map(|ability| {
            let (name, hidden) = match ability.name.strip_prefix(HIDDEN_MARKER) {
                Some(name) => (name, true),
                None => (ability.name.as_str(), false),
            };
            Ok(AbilityEntry {
                name: translate_ability(name, lang)?,
                hidden,
                terastallized: ability.terastallised,
            })
        })
        .collect()
}

/// Validate the six raw stats and compute their total.
pub fn stat_block(id: &str, status: &RawStatus) -> PokedexResult<StatBlock> {
    let raw = [&status.H, &status.A, &status.B, &status.C, &status.D, &status.S];
    let mut total = 0u32;
    for (label, value) in StatBlock::LABELS.into_iter().zip(raw) {
        let malformed = || PokedexError::MalformedStat {
            id: id.to_string(),
            stat: label,
            value: value.clone(),
        };
        let parsed = value.trim().parse::<u32>().map_err(|_| malformed())?;
        total = total.checked_add(parsed).ok_or_else(malformed)?;
    }
    Ok(StatBlock {
        hp: status.H.clone(),
        attack: status.A.clone(),
        defense: status.B.clone(),
        sp_attack: status.C.clone(),
        sp_defense: status.D.clone(),
        speed: status.S.clone(),
        total,
    })
}
