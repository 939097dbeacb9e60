//! Caller-facing request mapping.
//!
//! `QueryParams` mirrors the query string of the list endpoint and is
//! applied to a fresh query in a fixed order. `Page` and `Listing` are the
//! response envelopes.

use crate::catalog::PokemonEntity;
use crate::error::{PokedexError, PokedexResult};
use crate::language::Language;
use crate::query::{Pokedex, Query, SortKey, StatOperator};
use crate::translation::{EggGroup, PokemonType};
use serde::{Deserialize, Serialize};

pub const DEFAULT_LIMIT: usize = 100;

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QueryParams {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub pokemon_type: Option<String>,
    pub generation: Option<String>,
    pub egg_group: Option<String>,
    pub can_mega_evolve: bool,
    pub in_galar_pokedex: bool,
    pub base_stat_total: Option<String>,
    pub operator: Option<String>,
    pub sort_by: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl QueryParams {
    /// Translate the parameters into a query chain. Empty strings count as
    /// absent.
    pub fn apply<'a>(&self, pokedex: &'a Pokedex) -> PokedexResult<Query<'a>> {
        let lang = pokedex.language();
        let mut query = pokedex.query();

        if let Some(name) = present(&self.name) {
            query = query.name(&title_case(name));
        }
        if let Some(value) = present(&self.pokemon_type) {
            query = query.of_type(&canonical_type(lang, value));
        }
        if let Some(generation) = present(&self.generation) {
            query = query.generation(generation.trim());
        }
        if let Some(value) = present(&self.egg_group) {
            query = query.egg_group(&canonical_egg_group(lang, value));
        }
        if self.can_mega_evolve {
            query = query.can_mega_evolve();
        }
        if self.in_galar_pokedex {
            query = query.in_galar_pokedex();
        }

        match (present(&self.base_stat_total), present(&self.operator)) {
            (Some(_), None) => return Err(PokedexError::MissingOperator),
            (Some(value), Some(op)) => {
                let op: StatOperator = op.parse()?;
                let value: f64 = value
                    .trim()
                    .parse()
                    .map_err(|_| PokedexError::InvalidStatValue(value.to_string()))?;
                query = query.base_stat_total(op, value);
            }
            _ => {}
        }

        if let Some(key) = present(&self.sort_by) {
            query = query.sort(key.parse::<SortKey>()?);
        }
        Ok(query)
    }

    pub fn run(&self, pokedex: &Pokedex) -> PokedexResult<Page> {
        let results = self.apply(pokedex)?.get_pokemon();
        Ok(Page::new(results, self.limit, self.offset))
    }
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}

/// Upper-case the first character and lower-case the rest.
pub fn title_case(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

fn canonical_type(lang: Language, value: &str) -> String {
    PokemonType::lookup(lang, value)
        .map(|ty| ty.name(lang).to_string())
        .unwrap_or_else(|| title_case(value))
}

fn canonical_egg_group(lang: Language, value: &str) -> String {
    EggGroup::lookup(lang, value)
        .map(|group| group.name(lang).to_string())
        .unwrap_or_else(|| title_case(value))
}

#[derive(Clone, Debug, PartialEq, Serialize)]
/// One page of a filtered listing; `total` counts every match.
pub struct Page {
    pub total: usize,
    pub count: usize,
    pub limit: usize,
    pub offset: usize,
    pub data: Vec<PokemonEntity>,
}

impl Page {
    /// A zero or missing limit falls back to `DEFAULT_LIMIT`; negative limits
    /// clamp to one and negative offsets to zero.
    pub fn new(results: Vec<PokemonEntity>, limit: Option<i64>, offset: Option<i64>) -> Self {
        let limit = match limit {
            Some(limit) if limit != 0 => usize::try_from(limit.max(1)).unwrap_or(DEFAULT_LIMIT),
            _ => DEFAULT_LIMIT,
        };
        let offset = usize::try_from(offset.unwrap_or(0).max(0)).unwrap_or(0);
        let total = results.len();
        let data: Vec<PokemonEntity> = results.into_iter().skip(offset).take(limit).collect();
        Self {
            total,
            count: data.len(),
            limit,
            offset,
            data,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
/// `{count, data}` envelope used by the term and generation listings.
pub struct Listing<T> {
    pub count: usize,
    pub data: Vec<T>,
}

impl<T> Listing<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self {
            count: data.len(),
            data,
        }
    }
}
