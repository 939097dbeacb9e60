//! The fluent query engine.
//!
//! `Pokedex` owns one language's catalog and hands out `Query` values. A query
//! borrows the catalog, narrows an ordered selection of entity references and
//! is consumed by `get_pokemon` or `get_pokemon_as_json`. Every chain started
//! from `Pokedex` sees the full catalog again.

use crate::catalog::{Catalog, PokemonEntity};
use crate::collation::collation_key;
use crate::error::{PokedexError, PokedexResult};
use crate::find_resource_dir;
use crate::language::Language;
use crate::translation::{ability_names, egg_group_names, type_names};
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Comparison applied to a base stat total.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StatOperator {
    Greater,
    GreaterOrEqual,
    Less,
    LessOrEqual,
    Equal,
}

impl StatOperator {
    pub fn symbol(&self) -> &'static str {
        match self {
            StatOperator::Greater => ">",
            StatOperator::GreaterOrEqual => ">=",
            StatOperator::Less => "<",
            StatOperator::LessOrEqual => "<=",
            StatOperator::Equal => "=",
        }
    }

    /// `total <op> value`; a NaN `value` never matches.
    pub fn matches(&self, total: f64, value: f64) -> bool {
        match self {
            StatOperator::Greater => total > value,
            StatOperator::GreaterOrEqual => total >= value,
            StatOperator::Less => total < value,
            StatOperator::LessOrEqual => total <= value,
            StatOperator::Equal => total == value,
        }
    }
}

impl FromStr for StatOperator {
    type Err = PokedexError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            ">" => Ok(StatOperator::Greater),
            ">=" => Ok(StatOperator::GreaterOrEqual),
            "<" => Ok(StatOperator::Less),
            "<=" => Ok(StatOperator::LessOrEqual),
            "=" => Ok(StatOperator::Equal),
            other => Err(PokedexError::InvalidOperator(other.to_string())),
        }
    }
}

impl fmt::Display for StatOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SortKey {
    /// Name order in the catalog language.
    Lexicographical,
    /// National dex number, then form id.
    NationalNumber,
}

impl FromStr for SortKey {
    type Err = PokedexError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Lexicographical" => Ok(SortKey::Lexicographical),
            "NationalNumber" => Ok(SortKey::NationalNumber),
            other => Err(PokedexError::InvalidSortKey(other.to_string())),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::Lexicographical => f.write_str("Lexicographical"),
            SortKey::NationalNumber => f.write_str("NationalNumber"),
        }
    }
}

/// Catalog for one language plus the entry points of the query chain.
#[derive(Clone, Debug)]
pub struct Pokedex {
    catalog: Catalog,
}

impl Pokedex {
    /// Build a catalog from the resource directory found by
    /// `find_resource_dir`.
    pub fn new(language: Language) -> PokedexResult<Self> {
        let dir = find_resource_dir()?;
        Self::load(language, &dir)
    }

    pub fn load(language: Language, dir: &Path) -> PokedexResult<Self> {
        Catalog::load(dir, language).map(Self::from_catalog)
    }

    pub fn from_catalog(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn language(&self) -> Language {
        self.catalog.language()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// A query over the whole catalog in shard order.
    pub fn query(&self) -> Query<'_> {
        Query {
            language: self.catalog.language(),
            selected: self.catalog.entities().iter().collect(),
            mega_pruned: false,
        }
    }

    pub fn id(&self, value: impl fmt::Display) -> Query<'_> {
        self.query().id(value)
    }

    pub fn name(&self, value: &str) -> Query<'_> {
        self.query().name(value)
    }

    pub fn of_type(&self, value: &str) -> Query<'_> {
        self.query().of_type(value)
    }

    pub fn egg_group(&self, value: &str) -> Query<'_> {
        self.query().egg_group(value)
    }

    pub fn can_mega_evolve(&self) -> Query<'_> {
        self.query().can_mega_evolve()
    }

    pub fn generation(&self, value: impl fmt::Display) -> Query<'_> {
        self.query().generation(value)
    }

    pub fn in_galar_pokedex(&self) -> Query<'_> {
        self.query().in_galar_pokedex()
    }

    pub fn base_stat_total(&self, op: StatOperator, value: impl Into<f64>) -> Query<'_> {
        self.query().base_stat_total(op, value)
    }

    pub fn sort(&self, key: SortKey) -> Query<'_> {
        self.query().sort(key)
    }

    pub fn get_pokemon(&self) -> Vec<PokemonEntity> {
        self.query().get_pokemon()
    }

    pub fn get_pokemon_as_json(&self) -> PokedexResult<String> {
        self.query().get_pokemon_as_json()
    }

    /// Every type name in the catalog language.
    pub fn types(&self) -> Vec<&'static str> {
        type_names(self.language())
    }

    /// Every ability name the translation table knows, in the catalog language.
    pub fn abilities(&self) -> Vec<&'static str> {
        ability_names(self.language())
    }

    pub fn egg_groups(&self) -> Vec<&'static str> {
        egg_group_names(self.language())
    }

    pub fn generations(&self) -> &[u32] {
        self.catalog.generations()
    }
}

/// An ordered, narrowed view of a catalog.
///
/// Filters only ever remove entries; `sort` only reorders them. After
/// `in_galar_pokedex` the view reports every entity without mega evolutions,
/// while the catalog it borrows from keeps them.
#[derive(Clone, Debug)]
pub struct Query<'a> {
    language: Language,
    selected: Vec<&'a PokemonEntity>,
    mega_pruned: bool,
}

impl<'a> Query<'a> {
    fn retain(mut self, keep: impl Fn(&PokemonEntity) -> bool) -> Self {
        self.selected.retain(|entity| keep(entity));
        self
    }

    /// Exact match on the national dex id, compared as text.
    pub fn id(self, value: impl fmt::Display) -> Self {
        let id = value.to_string();
        self.retain(|entity| entity.id == id)
    }

    /// Exact match on the localized base name.
    pub fn name(self, value: &str) -> Self {
        self.retain(|entity| entity.name == value)
    }

    pub fn of_type(self, value: &str) -> Self {
        self.retain(|entity| entity.types.iter().any(|ty| ty == value))
    }

    pub fn egg_group(self, value: &str) -> Self {
        self.retain(|entity| entity.egg_group.iter().any(|group| group == value))
    }

    pub fn can_mega_evolve(self) -> Self {
        let pruned = self.mega_pruned;
        self.retain(|entity| !pruned && entity.can_mega_evolve())
    }

    pub fn generation(self, value: impl fmt::Display) -> Self {
        let generation = value.to_string();
        self.retain(|entity| entity.generation.to_string() == generation)
    }

    /// Keep entities with a Galar dex number and hide their mega evolutions.
    pub fn in_galar_pokedex(self) -> Self {
        let mut query = self.retain(PokemonEntity::in_galar_pokedex);
        query.mega_pruned = true;
        query
    }

    pub fn base_stat_total(self, op: StatOperator, value: impl Into<f64>) -> Self {
        let value = value.into();
        self.retain(|entity| op.matches(f64::from(entity.base_stats.total), value))
    }

    /// Stable reorder of the current view.
    pub fn sort(mut self, key: SortKey) -> Self {
        match key {
            SortKey::Lexicographical => {
                let language = self.language;
                self.selected
                    .sort_by_cached_key(|entity| collation_key(&entity.name, language));
            }
            SortKey::NationalNumber => self.selected.sort_by(|a, b| national_order(a, b)),
        }
        self
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Entities as this view reports them, without consuming the query.
    pub fn iter(&self) -> impl Iterator<Item = Cow<'a, PokemonEntity>> + '_ {
        self.selected.iter().copied().map(|entity| self.view(entity))
    }

    fn view(&self, entity: &'a PokemonEntity) -> Cow<'a, PokemonEntity> {
        if self.mega_pruned && entity.mega_evolution.is_some() {
            let mut pruned = entity.clone();
            pruned.mega_evolution = None;
            Cow::Owned(pruned)
        } else {
            Cow::Borrowed(entity)
        }
    }

    pub fn get_pokemon(self) -> Vec<PokemonEntity> {
        self.iter().map(Cow::into_owned).collect()
    }

    /// Compact JSON array of the view, in view order.
    pub fn get_pokemon_as_json(self) -> PokedexResult<String> {
        let entities = self.get_pokemon();
        Ok(serde_json::to_string(&entities)?)
    }
}

fn national_order(a: &PokemonEntity, b: &PokemonEntity) -> Ordering {
    a.national_number()
        .cmp(&b.national_number())
        .then_with(|| compare_form_ids(a.form_id.as_deref(), b.form_id.as_deref()))
}

fn compare_form_ids(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => match (a.parse::<u64>(), b.parse::<u64>()) {
            (Ok(a), Ok(b)) => a.cmp(&b),
            _ => a.cmp(b),
        },
    }
}
