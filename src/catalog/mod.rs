//! Catalog assembly.
//!
//! `ShardSet` reads the resource directory once; `Normalizer` turns each raw
//! record into a `PokemonEntity` for the requested language. A `Catalog` owns
//! its entities outright and never changes after `load` returns.

pub mod model;
pub mod names;
pub mod normalize;
pub mod raw;
pub mod shards;

pub use model::{AbilityEntry, MegaEvolutionVariant, PokemonEntity, RegionalDexId, StatBlock};
pub use names::NameTables;
pub use normalize::Normalizer;
pub use shards::{ShardKind, ShardRecord, ShardSet, classify};

use crate::error::PokedexResult;
use crate::language::Language;
use std::path::Path;
use tracing::info;

#[derive(Clone, Debug)]
/// Every normalized entity for one language, in shard file order.
pub struct Catalog {
    language: Language,
    entities: Vec<PokemonEntity>,
    generations: Vec<u32>,
}

impl Catalog {
    /// Load and normalize every shard under `dir`.
    pub fn load(dir: &Path, language: Language) -> PokedexResult<Self> {
        let shards = ShardSet::load(dir)?;
        Self::from_shards(&shards, language)
    }

    /// Normalize an already loaded shard set. Fails on the first record whose
    /// names or terms cannot be resolved.
    pub fn from_shards(shards: &ShardSet, language: Language) -> PokedexResult<Self> {
        let normalizer = Normalizer::new(language, &shards.names, &shards.megas);
        let entities = shards
            .records
            .iter()
            .map(|record| normalizer.normalize(record))
            .collect::<PokedexResult<Vec<_>>>()?;
        info!(
            language = language.code(),
            entities = entities.len(),
            "catalog built"
        );
        Ok(Self {
            language,
            entities,
            generations: shards.generations.iter().copied().collect(),
        })
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn entities(&self) -> &[PokemonEntity] {
        &self.entities
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Generations with a main `gen<N>.json` shard, ascending.
    pub fn generations(&self) -> &[u32] {
        &self.generations
    }
}
