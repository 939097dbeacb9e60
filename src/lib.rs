//! Bilingual Pokédex catalog and query engine.
//!
//! The crate assembles a catalog from the JSON shards under
//! `resources/pokemon/`, localizes every record into Japanese or English and
//! answers fluent filter/sort queries over it. Public functions here form the
//! contract the `pokedex` binary depends on: resource discovery, catalog
//! loading, the query chain and request mapping.

use std::{
    env, fs, io,
    path::{Path, PathBuf},
};

pub mod catalog;
pub mod collation;
pub mod error;
pub mod language;
pub mod query;
pub mod request;
pub mod schema_loader;
pub mod translation;

pub use catalog::{
    AbilityEntry, Catalog, MegaEvolutionVariant, PokemonEntity, RegionalDexId, StatBlock,
};
pub use error::{ErrorClass, PokedexError, PokedexResult, TermKind};
pub use language::Language;
pub use query::{Pokedex, Query, SortKey, StatOperator};
pub use request::{Listing, Page, QueryParams};
pub use schema_loader::{EntitySchema, SchemaViolation};

const RESOURCE_SUBDIR: &str = "resources/pokemon";
pub const RESOURCES_ENV: &str = "POKEDEX_RESOURCES";

/// Verifies that an explicit hint names an existing directory.
fn resource_dir_from_hint(hint: &str) -> Option<PathBuf> {
    if hint.is_empty() {
        return None;
    }
    let hint_path = PathBuf::from(hint);
    if !hint_path.is_dir() {
        return None;
    }
    fs::canonicalize(hint_path).ok()
}

fn search_upwards(start: &Path) -> Option<PathBuf> {
    let mut dir = fs::canonicalize(start).ok()?;
    loop {
        let candidate = dir.join(RESOURCE_SUBDIR);
        if candidate.is_dir() {
            return Some(candidate);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}

/// Locate the shard directory.
///
/// Search order: `POKEDEX_RESOURCES` if it names a directory, then
/// `resources/pokemon` in the executable's directory or any ancestor, then the
/// path `build.rs` recorded at compile time.
pub fn find_resource_dir() -> PokedexResult<PathBuf> {
    if let Ok(env_dir) = env::var(RESOURCES_ENV) {
        if let Some(dir) = resource_dir_from_hint(&env_dir) {
            return Ok(dir);
        }
    }

    if let Ok(exe_path) = env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            if let Some(dir) = search_upwards(exe_dir) {
                return Ok(dir);
            }
        }
    }

    if let Some(hint) = option_env!("POKEDEX_RESOURCES_HINT") {
        if let Some(dir) = resource_dir_from_hint(hint) {
            return Ok(dir);
        }
    }

    Err(PokedexError::ResourceDir {
        path: PathBuf::from(RESOURCE_SUBDIR),
        source: io::Error::new(
            io::ErrorKind::NotFound,
            format!("set {RESOURCES_ENV} to the shard directory"),
        ),
    })
}
