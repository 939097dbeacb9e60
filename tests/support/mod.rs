#![allow(dead_code)]

use anyhow::{Context, Result};
use pokedex::{Language, Pokedex, PokemonEntity};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::sync::OnceLock;

pub fn resource_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("resources")
        .join("pokemon")
}

pub fn schema_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("resources")
        .join("schema.json")
}

/// Catalog over the bundled shards, built once per language for the whole
/// suite.
pub fn pokedex(lang: Language) -> &'static Pokedex {
    static JA: OnceLock<Pokedex> = OnceLock::new();
    static EN: OnceLock<Pokedex> = OnceLock::new();
    let cell = match lang {
        Language::Ja => &JA,
        Language::En => &EN,
    };
    cell.get_or_init(|| {
        Pokedex::load(lang, &resource_dir()).expect("bundled shards must build a catalog")
    })
}

/// `id` or `id/formId`, the shape used in ordering assertions.
pub fn keys(entities: &[PokemonEntity]) -> Vec<String> {
    entities
        .iter()
        .map(|entity| match &entity.form_id {
            Some(form_id) => format!("{}/{}", entity.id, form_id),
            None => entity.id.clone(),
        })
        .collect()
}

pub fn names(entities: &[PokemonEntity]) -> Vec<String> {
    entities.iter().map(|entity| entity.name.clone()).collect()
}

pub fn write_shard(dir: &Path, name: &str, body: &str) -> Result<()> {
    fs::write(dir.join(name), body).with_context(|| format!("writing fixture shard {name}"))
}

/// Run the `pokedex` binary against the bundled shards. The exit status is
/// left for the caller to check.
pub fn run_cli(args: &[&str]) -> Result<Output> {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_pokedex"));
    cmd.arg("--resources").arg(resource_dir()).args(args);
    cmd.env_remove("POKEDEX_LOG");
    cmd.output()
        .with_context(|| format!("failed to run pokedex {args:?}"))
}
