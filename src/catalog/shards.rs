//! Discovery and parsing of the shard files in a resource directory.
//!
//! Every `*.json` file is classified by name alone (see `classify`). Record
//! shards are tagged with the generation their file name declares; name and
//! mega tables are loaded separately. Anything unrecognized is skipped, but a
//! recognized file that cannot be read or parsed fails the whole load.

use crate::catalog::names::NameTables;
use crate::catalog::raw::{RawFormNames, RawMegaTable, RawName, RawPokemon};
use crate::error::{PokedexError, PokedexResult};
use serde::de::DeserializeOwned;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const MEGA_FILE: &str = "mega.json";
const MEGA_NAME_FILE: &str = "mega_name.json";
const LEGENDS_ARCEUS_MARKER: &str = "LegendsArceus";
const LEGENDS_ARCEUS_GENERATION: u32 = 8;

/// What a resource file contributes to the catalog.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ShardKind {
    /// Creature records introduced in the given generation.
    Generation(u32),
    /// `gen<N>[_Variant]_name.json` and `mega_name.json`.
    BaseNames,
    /// `form[...]_name.json`.
    FormNames,
    /// `mega.json`.
    MegaEvolutions,
    Skipped,
}

/// Classify a file by name. First matching rule wins.
pub fn classify(file_name: &str) -> ShardKind {
    let Some(stem) = file_name.strip_suffix(".json") else {
        return ShardKind::Skipped;
    };

    if file_name == MEGA_NAME_FILE || is_generation_name_table(stem) {
        return ShardKind::BaseNames;
    }
    if stem.starts_with("form") && stem.ends_with("_name") {
        return ShardKind::FormNames;
    }
    if file_name == MEGA_FILE {
        return ShardKind::MegaEvolutions;
    }
    if stem.ends_with("_name") {
        return ShardKind::Skipped;
    }
    if let Some(generation) = stem.strip_prefix("gen").and_then(leading_number) {
        return ShardKind::Generation(generation);
    }
    if stem.contains(LEGENDS_ARCEUS_MARKER) {
        return ShardKind::Generation(LEGENDS_ARCEUS_GENERATION);
    }
    if let Some(generation) = stem.strip_prefix("form_").and_then(leading_number) {
        return ShardKind::Generation(generation);
    }
    ShardKind::Skipped
}

/// `gen<N>_name` or `gen<N>_<Letters>_name`.
fn is_generation_name_table(stem: &str) -> bool {
    let Some(rest) = stem.strip_prefix("gen") else {
        return false;
    };
    let digits = rest.chars().take_while(char::is_ascii_digit).count();
    if digits == 0 {
        return false;
    }
    let Some(rest) = rest[digits..].strip_suffix("_name") else {
        return false;
    };
    match rest.strip_prefix('_') {
        None => rest.is_empty(),
        Some(variant) => !variant.is_empty() && variant.chars().all(|c| c.is_ascii_alphabetic()),
    }
}

/// Exactly `gen<N>`: the main per-generation shards.
fn main_generation(stem: &str) -> Option<u32> {
    let digits = stem.strip_prefix("gen")?;
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

fn leading_number(value: &str) -> Option<u32> {
    let digits: String = value.chars().take_while(char::is_ascii_digit).collect();
    digits.parse().ok()
}

#[derive(Clone, Debug)]
/// A raw record together with where it came from.
pub struct ShardRecord {
    pub raw: RawPokemon,
    pub generation: u32,
    pub source: PathBuf,
}

#[derive(Debug, Default)]
/// Everything loaded from one resource directory, independent of language.
pub struct ShardSet {
    pub records: Vec<ShardRecord>,
    pub names: NameTables,
    pub megas: RawMegaTable,
    /// Generations that have a main `gen<N>.json` shard.
    pub generations: BTreeSet<u32>,
}

impl ShardSet {
    /// Load every recognized shard under `dir`, in file-name order.
    pub fn load(dir: &Path) -> PokedexResult<Self> {
        let mut set = ShardSet::default();
        for path in list_json_files(dir)? {
            let Some(file_name) = path.file_name().and_then(|name| name.to_str()) else {
                continue;
            };
            let kind = classify(file_name);
            debug!(file = file_name, ?kind, "classified shard");
            match kind {
                ShardKind::Generation(generation) => {
                    let records: Vec<RawPokemon> = read_json(&path)?;
                    if let Some(main) = file_name.strip_suffix(".json").and_then(main_generation) {
                        set.generations.insert(main);
                    }
                    set.records.extend(records.into_iter().map(|raw| ShardRecord {
                        raw,
                        generation,
                        source: path.clone(),
                    }));
                }
                ShardKind::BaseNames => {
                    let names: Vec<RawName> = read_json(&path)?;
                    set.names.register_names(names);
                }
                ShardKind::FormNames => {
                    let forms: Vec<RawFormNames> = read_json(&path)?;
                    set.names.register_form_names(forms);
                }
                ShardKind::MegaEvolutions => {
                    let megas: RawMegaTable = read_json(&path)?;
                    for (base_id, variants) in megas {
                        set.megas.entry(base_id).or_default().extend(variants);
                    }
                }
                ShardKind::Skipped => {}
            }
        }
        debug!(
            records = set.records.len(),
            names = set.names.base_len(),
            form_names = set.names.form_len(),
            mega_bases = set.megas.len(),
            "loaded shards from {}",
            dir.display()
        );
        Ok(set)
    }
}

fn list_json_files(dir: &Path) -> PokedexResult<Vec<PathBuf>> {
    let dir_error = |source| PokedexError::ResourceDir {
        path: dir.to_path_buf(),
        source,
    };
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(dir_error)? {
        let path = entry.map_err(dir_error)?.path();
        if path.is_file() && path.extension().and_then(|ext| ext.to_str()) == Some("json") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> PokedexResult<T> {
    let data = fs::read(path).map_err(|source| PokedexError::ShardRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_slice(&data).map_err(|source| PokedexError::ShardParse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Language;
    use tempfile::TempDir;

    #[test]
    fn classification_follows_rule_precedence() {
        assert_eq!(classify("gen1.json"), ShardKind::Generation(1));
        assert_eq!(classify("gen9_dlc.json"), ShardKind::Generation(9));
        assert_eq!(classify("LegendsArceus.json"), ShardKind::Generation(8));
        assert_eq!(classify("gen4_LegendsArceus.json"), ShardKind::Generation(4));
        assert_eq!(classify("form_3.json"), ShardKind::Generation(3));
        assert_eq!(classify("form_10_extra.json"), ShardKind::Generation(10));

        assert_eq!(classify("gen1_name.json"), ShardKind::BaseNames);
        assert_eq!(classify("gen8_LegendsArceus_name.json"), ShardKind::BaseNames);
        assert_eq!(classify("mega_name.json"), ShardKind::BaseNames);
        assert_eq!(classify("form_name.json"), ShardKind::FormNames);
        assert_eq!(classify("form_8_name.json"), ShardKind::FormNames);
        assert_eq!(classify("mega.json"), ShardKind::MegaEvolutions);

        assert_eq!(classify("gen1_2_name.json"), ShardKind::Skipped);
        assert_eq!(classify("other_name.json"), ShardKind::Skipped);
        assert_eq!(classify("schema.json"), ShardKind::Skipped);
        assert_eq!(classify("generations.json"), ShardKind::Skipped);
        assert_eq!(classify("form_.json"), ShardKind::Skipped);
        assert_eq!(classify("gen1.txt"), ShardKind::Skipped);
    }

    #[test]
    fn main_generations_only_count_plain_shards() {
        assert_eq!(main_generation("gen3"), Some(3));
        assert_eq!(main_generation("gen3_dlc"), None);
        assert_eq!(main_generation("gen"), None);
    }

    #[test]
    fn load_tags_records_and_skips_unknown_files() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        fs::write(
            dir.path().join("gen2.json"),
            r#"[{"id":"172","type":["でんき"],"abilities":[],"status":{"H":"20","A":"40","B":"15","C":"35","D":"35","S":"60"},"egg_groups":[]}]"#,
        )?;
        fs::write(
            dir.path().join("gen2_name.json"),
            r#"[{"id":"172","name":{"ja":"ピチュー","en":"Pichu"}}]"#,
        )?;
        fs::write(dir.path().join("notes.json"), "not json at all")?;
        fs::write(dir.path().join("README.md"), "# readme")?;

        let set = ShardSet::load(dir.path())?;
        assert_eq!(set.records.len(), 1);
        assert_eq!(set.records[0].generation, 2);
        assert!(set.records[0].source.ends_with("gen2.json"));
        assert_eq!(set.names.name("172", Language::En)?, "Pichu");
        assert!(set.megas.is_empty());
        assert_eq!(set.generations.iter().copied().collect::<Vec<_>>(), vec![2]);
        Ok(())
    }

    #[test]
    fn malformed_recognized_shard_is_fatal() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        fs::write(dir.path().join("gen1.json"), "[{")?;
        let err = ShardSet::load(dir.path()).expect_err("malformed shard must fail");
        assert!(matches!(err, PokedexError::ShardParse { .. }));
        Ok(())
    }

    #[test]
    fn missing_directory_is_fatal() {
        let err = ShardSet::load(Path::new("/nonexistent/pokedex/resources"))
            .expect_err("missing directory must fail");
        assert!(matches!(err, PokedexError::ResourceDir { .. }));
    }
}
