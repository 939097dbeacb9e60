//! Source-language → display-language term translation.
//!
//! Shard files spell every type, egg group and ability in Japanese. Types and
//! egg groups are closed sets and parse into enums even when the requested
//! language is Japanese, so a typo in a shard fails the catalog build in both
//! languages. Abilities pass through untouched for Japanese.

pub mod ability;
pub mod egg_group;
pub mod types;

pub use ability::{ABILITIES, english_ability};
pub use egg_group::EggGroup;
pub use types::PokemonType;

use crate::error::{PokedexError, PokedexResult, TermKind};
use crate::language::Language;

/// Translate a type list from shard spelling into `lang`.
pub fn translate_types(terms: &[String], lang: Language) -> PokedexResult<Vec<String>> {
    terms
        .iter()
        .map(|term| {
            PokemonType::from_ja(term)
                .map(|ty| ty.name(lang).to_string())
                .ok_or_else(|| not_found(TermKind::Type, term))
        })
        .collect()
}

/// Translate an egg group list from shard spelling into `lang`.
pub fn translate_egg_groups(terms: &[String], lang: Language) -> PokedexResult<Vec<String>> {
    terms
        .iter()
        .map(|term| {
            EggGroup::from_ja(term)
                .map(|group| group.name(lang).to_string())
                .ok_or_else(|| not_found(TermKind::EggGroup, term))
        })
        .collect()
}

/// Translate one ability name (already stripped of its hidden marker).
pub fn translate_ability(term: &str, lang: Language) -> PokedexResult<String> {
    match lang {
        Language::Ja => Ok(term.to_string()),
        Language::En => english_ability(term)
            .map(str::to_string)
            .ok_or_else(|| not_found(TermKind::Ability, term)),
    }
}

pub fn type_names(lang: Language) -> Vec<&'static str> {
    PokemonType::ALL.iter().map(|ty| ty.name(lang)).collect()
}

pub fn egg_group_names(lang: Language) -> Vec<&'static str> {
    EggGroup::ALL.iter().map(|group| group.name(lang)).collect()
}

pub fn ability_names(lang: Language) -> Vec<&'static str> {
    ABILITIES
        .iter()
        .map(|(ja, en)| match lang {
            Language::Ja => *ja,
            Language::En => *en,
        })
        .collect()
}

fn not_found(kind: TermKind, term: &str) -> PokedexError {
    PokedexError::TranslationNotFound {
        kind,
        term: term.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn japanese_terms_pass_through() {
        let types = translate_types(&terms(&["はがね", "フェアリー"]), Language::Ja).unwrap();
        assert_eq!(types, vec!["はがね", "フェアリー"]);
        assert_eq!(
            translate_ability("ひらいしん", Language::Ja).unwrap(),
            "ひらいしん"
        );
    }

    #[test]
    fn english_terms_are_translated() {
        let groups = translate_egg_groups(&terms(&["陸上", "妖精"]), Language::En).unwrap();
        assert_eq!(groups, vec!["Field", "Fairy"]);
        assert_eq!(
            translate_ability("せいでんき", Language::En).unwrap(),
            "Static"
        );
    }

    #[test]
    fn unknown_terms_fail_in_both_languages() {
        for lang in [Language::Ja, Language::En] {
            let err = translate_types(&terms(&["ステラ"]), lang).unwrap_err();
            assert!(matches!(
                err,
                PokedexError::TranslationNotFound {
                    kind: TermKind::Type,
                    ..
                }
            ));
        }
        assert!(translate_ability("未知", Language::En).is_err());
    }

    #[test]
    fn listings_follow_language() {
        assert_eq!(type_names(Language::En).len(), 18);
        assert_eq!(type_names(Language::Ja)[0], "ノーマル");
        assert_eq!(egg_group_names(Language::En)[4], "Human-Like");
        assert_eq!(ability_names(Language::En).len(), ABILITIES.len());
    }
}
