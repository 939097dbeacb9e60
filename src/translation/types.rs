use crate::language::Language;

/// Elemental type. The set is closed across every generation shipped so far.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum PokemonType {
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
}

impl PokemonType {
    pub const ALL: [PokemonType; 18] = [
        PokemonType::Normal,
        PokemonType::Fire,
        PokemonType::Water,
        PokemonType::Electric,
        PokemonType::Grass,
        PokemonType::Ice,
        PokemonType::Fighting,
        PokemonType::Poison,
        PokemonType::Ground,
        PokemonType::Flying,
        PokemonType::Psychic,
        PokemonType::Bug,
        PokemonType::Rock,
        PokemonType::Ghost,
        PokemonType::Dragon,
        PokemonType::Dark,
        PokemonType::Steel,
        PokemonType::Fairy,
    ];

    pub fn ja(&self) -> &'static str {
        match self {
            PokemonType::Normal => "ノーマル",
            PokemonType::Fire => "ほのお",
            PokemonType::Water => "みず",
            PokemonType::Electric => "でんき",
            PokemonType::Grass => "くさ",
            PokemonType::Ice => "こおり",
            PokemonType::Fighting => "かくとう",
            PokemonType::Poison => "どく",
            PokemonType::Ground => "じめん",
            PokemonType::Flying => "ひこう",
            PokemonType::Psychic => "エスパー",
            PokemonType::Bug => "むし",
            PokemonType::Rock => "いわ",
            PokemonType::Ghost => "ゴースト",
            PokemonType::Dragon => "ドラゴン",
            PokemonType::Dark => "あく",
            PokemonType::Steel => "はがね",
            PokemonType::Fairy => "フェアリー",
        }
    }

    pub fn en(&self) -> &'static str {
        match self {
            PokemonType::Normal => "Normal",
            PokemonType::Fire => "Fire",
            PokemonType::Water => "Water",
            PokemonType::Electric => "Electric",
            PokemonType::Grass => "Grass",
            PokemonType::Ice => "Ice",
            PokemonType::Fighting => "Fighting",
            PokemonType::Poison => "Poison",
            PokemonType::Ground => "Ground",
            PokemonType::Flying => "Flying",
            PokemonType::Psychic => "Psychic",
            PokemonType::Bug => "Bug",
            PokemonType::Rock => "Rock",
            PokemonType::Ghost => "Ghost",
            PokemonType::Dragon => "Dragon",
            PokemonType::Dark => "Dark",
            PokemonType::Steel => "Steel",
            PokemonType::Fairy => "Fairy",
        }
    }

    pub fn name(&self, lang: Language) -> &'static str {
        match lang {
            Language::Ja => self.ja(),
            Language::En => self.en(),
        }
    }

    /// Parse a source-language term as it appears in shard files.
    pub fn from_ja(term: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|ty| ty.ja() == term)
    }

    /// Case-insensitive lookup of a display name in `lang`.
    pub fn lookup(lang: Language, value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|ty| ty.name(lang).to_lowercase() == value.to_lowercase())
    }
}
