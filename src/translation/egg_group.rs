use crate::language::Language;

/// Breeding compatibility group.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum EggGroup {
    Monster,
    Dragon,
    Mineral,
    Grass,
    HumanLike,
    Water1,
    Water2,
    Water3,
    Bug,
    Flying,
    Amorphous,
    Fairy,
    Field,
    Ditto,
    Undiscovered,
}

impl EggGroup {
    pub const ALL: [EggGroup; 15] = [
        EggGroup::Monster,
        EggGroup::Dragon,
        EggGroup::Mineral,
        EggGroup::Grass,
        EggGroup::HumanLike,
        EggGroup::Water1,
        EggGroup::Water2,
        EggGroup::Water3,
        EggGroup::Bug,
        EggGroup::Flying,
        EggGroup::Amorphous,
        EggGroup::Fairy,
        EggGroup::Field,
        EggGroup::Ditto,
        EggGroup::Undiscovered,
    ];

    pub fn ja(&self) -> &'static str {
        match self {
            EggGroup::Monster => "怪獣",
            EggGroup::Dragon => "ドラゴン",
            EggGroup::Mineral => "鉱物",
            EggGroup::Grass => "植物",
            EggGroup::HumanLike => "人型",
            EggGroup::Water1 => "水中1",
            EggGroup::Water2 => "水中2",
            EggGroup::Water3 => "水中3",
            EggGroup::Bug => "虫",
            EggGroup::Flying => "飛行",
            EggGroup::Amorphous => "不定形",
            EggGroup::Fairy => "妖精",
            EggGroup::Field => "陸上",
            EggGroup::Ditto => "メタモン",
            EggGroup::Undiscovered => "タマゴ未発見",
        }
    }

    pub fn en(&self) -> &'static str {
        match self {
            EggGroup::Monster => "Monster",
            EggGroup::Dragon => "Dragon",
            EggGroup::Mineral => "Mineral",
            EggGroup::Grass => "Grass",
            EggGroup::HumanLike => "Human-Like",
            EggGroup::Water1 => "Water1",
            EggGroup::Water2 => "Water2",
            EggGroup::Water3 => "Water3",
            EggGroup::Bug => "Bug",
            EggGroup::Flying => "Flying",
            EggGroup::Amorphous => "Amorphous",
            EggGroup::Fairy => "Fairy",
            EggGroup::Field => "Field",
            EggGroup::Ditto => "Ditto",
            EggGroup::Undiscovered => "Undiscovered",
        }
    }

    pub fn name(&self, lang: Language) -> &'static str {
        match lang {
            Language::Ja => self.ja(),
            Language::En => self.en(),
        }
    }

    pub fn from_ja(term: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|group| group.ja() == term)
    }

    pub fn lookup(lang: Language, value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|group| group.name(lang).to_lowercase() == value.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_terms_round_trip() {
        for group in EggGroup::ALL {
            assert_eq!(EggGroup::from_ja(group.ja()), Some(group));
        }
        assert_eq!(EggGroup::from_ja("Field"), None);
    }

    #[test]
    fn lookup_accepts_any_case() {
        assert_eq!(
            EggGroup::lookup(Language::En, "human-like"),
            Some(EggGroup::HumanLike)
        );
        assert_eq!(EggGroup::lookup(Language::En, "WATER1"), Some(EggGroup::Water1));
    }
}
