//! Ability name table.
//!
//! Unlike types and egg groups the ability vocabulary grows with every
//! release, so it stays a lookup table rather than an enum. A miss is a
//! data-integrity error between the shards and this table.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Source-language ability name paired with its English name.
pub const ABILITIES: &[(&str, &str)] = &[
    ("あくしゅう", "Stench"),
    ("あめふらし", "Drizzle"),
    ("かそく", "Speed Boost"),
    ("カブトアーマー", "Battle Armor"),
    ("がんじょう", "Sturdy"),
    ("しめりけ", "Damp"),
    ("じゅうなん", "Limber"),
    ("すながくれ", "Sand Veil"),
    ("せいでんき", "Static"),
    ("ちくでん", "Volt Absorb"),
    ("ちょすい", "Water Absorb"),
    ("どんかん", "Oblivious"),
    ("ノーてんき", "Cloud Nine"),
    ("ふくがん", "Compound Eyes"),
    ("ふみん", "Insomnia"),
    ("へんしょく", "Color Change"),
    ("めんえき", "Immunity"),
    ("もらいび", "Flash Fire"),
    ("りんぷん", "Shield Dust"),
    ("マイペース", "Own Tempo"),
    ("きゅうばん", "Suction Cups"),
    ("いかく", "Intimidate"),
    ("かげふみ", "Shadow Tag"),
    ("さめはだ", "Rough Skin"),
    ("ふしぎなまもり", "Wonder Guard"),
    ("ふゆう", "Levitate"),
    ("ほうし", "Effect Spore"),
    ("シンクロ", "Synchronize"),
    ("クリアボディ", "Clear Body"),
    ("しぜんかいふく", "Natural Cure"),
    ("ひらいしん", "Lightning Rod"),
    ("てんのめぐみ", "Serene Grace"),
    ("すいすい", "Swift Swim"),
    ("ようりょくそ", "Chlorophyll"),
    ("トレース", "Trace"),
    ("ちからもち", "Huge Power"),
    ("どくのトゲ", "Poison Point"),
    ("せいしんりょく", "Inner Focus"),
    ("マグマのよろい", "Magma Armor"),
    ("みずのベール", "Water Veil"),
    ("じりょく", "Magnet Pull"),
    ("ぼうおん", "Soundproof"),
    ("あついしぼう", "Thick Fat"),
    ("はやおき", "Early Bird"),
    ("ほのおのからだ", "Flame Body"),
    ("にげあし", "Run Away"),
    ("するどいめ", "Keen Eye"),
    ("かいりきバサミ", "Hyper Cutter"),
    ("ものひろい", "Pickup"),
    ("なまけ", "Truant"),
    ("こんじょう", "Guts"),
    ("ふしぎなうろこ", "Marvel Scale"),
    ("しんりょく", "Overgrow"),
    ("もうか", "Blaze"),
    ("げきりゅう", "Torrent"),
    ("むしのしらせ", "Swarm"),
    ("いしあたま", "Rock Head"),
    ("ひでり", "Drought"),
    ("ふくつのこころ", "Steadfast"),
    ("プレッシャー", "Pressure"),
    ("サンパワー", "Solar Power"),
    ("テクニシャン", "Technician"),
    ("きんちょうかん", "Unnerve"),
    ("かたやぶり", "Mold Breaker"),
    ("てんねん", "Unaware"),
    ("そうしょく", "Sap Sipper"),
    ("おみとおし", "Frisk"),
    ("ちからずく", "Sheer Force"),
    ("マジックミラー", "Magic Bounce"),
    ("いたずらごころ", "Prankster"),
    ("かわりもの", "Imposter"),
    ("ぬすっと", "Pickpocket"),
    ("びびり", "Rattled"),
    ("マジシャン", "Magician"),
    ("かたいツメ", "Tough Claws"),
    ("ソウルハート", "Soul-Heart"),
    ("ふとうのけん", "Intrepid Sword"),
    ("ふくつのたて", "Dauntless Shield"),
    ("テラスチェンジ", "Tera Shift"),
    ("テラスシェル", "Tera Shell"),
];

static ABILITY_MAP: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| ABILITIES.iter().copied().collect());

/// English name for a source-language ability, if the table knows it.
pub fn english_ability(ja: &str) -> Option<&'static str> {
    ABILITY_MAP.get(ja).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn table_has_no_duplicate_source_terms() {
        let unique: HashSet<_> = ABILITIES.iter().map(|(ja, _)| ja).collect();
        assert_eq!(unique.len(), ABILITIES.len());
    }

    #[test]
    fn lookup_hits_and_misses() {
        assert_eq!(english_ability("ひらいしん"), Some("Lightning Rod"));
        assert_eq!(english_ability("*ひらいしん"), None);
    }
}
