//! Name ordering for `SortKey::Lexicographical`.
//!
//! Japanese names compare on a folded reading: hiragana become katakana, small
//! kana become their full-size form and voiced or semi-voiced kana fall back
//! to the plain kana, so `デカヌチャン` sorts next to `テ...`. English names
//! compare on their lower-cased ASCII transliteration. The untouched name
//! breaks ties in both languages so the order is total.

use crate::language::Language;
use unidecode::unidecode;

#[derive(Clone, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub struct CollationKey {
    primary: String,
    tertiary: String,
}

pub fn collation_key(name: &str, lang: Language) -> CollationKey {
    let primary = match lang {
        Language::Ja => name.chars().map(fold_kana).collect(),
        Language::En => unidecode(name).to_lowercase(),
    };
    CollationKey {
        primary,
        tertiary: name.to_string(),
    }
}

const HIRAGANA_START: u32 = 0x3041;
const HIRAGANA_END: u32 = 0x3096;
const KATAKANA_OFFSET: u32 = 0x60;

fn fold_kana(c: char) -> char {
    let mut code = c as u32;
    if (HIRAGANA_START..=HIRAGANA_END).contains(&code) {
        code += KATAKANA_OFFSET;
    }
    let folded = match code {
        // ァ..オ: small vowels sit one below their full-size kana
        0x30A1..=0x30AA if (code - 0x30A1) % 2 == 0 => code + 1,
        // カ..ヂ: voiced kana follow their plain kana
        0x30AB..=0x30C2 if (code - 0x30AB) % 2 == 1 => code - 1,
        0x30C3 | 0x30C5 => 0x30C4,
        0x30C7 => 0x30C6,
        0x30C9 => 0x30C8,
        // ハ..ポ: plain, voiced, semi-voiced triples
        0x30CF..=0x30DD => 0x30CF + 3 * ((code - 0x30CF) / 3),
        0x30E3 | 0x30E5 | 0x30E7 | 0x30EE => code + 1,
        0x30F4 => 0x30A6,
        0x30F5 => 0x30AB,
        0x30F6 => 0x30B1,
        _ => code,
    };
    char::from_u32(folded).unwrap_or(c)
}
