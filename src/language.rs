//! Supported catalog languages.
//!
//! Japanese is the source language of the shard files; English is produced by
//! translating every term through the tables in `translation`.

use crate::error::PokedexError;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Language {
    #[default]
    Ja,
    En,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::Ja => "ja",
            Language::En => "en",
        }
    }

    /// Resolve an optional language code, treating a missing or empty code as
    /// the source language.
    pub fn resolve(code: Option<&str>) -> Result<Self, PokedexError> {
        match code {
            None | Some("") => Ok(Language::default()),
            Some(code) => code.parse(),
        }
    }
}

impl FromStr for Language {
    type Err = PokedexError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "ja" => Ok(Language::Ja),
            "en" => Ok(Language::En),
            other => Err(PokedexError::UnsupportedLanguage(other.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_code_defaults_to_japanese() {
        assert_eq!(Language::resolve(None).unwrap(), Language::Ja);
        assert_eq!(Language::resolve(Some("")).unwrap(), Language::Ja);
        assert_eq!(Language::resolve(Some("en")).unwrap(), Language::En);
    }

    #[test]
    fn unknown_code_is_rejected() {
        let err = Language::resolve(Some("foo")).expect_err("foo is not a language");
        assert_eq!(err.to_string(), "Language 'foo' is not supported.");
        assert!("EN".parse::<Language>().is_err());
    }
}
