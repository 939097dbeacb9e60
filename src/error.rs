use std::path::PathBuf;
use thiserror::Error;

/// Which vocabulary a failed translation lookup belonged to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermKind {
    Type,
    EggGroup,
    Ability,
}

impl std::fmt::Display for TermKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TermKind::Type => write!(f, "Type"),
            TermKind::EggGroup => write!(f, "Egg group"),
            TermKind::Ability => write!(f, "Ability"),
        }
    }
}

/// Coarse classification used by outer layers to pick a response.
///
/// `Input` errors are the caller's fault (HTTP 400 behind a web front end),
/// `DataIntegrity` means the bundled shards disagree with each other, and
/// `Resource` covers I/O and serialization failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    Input,
    DataIntegrity,
    Resource,
}

#[derive(Error, Debug)]
pub enum PokedexError {
    #[error("Language '{0}' is not supported.")]
    UnsupportedLanguage(String),
    #[error("Invalid operator ({0}).")]
    InvalidOperator(String),
    #[error("Invalid sortKey ({0}).")]
    InvalidSortKey(String),
    #[error("Missing required parameter 'operator' when filtering by baseStatTotal")]
    MissingOperator,
    #[error("Invalid base stat total value ({0}).")]
    InvalidStatValue(String),

    #[error("{kind} translation not found for: {term}")]
    TranslationNotFound { kind: TermKind, term: String },
    #[error("Name not found for id: {id}")]
    NameNotFound { id: String },
    #[error("Form name not found for id: {id}, formId: {form_id}")]
    FormNameNotFound { id: String, form_id: String },
    #[error("Malformed stat {stat}={value} for id: {id}")]
    MalformedStat {
        id: String,
        stat: &'static str,
        value: String,
    },
    #[error("Invalid id '{id}' in {}", file.display())]
    InvalidId { id: String, file: PathBuf },

    #[error("Unable to read resource directory {}: {source}", path.display())]
    ResourceDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Unable to read shard {}: {source}", path.display())]
    ShardRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed shard {}: {source}", path.display())]
    ShardParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Error serializing pokemon: {0}")]
    Json(#[from] serde_json::Error),
}

impl PokedexError {
    pub fn class(&self) -> ErrorClass {
        match self {
            PokedexError::UnsupportedLanguage(_)
            | PokedexError::InvalidOperator(_)
            | PokedexError::InvalidSortKey(_)
            | PokedexError::MissingOperator
            | PokedexError::InvalidStatValue(_) => ErrorClass::Input,
            PokedexError::TranslationNotFound { .. }
            | PokedexError::NameNotFound { .. }
            | PokedexError::FormNameNotFound { .. }
            | PokedexError::MalformedStat { .. }
            | PokedexError::InvalidId { .. } => ErrorClass::DataIntegrity,
            PokedexError::ResourceDir { .. }
            | PokedexError::ShardRead { .. }
            | PokedexError::ShardParse { .. }
            | PokedexError::Json(_) => ErrorClass::Resource,
        }
    }
}

pub type PokedexResult<T> = Result<T, PokedexError>;
