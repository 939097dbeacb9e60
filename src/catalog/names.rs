//! Display-name lookup for base creatures and their forms.
//!
//! Base names (including mega variant names) are keyed by id; form names by
//! `(id, formId)`. Later registrations win, so name files are registered in
//! sorted file order to keep the result deterministic.

use crate::catalog::raw::{LocalizedName, RawFormName, RawFormNames, RawName};
use crate::error::{PokedexError, PokedexResult};
use crate::language::Language;
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct NameTables {
    base: HashMap<String, LocalizedName>,
    forms: HashMap<String, Vec<RawFormName>>,
}

impl NameTables {
    pub fn register_names(&mut self, names: Vec<RawName>) {
        for entry in names {
            self.base.insert(entry.id, entry.name);
        }
    }

    pub fn register_form_names(&mut self, forms: Vec<RawFormNames>) {
        for entry in forms {
            self.forms.entry(entry.id).or_default().extend(entry.names);
        }
    }

    /// Localized base name for `id`.
    pub fn name(&self, id: &str, lang: Language) -> PokedexResult<&str> {
        self.base
            .get(id)
            .map(|name| name.get(lang))
            .ok_or_else(|| PokedexError::NameNotFound { id: id.to_string() })
    }

    /// Localized name of form `form_id` of base creature `id`.
    pub fn form_name(&self, id: &str, form_id: &str, lang: Language) -> PokedexResult<&str> {
        self.forms
            .get(id)
            .and_then(|names| names.iter().find(|name| name.form_id == form_id))
            .map(|name| name.get(lang))
            .ok_or_else(|| PokedexError::FormNameNotFound {
                id: id.to_string(),
                form_id: form_id.to_string(),
            })
    }

    pub fn base_len(&self) -> usize {
        self.base.len()
    }

    pub fn form_len(&self) -> usize {
        self.forms.values().map(Vec::len).sum()
    }
}
