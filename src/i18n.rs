//! Content language and translation lookup.
//!
//! A `Translations` table is built once per language switch (one row per key,
//! one column per language) and is read-only while a page renders. Unresolved
//! keys fall back to the key itself, which is the visible failure mode.

use std::fmt;
use std::str::FromStr;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::content::types::TranslationRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ru,
    Kz,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::Ru => "ru",
            Language::Kz => "kz",
        }
    }

    /// Label shown in the language switcher.
    pub fn switcher_label(&self) -> &'static str {
        match self {
            Language::Ru => "RUS",
            Language::Kz => "QAZ",
        }
    }

    pub fn all() -> [Language; 2] {
        [Language::Ru, Language::Kz]
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown language code: {0}")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ru" => Ok(Language::Ru),
            "kz" => Ok(Language::Kz),
            _ => Err(UnknownLanguage(s.to_string())),
        }
    }
}

/// Resolves a content key to display text for the current language.
pub trait TextSource {
    fn text(&self, key: &str) -> String;
}

/// Resolve an optional slot. An absent key renders nothing and never reaches
/// the lookup; a present key always yields text (possibly the key itself).
pub fn resolve_slot(texts: &dyn TextSource, key: Option<&str>) -> Option<String> {
    key.filter(|k| !k.is_empty()).map(|k| texts.text(k))
}

#[derive(Debug, Clone, Default)]
pub struct Translations {
    language: Language,
    table: FxHashMap<String, String>,
}

impl Translations {
    pub fn empty(language: Language) -> Self {
        Self { language, table: FxHashMap::default() }
    }

    pub fn from_rows(language: Language, rows: impl IntoIterator<Item = TranslationRow>) -> Self {
        let table = rows
            .into_iter()
            .filter_map(|row| {
                let value = match language {
                    Language::Ru => row.value_ru,
                    Language::Kz => row.value_kz,
                };
                // Empty values behave like missing ones
                value.filter(|v| !v.is_empty()).map(|v| (row.key, v))
            })
            .collect();
        Self { language, table }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.table.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl TextSource for Translations {
    fn text(&self, key: &str) -> String {
        self.get(key).unwrap_or(key).to_string()
    }
}
