//! Per-language string tables.
//!
//! A [`Catalog`] holds one [`TranslationTable`] per supported language. It is
//! assembled once (built-in tables, then any language packs found in the
//! workspace) and never mutated afterwards; share it through `Arc`.

/// Built-in Korean and English tables
mod builtin;
/// JSON language packs
mod pack;

use std::collections::{
    BTreeMap,
    HashMap,
};
use std::path::{
    Path,
    PathBuf,
};

pub use pack::{
    LanguagePack,
    PackError,
    discover_packs,
    extract_key_ranges,
    flatten_json,
    load_pack,
};

use crate::config::I18nSettings;
use crate::language::LanguageCode;
use crate::types::SourceRange;

/// Where a pack-provided key is defined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyOrigin {
    /// Pack file
    pub file: PathBuf,
    /// Range of the key in the file
    pub range: SourceRange,
}

/// Flat mapping from dotted keys (`hud.budget`) to template strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationTable {
    /// Key → template
    entries: HashMap<String, String>,
    /// Key → definition site, for keys that came from a pack file
    origins: HashMap<String, KeyOrigin>,
}

impl TranslationTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from static `(key, template)` pairs.
    #[must_use]
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        pairs.iter().copied().collect()
    }

    /// Template stored for `key`. An empty template is still a hit.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Whether `key` has a template.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Definition site of `key`, if it was loaded from a pack file.
    #[must_use]
    pub fn origin(&self, key: &str) -> Option<&KeyOrigin> {
        self.origins.get(key)
    }

    /// Keys in arbitrary order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Adds or replaces an entry.
    pub fn insert(&mut self, key: impl Into<String>, template: impl Into<String>) {
        let key = key.into();
        self.origins.remove(&key);
        self.entries.insert(key, template.into());
    }

    /// Copies every pack entry over this table, recording where each key lives.
    fn overlay(&mut self, pack: LanguagePack) {
        let LanguagePack { path, entries, mut key_ranges, .. } = pack;
        for (key, template) in entries {
            let origin = key_ranges
                .remove(&key)
                .map(|range| KeyOrigin { file: path.clone(), range });
            match origin {
                Some(origin) => {
                    self.origins.insert(key.clone(), origin);
                }
                None => {
                    self.origins.remove(&key);
                }
            }
            self.entries.insert(key, template);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for TranslationTable
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (key, template) in iter {
            table.insert(key, template);
        }
        table
    }
}

/// All string tables, plus the language used as fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    /// One table per language
    tables: BTreeMap<LanguageCode, TranslationTable>,
    /// Second lookup tier
    default_language: LanguageCode,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    /// Empty catalog; add tables with [`with_table`](Self::with_table).
    #[must_use]
    pub fn new(default_language: LanguageCode) -> Self {
        Self { tables: BTreeMap::new(), default_language }
    }

    /// The built-in Korean and English tables, falling back to English.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(LanguageCode::DEFAULT)
            .with_table(LanguageCode::Ko, TranslationTable::from_pairs(builtin::KO))
            .with_table(LanguageCode::En, TranslationTable::from_pairs(builtin::EN))
    }

    /// Built-in tables overlaid with every language pack the settings point at.
    ///
    /// Packs that cannot be read, parsed or attributed to a supported language
    /// are skipped with a warning.
    ///
    /// # Errors
    /// Returns [`PackError::InvalidPattern`] when the pack file pattern is not a valid glob.
    pub fn load(settings: &I18nSettings, workspace_root: &Path) -> Result<Self, PackError> {
        let mut catalog = Self::builtin();
        catalog.default_language = settings.default_language;

        let files = discover_packs(workspace_root, &settings.translation_files.file_pattern)?;
        tracing::debug!(count = files.len(), "Found language packs");

        for file in files {
            match load_pack(&file, &settings.key_separator) {
                Ok(pack) => catalog = catalog.with_pack(pack),
                Err(e) => tracing::warn!("Skipping language pack: {e}"),
            }
        }

        Ok(catalog)
    }

    /// Adds or replaces the table for `language`.
    #[must_use]
    pub fn with_table(mut self, language: LanguageCode, table: TranslationTable) -> Self {
        self.tables.insert(language, table);
        self
    }

    /// Overlays a pack onto its language's table, creating the table if needed.
    #[must_use]
    pub fn with_pack(mut self, pack: LanguagePack) -> Self {
        tracing::debug!(
            language = %pack.language,
            path = %pack.path.display(),
            keys = pack.entries.len(),
            "Overlaying language pack"
        );
        self.tables.entry(pack.language).or_default().overlay(pack);
        self
    }

    /// Language consulted when the active one lacks a key.
    #[must_use]
    pub const fn default_language(&self) -> LanguageCode {
        self.default_language
    }

    /// True when `language` has a table.
    #[must_use]
    pub fn supports(&self, language: LanguageCode) -> bool {
        self.tables.contains_key(&language)
    }

    /// Table for `language`, if any.
    #[must_use]
    pub fn table(&self, language: LanguageCode) -> Option<&TranslationTable> {
        self.tables.get(&language)
    }

    /// Languages that have a table, in code order.
    pub fn languages(&self) -> impl Iterator<Item = LanguageCode> + '_ {
        self.tables.keys().copied()
    }

    /// Looks `key` up in `language`, then in the default language.
    ///
    /// An empty template counts as untranslated and falls through, so a pack
    /// that blanks a value shows the default language's text (or the key).
    #[must_use]
    pub fn lookup(&self, language: LanguageCode, key: &str) -> Option<&str> {
        let find = |language| {
            self.table(language).and_then(|table| table.get(key)).filter(|t| !t.is_empty())
        };
        find(language).or_else(|| find(self.default_language))
    }
}
