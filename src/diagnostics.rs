//! Consistency checks across the translation tables.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use crate::catalog::{
    Catalog,
    KeyOrigin,
};
use crate::language::LanguageCode;
use crate::template::placeholders;

/// Category of a [`CatalogDiagnostic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DiagnosticKind {
    /// A language lacks a key some other language defines.
    MissingKey,
    /// A template's `{name}` set differs from the default language's.
    PlaceholderMismatch,
}

/// One problem found in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogDiagnostic {
    /// What kind of problem this is
    pub kind: DiagnosticKind,
    /// Language the problem was found in
    pub language: LanguageCode,
    /// Affected translation key
    pub key: String,
    /// Human-readable description
    pub message: String,
    /// Pack location relevant to the problem, when the key came from a pack.
    pub origin: Option<KeyOrigin>,
}

impl fmt::Display for CatalogDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(origin) = &self.origin {
            write!(f, "{}:{}: ", origin.file.display(), origin.range.start)?;
        }
        write!(f, "[{}] {}", self.language, self.message)
    }
}

/// Reports missing keys and placeholder mismatches.
///
/// Every key defined in any language is expected in every language. Templates
/// are compared against the default language's; a language missing the key
/// entirely only produces a [`DiagnosticKind::MissingKey`]. The result is
/// sorted by key, then language.
#[must_use]
pub fn check_catalog(catalog: &Catalog) -> Vec<CatalogDiagnostic> {
    let mut diagnostics = Vec::new();

    let all_keys: BTreeSet<&str> = catalog
        .languages()
        .filter_map(|language| catalog.table(language))
        .flat_map(|table| table.keys())
        .collect();
    let default_language = catalog.default_language();
    let default_table = catalog.table(default_language);

    for language in catalog.languages() {
        let Some(table) = catalog.table(language) else {
            continue;
        };

        for &key in &all_keys {
            let Some(template) = table.get(key) else {
                diagnostics.push(CatalogDiagnostic {
                    kind: DiagnosticKind::MissingKey,
                    language,
                    key: key.to_string(),
                    message: format!("Translation key '{key}' missing for '{language}'"),
                    origin: defining_origin(catalog, key),
                });
                continue;
            };

            if language == default_language {
                continue;
            }
            let Some(reference) = default_table.and_then(|t| t.get(key)) else {
                continue;
            };

            let expected = placeholders(reference);
            let actual = placeholders(template);
            if expected != actual {
                diagnostics.push(CatalogDiagnostic {
                    kind: DiagnosticKind::PlaceholderMismatch,
                    language,
                    key: key.to_string(),
                    message: format!(
                        "Placeholders of '{key}' differ from '{default_language}': expected {}, found {}",
                        describe(&expected),
                        describe(&actual)
                    ),
                    origin: table.origin(key).cloned(),
                });
            }
        }
    }

    diagnostics.sort_by(|a, b| {
        (a.key.as_str(), a.language, a.kind).cmp(&(b.key.as_str(), b.language, b.kind))
    });
    tracing::debug!(count = diagnostics.len(), "Catalog checked");
    diagnostics
}

/// First pack location defining `key`, in language order.
fn defining_origin(catalog: &Catalog, key: &str) -> Option<KeyOrigin> {
    catalog
        .languages()
        .filter_map(|language| catalog.table(language)?.origin(key))
        .next()
        .cloned()
}

/// `{a}, {b}` or `none`.
fn describe(names: &BTreeSet<&str>) -> String {
    if names.is_empty() {
        return "none".to_string();
    }
    names.iter().map(|name| format!("{{{name}}}")).collect::<Vec<_>>().join(", ")
}
