//! JSON language packs.
//!
//! A pack is a JSON file such as `locales/ko.json` whose (possibly nested)
//! object is flattened into dotted keys and overlaid onto a built-in table.

use std::collections::HashMap;
use std::path::{
    Path,
    PathBuf,
};

use globset::Glob;
use ignore::WalkBuilder;
use serde_json::Value;
use thiserror::Error;

use crate::language::LanguageCode;
use crate::types::SourceRange;

/// Errors raised while locating or reading language packs.
#[derive(Error, Debug)]
pub enum PackError {
    #[error("Failed to read language pack {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse language pack {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Cannot tell which supported language {} is for", .0.display())]
    UnknownLanguage(PathBuf),

    #[error("Invalid translation file pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },
}

/// Translations read from one pack file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguagePack {
    /// Language detected from the file name
    pub language: LanguageCode,
    /// Pack file
    pub path: PathBuf,
    /// Flattened key map (e.g. `"hud.budget" -> "Budget"`).
    pub entries: HashMap<String, String>,
    /// Where each key is written in the file.
    pub key_ranges: HashMap<String, SourceRange>,
}

/// Detects the pack language from its path.
///
/// Splits the path on `/` and `.` and searches backwards for a part naming a
/// supported language, so `locales/ko.json`, `i18n/en/hud.json` and
/// `locales/ko-KR.json` all resolve.
fn detect_language_from_path(file_path: &Path) -> Option<LanguageCode> {
    let path_str = file_path.to_string_lossy();
    let parts: Vec<&str> = path_str.split(&['/', '\\', '.']).collect();

    parts.iter().rev().find_map(|part| {
        part.parse::<LanguageCode>().ok().or_else(|| {
            let (code, _region) = part.split_once(['-', '_'])?;
            code.to_ascii_lowercase().parse().ok()
        })
    })
}

/// Flatten nested JSON object into dot-separated key map.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use city_i18n::catalog::flatten_json;
///
/// let json = json!({
///     "hud": {
///         "budget": "Budget",
///         "tax": "Tax"
///     }
/// });
///
/// let flattened = flatten_json(&json, ".", None);
/// assert_eq!(flattened.get("hud.budget"), Some(&"Budget".to_string()));
/// assert_eq!(flattened.get("hud.tax"), Some(&"Tax".to_string()));
/// ```
#[must_use]
pub fn flatten_json(
    json: &Value,
    separator: &str,
    prefix: Option<&str>,
) -> HashMap<String, String> {
    let mut result = HashMap::new();
    flatten_json_value(json, separator, prefix, &mut result);
    result
}

/// Recursive worker for [`flatten_json`].
fn flatten_json_value(
    json: &Value,
    separator: &str,
    prefix: Option<&str>,
    result: &mut HashMap<String, String>,
) {
    match json {
        Value::Object(map) => {
            for (key, value) in map {
                let full_key =
                    prefix.map_or_else(|| key.clone(), |p| format!("{p}{separator}{key}"));
                flatten_json_value(value, separator, Some(&full_key), result);
            }
        }
        Value::Array(arr) => {
            for (index, value) in arr.iter().enumerate() {
                let full_key =
                    prefix.map_or_else(|| format!("[{index}]"), |p| format!("{p}[{index}]"));
                flatten_json_value(value, separator, Some(&full_key), result);
            }
        }
        Value::String(s) => {
            if let Some(key) = prefix {
                result.insert(key.to_string(), s.clone());
            }
        }
        _ => {
            if let Some(key) = prefix {
                result.insert(key.to_string(), json.to_string());
            }
        }
    }
}

/// Extract the source range of every flattened key using tree-sitter.
#[must_use]
pub fn extract_key_ranges(json_text: &str, separator: &str) -> HashMap<String, SourceRange> {
    let mut key_ranges = HashMap::new();

    let mut parser = tree_sitter::Parser::new();
    let Ok(()) = parser.set_language(&tree_sitter_json::LANGUAGE.into()) else {
        tracing::warn!("Failed to set tree-sitter-json language");
        return key_ranges;
    };

    let Some(tree) = parser.parse(json_text, None) else {
        tracing::warn!("Failed to parse JSON with tree-sitter");
        return key_ranges;
    };

    let root_node = tree.root_node();
    extract_keys_from_node(root_node, json_text.as_bytes(), separator, None, &mut key_ranges);

    key_ranges
}

/// Walks documents, objects and arrays, dispatching pairs to [`extract_pair`].
fn extract_keys_from_node(
    node: tree_sitter::Node<'_>,
    source: &[u8],
    separator: &str,
    prefix: Option<&str>,
    key_ranges: &mut HashMap<String, SourceRange>,
) {
    match node.kind() {
        "document" | "object" => {
            let mut cursor = node.walk();
            for child in node.children(&mut cursor) {
                extract_keys_from_node(child, source, separator, prefix, key_ranges);
            }
        }
        "array" => extract_array_elements(node, source, separator, prefix, key_ranges),
        "pair" => extract_pair(node, source, separator, prefix, key_ranges),
        _ => {}
    }
}

/// Records `key[i]` for each array element.
fn extract_array_elements(
    node: tree_sitter::Node<'_>,
    source: &[u8],
    separator: &str,
    prefix: Option<&str>,
    key_ranges: &mut HashMap<String, SourceRange>,
) {
    let mut cursor = node.walk();
    let elements =
        node.children(&mut cursor).filter(|child| !matches!(child.kind(), "[" | "]" | ","));

    for (index, child) in elements.enumerate() {
        let full_key = prefix.map_or_else(|| format!("[{index}]"), |p| format!("{p}[{index}]"));
        key_ranges.insert(full_key.clone(), SourceRange::from_node(&child));

        if matches!(child.kind(), "object" | "array") {
            extract_keys_from_node(child, source, separator, Some(&full_key), key_ranges);
        }
    }
}

/// Records the key of a `"key": value` pair and descends into nested values.
fn extract_pair(
    node: tree_sitter::Node<'_>,
    source: &[u8],
    separator: &str,
    prefix: Option<&str>,
    key_ranges: &mut HashMap<String, SourceRange>,
) {
    let Some(key_node) = node.child_by_field_name("key") else {
        return;
    };
    let Some(value_node) = node.child_by_field_name("value") else {
        return;
    };

    let Ok(key_text) = key_node.utf8_text(source) else {
        tracing::warn!("Failed to get key text from node");
        return;
    };
    let key = key_text.trim_matches('"');

    let full_key = prefix.map_or_else(|| key.to_string(), |p| format!("{p}{separator}{key}"));

    key_ranges.insert(full_key.clone(), SourceRange::from_node(&key_node));

    if matches!(value_node.kind(), "object" | "array") {
        extract_keys_from_node(value_node, source, separator, Some(&full_key), key_ranges);
    }
}

/// Reads one pack file.
///
/// # Errors
/// Fails when the file cannot be read, is not JSON, or its path names no
/// supported language.
pub fn load_pack(file_path: &Path, separator: &str) -> Result<LanguagePack, PackError> {
    let language = detect_language_from_path(file_path)
        .ok_or_else(|| PackError::UnknownLanguage(file_path.to_path_buf()))?;

    let content = std::fs::read_to_string(file_path)
        .map_err(|source| PackError::Io { path: file_path.to_path_buf(), source })?;

    let json: Value = serde_json::from_str(&content)
        .map_err(|source| PackError::Json { path: file_path.to_path_buf(), source })?;

    let entries = flatten_json(&json, separator, None);
    let mut key_ranges = extract_key_ranges(&content, separator);
    key_ranges.retain(|key, _| entries.contains_key(key));

    Ok(LanguagePack { language, path: file_path.to_path_buf(), entries, key_ranges })
}

/// Finds pack files under `root` whose relative path matches `pattern`.
///
/// Honors `.gitignore`. The result is sorted so packs overlay in a stable order.
///
/// # Errors
/// Returns [`PackError::InvalidPattern`] for a malformed glob.
pub fn discover_packs(root: &Path, pattern: &str) -> Result<Vec<PathBuf>, PackError> {
    let matcher = Glob::new(pattern)
        .map_err(|source| PackError::InvalidPattern { pattern: pattern.to_string(), source })?
        .compile_matcher();

    let mut found_files = Vec::new();
    for result in WalkBuilder::new(root).hidden(false).git_ignore(true).follow_links(false).build()
    {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                tracing::debug!(?err, "Failed to read directory entry");
                continue;
            }
        };

        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        let path = entry.path();
        let Ok(relative_path) = path.strip_prefix(root) else {
            continue;
        };
        if matcher.is_match(relative_path) {
            found_files.push(path.to_path_buf());
        }
    }

    found_files.sort();
    Ok(found_files)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::fs;

    use googletest::prelude::*;
    use rstest::rstest;
    use serde_json::json;
    use tempfile::TempDir;

    use super::*;

    #[googletest::test]
    fn test_flatten_json_nested() {
        let json = json!({
            "hud": {
                "budget": "Budget",
                "tax": "Tax"
            },
            "toast": {
                "saved": "Saved"
            }
        });

        let result = flatten_json(&json, ".", None);

        expect_that!(result.get("hud.budget"), some(eq(&"Budget".to_string())));
        expect_that!(result.get("hud.tax"), some(eq(&"Tax".to_string())));
        expect_that!(result.get("toast.saved"), some(eq(&"Saved".to_string())));
        expect_that!(result.len(), eq(3));
    }

    #[googletest::test]
    fn test_flatten_json_keeps_dotted_keys() {
        let json = json!({ "hud.budget": "Budget" });

        let result = flatten_json(&json, ".", None);

        expect_that!(result.get("hud.budget"), some(eq(&"Budget".to_string())));
    }

    #[googletest::test]
    fn test_flatten_json_custom_separator() {
        let json = json!({ "hud": { "budget": "Budget" } });

        let result = flatten_json(&json, "_", None);

        expect_that!(result.get("hud_budget"), some(eq(&"Budget".to_string())));
    }

    #[googletest::test]
    fn test_flatten_json_non_string_values() {
        let json = json!({ "number": 42, "boolean": true, "null": null });

        let result = flatten_json(&json, ".", None);

        expect_that!(result.get("number"), some(eq(&"42".to_string())));
        expect_that!(result.get("boolean"), some(eq(&"true".to_string())));
        expect_that!(result.get("null"), some(eq(&"null".to_string())));
    }

    #[googletest::test]
    fn test_flatten_json_with_array() {
        let json = json!({ "hint": { "steps": ["Drag", "Release"] } });

        let result = flatten_json(&json, ".", None);

        expect_that!(result.get("hint.steps[0]"), some(eq(&"Drag".to_string())));
        expect_that!(result.get("hint.steps[1]"), some(eq(&"Release".to_string())));
    }

    #[rstest]
    #[case("/game/locales/ko.json", Some(LanguageCode::Ko))]
    #[case("/game/locales/en.json", Some(LanguageCode::En))]
    #[case("/game/locales/en/hud.json", Some(LanguageCode::En))]
    #[case("/game/locales/ko-KR.json", Some(LanguageCode::Ko))]
    #[case("/game/locales/en_US/hud.json", Some(LanguageCode::En))]
    #[case("/game/locales/en/ko.json", Some(LanguageCode::Ko))]
    #[case("/game/locales/fr.json", None)]
    #[case("/game/locales/hud.json", None)]
    fn test_detect_language_from_path(#[case] path: &str, #[case] expected: Option<LanguageCode>) {
        assert_that!(detect_language_from_path(Path::new(path)), eq(expected));
    }

    #[googletest::test]
    fn test_extract_key_ranges_nested() {
        let json_text = r#"{
  "hud": {
    "budget": "Budget",
    "tax": "Tax"
  }
}"#;

        let key_ranges = extract_key_ranges(json_text, ".");

        expect_that!(key_ranges.len(), eq(3));
        expect_that!(key_ranges.contains_key("hud"), eq(true));
        expect_that!(key_ranges.contains_key("hud.tax"), eq(true));

        let budget = key_ranges.get("hud.budget");
        expect_that!(budget, some(anything()));
        if let Some(range) = budget {
            expect_that!(range.start.line, eq(2));
            expect_that!(range.start.character, eq(4));
        }
    }

    #[googletest::test]
    fn test_extract_key_ranges_with_array_of_objects() {
        let json_text = r#"{
  "tips": [
    { "text": "Build roads" },
    { "text": "Zone houses" }
  ]
}"#;

        let key_ranges = extract_key_ranges(json_text, ".");

        expect_that!(key_ranges.contains_key("tips[0]"), eq(true));
        expect_that!(key_ranges.contains_key("tips[0].text"), eq(true));
        expect_that!(key_ranges.contains_key("tips[1].text"), eq(true));
    }

    #[googletest::test]
    fn test_load_pack_keeps_only_leaf_ranges() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ko.json");
        fs::write(&path, "{\n  \"hud\": {\n    \"budget\": \"자금\"\n  }\n}").unwrap();

        let pack = load_pack(&path, ".").unwrap();

        expect_that!(pack.language, eq(LanguageCode::Ko));
        expect_that!(pack.entries.get("hud.budget"), some(eq(&"자금".to_string())));
        expect_that!(pack.key_ranges.contains_key("hud"), eq(false));
        expect_that!(pack.key_ranges.contains_key("hud.budget"), eq(true));
    }

    #[googletest::test]
    fn test_load_pack_errors() {
        let temp_dir = TempDir::new().unwrap();
        let unknown = temp_dir.path().join("fr.json");
        fs::write(&unknown, "{}").unwrap();
        let broken = temp_dir.path().join("en.json");
        fs::write(&broken, "{").unwrap();
        let missing = temp_dir.path().join("ko.json");

        expect_that!(
            matches!(load_pack(&unknown, "."), Err(PackError::UnknownLanguage(_))),
            eq(true)
        );
        expect_that!(matches!(load_pack(&broken, "."), Err(PackError::Json { .. })), eq(true));
        expect_that!(matches!(load_pack(&missing, "."), Err(PackError::Io { .. })), eq(true));
    }

    #[googletest::test]
    fn test_discover_packs_matches_pattern() {
        let temp_dir = TempDir::new().unwrap();
        let locales = temp_dir.path().join("locales");
        fs::create_dir_all(locales.join("nested")).unwrap();
        fs::write(locales.join("ko.json"), "{}").unwrap();
        fs::write(locales.join("en.json"), "{}").unwrap();
        fs::write(locales.join("notes.txt"), "").unwrap();
        fs::write(temp_dir.path().join("en.json"), "{}").unwrap();

        let files = discover_packs(temp_dir.path(), "locales/*.json").unwrap();

        expect_that!(files, eq(&vec![locales.join("en.json"), locales.join("ko.json")]));
    }
}
