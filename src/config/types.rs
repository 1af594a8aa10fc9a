use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::language::LanguageCode;

/// One invalid settings field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "markers.content")
    pub field_path: String,
    /// What is wrong with the field
    pub message: String,
}

impl ValidationError {
    /// Creates an error for `field_path`.
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

/// Error raised while loading `.city-i18n.json`.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Renders validation errors as a numbered list.
fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Settings read from `.city-i18n.json`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct I18nSettings {
    /// Second lookup tier, and the language picked when detection finds nothing.
    pub default_language: LanguageCode,

    /// Preference key the active language is persisted under.
    pub storage_key: String,

    /// Preference file, relative to the workspace root.
    pub preference_file: String,

    /// Separator used to flatten nested language packs.
    pub key_separator: String,

    /// Attribute names the binder scans for.
    pub markers: MarkerAttributes,
    /// Where language packs are discovered.
    pub translation_files: TranslationFilesConfig,
}

/// Attribute names the binder looks for.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MarkerAttributes {
    /// Key whose text replaces the element content.
    pub content: String,
    /// JSON params for the content key.
    pub params: String,
    /// Key whose text goes into the `placeholder` attribute.
    pub placeholder: String,
    /// Key whose text goes into the `title` attribute.
    pub title: String,
}

impl Default for MarkerAttributes {
    fn default() -> Self {
        Self {
            content: "data-i18n".to_string(),
            params: "data-i18n-params".to_string(),
            placeholder: "data-i18n-placeholder".to_string(),
            title: "data-i18n-title".to_string(),
        }
    }
}

/// Language pack discovery settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TranslationFilesConfig {
    /// Glob, relative to the workspace root, selecting language pack files.
    pub file_pattern: String,
}

impl Default for TranslationFilesConfig {
    fn default() -> Self {
        Self { file_pattern: "locales/*.json".to_string() }
    }
}

impl I18nSettings {
    /// # Errors
    /// - Required field is empty
    /// - Invalid glob pattern
    /// - Marker attributes that collide
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.storage_key.is_empty() {
            errors.push(ValidationError::new(
                "storageKey",
                "The storage key cannot be empty. Example: \"i18n-lang\"",
            ));
        }

        if self.preference_file.is_empty() {
            errors.push(ValidationError::new(
                "preferenceFile",
                "The preference file cannot be empty. Example: \".city-i18n/preferences.json\"",
            ));
        }

        if self.key_separator.is_empty() {
            errors.push(ValidationError::new(
                "keySeparator",
                "The separator cannot be empty. Please specify a separator, for example: \".\" (dot)",
            ));
        }

        let markers = [
            ("markers.content", &self.markers.content),
            ("markers.params", &self.markers.params),
            ("markers.placeholder", &self.markers.placeholder),
            ("markers.title", &self.markers.title),
        ];
        for (index, (field, name)) in markers.iter().enumerate() {
            if name.is_empty() {
                errors.push(ValidationError::new(
                    *field,
                    "The attribute name cannot be empty. Example: \"data-i18n\"",
                ));
                continue;
            }
            let clash = markers.iter().take(index).find(|(_, other)| other == name);
            if let Some((other_field, _)) = clash {
                errors.push(ValidationError::new(
                    *field,
                    format!("Attribute '{name}' is already used by '{other_field}'"),
                ));
            }
        }

        if self.translation_files.file_pattern.is_empty() {
            errors.push(ValidationError::new(
                "translationFiles.filePattern",
                "The pattern cannot be empty. Example: \"locales/*.json\"",
            ));
        } else if let Err(e) = globset::Glob::new(&self.translation_files.file_pattern) {
            errors.push(ValidationError::new(
                "translationFiles.filePattern",
                format!("Invalid glob pattern '{}': {e}", self.translation_files.file_pattern),
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

impl Default for I18nSettings {
    fn default() -> Self {
        Self {
            default_language: LanguageCode::DEFAULT,
            storage_key: "i18n-lang".to_string(),
            preference_file: ".city-i18n/preferences.json".to_string(),
            key_separator: ".".to_string(),
            markers: MarkerAttributes::default(),
            translation_files: TranslationFilesConfig::default(),
        }
    }
}
