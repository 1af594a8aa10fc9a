//! The active-language state and everything that reads it.
//!
//! [`Translator`] is a borrowed, read-only view used for resolving text;
//! [`Localizer`] owns the mutable state (active language, preference store,
//! locale source) and performs the side effects.

use std::fmt;
use std::sync::Arc;

use crate::binder::{
    self,
    Document,
};
use crate::catalog::Catalog;
use crate::config::{
    I18nSettings,
    MarkerAttributes,
};
use crate::format;
use crate::language::LanguageCode;
use crate::locale::{
    self,
    LocaleSource,
};
use crate::storage::PreferenceStore;
use crate::template::{
    ParamSet,
    interpolate,
};

/// Resolves keys for one language.
#[derive(Debug, Clone, Copy)]
pub struct Translator<'a> {
    /// Source of templates
    catalog: &'a Catalog,
    /// Language tried first
    language: LanguageCode,
}

impl<'a> Translator<'a> {
    /// A translator resolving into `language`.
    #[must_use]
    pub const fn new(catalog: &'a Catalog, language: LanguageCode) -> Self {
        Self { catalog, language }
    }

    /// Language tried first.
    #[must_use]
    pub const fn language(&self) -> LanguageCode {
        self.language
    }

    /// Translates `key` without parameters.
    #[must_use]
    pub fn t(&self, key: &str) -> String {
        self.t_with(key, &ParamSet::new())
    }

    /// Translates `key`, falling back to the default language and then to
    /// the key itself, and substitutes `params`.
    #[must_use]
    pub fn t_with(&self, key: &str, params: &ParamSet) -> String {
        let template = self.catalog.lookup(self.language, key).unwrap_or_else(|| {
            tracing::trace!(key, lang = %self.language, "No translation, using key");
            key
        });
        interpolate(template, params)
    }
}

/// Owns the active language and its persistence.
pub struct Localizer<S> {
    /// Translation tables
    catalog: Arc<Catalog>,
    /// Active language
    language: LanguageCode,
    /// Where the chosen language is persisted
    store: S,
    /// Environment locale for first-run detection
    locale_source: Box<dyn LocaleSource + Send + Sync>,
    /// Key the language is persisted under
    storage_key: String,
    /// Attribute names swept by [`Localizer::apply_translations`]
    markers: MarkerAttributes,
}

impl<S: fmt::Debug> fmt::Debug for Localizer<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Localizer")
            .field("language", &self.language)
            .field("store", &self.store)
            .field("storage_key", &self.storage_key)
            .field("markers", &self.markers)
            .finish_non_exhaustive()
    }
}

impl<S: PreferenceStore> Localizer<S> {
    /// Creates a localizer with default settings. The active language starts
    /// as the catalog's default; call [`Localizer::init`] or
    /// [`Localizer::detect_language`] to pick the user's language.
    pub fn new(
        catalog: Arc<Catalog>,
        store: S,
        locale_source: impl LocaleSource + Send + Sync + 'static,
    ) -> Self {
        Self::from_settings(&I18nSettings::default(), catalog, store, locale_source)
    }

    /// Creates a localizer using the storage key and marker names of `settings`.
    pub fn from_settings(
        settings: &I18nSettings,
        catalog: Arc<Catalog>,
        store: S,
        locale_source: impl LocaleSource + Send + Sync + 'static,
    ) -> Self {
        Self {
            language: catalog.default_language(),
            catalog,
            store,
            locale_source: Box::new(locale_source),
            storage_key: settings.storage_key.clone(),
            markers: settings.markers.clone(),
        }
    }

    /// The catalog translations are resolved against.
    #[must_use]
    pub const fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// The preference store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// The active language.
    #[must_use]
    pub const fn lang(&self) -> LanguageCode {
        self.language
    }

    /// Read-only view for the active language.
    #[must_use]
    pub fn translator(&self) -> Translator<'_> {
        Translator::new(&self.catalog, self.language)
    }

    /// See [`Translator::t`].
    #[must_use]
    pub fn t(&self, key: &str) -> String {
        self.translator().t(key)
    }

    /// See [`Translator::t_with`].
    #[must_use]
    pub fn t_with(&self, key: &str, params: &ParamSet) -> String {
        self.translator().t_with(key, params)
    }

    /// Picks the language from the persisted preference, then the environment
    /// locale, then the catalog default, and makes it active.
    pub fn detect_language(&mut self) -> LanguageCode {
        let persisted = match self.store.get(&self.storage_key) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key = %self.storage_key, "Failed to read language preference: {e}");
                None
            }
        };
        let env_locale = self.locale_source.locale();
        let default = self.catalog.default_language();

        let detected = locale::detect_language(persisted.as_deref(), env_locale.as_deref(), default);
        self.language = if self.catalog.supports(detected) { detected } else { default };

        tracing::debug!(
            persisted = ?persisted,
            env_locale = ?env_locale,
            lang = %self.language,
            "Detected language"
        );
        self.language
    }

    /// Switches the active language, persists it, and re-renders `document`.
    ///
    /// Returns `false` and changes nothing when `lang` is not a language the
    /// catalog has. A failed write to the preference store is logged; the
    /// switch still happens.
    pub fn set_lang<D: Document + ?Sized>(&mut self, lang: &str, document: &mut D) -> bool {
        let Some(language) = lang.parse().ok().filter(|&l| self.catalog.supports(l)) else {
            tracing::debug!(lang, "Rejected unsupported language");
            return false;
        };

        self.language = language;
        if let Err(e) = self.store.set(&self.storage_key, language.as_str()) {
            tracing::warn!(key = %self.storage_key, lang, "Failed to persist language: {e}");
        }
        self.apply_translations(document);

        tracing::info!(lang = %language, "Language changed");
        true
    }

    /// Re-renders every marked element of `document` in the active language.
    ///
    /// Returns the number of elements written.
    pub fn apply_translations<D: Document + ?Sized>(&self, document: &mut D) -> usize {
        binder::apply_translations(&self.translator(), &self.markers, document)
    }

    /// Detects the language and renders `document`.
    pub fn init<D: Document + ?Sized>(&mut self, document: &mut D) -> LanguageCode {
        let language = self.detect_language();
        self.apply_translations(document);
        language
    }

    /// See [`format::format_money`].
    #[must_use]
    pub fn format_money(&self, amount: f64) -> String {
        format::format_money(amount, self.language)
    }

    /// Currency symbol of the active language.
    #[must_use]
    pub const fn currency(&self) -> &'static str {
        format::currency_symbol(self.language)
    }
}
