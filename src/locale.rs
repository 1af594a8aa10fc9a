//! Language detection.

use crate::language::LanguageCode;

/// Where the user's environment locale comes from.
pub trait LocaleSource {
    /// The reported locale string (e.g. `ko-KR`), if any.
    fn locale(&self) -> Option<String>;
}

/// The operating system's locale, as reported by `sys-locale`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLocale;

impl LocaleSource for SystemLocale {
    fn locale(&self) -> Option<String> {
        sys_locale::get_locale()
    }
}

/// A locale fixed up front.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixedLocale(pub Option<String>);

impl FixedLocale {
    /// Reports `locale` as the environment locale.
    #[must_use]
    pub fn new(locale: impl Into<String>) -> Self {
        Self(Some(locale.into()))
    }

    /// A source that reports nothing.
    #[must_use]
    pub const fn none() -> Self {
        Self(None)
    }
}

impl LocaleSource for FixedLocale {
    fn locale(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Picks the active language.
///
/// 1. `persisted`, when it names a supported language
/// 2. the language whose code prefixes `env_locale`
/// 3. `default`
#[must_use]
pub fn detect_language(
    persisted: Option<&str>,
    env_locale: Option<&str>,
    default: LanguageCode,
) -> LanguageCode {
    if let Some(lang) = persisted.and_then(|saved| saved.parse().ok()) {
        return lang;
    }

    if let Some(saved) = persisted {
        tracing::debug!(saved, "Ignoring unsupported persisted language");
    }

    env_locale.and_then(LanguageCode::from_locale_prefix).unwrap_or(default)
}
