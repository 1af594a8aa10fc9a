//! city-i18n
//!
//! Korean/English localization runtime for the city builder's UI: string
//! tables with fallback, `{name}` parameter substitution, language detection
//! and persistence, declarative binding of translated text into document
//! elements, and locale-aware money formatting.

pub mod binder;
pub mod catalog;
pub mod config;
pub mod diagnostics;
pub mod format;
pub mod language;
pub mod lifecycle;
pub mod locale;
pub mod localizer;
pub mod storage;
pub mod template;
pub mod types;

pub use catalog::Catalog;
pub use language::LanguageCode;
pub use localizer::{
    Localizer,
    Translator,
};
pub use template::ParamSet;
