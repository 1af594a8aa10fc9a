//! Supported UI languages.

use std::fmt;
use std::str::FromStr;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

/// Error returned when a string does not name a supported language.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unsupported language code '{0}'")]
pub struct UnsupportedLanguage(pub String);

/// A language the UI can be displayed in.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum LanguageCode {
    /// Korean
    Ko,
    /// English
    #[default]
    En,
}

impl LanguageCode {
    /// Every supported language, in table order.
    pub const ALL: [Self; 2] = [Self::Ko, Self::En];

    /// Language used when nothing else applies.
    pub const DEFAULT: Self = Self::En;

    /// Short code, as stored in preferences and written to the root `lang` attribute.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ko => "ko",
            Self::En => "en",
        }
    }

    /// Returns the language whose code prefixes `locale` (e.g. `ko-KR` → `Ko`).
    ///
    /// Matching is case-insensitive and only considers the leading code, so
    /// `en_US`, `en-GB` and `en` all select English.
    #[must_use]
    pub fn from_locale_prefix(locale: &str) -> Option<Self> {
        let locale = locale.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|lang| locale.starts_with(lang.as_str()))
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LanguageCode {
    type Err = UnsupportedLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|lang| lang.as_str() == s)
            .ok_or_else(|| UnsupportedLanguage(s.to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("ko", LanguageCode::Ko)]
    #[case("en", LanguageCode::En)]
    fn parse_supported_codes(#[case] input: &str, #[case] expected: LanguageCode) {
        assert_that!(input.parse::<LanguageCode>(), ok(eq(&expected)));
    }

    #[rstest]
    #[case::unknown("xx")]
    #[case::uppercase("EN")]
    #[case::region("ko-KR")]
    #[case::empty("")]
    fn parse_rejects_everything_else(#[case] input: &str) {
        assert_that!(
            input.parse::<LanguageCode>(),
            err(eq(&UnsupportedLanguage(input.to_string())))
        );
    }

    #[rstest]
    #[case("ko-KR", Some(LanguageCode::Ko))]
    #[case("ko", Some(LanguageCode::Ko))]
    #[case("KO_kr", Some(LanguageCode::Ko))]
    #[case("en-US", Some(LanguageCode::En))]
    #[case("fr-FR", None)]
    #[case("", None)]
    fn locale_prefix(#[case] locale: &str, #[case] expected: Option<LanguageCode>) {
        assert_that!(LanguageCode::from_locale_prefix(locale), eq(expected));
    }

    #[googletest::test]
    fn display_round_trips_through_from_str() {
        for lang in LanguageCode::ALL {
            expect_that!(lang.to_string().parse::<LanguageCode>(), ok(eq(&lang)));
        }
    }

    #[googletest::test]
    fn serde_uses_short_codes() {
        let json = serde_json::to_string(&LanguageCode::Ko).unwrap();
        expect_that!(json, eq("\"ko\""));
        let parsed: LanguageCode = serde_json::from_str("\"en\"").unwrap();
        expect_that!(parsed, eq(LanguageCode::En));
    }
}
