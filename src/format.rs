//! Number and currency formatting.

use crate::language::LanguageCode;

/// Digit grouping convention of a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Grouping {
    /// Inserted between groups
    separator: char,
    /// Digits per group
    size: usize,
}

/// Korean (`ko-KR`) and US English (`en-US`) both group by thousands with a comma.
const fn grouping(lang: LanguageCode) -> Grouping {
    match lang {
        LanguageCode::Ko | LanguageCode::En => Grouping { separator: ',', size: 3 },
    }
}

/// Currency glyph shown next to amounts.
#[must_use]
pub const fn currency_symbol(lang: LanguageCode) -> &'static str {
    match lang {
        LanguageCode::Ko => "₩",
        LanguageCode::En => "$",
    }
}

/// Drops the fractional part (toward zero) and groups the digits.
///
/// `NaN` and infinities render as `NaN`, `∞` and `-∞`.
#[must_use]
pub fn format_money(amount: f64, lang: LanguageCode) -> String {
    if amount.is_nan() {
        return "NaN".to_string();
    }
    if amount.is_infinite() {
        return if amount.is_sign_negative() { "-∞" } else { "∞" }.to_string();
    }

    // `{:.0}` of an integral float prints every digit exactly, with no exponent.
    let truncated = format!("{:.0}", amount.trunc());
    let (negative, digits) = truncated
        .strip_prefix('-')
        .map_or((false, truncated.as_str()), |digits| (true, digits));

    let grouped = group_digits(digits, grouping(lang));
    if negative && digits.bytes().any(|b| b != b'0') { format!("-{grouped}") } else { grouped }
}

/// Currency symbol followed by [`format_money`], e.g. `₩1,500`.
#[must_use]
pub fn format_price(amount: f64, lang: LanguageCode) -> String {
    format!("{}{}", currency_symbol(lang), format_money(amount, lang))
}

/// Inserts separators into an ASCII digit string, counting from the right.
fn group_digits(digits: &str, grouping: Grouping) -> String {
    let len = digits.len();
    let mut result = String::with_capacity(len + len / grouping.size);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % grouping.size == 0 {
            result.push(grouping.separator);
        }
        result.push(ch);
    }

    result
}
