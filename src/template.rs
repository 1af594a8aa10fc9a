//! `{name}` placeholder substitution.

use std::collections::{
    BTreeMap,
    BTreeSet,
};
use std::fmt::Display;

use serde_json::Value;
use thiserror::Error;

/// Error produced when a params payload cannot be decoded.
#[derive(Error, Debug)]
pub enum ParamError {
    /// The payload is not valid JSON.
    #[error("Invalid params payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Values to substitute into a template, keyed by placeholder name.
///
/// Values are stringified when inserted, so numbers and strings can be mixed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamSet {
    /// Placeholder name → rendered value
    values: BTreeMap<String, String>,
}

impl ParamSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Display) {
        self.values.insert(name.into(), value.to_string());
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Display) -> Self {
        self.insert(name, value);
        self
    }

    /// Returns the value bound to `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Whether no value is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of bound values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Iterates entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Decodes a JSON payload such as `{"item": "Road", "cost": 100}`.
    ///
    /// Objects bind their members; arrays bind their indices (`{0}`, `{1}`, ...).
    /// Any other JSON value decodes to an empty set. String values are used
    /// as-is, numbers in their shortest decimal form, other values as JSON text.
    ///
    /// # Errors
    /// Returns [`ParamError::InvalidJson`] when `payload` is not JSON.
    pub fn from_json_str(payload: &str) -> Result<Self, ParamError> {
        let value: Value = serde_json::from_str(payload)?;
        Ok(Self::from_json(&value))
    }

    /// See [`from_json_str`](Self::from_json_str).
    #[must_use]
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Object(map) => {
                map.iter().map(|(name, value)| (name.clone(), stringify(value))).collect()
            }
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(index, value)| (index.to_string(), stringify(value)))
                .collect(),
            _ => Self::new(),
        }
    }
}

/// Renders a JSON value the way it is shown to the user.
///
/// Whole floats drop their fraction (`1e3` and `1000.0` both show as `1000`).
fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) if n.is_f64() => {
            n.as_f64().map_or_else(|| n.to_string(), |f| f.to_string())
        }
        other => other.to_string(),
    }
}

impl<K, V> FromIterator<(K, V)> for ParamSet
where
    K: Into<String>,
    V: Display,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (name, value) in iter {
            params.insert(name, value);
        }
        params
    }
}

/// Substitutes every `{name}` in `template` whose name is bound in `params`.
///
/// Single left-to-right pass: substituted values are not scanned again, so the
/// result never depends on the order in which params are applied. Unbound
/// placeholders and stray braces are copied through unchanged.
#[must_use]
pub fn interpolate(template: &str, params: &ParamSet) -> String {
    if params.is_empty() {
        return template.to_string();
    }

    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        let (literal, candidate) = rest.split_at(open);
        out.push_str(literal);

        let Some(body) = candidate.strip_prefix('{') else {
            break;
        };

        let substituted = body.find(['{', '}']).and_then(|end| {
            let (name, remainder) = body.split_at(end);
            let after = remainder.strip_prefix('}')?;
            params.get(name).map(|value| (value, after))
        });

        if let Some((value, after)) = substituted {
            out.push_str(value);
            rest = after;
        } else {
            out.push('{');
            rest = body;
        }
    }

    out.push_str(rest);
    out
}

/// Collects the placeholder names used by `template`.
#[must_use]
pub fn placeholders(template: &str) -> BTreeSet<&str> {
    let mut names = BTreeSet::new();
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        let Some((_, body)) = rest.split_at(open).1.split_once('{') else {
            break;
        };
        match body.find(['{', '}']) {
            Some(end) => {
                let (name, remainder) = body.split_at(end);
                if let Some(after) = remainder.strip_prefix('}') {
                    names.insert(name);
                    rest = after;
                } else {
                    rest = remainder;
                }
            }
            None => break,
        }
    }

    names
}
