//! A document held entirely in memory.
//!
//! Serializes to and from JSON, which is how the CLI's `render` command reads
//! and writes pages:
//!
//! ```json
//! {
//!   "readyState": "complete",
//!   "elements": [
//!     { "tag": "span", "attributes": { "data-i18n": "hud.budget" } }
//!   ]
//! }
//! ```

use std::collections::BTreeMap;

use serde::{
    Deserialize,
    Serialize,
};

use super::{
    Document,
    ElementId,
    ReadyState,
    Target,
};

/// One element of a [`MemoryDocument`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MemoryElement {
    /// Tag name, e.g. `span`
    pub tag: String,
    /// Attribute name → value
    pub attributes: BTreeMap<String, String>,
    /// Text content
    pub text: String,
}

impl MemoryElement {
    /// Creates an empty element.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into(), ..Self::default() }
    }

    /// Builder-style attribute setter.
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Builder-style text setter.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Value of attribute `name`.
    #[must_use]
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

/// A [`Document`] backed by plain data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MemoryDocument {
    /// Root `lang` attribute
    pub lang: Option<String>,
    /// Loading progress
    pub ready_state: ReadyState,
    /// Elements in document order; an element's index is its [`ElementId`].
    pub elements: Vec<MemoryElement>,
}

impl MemoryDocument {
    /// Creates an empty, fully loaded document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an element and returns its id.
    pub fn push(&mut self, element: MemoryElement) -> ElementId {
        self.elements.push(element);
        self.elements.len() - 1
    }

    /// Element with id `id`.
    #[must_use]
    pub fn element(&self, id: ElementId) -> Option<&MemoryElement> {
        self.elements.get(id)
    }

    /// Updates the loading progress.
    pub fn set_ready_state(&mut self, state: ReadyState) {
        self.ready_state = state;
    }
}

impl Document for MemoryDocument {
    fn ready_state(&self) -> ReadyState {
        self.ready_state
    }

    fn elements_with_attribute(&self, name: &str) -> Vec<ElementId> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, element)| element.attributes.contains_key(name))
            .map(|(id, _)| id)
            .collect()
    }

    fn attribute(&self, element: ElementId, name: &str) -> Option<&str> {
        self.elements.get(element)?.get_attr(name)
    }

    fn write(&mut self, element: ElementId, target: Target, text: &str) {
        let Some(element) = self.elements.get_mut(element) else {
            return;
        };
        match target.attribute_name() {
            Some(attribute) => {
                element.attributes.insert(attribute.to_string(), text.to_string());
            }
            None => text.clone_into(&mut element.text),
        }
    }

    fn set_language(&mut self, lang: &str) {
        self.lang = Some(lang.to_string());
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;

    use super::*;

    #[googletest::test]
    fn elements_with_attribute_in_document_order() {
        let mut document = MemoryDocument::new();
        let first = document.push(MemoryElement::new("span").attr("data-i18n", "a"));
        document.push(MemoryElement::new("div"));
        let third = document.push(MemoryElement::new("p").attr("data-i18n", "b"));

        expect_that!(document.elements_with_attribute("data-i18n"), eq(&vec![first, third]));
        expect_that!(document.attribute(third, "data-i18n"), some(eq("b")));
        expect_that!(document.attribute(42, "data-i18n"), none());
    }

    #[googletest::test]
    fn write_targets() {
        let mut document = MemoryDocument::new();
        let id = document.push(MemoryElement::new("input").with_text("old"));

        document.write(id, Target::TextContent, "<b>new</b>");
        document.write(id, Target::Placeholder, "Enter name");
        document.write(id, Target::Title, "Name");
        document.write(99, Target::Title, "ignored");

        let element = document.element(id).unwrap();
        expect_that!(element.text, eq("<b>new</b>"));
        expect_that!(element.get_attr("placeholder"), some(eq("Enter name")));
        expect_that!(element.get_attr("title"), some(eq("Name")));
    }

    #[googletest::test]
    fn deserializes_with_defaults() {
        let json = r#"{"elements": [{"tag": "span", "attributes": {"data-i18n": "hud.tax"}}]}"#;

        let document: MemoryDocument = serde_json::from_str(json).unwrap();

        expect_that!(document.ready_state, eq(ReadyState::Complete));
        expect_that!(document.lang, none());
        expect_that!(document.elements, len(eq(1)));
        expect_that!(document.attribute(0, "data-i18n"), some(eq("hud.tax")));
    }

    #[googletest::test]
    fn serializes_camel_case() {
        let mut document = MemoryDocument::new();
        document.set_ready_state(ReadyState::Loading);
        document.set_language("ko");

        let json = serde_json::to_value(&document).unwrap();

        expect_that!(json["readyState"], eq(&serde_json::json!("loading")));
        expect_that!(json["lang"], eq(&serde_json::json!("ko")));
    }
}
