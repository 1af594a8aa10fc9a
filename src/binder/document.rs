use serde::{
    Deserialize,
    Serialize,
};

/// Handle to an element, stable for the lifetime of the document.
pub type ElementId = usize;

/// Loading progress of a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadyState {
    /// Still parsing; binding must wait.
    Loading,
    /// Parsed, subresources may still be loading.
    Interactive,
    /// Fully loaded.
    #[default]
    Complete,
}

/// Where a rendered string is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// Replaces the element's text content.
    TextContent,
    /// The `placeholder` attribute.
    Placeholder,
    /// The `title` attribute.
    Title,
}

impl Target {
    /// Attribute written for this target, `None` for text content.
    #[must_use]
    pub const fn attribute_name(self) -> Option<&'static str> {
        match self {
            Self::TextContent => None,
            Self::Placeholder => Some("placeholder"),
            Self::Title => Some("title"),
        }
    }
}

/// The parts of a document the binder reads and writes.
///
/// Written text is always plain text; implementations must not interpret it
/// as markup.
pub trait Document {
    /// Current loading progress.
    fn ready_state(&self) -> ReadyState;

    /// Elements carrying attribute `name`, in document order.
    fn elements_with_attribute(&self, name: &str) -> Vec<ElementId>;

    /// Value of attribute `name` on `element`.
    fn attribute(&self, element: ElementId, name: &str) -> Option<&str>;

    /// Writes `text` into `target` of `element`. Unknown elements are ignored.
    fn write(&mut self, element: ElementId, target: Target, text: &str);

    /// Sets the `lang` attribute of the root element.
    fn set_language(&mut self, lang: &str);
}
