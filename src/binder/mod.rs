//! Writes translated text into marked document elements.
//!
//! Binding is split in two: [`collect_bindings`] reads the marker attributes
//! into declarative [`Binding`]s, and [`apply_translations`] renders them
//! through a [`Translator`](crate::localizer::Translator) and writes the
//! results back. Every sweep rescans the whole document.

/// Declarative bindings and the render pass
mod binding;
/// The document abstraction
mod document;
/// In-memory document
mod memory;

pub use binding::{
    Binding,
    apply_translations,
    collect_bindings,
};
pub use document::{
    Document,
    ElementId,
    ReadyState,
    Target,
};
pub use memory::{
    MemoryDocument,
    MemoryElement,
};
