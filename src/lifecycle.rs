//! One-shot initialization tied to document readiness.

use crate::binder::{
    Document,
    ReadyState,
};
use crate::localizer::Localizer;
use crate::storage::PreferenceStore;

/// Progress of a [`Bootstrap`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BootState {
    /// [`Bootstrap::load`] has not run.
    #[default]
    Pending,
    /// Waiting for [`Bootstrap::document_ready`].
    Deferred,
    /// [`Localizer::init`] has run.
    Ready,
}

/// Runs [`Localizer::init`] exactly once, as soon as the document allows.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bootstrap {
    /// Progress so far
    state: BootState,
}

impl Bootstrap {
    /// A bootstrap that has not run yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current progress.
    #[must_use]
    pub const fn state(&self) -> BootState {
        self.state
    }

    /// Initializes immediately unless the document is still loading, in which
    /// case initialization waits for [`Bootstrap::document_ready`].
    pub fn load<S, D>(&mut self, localizer: &mut Localizer<S>, document: &mut D) -> BootState
    where
        S: PreferenceStore,
        D: Document + ?Sized,
    {
        if self.state != BootState::Pending {
            return self.state;
        }

        if document.ready_state() == ReadyState::Loading {
            tracing::debug!("Document still loading, deferring initialization");
            self.state = BootState::Deferred;
        } else {
            self.run(localizer, document);
        }
        self.state
    }

    /// The document finished loading. Runs a deferred initialization.
    pub fn document_ready<S, D>(
        &mut self,
        localizer: &mut Localizer<S>,
        document: &mut D,
    ) -> BootState
    where
        S: PreferenceStore,
        D: Document + ?Sized,
    {
        if self.state == BootState::Deferred {
            self.run(localizer, document);
        }
        self.state
    }

    /// Initializes and marks the bootstrap done.
    fn run<S, D>(&mut self, localizer: &mut Localizer<S>, document: &mut D)
    where
        S: PreferenceStore,
        D: Document + ?Sized,
    {
        let language = localizer.init(document);
        tracing::info!(lang = %language, "Localization initialized");
        self.state = BootState::Ready;
    }
}
