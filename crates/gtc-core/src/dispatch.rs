//! Action binding registry.
//!
//! The web UI wires its handlers once at load time; this registry is the
//! same startup step. An action with an implementation but no binding is
//! refused before any request is made.

use crate::error::ClientError;

/// The five form/action operations the client knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    TagImage,
    LookupCoordinates,
    DownloadImage,
    DownloadAll,
    DownloadTagged,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::TagImage => "tag",
            Action::LookupCoordinates => "lookup",
            Action::DownloadImage => "download",
            Action::DownloadAll => "download-all",
            Action::DownloadTagged => "download-tagged",
        }
    }
}

/// Set of actions bound at startup.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    bound: Vec<Action>,
}

impl Dispatcher {
    /// Empty registry, nothing bound.
    pub fn new() -> Self {
        Self { bound: Vec::new() }
    }

    /// The bindings the web UI registers: everything except download-tagged,
    /// which the backend serves but the UI never wires up.
    pub fn with_default_bindings() -> Self {
        let mut d = Self::new();
        d.bind(Action::TagImage);
        d.bind(Action::LookupCoordinates);
        d.bind(Action::DownloadImage);
        d.bind(Action::DownloadAll);
        d
    }

    pub fn bind(&mut self, action: Action) {
        if !self.bound.contains(&action) {
            self.bound.push(action);
        }
    }

    pub fn is_bound(&self, action: Action) -> bool {
        self.bound.contains(&action)
    }

    /// Err(Unbound) when the action has no binding; call before dispatching.
    pub fn ensure_bound(&self, action: Action) -> Result<(), ClientError> {
        if self.is_bound(action) {
            Ok(())
        } else {
            Err(ClientError::Unbound(action.name()))
        }
    }
}
