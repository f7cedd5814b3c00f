use tower_lsp::lsp_types::{Position, Url};

use crate::error::HostError;

/// A document the host has opened for navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentHandle {
    pub uri: Url,
}

/// Editor operations a jump needs. Each call may suspend and each may fail.
#[tower_lsp::async_trait]
pub trait NavigationHost: Send + Sync {
    /// Resolve `location` to a document the host can display.
    async fn open_document(
        &self,
        location: &str,
    ) -> Result<DocumentHandle, HostError>;

    /// Focus an editable view of `document`, place a zero-width selection at
    /// `position` and scroll it into view.
    async fn show_at(
        &self,
        document: &DocumentHandle,
        position: Position,
    ) -> Result<(), HostError>;

    /// Run one of the host's own commands against the focused view.
    async fn invoke_host_action(
        &self,
        host_action_id: &str,
    ) -> Result<(), HostError>;
}
