use thiserror::Error;

/// Failure reported by the symbol-resolution collaborator.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("symbol request failed: {0}")]
    Request(String),
    #[error("symbol provider unavailable")]
    Unavailable,
}

/// Failure reported by the editor host while performing a jump.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HostError {
    #[error("document not found: {0}")]
    DocumentMissing(String),
    #[error("no editable view for {0}")]
    ViewUnavailable(String),
    #[error("host action `{action}` rejected: {reason}")]
    ActionRejected { action: String, reason: String },
}

/// A navigation that was valid but could not be carried out.
///
/// Unlike symbol resolution failures these are returned to the caller, the
/// command that triggered the jump is expected to surface them.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DispatchError {
    #[error("failed to open {location}: {source}")]
    Open {
        location: String,
        #[source]
        source: HostError,
    },
    #[error("failed to show {location}: {source}")]
    Show {
        location: String,
        #[source]
        source: HostError,
    },
    #[error("failed to run `{host_action}`: {source}")]
    Invoke {
        host_action: String,
        #[source]
        source: HostError,
    },
}

impl DispatchError {
    pub fn host_error(&self) -> &HostError {
        match self {
            DispatchError::Open { source, .. }
            | DispatchError::Show { source, .. }
            | DispatchError::Invoke { source, .. } => source,
        }
    }
}
