//! Host collaborators backed by the LSP client.
//!
//! Symbol resolution and host actions are custom server-to-client requests
//! answered by the editor-side glue; cursor placement uses the standard
//! `window/showDocument` request.

use std::panic::AssertUnwindSafe;

use futures::FutureExt;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tower_lsp::{
    Client,
    lsp_types::{
        DocumentSymbol, Position, Range, ShowDocumentParams, TextDocumentIdentifier, Url, request::Request,
    },
};

use crate::{
    actions::{DocumentHandle, NavigationHost},
    error::{HostError, ResolveError},
    symbols::SymbolResolver,
};

/// `navLens/documentSymbols`: ask the editor for the symbol tree of a
/// document.
pub enum DocumentSymbolsRequest {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSymbolsParams {
    pub text_document: TextDocumentIdentifier,
}

impl Request for DocumentSymbolsRequest {
    type Params = DocumentSymbolsParams;
    type Result = Option<Vec<DocumentSymbol>>;
    const METHOD: &'static str = "navLens/documentSymbols";
}

/// `navLens/runHostAction`: run one of the editor's own commands.
pub enum RunHostActionRequest {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunHostActionParams {
    pub action: String,
}

impl Request for RunHostActionRequest {
    type Params = RunHostActionParams;
    type Result = Option<Value>;
    const METHOD: &'static str = "navLens/runHostAction";
}

#[derive(Clone)]
pub struct ClientBridge {
    client: Client,
}

impl ClientBridge {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[tower_lsp::async_trait]
impl SymbolResolver for ClientBridge {
    async fn resolve(
        &self,
        uri: &Url,
    ) -> Result<Option<Vec<DocumentSymbol>>, ResolveError> {
        let params = DocumentSymbolsParams {
            text_document: TextDocumentIdentifier { uri: uri.clone() },
        };
        // tower-lsp panics if the client went away mid-request.
        match AssertUnwindSafe(self.client.send_request::<DocumentSymbolsRequest>(params)).catch_unwind().await {
            Ok(Ok(symbols)) => Ok(symbols),
            Ok(Err(err)) => Err(ResolveError::Request(err.message.to_string())),
            Err(_) => Err(ResolveError::Unavailable),
        }
    }
}

#[tower_lsp::async_trait]
impl NavigationHost for ClientBridge {
    async fn open_document(
        &self,
        location: &str,
    ) -> Result<DocumentHandle, HostError> {
        Url::parse(location)
            .map(|uri| DocumentHandle { uri })
            .map_err(|err| HostError::DocumentMissing(format!("{location:?} ({err})")))
    }

    async fn show_at(
        &self,
        document: &DocumentHandle,
        position: Position,
    ) -> Result<(), HostError> {
        let params = ShowDocumentParams {
            uri: document.uri.clone(),
            external: Some(false),
            take_focus: Some(true),
            selection: Some(Range::new(position, position)),
        };
        match AssertUnwindSafe(self.client.show_document(params)).catch_unwind().await {
            Ok(Ok(true)) => Ok(()),
            Ok(Ok(false)) => Err(HostError::ViewUnavailable(document.uri.to_string())),
            Ok(Err(err)) => Err(HostError::ViewUnavailable(format!("{} ({})", document.uri, err.message))),
            Err(_) => Err(HostError::ViewUnavailable(format!("{} (client disconnected)", document.uri))),
        }
    }

    async fn invoke_host_action(
        &self,
        host_action_id: &str,
    ) -> Result<(), HostError> {
        let params = RunHostActionParams {
            action: host_action_id.to_string(),
        };
        let rejected = |reason: String| HostError::ActionRejected {
            action: host_action_id.to_string(),
            reason,
        };
        match AssertUnwindSafe(self.client.send_request::<RunHostActionRequest>(params)).catch_unwind().await {
            Ok(Ok(_)) => Ok(()),
            Ok(Err(err)) => Err(rejected(err.message.to_string())),
            Err(_) => Err(rejected("client disconnected".to_string())),
        }
    }
}
