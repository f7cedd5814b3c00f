use std::{panic::AssertUnwindSafe, time::Instant};

use futures::FutureExt;
use serde_json::Value;
use tower_lsp::{
    LanguageServer,
    jsonrpc::{Error, Result},
    lsp_types::*,
};
use tracing::{debug, info};

use crate::{
    actions::{DispatchOutcome, NAVIGATION_ACTIONS, action_ids, find_action},
    overlay::{anchored_actions, hover_for_overlay, lens_for_action, overlay_at},
    refresh::{EditEvent, is_qualifying_edit},
    server::{settings::ServerSettings, state::NavLensServer},
};

const CLIENT_NOTIFICATION_PREFIX: &str = "nav-lens:";

#[tower_lsp::async_trait]
impl LanguageServer for NavLensServer {
    async fn initialize(
        &self,
        params: InitializeParams,
    ) -> Result<InitializeResult> {
        info!("Initializing nav-lens...");

        let initial_settings = ServerSettings::from_lsp_payload(params.initialization_options.as_ref());
        self.apply_settings(initial_settings).await;

        Ok(InitializeResult {
            capabilities: ServerCapabilities {
                text_document_sync: Some(TextDocumentSyncCapability::Kind(TextDocumentSyncKind::INCREMENTAL)),
                hover_provider: Some(HoverProviderCapability::Simple(true)),
                code_lens_provider: Some(CodeLensOptions {
                    resolve_provider: Some(false),
                }),
                execute_command_provider: Some(ExecuteCommandOptions {
                    commands: action_ids(),
                    work_done_progress_options: Default::default(),
                }),
                ..Default::default()
            },
            server_info: Some(ServerInfo {
                name: "nav-lens".to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    async fn initialized(
        &self,
        _: InitializedParams,
    ) {
        let settings = self.settings_snapshot().await;
        info!(
            "nav-lens initialized (language={}, lenses={}, hover={})",
            settings.language_id, settings.enable_overlay_actions, settings.enable_hover_overlay,
        );
        if settings.log_level.allows_info() {
            let _ = AssertUnwindSafe(self.client.log_message(
                MessageType::INFO,
                prefixed_client_message(format!("serving {} documents", settings.language_id)),
            ))
            .catch_unwind()
            .await;
        }
    }

    async fn did_change_configuration(
        &self,
        params: DidChangeConfigurationParams,
    ) {
        let current = self.settings_snapshot().await;
        let merged = current.merged_with_payload(&params.settings);
        if merged == current {
            return;
        }

        self.apply_settings(merged).await;
        info!("Configuration changed, refreshing overlays in {:?}", self.refresh.interval());
        self.refresh.schedule_refresh();
    }

    async fn shutdown(&self) -> Result<()> {
        info!("Shutting down nav-lens");
        self.dispose();
        Ok(())
    }

    async fn did_open(
        &self,
        params: DidOpenTextDocumentParams,
    ) {
        let doc = params.text_document;
        debug!("Opened {} ({}, v{})", short_name(&doc.uri), doc.language_id, doc.version);
        self.documents.open(doc.uri, doc.language_id, doc.version);
    }

    async fn did_change(
        &self,
        params: DidChangeTextDocumentParams,
    ) {
        let uri = params.text_document.uri;
        let Some(doc) = self.documents.update_version(&uri, params.text_document.version) else {
            debug!("Change for untracked document {}", short_name(&uri));
            return;
        };

        // Only the focused editor produces typed edits.
        if !params.content_changes.is_empty() {
            self.documents.set_active(uri.clone());
        }

        let settings = self.settings_snapshot().await;
        let event = EditEvent {
            uri: &uri,
            language_id: &doc.language_id,
            change_count: params.content_changes.len(),
        };
        let active = self.documents.active();
        if is_qualifying_edit(&event, active.as_ref(), &settings) {
            self.refresh.schedule_refresh();
        }
    }

    async fn did_close(
        &self,
        params: DidCloseTextDocumentParams,
    ) {
        debug!("Closed {}", short_name(&params.text_document.uri));
        self.documents.close(&params.text_document.uri);
    }

    async fn code_lens(
        &self,
        params: CodeLensParams,
    ) -> Result<Option<Vec<CodeLens>>> {
        let started = Instant::now();
        let uri = params.text_document.uri;
        let settings = self.settings_snapshot().await;
        if !settings.enable_overlay_actions {
            debug!("Code lenses disabled for {}", short_name(&uri));
            return Ok(Some(Vec::new()));
        }
        let Some(doc) = self.documents.get(&uri).filter(|doc| doc.language_id == settings.language_id) else {
            return Ok(Some(Vec::new()));
        };

        let symbols = self.symbol_index.flattened_symbols(&uri, doc.version, self.resolver.as_ref()).await;
        let lenses =
            anchored_actions(&uri, &symbols, &NAVIGATION_ACTIONS).iter().map(lens_for_action).collect::<Vec<_>>();

        info!(
            "Code lenses generated for {}: {} symbols, {} lenses ({:?})",
            short_name(&uri),
            symbols.len(),
            lenses.len(),
            started.elapsed(),
        );
        Ok(Some(lenses))
    }

    async fn hover(
        &self,
        params: HoverParams,
    ) -> Result<Option<Hover>> {
        let started = Instant::now();
        let uri = params.text_document_position_params.text_document.uri;
        let position = params.text_document_position_params.position;
        let settings = self.settings_snapshot().await;
        if !settings.enable_hover_overlay {
            return Ok(None);
        }
        let Some(doc) = self.documents.get(&uri).filter(|doc| doc.language_id == settings.language_id) else {
            return Ok(None);
        };
        self.documents.set_active(uri.clone());

        let symbols = self.symbol_index.flattened_symbols(&uri, doc.version, self.resolver.as_ref()).await;
        let Some(overlay) = overlay_at(&uri, &symbols, position, &NAVIGATION_ACTIONS) else {
            return Ok(None);
        };

        debug!(
            "Hover generated for {} at {}:{} -> {} ({:?})",
            short_name(&uri),
            position.line + 1,
            position.character + 1,
            overlay.symbol.name,
            started.elapsed(),
        );
        Ok(Some(hover_for_overlay(&overlay)))
    }

    async fn execute_command(
        &self,
        params: ExecuteCommandParams,
    ) -> Result<Option<Value>> {
        let Some(action) = find_action(&params.command) else {
            return Err(Error::invalid_params(format!("unknown command `{}`", params.command)));
        };
        let raw_args = params.arguments.into_iter().next().unwrap_or(Value::Null);

        match self.dispatcher.dispatch(&raw_args, action).await {
            Ok(DispatchOutcome::Completed(document)) => {
                self.documents.set_active(document.uri);
                Ok(None)
            },
            Ok(DispatchOutcome::Abandoned(_)) => Ok(None),
            Err(err) => {
                let mut error = Error::internal_error();
                error.message = prefixed_client_message(err.to_string()).into();
                Err(error)
            },
        }
    }
}

fn short_name(uri: &Url) -> String {
    uri.path().rsplit('/').next().unwrap_or(uri.path()).to_owned()
}

fn prefixed_client_message(message: impl AsRef<str>) -> String {
    format!("{CLIENT_NOTIFICATION_PREFIX} {}", message.as_ref())
}
