use std::{panic::AssertUnwindSafe, sync::Arc};

use futures::FutureExt;
use tokio::sync::RwLock;
use tower_lsp::Client;
use tracing::debug;

use crate::{
    actions::ActionDispatcher,
    document::DocumentStore,
    logging::LogControl,
    refresh::{RefreshCoordinator, SubscriptionId},
    server::{client_bridge::ClientBridge, settings::ServerSettings},
    symbols::{SymbolIndex, SymbolResolver},
};

/// The nav-lens backend that implements the Language Server Protocol.
pub struct NavLensServer {
    /// The LSP client handle, used for refresh requests.
    pub(crate) client: Client,

    /// Open documents with their language and current version.
    pub(crate) documents: Arc<DocumentStore>,

    /// Resolved symbol trees keyed by `(uri, version)`.
    pub(crate) symbol_index: Arc<SymbolIndex>,

    /// Where symbol trees come from.
    pub(crate) resolver: Arc<dyn SymbolResolver>,

    /// Runs navigation commands against the editor.
    pub(crate) dispatcher: ActionDispatcher,

    /// Debounces overlay refreshes after edits and configuration changes.
    pub(crate) refresh: Arc<RefreshCoordinator>,

    /// Forwards each refresh to the client as `workspace/codeLens/refresh`.
    pub(crate) refresh_subscription: SubscriptionId,

    /// Runtime server settings updated from LSP configuration.
    pub(crate) settings: Arc<RwLock<ServerSettings>>,

    /// Present when the binary installed a reloadable subscriber.
    pub(crate) log_control: Option<LogControl>,
}

impl NavLensServer {
    /// Create a server whose symbols and host actions are served by the
    /// connected client.
    pub fn new(client: Client) -> Self {
        let bridge = Arc::new(ClientBridge::new(client.clone()));
        let settings = ServerSettings::default();
        let refresh = Arc::new(RefreshCoordinator::new(settings.refresh_debounce()));

        let refresh_client = client.clone();
        let refresh_subscription = refresh.subscribe(Arc::new(move || {
            let client = refresh_client.clone();
            tokio::spawn(async move {
                match AssertUnwindSafe(client.code_lens_refresh()).catch_unwind().await {
                    Ok(Ok(())) => {},
                    Ok(Err(err)) => debug!("codeLens/refresh rejected by client: {}", err.message),
                    Err(_) => debug!("codeLens/refresh dropped (client disconnected)"),
                }
            });
        }));

        Self {
            client,
            documents: Arc::new(DocumentStore::new()),
            symbol_index: Arc::new(SymbolIndex::new()),
            resolver: bridge.clone(),
            dispatcher: ActionDispatcher::new(bridge),
            refresh,
            refresh_subscription,
            settings: Arc::new(RwLock::new(settings)),
            log_control: None,
        }
    }

    pub fn with_log_control(
        mut self,
        log_control: LogControl,
    ) -> Self {
        self.log_control = Some(log_control);
        self
    }

    pub(crate) async fn settings_snapshot(&self) -> ServerSettings {
        self.settings.read().await.clone()
    }

    pub(crate) async fn apply_settings(
        &self,
        settings: ServerSettings,
    ) {
        if let Some(log_control) = &self.log_control {
            log_control.set_level(settings.log_level);
        }
        self.refresh.set_interval(settings.refresh_debounce());

        *self.settings.write().await = settings;
    }

    /// Release the cache and the refresh timer.
    pub(crate) fn dispose(&self) {
        self.refresh.unsubscribe(self.refresh_subscription);
        self.refresh.dispose();
        self.symbol_index.dispose();
    }
}
