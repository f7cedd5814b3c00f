use tower_lsp::lsp_types::{DocumentSymbol, Url};

use crate::error::ResolveError;

/// The external "list symbols in this document" service.
///
/// Calls are assumed to be expensive (usually a round-trip to another
/// process). `Ok(None)` and `Ok(Some(vec![]))` both mean "nothing known yet".
#[tower_lsp::async_trait]
pub trait SymbolResolver: Send + Sync {
    async fn resolve(
        &self,
        uri: &Url,
    ) -> Result<Option<Vec<DocumentSymbol>>, ResolveError>;
}
