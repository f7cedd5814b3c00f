use std::sync::Arc;

use dashmap::DashMap;
use tower_lsp::lsp_types::{DocumentSymbol, Url};
use tracing::{debug, error};

use super::{FlatSymbol, SymbolResolver, flatten_symbols};

#[derive(Debug, Clone)]
struct CacheEntry {
    version: i32,
    symbols: Arc<Vec<DocumentSymbol>>,
}

/// Per-document cache of resolved symbol trees, keyed by URI and tagged with
/// the document version they were resolved for.
///
/// An entry is only trusted while its version equals the version the caller
/// reports; any other version triggers a fresh resolve that overwrites the
/// entry wholesale. Failed or empty resolutions never write an entry.
#[derive(Debug, Default)]
pub struct SymbolIndex {
    entries: DashMap<Url, CacheEntry>,
}

impl SymbolIndex {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Return the flattened symbols of `uri` at `version`, resolving through
    /// `resolver` only when no entry for that exact version is cached.
    ///
    /// Resolution failures are logged and degrade to an empty list.
    pub async fn flattened_symbols<R>(
        &self,
        uri: &Url,
        version: i32,
        resolver: &R,
    ) -> Vec<FlatSymbol>
    where
        R: SymbolResolver + ?Sized,
    {
        // Clone the tree handle out so no map guard is held across the await.
        let cached = self.entries.get(uri).filter(|entry| entry.version == version).map(|entry| entry.symbols.clone());
        if let Some(symbols) = cached {
            return flatten_symbols(&symbols);
        }

        let symbols = match resolver.resolve(uri).await {
            Ok(Some(symbols)) if !symbols.is_empty() => symbols,
            Ok(_) => {
                debug!("[symbols] {uri} v{version}: resolver returned no symbols");
                return Vec::new();
            },
            Err(err) => {
                error!("[symbols] {uri} v{version}: document symbols retrieval failed: {err}");
                return Vec::new();
            },
        };

        debug!("[symbols] {uri} v{version}: retrieved {} top-level symbols", symbols.len());
        let symbols = Arc::new(symbols);
        self.entries.insert(
            uri.clone(),
            CacheEntry {
                version,
                symbols: Arc::clone(&symbols),
            },
        );
        flatten_symbols(&symbols)
    }

    /// Version of the cached entry for `uri`, if any.
    pub fn cached_version(
        &self,
        uri: &Url,
    ) -> Option<i32> {
        self.entries.get(uri).map(|entry| entry.version)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every cached entry. Safe to call repeatedly.
    pub fn dispose(&self) {
        self.entries.clear();
    }
}

#[cfg(test)]
#[path = "../../tests/src/symbols/index_tests.rs"]
mod tests;
