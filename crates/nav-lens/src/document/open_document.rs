use tower_lsp::lsp_types::Url;

/// What the server knows about an open document: identity, language and the
/// version last reported by the client. Text is never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenDocument {
    pub uri: Url,
    pub language_id: String,
    pub version: i32,
}

impl OpenDocument {
    pub fn new(
        uri: Url,
        language_id: String,
        version: i32,
    ) -> Self {
        Self {
            uri,
            language_id,
            version,
        }
    }
}
