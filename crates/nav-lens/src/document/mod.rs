pub(crate) mod document_store;
pub(crate) mod open_document;

pub use document_store::DocumentStore;
pub use open_document::OpenDocument;
