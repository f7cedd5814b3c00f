use tower_lsp::lsp_types::Url;

use crate::server::ServerSettings;

/// An edit reported by the host.
#[derive(Debug, Clone, Copy)]
pub struct EditEvent<'a> {
    pub uri: &'a Url,
    pub language_id: &'a str,
    pub change_count: usize,
}

/// Whether an edit should re-arm the refresh timer: refresh-on-edit is on,
/// the edit touched the active document, that document is in the supported
/// language, and it actually changed something.
pub fn is_qualifying_edit(
    event: &EditEvent<'_>,
    active: Option<&Url>,
    settings: &ServerSettings,
) -> bool {
    settings.refresh_on_edit
        && event.change_count > 0
        && active == Some(event.uri)
        && event.language_id == settings.language_id
}

#[cfg(test)]
#[path = "../../tests/src/refresh/trigger_tests.rs"]
mod tests;
