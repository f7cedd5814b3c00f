use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use tower_lsp::lsp_types::{CodeLens, Command, Hover, HoverContents, MarkupContent, MarkupKind, Range};

use super::{AnchoredAction, HoverOverlay};
use crate::actions::JumpArgs;

// Characters `encodeURIComponent` leaves alone.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const LINK_SEPARATOR: &str = " | ";

/// Zero-width lens at the anchor that runs the action with its payload.
pub fn lens_for_action(entry: &AnchoredAction) -> CodeLens {
    CodeLens {
        range: Range::new(entry.anchor, entry.anchor),
        command: Some(Command {
            title: entry.action.title.to_string(),
            command: entry.action.action_id.to_string(),
            arguments: Some(vec![entry.args.to_value()]),
        }),
        data: None,
    }
}

/// `command:` link that runs `action_id` with `args` when clicked.
pub fn command_uri(
    action_id: &str,
    args: &JumpArgs,
) -> String {
    let payload = serde_json::to_string(args).unwrap_or_default();
    format!("command:{action_id}?{}", utf8_percent_encode(&payload, URI_COMPONENT))
}

pub fn hover_markdown(actions: &[AnchoredAction]) -> String {
    actions
        .iter()
        .map(|entry| format!("[{}]({})", entry.action.title, command_uri(entry.action.action_id, &entry.args)))
        .collect::<Vec<_>>()
        .join(LINK_SEPARATOR)
}

pub fn hover_for_overlay(overlay: &HoverOverlay) -> Hover {
    Hover {
        contents: HoverContents::Markup(MarkupContent {
            kind: MarkupKind::Markdown,
            value: hover_markdown(&overlay.actions),
        }),
        range: Some(overlay.range),
    }
}

#[cfg(test)]
#[path = "../../tests/src/overlay/render_tests.rs"]
mod tests;
