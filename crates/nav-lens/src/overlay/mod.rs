mod composer;
mod render;

pub use composer::{
    AnchoredAction, HoverOverlay, LINE_WEIGHT, anchored_actions, innermost_symbol_at, overlay_at, range_contains,
    selection_size,
};
pub use render::{command_uri, hover_for_overlay, hover_markdown, lens_for_action};
