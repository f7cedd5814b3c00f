use tower_lsp::lsp_types::{Position, Range, Url};

use crate::{
    actions::{ActionDescriptor, JumpArgs},
    symbols::FlatSymbol,
};

/// Weight of one line when comparing selection sizes; larger than any
/// plausible line length so a line difference always dominates.
pub const LINE_WEIGHT: i64 = 10_000;

/// One action attached to one anchor.
#[derive(Debug, Clone, PartialEq)]
pub struct AnchoredAction {
    pub anchor: Position,
    pub action: ActionDescriptor,
    pub args: JumpArgs,
}

/// The overlay shown when hovering a symbol.
#[derive(Debug, Clone, PartialEq)]
pub struct HoverOverlay {
    pub symbol: FlatSymbol,
    /// Highlighted region; the symbol's selection range.
    pub range: Range,
    pub actions: Vec<AnchoredAction>,
}

/// Every action for every symbol, anchored at the start of each selection
/// range. Symbols are visited in flattened order and actions in the order
/// given, so the output is `s0-a0, s0-a1, .., s1-a0, ..`.
pub fn anchored_actions(
    uri: &Url,
    symbols: &[FlatSymbol],
    actions: &[ActionDescriptor],
) -> Vec<AnchoredAction> {
    let mut out = Vec::with_capacity(symbols.len() * actions.len());
    for symbol in symbols {
        out.extend(actions_at(uri, symbol.selection_range.start, actions));
    }
    out
}

/// Hover overlay for `position`: the innermost symbol whose selection range
/// contains it, with its actions.
pub fn overlay_at(
    uri: &Url,
    symbols: &[FlatSymbol],
    position: Position,
    actions: &[ActionDescriptor],
) -> Option<HoverOverlay> {
    let symbol = innermost_symbol_at(symbols, position)?;
    Some(HoverOverlay {
        symbol: symbol.clone(),
        range: symbol.selection_range,
        actions: actions_at(uri, symbol.selection_range.start, actions).collect(),
    })
}

/// The containing symbol with the smallest selection range. Equal sizes
/// resolve to the earliest symbol in flattened order.
pub fn innermost_symbol_at(
    symbols: &[FlatSymbol],
    position: Position,
) -> Option<&FlatSymbol> {
    symbols
        .iter()
        .filter(|symbol| range_contains(&symbol.selection_range, position))
        .min_by_key(|symbol| selection_size(&symbol.selection_range))
}

/// Inclusive containment on `(line, character)` order.
pub fn range_contains(
    range: &Range,
    position: Position,
) -> bool {
    let at = (position.line, position.character);
    (range.start.line, range.start.character) <= at && at <= (range.end.line, range.end.character)
}

pub fn selection_size(range: &Range) -> i64 {
    let lines = i64::from(range.end.line) - i64::from(range.start.line);
    let columns = i64::from(range.end.character) - i64::from(range.start.character);
    lines * LINE_WEIGHT + columns
}

fn actions_at<'a>(
    uri: &'a Url,
    anchor: Position,
    actions: &'a [ActionDescriptor],
) -> impl Iterator<Item = AnchoredAction> + 'a {
    actions.iter().map(move |action| AnchoredAction {
        anchor,
        action: *action,
        args: JumpArgs::at(uri, anchor),
    })
}

#[cfg(test)]
#[path = "../../tests/src/overlay/composer_tests.rs"]
mod tests;
