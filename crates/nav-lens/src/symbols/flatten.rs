use tower_lsp::lsp_types::{DocumentSymbol, Range, SymbolKind};

/// One entry of a flattened symbol tree.
///
/// Children are dropped; `depth` records how deep the node was nested
/// (`0` for top-level symbols).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatSymbol {
    pub name: String,
    pub kind: SymbolKind,
    pub range: Range,
    pub selection_range: Range,
    pub depth: usize,
}

impl FlatSymbol {
    fn from_node(
        symbol: &DocumentSymbol,
        depth: usize,
    ) -> Self {
        Self {
            name: symbol.name.clone(),
            kind: symbol.kind,
            range: symbol.range,
            selection_range: symbol.selection_range,
            depth,
        }
    }
}

/// Pre-order walk of a symbol tree: every parent precedes its children and
/// siblings keep the order the resolver reported them in.
pub fn flatten_symbols(symbols: &[DocumentSymbol]) -> Vec<FlatSymbol> {
    let mut out = Vec::new();
    for symbol in symbols {
        walk(symbol, 0, &mut out);
    }
    out
}

fn walk(
    symbol: &DocumentSymbol,
    depth: usize,
    out: &mut Vec<FlatSymbol>,
) {
    out.push(FlatSymbol::from_node(symbol, depth));
    if let Some(children) = &symbol.children {
        for child in children {
            walk(child, depth + 1, out);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src/symbols/flatten_tests.rs"]
mod tests;
