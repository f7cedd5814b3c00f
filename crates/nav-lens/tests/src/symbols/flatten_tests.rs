use tower_lsp::lsp_types::Position;

use super::*;

#[allow(deprecated)]
fn symbol(
    name: &str,
    line: u32,
    children: Vec<DocumentSymbol>,
) -> DocumentSymbol {
    let range = Range::new(Position::new(line, 0), Position::new(line, 10));
    DocumentSymbol {
        name: name.to_string(),
        detail: None,
        kind: SymbolKind::FUNCTION,
        tags: None,
        deprecated: None,
        range,
        selection_range: range,
        children: (!children.is_empty()).then_some(children),
    }
}

fn names(flat: &[FlatSymbol]) -> Vec<&str> {
    flat.iter().map(|s| s.name.as_str()).collect()
}

#[test]
fn parents_precede_children_in_original_order() {
    let tree = vec![
        symbol("Server", 0, vec![symbol("start", 1, vec![symbol("inner", 2, vec![])]), symbol("stop", 3, vec![])]),
        symbol("main", 5, vec![]),
    ];

    let flat = flatten_symbols(&tree);
    assert_eq!(names(&flat), vec!["Server", "start", "inner", "stop", "main"]);
    assert_eq!(flat.iter().map(|s| s.depth).collect::<Vec<_>>(), vec![0, 1, 2, 1, 0]);
}

#[test]
fn flattening_is_repeatable() {
    let tree = vec![symbol("A", 1, vec![symbol("B", 2, vec![])]), symbol("C", 4, vec![])];
    assert_eq!(flatten_symbols(&tree), flatten_symbols(&tree));
}

#[test]
fn empty_children_vector_is_a_leaf() {
    let mut leaf = symbol("leaf", 0, vec![]);
    leaf.children = Some(Vec::new());

    let flat = flatten_symbols(&[leaf]);
    assert_eq!(names(&flat), vec!["leaf"]);
}

#[test]
fn keeps_ranges_and_kind() {
    let mut node = symbol("Config", 4, vec![]);
    node.kind = SymbolKind::STRUCT;
    node.selection_range = Range::new(Position::new(4, 5), Position::new(4, 11));

    let flat = flatten_symbols(&[node.clone()]);
    assert_eq!(flat[0].kind, SymbolKind::STRUCT);
    assert_eq!(flat[0].range, node.range);
    assert_eq!(flat[0].selection_range, node.selection_range);
}
