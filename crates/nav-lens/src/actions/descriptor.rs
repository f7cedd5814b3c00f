/// A navigation action offered next to every symbol.
///
/// `action_id` is the command the overlay advertises; `host_action_id` is the
/// editor's own jump command that runs once the cursor sits on the symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActionDescriptor {
    pub title: &'static str,
    pub action_id: &'static str,
    pub host_action_id: &'static str,
}

impl ActionDescriptor {
    pub const fn new(
        title: &'static str,
        action_id: &'static str,
        host_action_id: &'static str,
    ) -> Self {
        Self {
            title,
            action_id,
            host_action_id,
        }
    }
}

/// Actions in display order.
pub const NAVIGATION_ACTIONS: [ActionDescriptor; 6] = [
    ActionDescriptor::new("Def", "navLens.goToDefinitionAt", "editor.action.revealDefinition"),
    ActionDescriptor::new("Type", "navLens.goToTypeDefinitionAt", "editor.action.goToTypeDefinition"),
    ActionDescriptor::new("Impl", "navLens.goToImplementationAt", "editor.action.goToImplementation"),
    ActionDescriptor::new("Hier", "navLens.showTypeHierarchyAt", "editor.showTypeHierarchy"),
    ActionDescriptor::new("Callers", "navLens.showCallersAt", "editor.showIncomingCalls"),
    ActionDescriptor::new("Refs", "navLens.goToReferencesAt", "editor.action.referenceSearch.trigger"),
];

pub fn find_action(action_id: &str) -> Option<&'static ActionDescriptor> {
    NAVIGATION_ACTIONS.iter().find(|action| action.action_id == action_id)
}

/// Command identifiers to advertise through `executeCommandProvider`.
pub fn action_ids() -> Vec<String> {
    NAVIGATION_ACTIONS.iter().map(|action| action.action_id.to_string()).collect()
}

#[cfg(test)]
#[path = "../../tests/src/actions/descriptor_tests.rs"]
mod tests;
