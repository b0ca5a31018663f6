use std::collections::HashMap;
use std::rc::Rc;

/// A zero-argument callback a document can reference by name.
pub type Action = Rc<dyn Fn()>;

/// Name → callback table bridging declarative documents and application code.
///
/// A `Button` node's `onClick` field is a key into this registry, so behavior
/// never has to be embedded in the document itself. The registry is an
/// explicit instance owned by the application and handed to the
/// [`crate::factory::Factory`]; registration is expected to finish before the
/// trees that reference those actions are built. Entries are never removed.
pub struct ActionRegistry {
    actions: HashMap<String, Action>,
    noop: Action,
}

impl ActionRegistry {
    pub fn new() -> Self {
        Self {
            actions: HashMap::new(),
            noop: Rc::new(|| {}),
        }
    }

    pub fn register(&mut self, name: impl Into<String>, f: impl Fn() + 'static) {
        self.actions.insert(name.into(), Rc::new(f));
    }

    /// Looks up an action by name.
    ///
    /// A missing name yields a shared no-op rather than an error, so a
    /// document can reference actions the application has not wired up yet
    /// without breaking the build of its tree.
    pub fn get(&self, name: &str) -> Action {
        self.actions.get(name).cloned().unwrap_or_else(|| Rc::clone(&self.noop))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.actions.contains_key(name)
    }
}

impl Default for ActionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn registered_action_fires() {
        let count = Rc::new(Cell::new(0));
        let mut registry = ActionRegistry::new();
        let c = Rc::clone(&count);
        registry.register("bump", move || c.set(c.get() + 1));

        registry.get("bump")();
        registry.get("bump")();
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn missing_action_is_harmless_noop() {
        let registry = ActionRegistry::new();
        registry.get("nothing_here")();
    }

    #[test]
    fn contains_reflects_registration() {
        let mut registry = ActionRegistry::new();
        assert!(!registry.contains("x"));
        registry.register("x", || {});
        assert!(registry.contains("x"));
    }
}
