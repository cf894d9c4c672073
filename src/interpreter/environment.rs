use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::interpreter::value::Value;

/// Shared handle to an [`Environment`].
///
/// Environments are shared by reference: every closure that captured a scope
/// holds the same record, so a later `let` in that scope is visible to the
/// closure. Interior mutability is limited to the name→value map.
pub type Env = Rc<RefCell<Environment>>;

/// A lexical scope: name→value bindings plus an optional enclosing scope.
///
/// Scopes form a chain through `outer`. A parent never references a child,
/// so the chain stays acyclic on its own; the one loop in the object graph
/// (a closure bound into the scope it captured) goes through a function
/// value, not through `outer`.
#[derive(Default)]
pub struct Environment {
    store: HashMap<String, Value>,
    outer: Option<Env>,
}

#[allow(clippy::new_ret_no_self)]
impl Environment {
    /// Creates a fresh top-level environment with no bindings and no outer
    /// scope.
    #[must_use]
    pub fn new() -> Env {
        Rc::new(RefCell::new(Self::default()))
    }

    /// Creates an empty environment enclosed by `outer`.
    ///
    /// Function application uses this with the function's *captured*
    /// environment as the outer scope, never the caller's.
    #[must_use]
    pub fn new_enclosed(outer: &Env) -> Env {
        Rc::new(RefCell::new(Self { store: HashMap::new(),
                                    outer: Some(Rc::clone(outer)), }))
    }

    /// Resolves a name, walking outer scopes until it is found or the chain
    /// is exhausted.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        match self.store.get(name) {
            Some(value) => Some(value.clone()),
            None => self.outer.as_ref().and_then(|outer| outer.borrow().get(name)),
        }
    }

    /// Binds a name in this scope only; outer scopes are never written.
    pub fn set(&mut self, name: String, value: Value) {
        self.store.insert(name, value);
    }
}
