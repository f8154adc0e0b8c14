use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::interpreter::value::core::Value;

/// A shared handle to an environment.
///
/// Environments are shared between the evaluator and every closure that
/// captured them, and function calls mutate their own frame, so the chain
/// lives behind `Rc<RefCell<...>>`.
pub type Env = Rc<RefCell<Environment>>;

/// A scope: a mutable name-to-value map with an optional enclosing scope.
///
/// Lookup walks outward through the chain; writes always land in the
/// innermost map, which is what gives `let` its shadowing semantics. The
/// root of the chain is the top-level environment; each function call hangs
/// a fresh frame off the callee's *captured* environment, not the caller's.
pub struct Environment {
    store: HashMap<String, Value>,
    outer: Option<Env>,
}

impl Environment {
    /// Creates a top-level environment with no enclosing scope.
    ///
    /// # Example
    /// ```
    /// use quill::interpreter::value::{core::Value, environment::Environment};
    ///
    /// let env = Environment::new();
    /// env.borrow_mut().set("x", Value::Integer(5));
    ///
    /// assert_eq!(env.borrow().get("x"), Some(Value::Integer(5)));
    /// assert_eq!(env.borrow().get("y"), None);
    /// ```
    #[must_use]
    #[allow(clippy::new_ret_no_self)]
    pub fn new() -> Env {
        Rc::new(RefCell::new(Self { store: HashMap::new(),
                                    outer: None, }))
    }

    /// Creates an environment enclosed by `outer`.
    ///
    /// Used for function call frames: names missing from the new frame
    /// resolve through the captured chain.
    ///
    /// # Example
    /// ```
    /// use quill::interpreter::value::{core::Value, environment::Environment};
    ///
    /// let global = Environment::new();
    /// global.borrow_mut().set("x", Value::Integer(1));
    ///
    /// let local = Environment::scoped(&global);
    /// local.borrow_mut().set("y", Value::Integer(2));
    ///
    /// assert_eq!(local.borrow().get("x"), Some(Value::Integer(1)));
    /// assert_eq!(global.borrow().get("y"), None);
    /// ```
    #[must_use]
    pub fn scoped(outer: &Env) -> Env {
        Rc::new(RefCell::new(Self { store: HashMap::new(),
                                    outer: Some(Rc::clone(outer)), }))
    }

    /// Looks a name up through the scope chain, innermost first.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.store.get(name) {
            return Some(value.clone());
        }
        self.outer.as_ref().and_then(|outer| outer.borrow().get(name))
    }

    /// Binds a name in this scope, shadowing any outer binding of the same
    /// name rather than updating it.
    pub fn set(&mut self, name: &str, value: Value) {
        self.store.insert(name.to_string(), value);
    }
}
