use std::{cell::RefCell, fmt, rc::Rc};

use rustc_hash::FxHashMap;

use crate::interpreter::value::core::Value;

#[derive(Default)]
struct Frame {
    bindings: FxHashMap<String, Value>,
    parent:   Option<Scope>,
}

/// A chained lexical environment.
///
/// A scope is a handle to one frame of bindings plus an optional link to the
/// enclosing frame. Cloning the handle shares the frame, which is how
/// closures capture their defining scope by reference. Frames only point
/// outward, never at their children.
///
/// Policy (whether a name may be declared or assigned) belongs to the
/// evaluator; the scope only reports where names live.
///
/// # Example
/// ```
/// use stargust::interpreter::{scope::Scope, value::core::Value};
///
/// let global = Scope::new();
/// global.define("x", Value::Integer(1));
///
/// let inner = Scope::enclosed(&global);
/// inner.define("x", Value::Integer(2));
///
/// assert!(matches!(inner.get("x"), Some(Value::Integer(2))));
/// assert!(matches!(global.get("x"), Some(Value::Integer(1))));
/// ```
#[derive(Clone, Default)]
pub struct Scope(Rc<RefCell<Frame>>);

impl Scope {
    /// Creates a root scope with no parent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty scope whose parent is `parent`.
    #[must_use]
    pub fn enclosed(parent: &Self) -> Self {
        Self(Rc::new(RefCell::new(Frame { bindings: FxHashMap::default(),
                                          parent:   Some(parent.clone()), })))
    }

    /// Looks `name` up in this frame, then in each enclosing frame.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        let frame = self.0.borrow();
        match frame.bindings.get(name) {
            Some(value) => Some(value.clone()),
            None => frame.parent.as_ref().and_then(|parent| parent.get(name)),
        }
    }

    /// Returns `true` if `name` is bound in this frame itself.
    #[must_use]
    pub fn contains_local(&self, name: &str) -> bool {
        self.0.borrow().bindings.contains_key(name)
    }

    /// Binds `name` in this frame, replacing any existing local binding.
    pub fn define(&self, name: impl Into<String>, value: Value) {
        self.0.borrow_mut().bindings.insert(name.into(), value);
    }

    /// Rebinds `name` in the nearest frame that holds it.
    ///
    /// # Returns
    /// `false`, without binding anything, when no frame holds `name`.
    pub fn assign(&self, name: &str, value: Value) -> bool {
        let mut frame = self.0.borrow_mut();
        if let Some(slot) = frame.bindings.get_mut(name) {
            *slot = value;
            return true;
        }
        match &frame.parent {
            Some(parent) => parent.assign(name, value),
            None => false,
        }
    }

    /// Names bound in this frame, sorted.
    #[must_use]
    pub fn local_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.0.borrow().bindings.keys().cloned().collect();
        names.sort_unstable();
        names
    }
}

// Bindings may hold closures that capture this scope, so only names are shown.
impl fmt::Debug for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scope")
         .field("names", &self.local_names())
         .field("has_parent", &self.0.borrow().parent.is_some())
         .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assign_writes_to_the_holding_frame() {
        let global = Scope::new();
        global.define("count", Value::Integer(0));
        let inner = Scope::enclosed(&global);

        assert!(inner.assign("count", Value::Integer(5)));
        assert!(!inner.contains_local("count"));
        assert!(matches!(global.get("count"), Some(Value::Integer(5))));
    }

    #[test]
    fn assign_to_unknown_name_fails() {
        let inner = Scope::enclosed(&Scope::new());

        assert!(!inner.assign("missing", Value::Null));
        assert!(inner.get("missing").is_none());
    }

    #[test]
    fn clones_share_the_frame() {
        let scope = Scope::new();
        let alias = scope.clone();
        alias.define("x", Value::Boolean(true));

        assert!(scope.contains_local("x"));
        assert_eq!(scope.local_names(), vec!["x".to_string()]);
    }
}
