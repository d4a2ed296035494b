use std::{cell::RefCell, collections::HashMap, fmt, rc::Rc};

use crate::interpreter::value::core::Value;

/// One frame of the scope chain.
#[derive(Default)]
struct Scope {
    bindings: HashMap<String, Value>,
    parent:   Option<Environment>,
}

/// Handle to a frame of name bindings, the lexical scope chain.
///
/// Environments are shared by reference: cloning the handle never copies the
/// bindings. A function value keeps the environment it was defined in alive,
/// which is what makes closures and recursion by name work.
///
/// ## Example
/// ```
/// use southscript::interpreter::{environment::Environment, value::core::Value};
///
/// let globals = Environment::new_root();
/// globals.bind("x", Value::from(1.0));
///
/// let local = Environment::new_child(&globals);
/// local.bind("x", Value::from(2.0));
///
/// assert_eq!(local.lookup("x"), Some(Value::from(2.0)));
/// assert_eq!(globals.lookup("x"), Some(Value::from(1.0)));
/// ```
#[derive(Clone, Default)]
pub struct Environment(Rc<RefCell<Scope>>);

impl Environment {
    /// Creates a frame without a parent.
    #[must_use]
    pub fn new_root() -> Self {
        Self::default()
    }

    /// Creates an empty frame enclosed by `parent`.
    #[must_use]
    pub fn new_child(parent: &Self) -> Self {
        Self(Rc::new(RefCell::new(Scope { bindings: HashMap::new(),
                                          parent:   Some(parent.clone()), })))
    }

    /// Resolves `name` in this frame, then in each enclosing frame.
    ///
    /// Returns a clone of the stored value; `None` when no frame binds it.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<Value> {
        let scope = self.0.borrow();
        if let Some(value) = scope.bindings.get(name) {
            return Some(value.clone());
        }
        scope.parent.as_ref().and_then(|parent| parent.lookup(name))
    }

    /// Binds `name` in this frame, shadowing or replacing any earlier binding.
    ///
    /// Enclosing frames are never modified.
    pub fn bind(&self, name: impl Into<String>, value: Value) {
        self.0.borrow_mut().bindings.insert(name.into(), value);
    }

    /// Whether `name` is bound in this frame itself.
    #[must_use]
    pub fn contains_local(&self, name: &str) -> bool {
        self.0.borrow().bindings.contains_key(name)
    }

    /// The names bound in this frame, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<_> = self.0.borrow().bindings.keys().cloned().collect();
        names.sort();
        names
    }

    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        self.0.borrow().parent.clone()
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
         .field("names", &self.names())
         .field("has_parent", &self.0.borrow().parent.is_some())
         .finish()
    }
}
