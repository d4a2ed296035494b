use std::{cell::RefCell, fmt, rc::Rc};

use crate::{interpreter::value::core::Value, util::num::resolve_index};

/// Handle to a list's elements.
///
/// Cloning the handle shares the elements. Binary operators therefore always
/// build a new `List` with [`List::deep_copy`], while `SHOVE` and `YANK`
/// change the shared elements through [`List::push`] and [`List::remove`].
///
/// Only deep copies are ever stored into a list, so no list can contain
/// itself.
#[derive(Clone, Default)]
pub struct List(Rc<RefCell<Vec<Value>>>);

impl List {
    #[must_use]
    pub fn new(items: Vec<Value>) -> Self {
        Self(Rc::new(RefCell::new(items)))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Copies the current elements out of the list, nested lists included.
    ///
    /// ## Example
    /// ```
    /// use southscript::interpreter::value::{core::Value, list::List};
    ///
    /// let inner = List::new(vec![Value::from(1.0)]);
    /// let outer = List::new(vec![Value::from(inner.clone())]);
    ///
    /// let copy = outer.copied_items();
    /// inner.push(Value::from(2.0));
    ///
    /// assert_eq!(copy[0].to_string(), "[1]");
    /// assert_eq!(outer.to_string(), "[[1, 2]]");
    /// ```
    #[must_use]
    pub fn copied_items(&self) -> Vec<Value> {
        self.0.borrow().iter().map(Value::deep_copy).collect()
    }

    /// A new list sharing no storage with `self` at any depth.
    #[must_use]
    pub fn deep_copy(&self) -> Self {
        Self::new(self.copied_items())
    }

    /// Returns the element at a language-level index.
    ///
    /// See [`resolve_index`] for which indices are accepted.
    #[must_use]
    pub fn get(&self, index: f64) -> Option<Value> {
        let items = self.0.borrow();
        resolve_index(index, items.len()).map(|i| items[i].clone())
    }

    /// Appends `value` to the shared elements.
    pub fn push(&self, value: Value) {
        self.0.borrow_mut().push(value);
    }

    /// Removes and returns the element at a language-level index.
    pub fn remove(&self, index: f64) -> Option<Value> {
        let mut items = self.0.borrow_mut();
        resolve_index(index, items.len()).map(|i| items.remove(i))
    }

    /// Whether both handles refer to the same elements.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl From<Vec<Value>> for List {
    fn from(items: Vec<Value>) -> Self {
        Self::new(items)
    }
}

impl PartialEq for List {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || *self.0.borrow() == *other.0.borrow()
    }
}

impl fmt::Debug for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.borrow().iter()).finish()
    }
}

impl fmt::Display for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.0.borrow().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "]")
    }
}
