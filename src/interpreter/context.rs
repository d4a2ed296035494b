use std::{fmt, rc::Rc};

use crate::interpreter::position::Position;

/// One record of the dynamic call stack.
struct Frame {
    name:   String,
    parent: Option<Context>,
    entry:  Option<Position>,
}

/// Handle to an execution context, the dynamic call chain used for tracebacks.
///
/// Contexts are independent of environments: a function's environment parent
/// is the scope it was defined in, while its context parent is whoever called
/// it. Frames are immutable once created and cheap to clone.
#[derive(Clone)]
pub struct Context(Rc<Frame>);

impl Context {
    /// Creates an outermost context such as `<main>`.
    #[must_use]
    pub fn root(name: impl Into<String>) -> Self {
        Self(Rc::new(Frame { name:   name.into(),
                             parent: None,
                             entry:  None, }))
    }

    /// Creates the context of a call made from `self` at `call_site`.
    ///
    /// ## Example
    /// ```
    /// use southscript::interpreter::context::Context;
    ///
    /// let main = Context::root("<main>");
    /// let call = main.enter("fact", None);
    ///
    /// let names: Vec<_> = call.frames().map(|c| c.name().to_string()).collect();
    /// assert_eq!(names, ["fact", "<main>"]);
    /// ```
    #[must_use]
    pub fn enter(&self, name: impl Into<String>, call_site: Option<Position>) -> Self {
        Self(Rc::new(Frame { name:   name.into(),
                             parent: Some(self.clone()),
                             entry:  call_site, }))
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.0.name
    }

    #[must_use]
    pub fn parent(&self) -> Option<&Self> {
        self.0.parent.as_ref()
    }

    /// The position of the call that created this context.
    #[must_use]
    pub fn entry(&self) -> Option<&Position> {
        self.0.entry.as_ref()
    }

    /// Iterates from this context outward to the root.
    pub fn frames(&self) -> impl Iterator<Item = &Self> {
        std::iter::successors(Some(self), |ctx| ctx.parent())
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Context").field(&self.0.name).finish()
    }
}
