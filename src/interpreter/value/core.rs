use std::{fmt, rc::Rc};

use crate::interpreter::{
    context::Context,
    position::Span,
    value::{
        function::{Function, NativeFunction},
        list::List,
    },
};

/// The variants a runtime value can take.
///
/// There is a single number type; integers are numbers without a fractional
/// part and only differ in how they are printed.
#[derive(Debug, Clone)]
pub enum ValueKind {
    /// A double precision number.
    Number(f64),
    /// An immutable piece of text.
    Text(Rc<str>),
    /// A list of values, see [`List`] for the sharing rules.
    List(List),
    /// A function defined with `FIXIN'`.
    Function(Rc<Function>),
    /// A built-in function.
    Native(Rc<NativeFunction>),
}

impl PartialEq for ValueKind {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            (Self::Function(a), Self::Function(b)) => Rc::ptr_eq(a, b),
            (Self::Native(a), Self::Native(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// Represents a runtime value in the interpreter.
///
/// Besides its [`ValueKind`], a value remembers where it was produced and in
/// which execution context. Both are diagnostics metadata: they decide where
/// an error involving the value points, and are ignored by equality.
///
/// ## Example
/// ```
/// use southscript::interpreter::value::core::Value;
///
/// let a = Value::from(3.0);
/// let b = Value::from("three");
///
/// assert!(a.is_truthy());
/// assert_eq!(a.to_string(), "3");
/// assert_eq!(b.to_string(), "three");
/// assert_ne!(a, b);
/// ```
#[derive(Debug, Clone)]
pub struct Value {
    pub kind:    ValueKind,
    pub span:    Option<Span>,
    pub context: Option<Context>,
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

impl Value {
    #[must_use]
    pub const fn new(kind: ValueKind) -> Self {
        Self { kind,
               span: None,
               context: None }
    }

    /// Returns `self` attributed to `span`.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Returns `self` owned by `context`.
    #[must_use]
    pub fn with_context(mut self, context: Context) -> Self {
        self.context = Some(context);
        self
    }

    /// Converts the value to a boolean for conditions and loops.
    ///
    /// Numbers are truthy when nonzero, text and lists when non-empty.
    /// Functions are always truthy.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match &self.kind {
            ValueKind::Number(n) => *n != 0.0,
            ValueKind::Text(s) => !s.is_empty(),
            ValueKind::List(items) => !items.is_empty(),
            ValueKind::Function(_) | ValueKind::Native(_) => true,
        }
    }

    /// Returns a copy of `self` in which every nested list is a new list.
    ///
    /// Values of any other type are cloned as they are.
    #[must_use]
    pub fn deep_copy(&self) -> Self {
        match &self.kind {
            ValueKind::List(items) => Self { kind:    ValueKind::List(items.deep_copy()),
                                             span:    self.span.clone(),
                                             context: self.context.clone(), },
            _ => self.clone(),
        }
    }

    /// Returns the numeric payload, if any.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self.kind {
            ValueKind::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Returns the text payload, if any.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match &self.kind {
            ValueKind::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the list handle, if any.
    #[must_use]
    pub const fn as_list(&self) -> Option<&List> {
        match &self.kind {
            ValueKind::List(items) => Some(items),
            _ => None,
        }
    }

    /// The name of the value's type as used in error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self.kind {
            ValueKind::Number(_) => "number",
            ValueKind::Text(_) => "text",
            ValueKind::List(_) => "list",
            ValueKind::Function(_) => "function",
            ValueKind::Native(_) => "built-in function",
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::new(ValueKind::Number(n))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::from(if b { 1.0 } else { 0.0 })
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::new(ValueKind::Text(s.into()))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::new(ValueKind::Text(s.into()))
    }
}

impl From<Vec<Self>> for Value {
    fn from(items: Vec<Self>) -> Self {
        Self::new(ValueKind::List(List::new(items)))
    }
}

impl From<List> for Value {
    fn from(items: List) -> Self {
        Self::new(ValueKind::List(items))
    }
}

impl From<Function> for Value {
    fn from(f: Function) -> Self {
        Self::new(ValueKind::Function(Rc::new(f)))
    }
}

impl From<NativeFunction> for Value {
    fn from(f: NativeFunction) -> Self {
        Self::new(ValueKind::Native(Rc::new(f)))
    }
}

/// Formats a number the way the language prints it.
///
/// Integral numbers print without a fractional part and negative zero prints
/// as `0`.
///
/// ## Example
/// ```
/// use southscript::interpreter::value::core::format_number;
///
/// assert_eq!(format_number(120.0), "120");
/// assert_eq!(format_number(-0.0), "0");
/// assert_eq!(format_number(2.5), "2.5");
/// ```
#[must_use]
pub fn format_number(n: f64) -> String {
    if n == 0.0 { "0".to_string() } else { n.to_string() }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ValueKind::Number(n) => write!(f, "{}", format_number(*n)),
            ValueKind::Text(s) => write!(f, "{s}"),
            ValueKind::List(items) => write!(f, "{items}"),
            ValueKind::Function(func) => write!(f, "<function {}>", func.name()),
            ValueKind::Native(native) => write!(f, "<built-in function {}>", native.name),
        }
    }
}
