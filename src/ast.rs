use std::rc::Rc;

use crate::interpreter::position::Span;

/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// Every construct of the language is an expression, including conditionals,
/// loops and function definitions. Each variant carries the span it was
/// parsed from; composite nodes span from their first to their last token.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// An integer or floating-point literal.
    Number {
        /// The literal value.
        value: f64,
        /// Source range.
        span:  Span,
    },
    /// A double quoted text literal, escapes already resolved.
    Text {
        /// The literal text.
        value: String,
        /// Source range.
        span:  Span,
    },
    /// A list literal such as `[1, "two", x]`.
    List {
        /// Element expressions in source order.
        items: Vec<Self>,
        /// Source range.
        span:  Span,
    },
    /// Reference to a variable by name.
    Identifier {
        /// Name of the variable.
        name: String,
        /// Source range.
        span: Span,
    },
    /// `THANG name = value`, binding in the current frame.
    Assignment {
        /// Name being bound.
        name:  String,
        /// Expression producing the bound value.
        value: Box<Self>,
        /// Source range.
        span:  Span,
    },
    /// A binary operation (addition, comparison, logic, etc.).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Source range.
        span:  Span,
    },
    /// A prefix operation (`+`, `-`, `AIN'T`).
    UnaryOp {
        /// The unary operator to apply.
        op:      UnaryOperator,
        /// The operand expression.
        operand: Box<Self>,
        /// Source range.
        span:    Span,
    },
    /// `RECKON c THEN r (MIGHTCOULD c THEN r)* (ELSE d)?`.
    Conditional {
        /// Condition/result pairs, tried in order.
        cases:   Vec<ConditionalCase>,
        /// Result used when no condition holds.
        default: Option<Box<Self>>,
        /// Source range.
        span:    Span,
    },
    /// `TROT var = start T' end (BY_A_PEICE step)? THEN body`.
    ForLoop {
        /// The loop variable name.
        var:   String,
        /// First value of the loop variable.
        start: Box<Self>,
        /// Inclusive bound of the loop variable.
        end:   Box<Self>,
        /// Increment per iteration, `1` when absent.
        step:  Option<Box<Self>>,
        /// Expression evaluated for every iteration.
        body:  Box<Self>,
        /// Source range.
        span:  Span,
    },
    /// `WHILES cond THEN body...`.
    WhileLoop {
        /// Condition re-evaluated before each iteration.
        condition: Box<Self>,
        /// The body; several body expressions are wrapped in a list literal.
        body:      Option<Box<Self>>,
        /// Source range.
        span:      Span,
    },
    /// `FIXIN' name?(params) -> body`.
    FunctionDef {
        /// The definition, shared with every function value created from it.
        def:  Rc<FunctionDef>,
        /// Source range.
        span: Span,
    },
    /// A call such as `fact(5)`.
    Call {
        /// Expression producing the function to call.
        callee:    Box<Self>,
        /// Argument expressions in source order.
        arguments: Vec<Self>,
        /// Source range.
        span:      Span,
    },
}

impl Expr {
    /// Gets the source range of `self`.
    #[must_use]
    pub const fn span(&self) -> &Span {
        match self {
            Self::Number { span, .. }
            | Self::Text { span, .. }
            | Self::List { span, .. }
            | Self::Identifier { span, .. }
            | Self::Assignment { span, .. }
            | Self::BinaryOp { span, .. }
            | Self::UnaryOp { span, .. }
            | Self::Conditional { span, .. }
            | Self::ForLoop { span, .. }
            | Self::WhileLoop { span, .. }
            | Self::FunctionDef { span, .. }
            | Self::Call { span, .. } => span,
        }
    }
}

/// One `condition THEN result` clause of a conditional.
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionalCase {
    /// Tested for truthiness.
    pub condition: Expr,
    /// Evaluated when `condition` is the first truthy one.
    pub result:    Expr,
}

/// Represents a user-defined function definition.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// The name of the function, `None` for anonymous functions.
    pub name:   Option<String>,
    /// The parameter names.
    pub params: Vec<String>,
    /// The body expression evaluated when the function is called.
    pub body:   Expr,
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic, comparisons and logic.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Logical and (`AN'`)
    And,
    /// Logical or (`OR`)
    Or,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Prefix plus, which leaves its operand unchanged (e.g. `+x`).
    Plus,
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Logical NOT (e.g. `AIN'T x`).
    Not,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Or, Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Equal => "==",
            NotEqual => "!=",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
            And => "AN'",
            Or => "OR",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Plus => "+",
            Self::Negate => "-",
            Self::Not => "AIN'T",
        };
        write!(f, "{operator}")
    }
}
