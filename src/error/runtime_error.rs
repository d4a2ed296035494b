use std::fmt;

use crate::interpreter::{
    context::Context,
    position::{Position, Span},
};

/// The taxonomy of evaluation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeErrorKind {
    /// A name was read that is bound in no enclosing scope.
    UndefinedVariable,
    /// An operator or call was applied to values that do not support it.
    InvalidOperation,
    /// A number was divided by exactly zero.
    DivisionByZero,
    /// A list was indexed outside its bounds or with a non-integral index.
    IndexOutOfBounds,
    /// A function was called with the wrong number of arguments.
    ArityMismatch,
    /// A `TROT` loop was given a step of zero.
    StepIsZero,
    /// A built-in was requested by a name the registry does not know.
    UnknownNativeFunction,
    /// A built-in received an argument of the wrong type.
    InvalidArgumentType,
    /// A script passed to the loader could not be read.
    ScriptLoadFailed,
    /// A loaded script failed while running.
    ScriptFailed,
}

impl fmt::Display for RuntimeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::UndefinedVariable => "Undefined Variable",
            Self::InvalidOperation => "Invalid Operation",
            Self::DivisionByZero => "Division By Zero",
            Self::IndexOutOfBounds => "Index Out Of Bounds",
            Self::ArityMismatch => "Arity Mismatch",
            Self::StepIsZero => "Step Is Zero",
            Self::UnknownNativeFunction => "Unknown Native Function",
            Self::InvalidArgumentType => "Invalid Argument Type",
            Self::ScriptLoadFailed => "Script Load Failed",
            Self::ScriptFailed => "Script Failed",
        };
        write!(f, "{label}")
    }
}

/// Represents an error raised during evaluation.
///
/// The error remembers the execution context that was current when it was
/// constructed; rendering walks that context's parents to rebuild the call
/// stack at the point of failure.
#[derive(Debug, Clone)]
pub struct RuntimeError {
    /// What went wrong.
    pub kind:    RuntimeErrorKind,
    /// Human readable details.
    pub details: String,
    /// The source range the error is attributed to.
    pub span:    Span,
    /// The execution context at the moment of failure.
    pub context: Option<Context>,
}

impl RuntimeError {
    #[must_use]
    pub fn new(kind: RuntimeErrorKind,
               details: impl Into<String>,
               span: Span,
               context: Option<Context>)
               -> Self {
        Self { kind,
               details: details.into(),
               span,
               context }
    }

    /// Reconstructs the dynamic call stack, outermost frame first.
    ///
    /// The innermost frame is reported at the error's own position; every
    /// outer frame is reported at the call site that entered the frame below
    /// it.
    #[must_use]
    pub fn traceback(&self) -> Vec<(Position, String)> {
        let mut frames = Vec::new();
        let mut position = Some(self.span.start.clone());

        if let Some(context) = &self.context {
            for frame in context.frames() {
                if let Some(pos) = position {
                    frames.push((pos, frame.name().to_string()));
                }
                position = frame.entry().cloned();
            }
        }

        frames.reverse();
        frames
    }
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let traceback = self.traceback();
        if traceback.is_empty() {
            writeln!(f, "{}", self.span.start)?;
        }
        for (position, frame) in &traceback {
            writeln!(f, "{position}, in {frame}")?;
        }
        write!(f, "Cattywampus! {}: {}", self.kind, self.details)
    }
}

impl std::error::Error for RuntimeError {}
