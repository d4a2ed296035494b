use std::{fmt, rc::Rc};

/// A single location inside a named source text.
///
/// Lines and columns are zero based; they are converted to the one based form
/// only when a diagnostic is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    /// Name of the source the position belongs to (a file path or `<stdin>`).
    pub source: Rc<str>,
    /// Byte offset from the start of the source.
    pub offset: usize,
    /// Zero based line number.
    pub line:   usize,
    /// Zero based column, counted in characters.
    pub column: usize,
}

impl Position {
    /// The line number as shown to users.
    ///
    /// ## Example
    /// ```
    /// use southscript::interpreter::position::Position;
    ///
    /// let pos = Position { source: "<stdin>".into(),
    ///                      offset: 0,
    ///                      line:   2,
    ///                      column: 0, };
    ///
    /// assert_eq!(pos.line_number(), 3);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        self.line + 1
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "File {}, line {}", self.source, self.line_number())
    }
}

/// A source range attached to tokens, AST nodes and values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// First position covered by the span.
    pub start: Position,
    /// Position just past the end of the span.
    pub end:   Position,
}

impl Span {
    #[must_use]
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Returns the span running from the start of `self` to the end of `other`.
    #[must_use]
    pub fn to(&self, other: &Self) -> Self {
        Self { start: self.start.clone(),
               end:   other.end.clone(), }
    }
}

/// Converts byte offsets into line/column pairs for one source text.
///
/// The index stores the byte offset at which every line begins, so a lookup
/// is a binary search followed by a character count within one line.
pub struct LineIndex<'src> {
    source:      Rc<str>,
    text:        &'src str,
    line_starts: Vec<usize>,
}

impl<'src> LineIndex<'src> {
    #[must_use]
    pub fn new(source_name: &str, text: &'src str) -> Self {
        let line_starts = std::iter::once(0).chain(text.match_indices('\n').map(|(i, _)| i + 1))
                                            .collect();
        Self { source: source_name.into(),
               text,
               line_starts }
    }

    /// Returns the position of a byte offset.
    ///
    /// ## Example
    /// ```
    /// use southscript::interpreter::position::LineIndex;
    ///
    /// let index = LineIndex::new("demo", "1 +\n  2");
    /// let pos = index.position(6);
    ///
    /// assert_eq!((pos.line, pos.column), (1, 2));
    /// ```
    #[must_use]
    pub fn position(&self, offset: usize) -> Position {
        let offset = offset.min(self.text.len());
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next) => next - 1,
        };
        let line_start = self.line_starts[line];
        let column = self.text
                         .get(line_start..offset)
                         .map_or(offset - line_start, |s| s.chars().count());

        Position { source: Rc::clone(&self.source),
                   offset,
                   line,
                   column }
    }

    /// Returns the span covering a byte range.
    #[must_use]
    pub fn span(&self, range: std::ops::Range<usize>) -> Span {
        Span::new(self.position(range.start), self.position(range.end))
    }
}
