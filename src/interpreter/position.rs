use std::rc::Rc;

/// A snapshot of a location in the source text.
///
/// A `Position` records the character offset together with the derived line
/// and column, plus the name and full text of the source it points into.
/// Positions are immutable: [`Position::advance`] returns a fresh snapshot,
/// so a position captured by a token or error can never be changed by later
/// scanning.
#[derive(Debug, Clone, PartialEq)]
pub struct Position {
    /// Zero-based character offset into the source text.
    pub offset:      usize,
    /// Zero-based line number.
    pub line:        usize,
    /// Zero-based column within the current line.
    pub column:      usize,
    /// Name of the source the text came from, e.g. `<stdin>` or a file path.
    pub source_name: Rc<str>,
    /// The complete source text the position points into.
    pub source_text: Rc<str>,
}

impl Position {
    /// Creates the position of the first character of `source_text`.
    #[must_use]
    pub fn start(source_name: &str, source_text: &str) -> Self {
        Self { offset:      0,
               line:        0,
               column:      0,
               source_name: Rc::from(source_name),
               source_text: Rc::from(source_text), }
    }

    /// Returns the position one character past this one.
    ///
    /// The offset always grows by exactly one. When the consumed character is
    /// a newline, the line number grows and the column resets to zero;
    /// otherwise only the column grows.
    ///
    /// # Parameters
    /// - `consumed`: The character that was consumed at this position, or
    ///   `None` when advancing past the end of the text.
    ///
    /// # Returns
    /// A new `Position`; `self` is left untouched.
    ///
    /// # Example
    /// ```
    /// use anaconda::interpreter::position::Position;
    ///
    /// let start = Position::start("<doc>", "a\nb");
    /// let next = start.advance(Some('a'));
    /// assert_eq!(next.offset, 1);
    /// assert_eq!((next.line, next.column), (0, 1));
    ///
    /// let after_newline = next.advance(Some('\n'));
    /// assert_eq!((after_newline.line, after_newline.column), (1, 0));
    ///
    /// // Earlier snapshots are unaffected.
    /// assert_eq!(start.offset, 0);
    /// ```
    #[must_use]
    pub fn advance(&self, consumed: Option<char>) -> Self {
        let (line, column) = if consumed == Some('\n') {
            (self.line + 1, 0)
        } else {
            (self.line, self.column + 1)
        };

        Self { offset: self.offset + 1,
               line,
               column,
               source_name: Rc::clone(&self.source_name),
               source_text: Rc::clone(&self.source_text) }
    }
}

/// A contiguous region of source text, delimited by a start and an end
/// position. The end position points one character past the last character
/// belonging to the region.
#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    /// Position of the first character of the region.
    pub start: Position,
    /// Position one past the last character of the region.
    pub end:   Position,
}

impl Span {
    /// Builds a span from its two end points.
    #[must_use]
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }
}
