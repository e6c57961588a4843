/// Lexical errors.
///
/// Defines the errors the scanner can raise before any token reaches the
/// parser: unrecognized characters and unrepresentable number literals.
pub mod lex_error;
/// Runtime errors.
///
/// Contains the errors that can be raised during evaluation, currently
/// division by zero. Runtime errors carry the call context chain and render
/// a traceback.
pub mod runtime_error;
/// Syntax errors.
///
/// Defines the errors the parser can raise: unexpected tokens, unmatched
/// parentheses, and trailing input after a complete expression.
pub mod syntax_error;

pub use lex_error::LexError;
pub use runtime_error::RuntimeError;
pub use syntax_error::SyntaxError;

/// Any error the pipeline can produce, tagged by the stage that raised it.
///
/// Each stage returns its own error type; `Error` aggregates them so the
/// whole pipeline composes with `?`. Rendering delegates to the stage error,
/// which formats the message and source location (and, for runtime errors,
/// the traceback).
///
/// # Example
/// ```
/// let error = anaconda::run("<stdin>", "5 & 3").unwrap_err();
/// assert_eq!(error.to_string(), "Illegal Character : '&'\nFile <stdin>, line 1");
/// ```
#[derive(Debug)]
pub enum Error {
    /// The scanner rejected the source text.
    Lex(LexError),
    /// The parser rejected the token sequence.
    Syntax(SyntaxError),
    /// Evaluation failed.
    Runtime(RuntimeError),
}

impl From<LexError> for Error {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}

impl From<SyntaxError> for Error {
    fn from(e: SyntaxError) -> Self {
        Self::Syntax(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Syntax(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Syntax(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
