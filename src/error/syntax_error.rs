use crate::interpreter::position::Span;

#[derive(Debug)]
/// Represents all errors that can occur while parsing the token sequence.
pub enum SyntaxError {
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// The span of the token found instead.
        span: Span,
    },
    /// A number literal (or a sign/parenthesized factor) was expected.
    ExpectedNumber {
        /// The span of the token found instead.
        span: Span,
    },
    /// Found extra tokens after the expression was fully parsed.
    UnexpectedTrailingTokens {
        /// The span of the first trailing token.
        span: Span,
    },
    /// Reached the end of the token sequence unexpectedly. Only reachable
    /// when parsing a token slice that carries no end-of-input token.
    UnexpectedEndOfInput,
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ExpectedClosingParen { span } => {
                write!(f,
                       "Illegal Syntax : Expected \")\"\nFile {}, line {}",
                       span.start.source_name,
                       span.start.line + 1)
            },
            Self::ExpectedNumber { span } => {
                write!(f,
                       "Illegal Syntax : Expected INT or FLOAT\nFile {}, line {}",
                       span.start.source_name,
                       span.start.line + 1)
            },
            Self::UnexpectedTrailingTokens { span } => {
                write!(f,
                       "Illegal Syntax : Expected \"*\", \"/\", \"+\" or \"-\"\nFile {}, line {}",
                       span.start.source_name,
                       span.start.line + 1)
            },
            Self::UnexpectedEndOfInput => {
                write!(f, "Illegal Syntax : Unexpected end of input")
            },
        }
    }
}

impl std::error::Error for SyntaxError {}
