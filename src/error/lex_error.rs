use crate::interpreter::position::Span;

#[derive(Debug)]
/// Represents all errors that can occur while scanning source text.
pub enum LexError {
    /// Found a character that does not belong to the language.
    IllegalCharacter {
        /// The offending character.
        ch:   char,
        /// Its one-character span in the source.
        span: Span,
    },
    /// An integer literal was too large to be represented.
    LiteralTooLarge {
        /// The span of the literal.
        span: Span,
    },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IllegalCharacter { ch, span } => {
                write!(f,
                       "Illegal Character : '{ch}'\nFile {}, line {}",
                       span.start.source_name,
                       span.start.line + 1)
            },
            Self::LiteralTooLarge { span } => {
                write!(f,
                       "Illegal Number : Literal is too large\nFile {}, line {}",
                       span.start.source_name,
                       span.start.line + 1)
            },
        }
    }
}

impl std::error::Error for LexError {}
