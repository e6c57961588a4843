use crate::{
    error::LexError,
    interpreter::position::{Position, Span},
};

/// The kind of a lexical token, including the numeric payload for literals.
///
/// This enum defines every token the language recognizes. Single-character
/// operators and parentheses carry no payload; number literals carry their
/// parsed value.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// Integer literal tokens, such as `42`.
    Integer(i64),
    /// Floating-point literal tokens, such as `3.14`, `.5` or `2.`.
    Real(f64),
    /// End of input. Every successful scan produces exactly one, last.
    Eof,
}

/// A token produced by the lexer: its kind plus the span of source text it
/// was scanned from. Immutable once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// What the token is, including any literal payload.
    pub kind: TokenKind,
    /// Exact source region the token covers.
    pub span: Span,
}

impl Token {
    /// Builds a token covering an explicit span. Used for multi-character
    /// tokens, which supply their own end position.
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Builds a one-character token at `pos`; the span ends one character
    /// past it.
    #[must_use]
    pub fn single(kind: TokenKind, pos: &Position) -> Self {
        Self { kind,
               span: Span::new(pos.clone(), pos.advance(None)) }
    }
}

/// The lexer walks the source text character by character and produces the
/// token sequence consumed by the parser.
///
/// Scanning keeps a single [`Position`] cursor pointing at the next
/// unconsumed character; every token and error captures its own snapshot of
/// that cursor, so positions survive unchanged however far scanning
/// continues.
pub struct Lexer {
    chars: Vec<char>,
    pos:   Position,
}

impl Lexer {
    /// Creates a lexer over `text`, reporting positions against
    /// `source_name`.
    #[must_use]
    pub fn new(source_name: &str, text: &str) -> Self {
        Self { chars: text.chars().collect(),
               pos:   Position::start(source_name, text), }
    }

    /// Scans the whole input and returns its tokens, terminated by a single
    /// [`TokenKind::Eof`] token at the final cursor location.
    ///
    /// Spaces and tabs are skipped. The first character that does not belong
    /// to the language aborts scanning: no partial token sequence is
    /// returned on a lexical failure.
    ///
    /// # Errors
    /// - [`LexError::IllegalCharacter`] for any unrecognized character,
    ///   spanning exactly that character.
    /// - [`LexError::LiteralTooLarge`] for an integer literal that does not
    ///   fit 64 bits.
    ///
    /// # Example
    /// ```
    /// use anaconda::interpreter::lexer::{Lexer, TokenKind};
    ///
    /// let tokens = Lexer::new("<doc>", "1 + 2").tokenize().unwrap();
    /// assert_eq!(tokens.len(), 4);
    /// assert_eq!(tokens[3].kind, TokenKind::Eof);
    ///
    /// assert!(Lexer::new("<doc>", "5 & 3").tokenize().is_err());
    /// ```
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        while let Some(ch) = self.current() {
            match ch {
                ' ' | '\t' => self.advance(),
                '+' => tokens.push(self.operator(TokenKind::Plus)),
                '-' => tokens.push(self.operator(TokenKind::Minus)),
                '*' => tokens.push(self.operator(TokenKind::Star)),
                '/' => tokens.push(self.operator(TokenKind::Slash)),
                '(' => tokens.push(self.operator(TokenKind::LParen)),
                ')' => tokens.push(self.operator(TokenKind::RParen)),
                '0'..='9' | '.' => tokens.push(self.number()?),
                _ => {
                    let start = self.pos.clone();
                    self.advance();
                    return Err(LexError::IllegalCharacter { ch,
                                                           span: Span::new(start,
                                                                           self.pos.clone()) });
                },
            }
        }

        tokens.push(Token::single(TokenKind::Eof, &self.pos));
        Ok(tokens)
    }

    /// The character under the cursor, or `None` past end of text.
    fn current(&self) -> Option<char> {
        self.chars.get(self.pos.offset).copied()
    }

    fn advance(&mut self) {
        self.pos = self.pos.advance(self.current());
    }

    /// Emits a one-character token at the cursor and moves past it.
    fn operator(&mut self, kind: TokenKind) -> Token {
        let token = Token::single(kind, &self.pos);
        self.advance();
        token
    }

    /// Scans a number literal: digits with at most one dot.
    ///
    /// A second dot terminates the number without being consumed; whatever
    /// follows is scanned as usual, so an input like `1..2` tokenizes and is
    /// rejected later by the parser rather than here. Zero dots produce an
    /// integer token, one dot a floating-point token. A dot with no digits
    /// around it is an illegal character.
    fn number(&mut self) -> Result<Token, LexError> {
        let start = self.pos.clone();
        let mut text = String::new();
        let mut dots = 0;

        while let Some(ch) = self.current() {
            match ch {
                '0'..='9' => {
                    text.push(ch);
                    self.advance();
                },
                '.' if dots == 0 => {
                    dots += 1;
                    text.push(ch);
                    self.advance();
                },
                _ => break,
            }
        }

        let span = Span::new(start, self.pos.clone());

        if !text.bytes().any(|b| b.is_ascii_digit()) {
            return Err(LexError::IllegalCharacter { ch: '.', span });
        }

        if dots == 0 {
            match text.parse::<i64>() {
                Ok(value) => Ok(Token::new(TokenKind::Integer(value), span)),
                Err(_) => Err(LexError::LiteralTooLarge { span }),
            }
        } else {
            match text.parse::<f64>() {
                Ok(value) => Ok(Token::new(TokenKind::Real(value), span)),
                Err(_) => Err(LexError::LiteralTooLarge { span }),
            }
        }
    }
}
