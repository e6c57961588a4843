use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::SyntaxError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::binary::parse_additive,
    },
};

/// Result type used by the parser.
///
/// Every parsing function returns either a node of type `T` or a
/// [`SyntaxError`]; propagation with `?` guarantees that no token is
/// consumed once an error has occurred.
pub type ParseResult<T> = Result<T, SyntaxError>;

/// Parses a complete token sequence into a single expression tree.
///
/// This is the parser's entry point. It parses one expression and then
/// requires the next token to be end-of-input; anything else is rejected as
/// trailing garbage, positioned at the first unconsumed token.
///
/// # Parameters
/// - `tokens`: The scanner's output, terminated by an end-of-input token.
///
/// # Returns
/// The root of the parsed expression tree.
///
/// # Errors
/// - [`SyntaxError::UnexpectedTrailingTokens`] when input remains after a
///   complete expression.
/// - Any error raised while parsing the expression itself.
///
/// # Example
/// ```
/// use anaconda::interpreter::{lexer::Lexer, parser::core::parse};
///
/// let tokens = Lexer::new("<doc>", "(1 + 2) * 3").tokenize().unwrap();
/// assert!(parse(&tokens).is_ok());
///
/// let tokens = Lexer::new("<doc>", "1 + ").tokenize().unwrap();
/// assert!(parse(&tokens).is_err());
/// ```
pub fn parse(tokens: &[Token]) -> ParseResult<Expr> {
    let mut iter = tokens.iter().peekable();
    let expr = parse_expression(&mut iter)?;

    match iter.peek() {
        Some(token) if !matches!(token.kind, TokenKind::Eof) => {
            Err(SyntaxError::UnexpectedTrailingTokens { span: token.span.clone() })
        },
        _ => Ok(expr),
    }
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, addition and subtraction, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := additive`
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_additive(tokens)
}
