use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::SyntaxError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{ParseResult, parse_expression},
    },
};

/// Parses a unary expression.
///
/// Supports the prefix operators `+` and `-`. Unary operators are
/// right-recursive, so stacked signs like `--5` parse as `-( -5 )`.
///
/// If no sign is present, the function delegates to [`parse_primary`].
///
/// Grammar:
/// ```text
///     unary := ("+" | "-") unary
///            | primary
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An `Expr::UnaryOp` or a primary expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    if let Some(token) = tokens.peek()
       && matches!(token.kind, TokenKind::Plus | TokenKind::Minus)
    {
        let op = (*token).clone();
        tokens.next();

        let operand = parse_unary(tokens)?;
        Ok(Expr::UnaryOp { op,
                           operand: Box::new(operand) })
    } else {
        parse_primary(tokens)
    }
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the grammar:
/// - integer and floating-point literals
/// - parenthesized expressions
///
/// Anything else is rejected, positioned at the offending token.
///
/// Grammar:
/// ```text
///     primary := INT | FLOAT
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary
///   expression.
///
/// # Returns
/// The parsed primary `Expr` or a `SyntaxError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    match tokens.peek() {
        Some(token) if matches!(token.kind, TokenKind::Integer(..) | TokenKind::Real(..)) => {
            let token = (*token).clone();
            tokens.next();
            Ok(Expr::Number { token })
        },
        Some(token) if matches!(token.kind, TokenKind::LParen) => parse_grouping(tokens),
        Some(token) => Err(SyntaxError::ExpectedNumber { span: token.span.clone() }),
        None => Err(SyntaxError::UnexpectedEndOfInput),
    }
}

/// Parses a parenthesized expression.
///
/// The function consumes the opening parenthesis, parses the enclosed
/// expression, and then requires a closing `)`. Failure to find the closing
/// parenthesis yields `SyntaxError::ExpectedClosingParen` positioned at the
/// current token.
///
/// The inner expression is returned as-is; there is no wrapper node.
///
/// Grammar: `grouping := "(" expression ")"`
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    tokens.next(); // consume '('
    let expr = parse_expression(tokens)?;

    match tokens.peek() {
        Some(token) if matches!(token.kind, TokenKind::RParen) => {
            tokens.next();
            Ok(expr)
        },
        Some(token) => Err(SyntaxError::ExpectedClosingParen { span: token.span.clone() }),
        None => Err(SyntaxError::UnexpectedEndOfInput),
    }
}
