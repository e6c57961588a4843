use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::SyntaxError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{core::ParseResult, unary::parse_unary},
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_left_assoc(tokens, parse_multiplicative, is_additive_op)
}

/// Parses multiplication and division expressions.
///
/// Handles left-associative binary operators: `*` and `/`.
///
/// The rule is: `multiplicative := unary (("*" | "/") unary)*`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// A binary expression tree combining unary-level nodes.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_left_assoc(tokens, parse_unary, is_multiplicative_op)
}

/// The shared left-fold behind both binary precedence levels.
///
/// Parses one sub-expression, then, while the current token belongs to the
/// level's operator set, consumes the operator and another sub-expression,
/// folding the operands into a left-deepening `BinaryOp` chain. Errors from
/// a sub-parse propagate immediately; no further token is consumed.
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `parse_operand`: Parser for the next-higher precedence level.
/// - `is_operator`: Membership test for this level's operator set.
fn parse_left_assoc<'a, I>(tokens: &mut Peekable<I>,
                           parse_operand: impl Fn(&mut Peekable<I>) -> ParseResult<Expr>,
                           is_operator: impl Fn(&TokenKind) -> bool)
                           -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_operand(tokens)?;

    loop {
        if let Some(token) = tokens.peek()
           && is_operator(&token.kind)
        {
            let op = (*token).clone();
            tokens.next();

            let right = parse_operand(tokens)?;
            left = Expr::BinaryOp { left:  Box::new(left),
                                    op,
                                    right: Box::new(right), };
            continue;
        }
        break;
    }

    Ok(left)
}

/// Determines whether a token belongs to the addition precedence level.
#[must_use]
pub const fn is_additive_op(kind: &TokenKind) -> bool {
    matches!(kind, TokenKind::Plus | TokenKind::Minus)
}

/// Determines whether a token belongs to the multiplication precedence
/// level.
#[must_use]
pub const fn is_multiplicative_op(kind: &TokenKind) -> bool {
    matches!(kind, TokenKind::Star | TokenKind::Slash)
}
