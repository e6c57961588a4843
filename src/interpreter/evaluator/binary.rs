use crate::{
    ast::Expr,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        lexer::{Token, TokenKind},
        position::Span,
        value::Number,
    },
};

impl Context {
    /// Evaluates a binary operation.
    ///
    /// Both operands are evaluated left to right, each short-circuiting on
    /// error, then the operator token selects one of add, sub, mul or div.
    /// The result is restamped with the node's full span. Only division can
    /// fail; the other operations always produce a value.
    pub(crate) fn eval_binary_op(&self,
                                 left: &Expr,
                                 op: &Token,
                                 right: &Expr,
                                 span: Span)
                                 -> EvalResult<Number> {
        let lhs = self.eval(left)?;
        let rhs = self.eval(right)?;

        let result = match op.kind {
            TokenKind::Plus => lhs.add(&rhs),
            TokenKind::Minus => lhs.sub(&rhs),
            TokenKind::Star => lhs.mul(&rhs),
            TokenKind::Slash => lhs.div(&rhs)?,
            _ => unreachable!(),
        };

        Ok(result.with_span(span))
    }
}
