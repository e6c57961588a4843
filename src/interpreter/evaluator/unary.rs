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
    /// Evaluates a unary sign operation.
    ///
    /// A minus multiplies the operand by the constant `-1`; a plus is the
    /// identity. The result is restamped with the node's span.
    pub(crate) fn eval_unary_op(&self,
                                op: &Token,
                                operand: &Expr,
                                span: Span)
                                -> EvalResult<Number> {
        let value = self.eval(operand)?;

        let value = match op.kind {
            TokenKind::Minus => value.mul(&Number::from(-1)),
            TokenKind::Plus => value,
            _ => unreachable!(),
        };

        Ok(value.with_span(span))
    }
}
