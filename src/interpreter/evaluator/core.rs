use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        lexer::{Token, TokenKind},
        position::Position,
        value::Number,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// [`RuntimeError`] describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// A frame of the call context the evaluator runs under.
///
/// Contexts form a finite, acyclic chain: each frame names itself and
/// remembers its parent together with the position the parent entered it
/// from. The chain exists so a runtime error can render a traceback; each
/// run of the pipeline creates exactly one root frame, but the traceback
/// rendering walks chains of any depth.
#[derive(Debug, Clone, PartialEq)]
pub struct Context {
    /// Human-readable name of the frame, shown in tracebacks.
    pub display_name:     String,
    /// The enclosing frame, absent for the root.
    pub parent:           Option<Box<Self>>,
    /// Where the parent frame entered this one, absent for the root.
    pub parent_entry_pos: Option<Position>,
}

impl Context {
    /// Creates a root frame with no parent.
    #[must_use]
    pub fn new(display_name: &str) -> Self {
        Self { display_name:     display_name.to_string(),
               parent:           None,
               parent_entry_pos: None, }
    }

    /// Evaluates an expression and returns the resulting number.
    ///
    /// This is the entry point of the tree walk. Dispatch is an exhaustive
    /// match over the node variants, so adding a variant without a matching
    /// arm fails to compile rather than failing at runtime.
    ///
    /// Evaluation short-circuits: once any sub-expression produces an
    /// error, no further node is visited and the error is returned as-is.
    ///
    /// # Errors
    /// Propagates any [`RuntimeError`] raised by an operation, currently
    /// division by zero.
    pub fn eval(&self, expr: &Expr) -> EvalResult<Number> {
        match expr {
            Expr::Number { token } => Ok(self.eval_number(token)),
            Expr::BinaryOp { left, op, right } => {
                self.eval_binary_op(left, op, right, expr.span())
            },
            Expr::UnaryOp { op, operand } => self.eval_unary_op(op, operand, expr.span()),
        }
    }

    /// Wraps a literal token's payload in a fresh [`Number`], stamped with
    /// the token's span and this context.
    fn eval_number(&self, token: &Token) -> Number {
        let number = match token.kind {
            TokenKind::Integer(n) => Number::from(n),
            TokenKind::Real(r) => Number::from(r),
            _ => unreachable!(),
        };
        number.with_context(self.clone())
              .with_span(token.span.clone())
    }
}
