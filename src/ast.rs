use crate::interpreter::{
    lexer::Token,
    position::Span,
};

/// An abstract syntax tree (AST) node representing an expression.
///
/// `Expr` covers the full expression grammar: number literals, binary
/// operations, and unary sign operations. Nodes own their children
/// exclusively; the tree contains no sharing and no cycles. Operator
/// variants keep the operator token itself, so every node can report the
/// exact source region it was parsed from.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A number literal, wrapping its `Integer` or `Real` token.
    Number {
        /// The literal token, payload included.
        token: Token,
    },
    /// A binary operation such as `a + b`.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator token (`+`, `-`, `*` or `/`).
        op:    Token,
        /// Right operand.
        right: Box<Self>,
    },
    /// A unary sign operation such as `-x` or `+x`.
    UnaryOp {
        /// The operator token (`+` or `-`).
        op:      Token,
        /// The operand the sign applies to.
        operand: Box<Self>,
    },
}

impl Expr {
    /// The source region this node's whole subtree was parsed from.
    ///
    /// A literal spans its token; a binary operation spans from the start of
    /// its left operand to the end of its right operand; a unary operation
    /// spans from its operator to the end of its operand.
    ///
    /// ## Example
    /// ```
    /// use anaconda::interpreter::{lexer::Lexer, parser::core::parse};
    ///
    /// let tokens = Lexer::new("<doc>", "1 + 2").tokenize().unwrap();
    /// let expr = parse(&tokens).unwrap();
    ///
    /// let span = expr.span();
    /// assert_eq!(span.start.offset, 0);
    /// assert_eq!(span.end.offset, 5);
    /// ```
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Self::Number { token } => token.span.clone(),
            Self::BinaryOp { left, right, .. } => {
                Span::new(left.span().start, right.span().end)
            },
            Self::UnaryOp { op, operand } => {
                Span::new(op.span.start.clone(), operand.span().end)
            },
        }
    }
}
