use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        position::Span,
    },
};

/// The numeric payload of a runtime [`Number`].
///
/// Values keep the integer-versus-floating distinction of their source
/// literals: integer arithmetic stays exact (division truncates toward
/// zero), and any floating operand promotes the whole operation to floating
/// point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// A 64-bit signed integer value.
    Integer(i64),
    /// A 64-bit floating-point value.
    Real(f64),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl Value {
    /// The value as an `f64`, promoting integers.
    ///
    /// ## Example
    /// ```
    /// use anaconda::interpreter::value::Value;
    ///
    /// assert_eq!(Value::from(2).as_real(), 2.0);
    /// ```
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub const fn as_real(&self) -> f64 {
        match self {
            Self::Integer(n) => *n as f64,
            Self::Real(r) => *r,
        }
    }

    /// Returns `true` if the value compares equal to zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        match self {
            Self::Integer(n) => *n == 0,
            Self::Real(r) => *r == 0.0,
        }
    }

    /// Returns `true` if the value is [`Integer`](Self::Integer).
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Self::Integer(..))
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => write!(f, "{r}"),
        }
    }
}

/// A number produced by evaluation.
///
/// Besides its numeric [`Value`], a `Number` remembers the source span it
/// was computed from and the call context it was computed under, so a
/// failing operation can report exactly where and in which frame it went
/// wrong. Every arithmetic operation returns a fresh `Number`; existing
/// ones are never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Number {
    /// The numeric payload.
    pub value:   Value,
    /// Source region the number was computed from, once stamped by the
    /// evaluator.
    pub span:    Option<Span>,
    /// Call context the number was computed under, once stamped by the
    /// evaluator.
    pub context: Option<Context>,
}

impl From<i64> for Number {
    fn from(v: i64) -> Self {
        Self::new(Value::Integer(v))
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Self::new(Value::Real(v))
    }
}

impl Number {
    /// Creates a bare number with no span and no context.
    #[must_use]
    pub const fn new(value: Value) -> Self {
        Self { value,
               span: None,
               context: None }
    }

    /// Returns the number restamped with `span`.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Returns the number restamped with `context`.
    #[must_use]
    pub fn with_context(mut self, context: Context) -> Self {
        self.context = Some(context);
        self
    }

    /// Adds `other` to this number.
    ///
    /// ## Example
    /// ```
    /// use anaconda::interpreter::value::Number;
    ///
    /// let sum = Number::from(2).add(&Number::from(3.5));
    /// assert_eq!(sum.to_string(), "5.5");
    /// ```
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let value = match (&self.value, &other.value) {
            (Value::Integer(a), Value::Integer(b)) => Value::Integer(a + b),
            _ => Value::Real(self.value.as_real() + other.value.as_real()),
        };
        self.derive(value)
    }

    /// Subtracts `other` from this number.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        let value = match (&self.value, &other.value) {
            (Value::Integer(a), Value::Integer(b)) => Value::Integer(a - b),
            _ => Value::Real(self.value.as_real() - other.value.as_real()),
        };
        self.derive(value)
    }

    /// Multiplies this number by `other`.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        let value = match (&self.value, &other.value) {
            (Value::Integer(a), Value::Integer(b)) => Value::Integer(a * b),
            _ => Value::Real(self.value.as_real() * other.value.as_real()),
        };
        self.derive(value)
    }

    /// Divides this number by `other`.
    ///
    /// Integer division truncates toward zero; a floating operand promotes
    /// the division to floating point.
    ///
    /// # Errors
    /// [`RuntimeError::DivisionByZero`] when `other` is zero. The error is
    /// positioned at `other`'s span and carries this number's context.
    ///
    /// ## Example
    /// ```
    /// use anaconda::interpreter::value::Number;
    ///
    /// let quotient = Number::from(10).div(&Number::from(4)).unwrap();
    /// assert_eq!(quotient.to_string(), "2");
    ///
    /// assert!(Number::from(10).div(&Number::from(0)).is_err());
    /// ```
    pub fn div(&self, other: &Self) -> EvalResult<Self> {
        if other.value.is_zero() {
            return Err(RuntimeError::DivisionByZero { span:    other.span.clone(),
                                                      context: self.context.clone(), });
        }

        let value = match (&self.value, &other.value) {
            (Value::Integer(a), Value::Integer(b)) => Value::Integer(a / b),
            _ => Value::Real(self.value.as_real() / other.value.as_real()),
        };
        Ok(self.derive(value))
    }

    /// Builds the result of an operation on this number: fresh value, no
    /// span yet, same context.
    fn derive(&self, value: Value) -> Self {
        Self { value,
               span: None,
               context: self.context.clone() }
    }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}
