use crate::interpreter::{evaluator::core::Context, position::Span};

#[derive(Debug)]
/// Represents all errors that can be raised during evaluation.
pub enum RuntimeError {
    /// Attempted division by zero.
    DivisionByZero {
        /// The span of the zero-valued right-hand operand.
        span:    Option<Span>,
        /// The call context the failing operation ran under, used to render
        /// the traceback.
        context: Option<Context>,
    },
}

impl std::fmt::Display for RuntimeError {
    /// Renders the error as a traceback followed by the error line.
    ///
    /// The traceback walks the context chain from the failure site outward
    /// to the root and prints one frame per context, oldest frame first:
    ///
    /// ```text
    /// Traceback (most recent call last):
    ///  File <stdin>, line 1, in <ACSHELL>
    /// Runtime Error : Illegal divider, division by 0
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { span, context } => {
                let mut frames = Vec::new();
                let mut pos = span.as_ref().map(|s| &s.start);
                let mut ctx = context.as_ref();

                while let Some(current) = ctx {
                    if let Some(p) = pos {
                        frames.push(format!(" File {}, line {}, in {}",
                                            p.source_name,
                                            p.line + 1,
                                            current.display_name));
                    }
                    pos = current.parent_entry_pos.as_ref();
                    ctx = current.parent.as_deref();
                }

                writeln!(f, "Traceback (most recent call last):")?;
                for frame in frames.iter().rev() {
                    writeln!(f, "{frame}")?;
                }
                write!(f, "Runtime Error : Illegal divider, division by 0")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
