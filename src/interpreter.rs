/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST under a call context, performs the
/// arithmetic operations, and produces numbers stamped with the source
/// region and context they were computed from. It is the core execution
/// engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Stamps results with spans and the current call context.
/// - Reports runtime errors such as division by zero.
pub mod evaluator;
/// The lexer module tokenizes source text for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a sequence
/// of tokens, each covering the exact source region it was scanned from.
/// This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind and span.
/// - Handles integer and floating-point literals and the operators.
/// - Reports lexical errors for invalid input, aborting at the first one.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs an AST representing the syntactic structure of the
/// expression, using recursive descent with one function per precedence
/// level.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Validates the grammar, reporting errors with exact source positions.
/// - Rejects trailing input after a complete expression.
pub mod parser;
/// Source positions and spans.
///
/// Defines the immutable [`position::Position`] snapshot the whole pipeline
/// uses to locate tokens, nodes, values, and errors in the source text, and
/// the [`position::Span`] pairing two of them.
pub mod position;
/// The value module defines the runtime data types for evaluation.
///
/// Declares the numeric value union and the [`value::Number`] runtime
/// value, together with the arithmetic operations and the promotion rule
/// between integer and floating-point operands.
///
/// # Responsibilities
/// - Defines the `Value` union and the `Number` runtime value.
/// - Implements add/sub/mul/div with integer-to-real promotion on mix.
/// - Raises division-by-zero errors positioned at the failing operand.
pub mod value;
