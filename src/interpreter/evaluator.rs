/// Binary operation evaluation.
///
/// Evaluates both operands of a binary node and dispatches on the operator
/// token to the corresponding arithmetic operation.
pub mod binary;
/// Evaluator entry points and call context.
///
/// Declares the evaluator's result type, the `Context` traceback frame,
/// and the exhaustive dispatch over expression nodes.
pub mod core;
/// Unary operation evaluation.
///
/// Applies a prefix sign to an evaluated operand: minus multiplies by `-1`,
/// plus is the identity.
pub mod unary;
