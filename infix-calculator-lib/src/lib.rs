//! Evaluates infix arithmetic expressions such as `3+4*2/(1 - 5)^2^3`.
//!
//! The expression goes through four stages: it is normalized so every token is
//! followed by a single space, split into tokens, reordered into postfix notation
//! with the shunting-yard algorithm and finally reduced on a value stack.
//!
//! Normalizing and lexing never fail. Conversion and evaluation report one of the
//! [`EvaluationError`] kinds: unbalanced parentheses, a malformed number, a
//! malformed expression (not exactly one value left), or an operator missing one
//! of its operands. Division by zero is not an error and evaluates to NaN.

pub mod interpreter;

pub use interpreter::error::EvaluationError;
pub use interpreter::evaluate;
