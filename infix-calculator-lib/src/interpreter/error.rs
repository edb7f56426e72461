use crate::interpreter::operator::BinaryOperator;
use thiserror::Error;

/// Reasons an expression can fail to convert or evaluate.
///
/// Every variant is terminal for the expression that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluationError {
    /// A closing parenthesis without an opening one, or the other way around.
    #[error("mismatched parenthesis")]
    UnbalancedParentheses,

    /// A token that should be a number could not be read as one.
    #[error("could not read {0:?} as a number")]
    MalformedNumber(String),

    /// An operator was reached with fewer than two values to apply it to.
    #[error("operator {0} is missing an operand")]
    MissingOperand(BinaryOperator),

    /// The expression did not reduce to exactly one value.
    #[error("expression reduced to {remaining} values instead of one")]
    MalformedExpression { remaining: usize },
}
