use crate::interpreter::error::EvaluationError;
use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::token::Token;
use log::trace;

/// Evaluates tokens ordered in postfix notation down to a single number.
///
/// Division by zero does not fail, it produces NaN which then carries through every
/// operation that depends on it.
///
/// # Arguments
///
/// * `postfix_tokens`: The tokens to evaluate, in postfix format.
///
/// returns: The value the expression reduces to.
///
/// # Examples
///
/// ```
/// # use infix_calculator::interpreter::error::EvaluationError;
/// # fn main() -> Result<(), EvaluationError> {
/// use infix_calculator::interpreter::evaluator::evaluate_postfix;
/// use infix_calculator::interpreter::token::Token;
///
/// let postfix_tokens = vec![Token::new("7"), Token::new("2"), Token::new("-")];
/// assert_eq!(evaluate_postfix(postfix_tokens)?, 5.0);
/// # Ok(()) }
/// ```
pub fn evaluate_postfix(postfix_tokens: Vec<Token>) -> Result<f64, EvaluationError> {
    let mut operands: Vec<f64> = Vec::new();

    for token in postfix_tokens {
        if token.is_empty() {
            continue;
        }

        match token.operator() {
            None => operands.push(token.to_number()?),
            Some(operator) => {
                let second_operand = pop_operand(&mut operands, operator)?;
                let first_operand = pop_operand(&mut operands, operator)?;
                let result = operator.evaluate(first_operand, second_operand);
                trace!(
                    "{} {} {} = {}",
                    first_operand,
                    operator,
                    second_operand,
                    result
                );
                operands.push(result);
            }
        }
    }

    match operands.as_slice() {
        [result] => Ok(*result),
        remaining => Err(EvaluationError::MalformedExpression {
            remaining: remaining.len(),
        }),
    }
}

fn pop_operand(operands: &mut Vec<f64>, operator: BinaryOperator) -> Result<f64, EvaluationError> {
    operands
        .pop()
        .ok_or(EvaluationError::MissingOperand(operator))
}
