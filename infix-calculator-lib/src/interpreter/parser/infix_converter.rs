use crate::interpreter::error::EvaluationError;
use crate::interpreter::operator::{Associativity, BinaryOperator};
use crate::interpreter::token::Token;

/// Reorders infix tokens into postfix order using the shunting-yard algorithm.
pub(crate) fn infix_to_postfix(infix_tokens: Vec<Token>) -> Result<Vec<Token>, EvaluationError> {
    let mut operators: Vec<Token> = Vec::new();
    let mut output: Vec<Token> = Vec::with_capacity(infix_tokens.len());

    for token in infix_tokens {
        if let Some(operator) = token.operator() {
            parse_operator_token(&mut operators, &mut output, token, operator);
        } else if token.is_open_parenthesis() {
            operators.push(token);
        } else if token.is_close_parenthesis() {
            parse_closing_parenthesis_token(&mut operators, &mut output)?;
        } else {
            output.push(token);
        }
    }

    transfer_leftover_operators(&mut operators, &mut output)?;

    Ok(output)
}

fn transfer_leftover_operators(
    operators: &mut Vec<Token>,
    output: &mut Vec<Token>,
) -> Result<(), EvaluationError> {
    while let Some(operator) = operators.pop() {
        if operator.is_open_parenthesis() {
            return Err(EvaluationError::UnbalancedParentheses);
        }
        output.push(operator);
    }
    Ok(())
}

fn parse_closing_parenthesis_token(
    operators: &mut Vec<Token>,
    output: &mut Vec<Token>,
) -> Result<(), EvaluationError> {
    loop {
        match operators.pop() {
            None => return Err(EvaluationError::UnbalancedParentheses),
            // Discard the open parenthesis.
            Some(top_of_operator_stack) if top_of_operator_stack.is_open_parenthesis() => {
                return Ok(())
            }
            Some(operator) => output.push(operator),
        }
    }
}

fn parse_operator_token(
    operators: &mut Vec<Token>,
    output: &mut Vec<Token>,
    token: Token,
    operator: BinaryOperator,
) {
    while let Some(top_of_operator_stack) = operators.pop() {
        let yields_to_top = match top_of_operator_stack.operator() {
            Some(other_operator) => match operator.associativity() {
                Associativity::Left => operator.precedence_le(&other_operator),
                Associativity::Right => operator.precedence_lt(&other_operator),
            },
            // An open parenthesis shields everything below it.
            None => false,
        };
        if !yields_to_top {
            operators.push(top_of_operator_stack);
            break;
        }

        output.push(top_of_operator_stack);
    }

    operators.push(token);
}
