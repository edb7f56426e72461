pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod normalizer;
pub mod operator;
pub mod parser;
pub mod token;

use crate::interpreter::error::EvaluationError;
use crate::interpreter::evaluator::evaluate_postfix;
use crate::interpreter::normalizer::normalize;
use crate::interpreter::token::Token;
use anyhow::{Context, Result};
use log::debug;
use string_builder::Builder;

/// Calculates the value of the given arithmetic expression.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format, e.g. `3+4*2/(1 - 5)^2^3`.
///
/// returns: The value of the expression. Division by zero gives NaN rather than an error.
///
/// # Examples
///
/// ```
/// use infix_calculator::interpreter::evaluate;
///
/// let value = evaluate("(1+2)*3");
/// assert_eq!(value, Ok(9.0));
/// ```
pub fn evaluate(expression: &str) -> Result<f64, EvaluationError> {
    let postfix_tokens = convert(expression)?;
    let value = evaluate_postfix(postfix_tokens)?;
    debug!("{} = {}", expression, value);
    Ok(value)
}

/// Converts the given input string into the equivalent postfix token sequence,
/// which is what the evaluator consumes.
///
/// # Arguments
///
/// * `expression`: The text-representation of the infix expression.
///
/// returns: The tokens of the expression in postfix order.
///
/// # Examples
///
/// ```
/// use infix_calculator::interpreter::{convert, tokens_to_string};
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let postfix_tokens = convert("3+4*2")?;
/// assert_eq!(tokens_to_string(postfix_tokens)?, "3 4 2 * +");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn convert(expression: &str) -> Result<Vec<Token>, EvaluationError> {
    let normalized_expression = normalize(expression);
    debug!("normalized expression: {:?}", normalized_expression);
    let infix_tokens = lexer::tokenize(&normalized_expression);
    parser::parse(infix_tokens)
}

/// Prints the given vector of tokens separated by single spaces, leaving out the
/// empty tokens the lexer produces at the end of a normalized expression.
///
/// # Arguments
///
/// * `tokens`: The tokens to print.
///
/// returns: A text-version of the given tokens.
///
/// # Examples
///
/// ```
/// use infix_calculator::interpreter::tokens_to_string;
/// use infix_calculator::interpreter::token::Token;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let tokens = vec![Token::new("2"), Token::new("3"), Token::new("^")];
/// let printed_tokens = tokens_to_string(tokens)?;
/// print!("{}", printed_tokens);
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn tokens_to_string(tokens: Vec<Token>) -> Result<String> {
    let mut builder = Builder::new(tokens.len() * 2);

    for (index, token) in tokens.iter().filter(|token| !token.is_empty()).enumerate() {
        if index > 0 {
            builder.append(" ");
        }
        builder.append(token.value());
    }

    builder.string().context("Failed to build token string")
}
