mod infix_converter;

use crate::interpreter::error::EvaluationError;
use crate::interpreter::parser::infix_converter::infix_to_postfix;
use crate::interpreter::token::Token;
use itertools::Itertools;
use log::debug;

/// Parses the given infix tokens into the equivalent postfix (reverse polish) sequence,
/// which can be evaluated without knowing anything about precedence.
///
/// # Arguments
///
/// * `infix_tokens`: The tokens to parse, in infix format.
///
/// returns: The same tokens reordered into postfix format, with parentheses removed.
///
/// # Examples
///
/// ```
/// # use infix_calculator::interpreter::error::EvaluationError;
/// # fn main() -> Result<(), EvaluationError> {
/// use infix_calculator::interpreter::parser::parse;
/// use infix_calculator::interpreter::token::Token;
///
/// let infix_tokens = vec![Token::new("2"), Token::new("^"), Token::new("3")];
/// let postfix_tokens = parse(infix_tokens)?;
/// assert_eq!(postfix_tokens, vec![Token::new("2"), Token::new("3"), Token::new("^")]);
/// # Ok(()) }
/// ```
pub fn parse(infix_tokens: Vec<Token>) -> Result<Vec<Token>, EvaluationError> {
    let postfix_tokens = infix_to_postfix(infix_tokens)?;
    debug!("postfix form: {}", postfix_tokens.iter().join(" "));
    Ok(postfix_tokens)
}
