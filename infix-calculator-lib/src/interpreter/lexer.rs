use crate::interpreter::token::Token;
use itertools::Itertools;
use log::trace;

const DELIMITER: char = ' ';

/// Splits a normalized expression into tokens, one per space-separated piece.
///
/// No validation happens here: whatever text sits between two delimiters becomes a
/// token, including the (usually empty) piece after the last delimiter.
///
/// # Arguments
///
/// * `normalized_expression`: An expression where every token is followed by one space.
///
/// returns: The tokens, in the order they were written.
///
/// # Examples
///
/// ```
/// use infix_calculator::interpreter::lexer::tokenize;
///
/// let tokens = tokenize("3 + -4 ");
/// assert_eq!(tokens.len(), 4);
/// assert!(tokens[1].is_operator());
/// ```
pub fn tokenize(normalized_expression: &str) -> Vec<Token> {
    let tokens: Vec<Token> = normalized_expression.split(DELIMITER).map(Token::new).collect();
    trace!("lexed tokens: [{}]", tokens.iter().join(", "));
    tokens
}
