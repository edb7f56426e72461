use crate::interpreter::error::EvaluationError;
use crate::interpreter::operator::{Associativity, BinaryOperator};
use std::convert::Infallible;
use std::fmt;
use std::fmt::Formatter;
use std::str;

/// A discrete part of an expression: a number, an operator or a parenthesis.
///
/// The token keeps the text it was lexed from and classifies it lazily, so a token
/// holding malformed text is only rejected once something tries to read its number.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Token {
    value: String,
}

/// Precedence reported for tokens that are not operators.
pub const NO_PRECEDENCE: i8 = -1;

impl Token {
    pub fn new(value: impl Into<String>) -> Token {
        Token {
            value: value.into(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// The binary operator this token is written as, if any.
    pub fn operator(&self) -> Option<BinaryOperator> {
        BinaryOperator::from_symbol(&self.value)
    }

    pub fn is_operator(&self) -> bool {
        self.operator().is_some()
    }

    pub fn is_open_parenthesis(&self) -> bool {
        self.value == "("
    }

    pub fn is_close_parenthesis(&self) -> bool {
        self.value == ")"
    }

    /// The binding strength of the operator, or [`NO_PRECEDENCE`] for anything else.
    pub fn precedence(&self) -> i8 {
        match self.operator() {
            Some(operator) => operator.precedence() as i8,
            None => NO_PRECEDENCE,
        }
    }

    /// Exponentiation is the only right-associative operator; every other token
    /// reports itself as left-associative.
    pub fn is_left_associative(&self) -> bool {
        match self.operator() {
            Some(operator) => operator.associativity() == Associativity::Left,
            None => true,
        }
    }

    /// Reads the token as a floating-point number.
    pub fn to_number(&self) -> Result<f64, EvaluationError> {
        self.value
            .parse::<f64>()
            .map_err(|_| EvaluationError::MalformedNumber(self.value.clone()))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl str::FromStr for Token {
    type Err = Infallible;

    fn from_str(input: &str) -> Result<Token, Self::Err> {
        Ok(Token::new(input))
    }
}

impl From<BinaryOperator> for Token {
    fn from(operator: BinaryOperator) -> Self {
        Token::new(operator.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized_macro::parameterized;

    #[parameterized(
        text = { "+", "-", "*", "/", "^", "3", "-4", "(", ")", "" },
        expected = { true, true, true, true, true, false, false, false, false, false }
    )]
    fn token_is_operator_only_for_operator_symbols(text: &str, expected: bool) {
        let token: Token = text.parse().unwrap();
        assert_eq!(token.is_operator(), expected)
    }

    #[parameterized(
        text = { "+", "-", "*", "/", "^", "12.5", "(" },
        expected = { 0, 0, 1, 1, 2, -1, -1 }
    )]
    fn token_precedence_matches_operator(text: &str, expected: i8) {
        let token: Token = text.parse().unwrap();
        assert_eq!(token.precedence(), expected)
    }

    #[test]
    fn caret_is_the_only_right_associative_token() {
        let caret: Token = "^".parse().unwrap();
        let star: Token = "*".parse().unwrap();

        assert!(!caret.is_left_associative());
        assert!(star.is_left_associative());
    }

    #[test]
    fn negative_literal_is_a_number() {
        let token: Token = "-4".parse().unwrap();

        assert!(!token.is_operator());
        assert_eq!(token.to_number().unwrap(), -4.0);
    }

    #[test]
    fn decimal_literal_is_a_number() {
        let token = Token::new("0.25");
        assert_eq!(token.to_number().unwrap(), 0.25)
    }

    #[test]
    fn unparsable_text_is_a_malformed_number() {
        let token = Token::new("1.2.3");
        assert_eq!(
            token.to_number().unwrap_err(),
            EvaluationError::MalformedNumber("1.2.3".to_string())
        )
    }

    #[test]
    fn parentheses_are_recognised() {
        assert!(Token::new("(").is_open_parenthesis());
        assert!(Token::new(")").is_close_parenthesis());
        assert!(!Token::new(")").is_open_parenthesis());
    }

    #[test]
    fn operator_converts_into_its_symbol_token() {
        assert_eq!(Token::from(BinaryOperator::Divide), Token::new("/"))
    }

    #[test]
    fn token_displays_its_text() {
        assert_eq!(Token::new("-3.5").to_string(), "-3.5")
    }
}
