use std::fmt;
use std::fmt::Formatter;

/// A binary mathematical operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Exponentiate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Associativity {
    Left,
    Right,
}

impl BinaryOperator {
    /// Looks up the operator written as the given symbol, e.g. `"^"`.
    pub fn from_symbol(symbol: &str) -> Option<BinaryOperator> {
        match symbol {
            "+" => Some(BinaryOperator::Add),
            "-" => Some(BinaryOperator::Subtract),
            "*" => Some(BinaryOperator::Multiply),
            "/" => Some(BinaryOperator::Divide),
            "^" => Some(BinaryOperator::Exponentiate),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Exponentiate => "^",
        }
    }

    pub fn associativity(&self) -> Associativity {
        match self {
            BinaryOperator::Add
            | BinaryOperator::Subtract
            | BinaryOperator::Multiply
            | BinaryOperator::Divide => Associativity::Left,
            BinaryOperator::Exponentiate => Associativity::Right,
        }
    }

    pub fn precedence(&self) -> u8 {
        match self {
            BinaryOperator::Add | BinaryOperator::Subtract => 0,
            BinaryOperator::Multiply | BinaryOperator::Divide => 1,
            BinaryOperator::Exponentiate => 2,
        }
    }

    pub(crate) fn precedence_lt(&self, other: &Self) -> bool {
        self.precedence().lt(&other.precedence())
    }

    pub(crate) fn precedence_le(&self, other: &Self) -> bool {
        self.precedence().le(&other.precedence())
    }

    /// Applies the operator with `a` as the left-hand operand and `b` as the right-hand one.
    pub fn evaluate(&self, a: f64, b: f64) -> f64 {
        match self {
            BinaryOperator::Add => a + b,
            BinaryOperator::Subtract => a - b,
            BinaryOperator::Multiply => a * b,
            BinaryOperator::Divide => divide(a, b),
            BinaryOperator::Exponentiate => f64::powf(a, b),
        }
    }
}

/// Divides `dividend` by `divisor`, giving NaN instead of an infinity when the divisor is zero.
pub fn divide(dividend: f64, divisor: f64) -> f64 {
    if divisor == 0.0 {
        f64::NAN
    } else {
        dividend / divisor
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized_macro::parameterized;

    #[test]
    fn operator_lt_correspond_with_precedence() {
        let greater = BinaryOperator::Multiply;
        let lesser = BinaryOperator::Add;
        assert!(lesser.precedence_lt(&greater))
    }

    #[test]
    fn operator_le_correspond_with_precedence() {
        let equal1 = BinaryOperator::Multiply;
        let equal2 = BinaryOperator::Divide;
        assert!(equal1.precedence_le(&equal2))
    }

    #[test]
    fn only_exponentiation_is_right_associative() {
        let right_associative: Vec<BinaryOperator> = [
            BinaryOperator::Add,
            BinaryOperator::Subtract,
            BinaryOperator::Multiply,
            BinaryOperator::Divide,
            BinaryOperator::Exponentiate,
        ]
        .into_iter()
        .filter(|operator| operator.associativity() == Associativity::Right)
        .collect();

        assert_eq!(right_associative, vec![BinaryOperator::Exponentiate])
    }

    #[parameterized(
        symbol = { "+", "-", "*", "/", "^" },
        left = { 6.0, 6.0, 6.0, 6.0, 6.0 },
        right = { 3.0, 3.0, 3.0, 3.0, 2.0 },
        expected = { 9.0, 3.0, 18.0, 2.0, 36.0 }
    )]
    fn operator_evaluates_left_operand_against_right_operand(
        symbol: &str,
        left: f64,
        right: f64,
        expected: f64,
    ) {
        let operator = BinaryOperator::from_symbol(symbol).unwrap();
        assert_eq!(operator.evaluate(left, right), expected)
    }

    #[test]
    fn symbol_round_trips_through_lookup() {
        let operator = BinaryOperator::Exponentiate;
        assert_eq!(BinaryOperator::from_symbol(operator.symbol()), Some(operator))
    }

    #[test]
    fn unknown_symbol_is_not_an_operator() {
        assert_eq!(BinaryOperator::from_symbol("%"), None)
    }

    #[test]
    fn division_by_zero_is_nan() {
        assert!(divide(5.0, 0.0).is_nan());
        assert!(BinaryOperator::Divide.evaluate(-1.0, -0.0).is_nan());
    }

    #[test]
    fn division_by_non_zero_divides() {
        assert_eq!(divide(1.0, 8.0), 0.125)
    }
}
