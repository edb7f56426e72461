use std::iter::Peekable;
use std::str::Chars;

static OPERATOR_SYMBOLS: [char; 5] = ['+', '-', '*', '/', '^'];

/// Rewrites a raw expression so that every token is followed by exactly one space.
///
/// A `-` directly followed by a digit starts a negative literal, while a `-` followed by
/// whitespace is subtraction. That means `3 - 4` subtracts, `3 + -4` adds a negative
/// number and `3-4` reads as two numbers next to each other.
///
/// # Arguments
///
/// * `expression`: The expression as the user wrote it.
///
/// returns: The expression with one space after each token.
///
/// # Examples
///
/// ```
/// use infix_calculator::interpreter::normalizer::normalize;
///
/// assert_eq!(normalize("3+4*(2 - -1)"), "3 + 4 * ( 2 - -1 ) ");
/// ```
pub fn normalize(expression: &str) -> String {
    let mut normalized = String::with_capacity(expression.len() * 2);
    let mut characters = expression.chars().peekable();

    while let Some(character) = characters.next() {
        match character {
            digit if digit.is_ascii_digit() => {
                normalized.push(digit);
                push_number_tail(&mut characters, &mut normalized);
                separate(&mut characters, &mut normalized);
            }
            '-' if characters.peek().map_or(false, char::is_ascii_digit) => {
                normalized.push('-');
                push_number_tail(&mut characters, &mut normalized);
                separate(&mut characters, &mut normalized);
            }
            symbol if is_operator_or_parenthesis(symbol) => {
                normalized.push(symbol);
                separate(&mut characters, &mut normalized);
            }
            whitespace if whitespace.is_whitespace() => {
                if !normalized.is_empty() && !normalized.ends_with(' ') {
                    normalized.push(' ');
                }
            }
            other => normalized.push(other),
        }
    }

    normalized
}

fn is_operator_or_parenthesis(character: char) -> bool {
    OPERATOR_SYMBOLS.contains(&character) || character == '(' || character == ')'
}

/// Copies the rest of a numeric literal: every digit and decimal point up to the next
/// other character.
fn push_number_tail(characters: &mut Peekable<Chars>, normalized: &mut String) {
    while let Some(&next) = characters.peek() {
        if !(next.is_ascii_digit() || next == '.') {
            break;
        }
        normalized.push(next);
        characters.next();
    }
}

/// Ends the current token, unless the input already does so with whitespace.
fn separate(characters: &mut Peekable<Chars>, normalized: &mut String) {
    if !characters.peek().map_or(false, |next| next.is_whitespace()) {
        normalized.push(' ');
    }
}
