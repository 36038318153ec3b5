//! Tokenizer for the keypad notation
//!
//! The notation has single-letter variables and six punctuation operators:
//!
//! | Text | Token |
//! |------|-------|
//! | `A`..`Z`, `a`..`z` | [`Token::Variable`] (case-folded to uppercase) |
//! | `.` | [`Token::And`] |
//! | `+` | [`Token::Or`] |
//! | `^` | [`Token::Xor`] |
//! | `'` | [`Token::Not`] (postfix) |
//! | `(` `)` | [`Token::LParen`] / [`Token::RParen`] |
//!
//! Whitespace is skipped. Anything else is rejected immediately.

use super::error::ExpressionParseError;

/// A single lexical token of the notation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// A variable, always an uppercase ASCII letter
    Variable(char),
    /// Logical AND: `.`
    And,
    /// Logical OR: `+`
    Or,
    /// Logical XOR: `^`
    Xor,
    /// Postfix logical NOT: `'`
    Not,
    /// `(`
    LParen,
    /// `)`
    RParen,
}

/// Binary operator with its binding strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    /// `.`
    And,
    /// `^`
    Xor,
    /// `+`
    Or,
}

impl BinaryOp {
    /// Higher binds tighter. All three are left-associative.
    #[inline]
    pub fn precedence(self) -> u8 {
        match self {
            BinaryOp::And => 3,
            BinaryOp::Xor => 2,
            BinaryOp::Or => 1,
        }
    }

    /// Evaluate this operation on two boolean values.
    #[inline]
    pub fn eval(self, a: bool, b: bool) -> bool {
        match self {
            BinaryOp::And => a && b,
            BinaryOp::Xor => a ^ b,
            BinaryOp::Or => a || b,
        }
    }

    /// Symbol used by the notation.
    pub fn symbol(self) -> char {
        match self {
            BinaryOp::And => '.',
            BinaryOp::Xor => '^',
            BinaryOp::Or => '+',
        }
    }
}

/// A token together with its character position in the raw input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spanned {
    pub token: Token,
    pub position: usize,
}

/// Split `input` into tokens, failing on the first invalid character.
pub fn tokenize(input: &str) -> Result<Vec<Spanned>, ExpressionParseError> {
    let mut tokens = Vec::with_capacity(input.len());

    for (position, ch) in input.chars().enumerate() {
        let token = match ch {
            c if c.is_whitespace() => continue,
            c if c.is_ascii_alphabetic() => Token::Variable(c.to_ascii_uppercase()),
            '.' => Token::And,
            '+' => Token::Or,
            '^' => Token::Xor,
            '\'' => Token::Not,
            '(' => Token::LParen,
            ')' => Token::RParen,
            character => {
                return Err(ExpressionParseError::InvalidCharacter {
                    position,
                    character,
                })
            }
        };
        tokens.push(Spanned { token, position });
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    fn kinds(input: &str) -> Vec<Token> {
        tokenize(input)
            .unwrap()
            .into_iter()
            .map(|s| s.token)
            .collect()
    }

    #[test]
    fn test_tokenize_all_operators() {
        assert_eq!(
            kinds("(A.B)+C^D'"),
            vec![
                Token::LParen,
                Token::Variable('A'),
                Token::And,
                Token::Variable('B'),
                Token::RParen,
                Token::Or,
                Token::Variable('C'),
                Token::Xor,
                Token::Variable('D'),
                Token::Not,
            ]
        );
    }

    #[test]
    fn test_tokenize_case_folds_and_skips_whitespace() {
        let tokens = tokenize(" a . b ").unwrap();
        assert_eq!(
            tokens,
            vec![
                Spanned {
                    token: Token::Variable('A'),
                    position: 1
                },
                Spanned {
                    token: Token::And,
                    position: 3
                },
                Spanned {
                    token: Token::Variable('B'),
                    position: 5
                },
            ]
        );
    }

    #[test]
    fn test_tokenize_rejects_unknown_characters() {
        assert_eq!(
            tokenize("A*B"),
            Err(ExpressionParseError::InvalidCharacter {
                position: 1,
                character: '*'
            })
        );
        assert_eq!(
            tokenize("A+1"),
            Err(ExpressionParseError::InvalidCharacter {
                position: 2,
                character: '1'
            })
        );
    }

    #[test]
    fn test_tokenize_rejects_non_ascii_letters() {
        assert_eq!(
            tokenize("Ä"),
            Err(ExpressionParseError::InvalidCharacter {
                position: 0,
                character: 'Ä'
            })
        );
    }

    #[test]
    fn test_tokenize_empty_input() {
        assert!(tokenize("").unwrap().is_empty());
        assert!(tokenize("   ").unwrap().is_empty());
    }

    #[test]
    fn test_binary_op_precedence_order() {
        assert!(BinaryOp::And.precedence() > BinaryOp::Xor.precedence());
        assert!(BinaryOp::Xor.precedence() > BinaryOp::Or.precedence());
    }

    #[test]
    fn test_binary_op_eval() {
        assert!(BinaryOp::And.eval(true, true));
        assert!(!BinaryOp::And.eval(true, false));
        assert!(BinaryOp::Or.eval(false, true));
        assert!(!BinaryOp::Or.eval(false, false));
        assert!(BinaryOp::Xor.eval(true, false));
        assert!(!BinaryOp::Xor.eval(true, true));
    }
}
