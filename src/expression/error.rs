//! Error types for boolean expression parsing

use std::fmt;
use std::io;

/// Errors related to boolean expression parsing
///
/// Every variant is terminal: the whole input is rejected and no partial tree
/// is exposed. Positions are zero-based character indices into the raw input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpressionParseError {
    /// A character that is neither whitespace, an ASCII letter, nor one of `. + ^ ' ( )`
    InvalidCharacter {
        /// Position of the offending character
        position: usize,
        /// The offending character
        character: char,
    },
    /// A postfix `'` with no completed sub-expression before it
    DanglingNot {
        /// Position of the apostrophe
        position: usize,
    },
    /// A `)` without a matching `(`, or a `(` that is never closed
    UnbalancedParens {
        /// Position of the unmatched parenthesis
        position: usize,
    },
    /// Two operands with no operator between them, e.g. `AB` or `A(B)`
    MissingOperator {
        /// Position of the second operand
        position: usize,
    },
    /// An operator or `)` with nothing to apply to, e.g. `A+`, `+A` or `()`
    MissingOperand {
        /// Position where an operand was expected
        position: usize,
    },
    /// The input contains no tokens at all
    EmptyExpression,
}

impl fmt::Display for ExpressionParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpressionParseError::InvalidCharacter {
                position,
                character,
            } => write!(
                f,
                "Invalid character {:?} at position {}",
                character, position
            ),
            ExpressionParseError::DanglingNot { position } => write!(
                f,
                "Dangling NOT (') at position {}: nothing to negate",
                position
            ),
            ExpressionParseError::UnbalancedParens { position } => {
                write!(f, "Unbalanced parenthesis at position {}", position)
            }
            ExpressionParseError::MissingOperator { position } => write!(
                f,
                "Missing operator before position {}",
                position
            ),
            ExpressionParseError::MissingOperand { position } => {
                write!(f, "Missing operand at position {}", position)
            }
            ExpressionParseError::EmptyExpression => write!(f, "Empty expression"),
        }
    }
}

impl std::error::Error for ExpressionParseError {}

impl From<ExpressionParseError> for io::Error {
    fn from(err: ExpressionParseError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

impl ExpressionParseError {
    /// Position in the raw input the error refers to, if any
    pub fn position(&self) -> Option<usize> {
        match self {
            ExpressionParseError::InvalidCharacter { position, .. }
            | ExpressionParseError::DanglingNot { position }
            | ExpressionParseError::UnbalancedParens { position }
            | ExpressionParseError::MissingOperator { position }
            | ExpressionParseError::MissingOperand { position } => Some(*position),
            ExpressionParseError::EmptyExpression => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_character_message() {
        let err = ExpressionParseError::InvalidCharacter {
            position: 3,
            character: '*',
        };
        let msg = err.to_string();
        assert!(msg.contains("position 3"));
        assert!(msg.contains("'*'"));
        assert_eq!(err.position(), Some(3));
    }

    #[test]
    fn test_empty_expression_has_no_position() {
        let err = ExpressionParseError::EmptyExpression;
        assert_eq!(err.position(), None);
        assert!(!err.to_string().contains("position"));
    }

    #[test]
    fn test_expression_parse_error_to_io_error() {
        let err = ExpressionParseError::DanglingNot { position: 0 };
        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidData);
    }
}
