//! Error types for the boolean solver
//!
//! Each stage of the pipeline has its own error enum so callers can tell
//! programmatically which stage failed. [`SolverError`] wraps all of them for
//! the convenience entry points that run several stages in a row.

use std::fmt;
use std::io;

pub use crate::expression::error::ExpressionParseError;

/// Errors raised while building a truth table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvaluationError {
    /// The expression has more variables than the configured cap allows
    ///
    /// A table over `n` variables has `2^n` rows, so the cap bounds memory
    /// and time.
    TooManyVariables {
        /// Number of distinct variables in the expression
        count: usize,
        /// The effective cap
        max: usize,
    },
}

impl fmt::Display for EvaluationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvaluationError::TooManyVariables { count, max } => write!(
                f,
                "Expression has {} variables but at most {} are allowed ({} rows would be required)",
                count,
                max,
                RowCount(*count)
            ),
        }
    }
}

/// Renders `2^n` without overflowing for large `n`
struct RowCount(usize);

impl fmt::Display for RowCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match u32::try_from(self.0).ok().and_then(|n| 1usize.checked_shl(n)) {
            Some(rows) => write!(f, "{}", rows),
            None => write!(f, "2^{}", self.0),
        }
    }
}

impl std::error::Error for EvaluationError {}

/// Errors raised by the minimizer when its input is malformed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MinimizationError {
    /// Minimization was requested over zero variables
    EmptyVariableSet,
    /// The minterm and maxterm lists do not partition `0..2^n`
    ///
    /// `index` is the first offending row: out of range, listed in both
    /// sets, or listed in neither.
    InconsistentPartition {
        /// The offending row index
        index: usize,
    },
}

impl fmt::Display for MinimizationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MinimizationError::EmptyVariableSet => {
                write!(f, "Cannot minimize a function of zero variables")
            }
            MinimizationError::InconsistentPartition { index } => write!(
                f,
                "Minterms and maxterms do not partition the truth table: row {} is out of range, \
                 duplicated, or missing",
                index
            ),
        }
    }
}

impl std::error::Error for MinimizationError {}

/// Errors that can occur when writing PLA output
#[derive(Debug)]
pub enum PLAWriteError {
    /// IO error during writing
    Io(io::Error),
}

impl fmt::Display for PLAWriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PLAWriteError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for PLAWriteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PLAWriteError::Io(e) => Some(e),
        }
    }
}

impl From<io::Error> for PLAWriteError {
    fn from(err: io::Error) -> Self {
        PLAWriteError::Io(err)
    }
}

impl From<PLAWriteError> for io::Error {
    fn from(err: PLAWriteError) -> Self {
        match err {
            PLAWriteError::Io(e) => e,
        }
    }
}

/// Any failure from the parse, evaluate and minimize pipeline
#[derive(Debug)]
pub enum SolverError {
    /// The expression text was rejected
    Parse(ExpressionParseError),
    /// The truth table could not be built
    Evaluation(EvaluationError),
    /// The minimizer rejected its input
    Minimization(MinimizationError),
    /// Writing output failed
    Io(io::Error),
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolverError::Parse(err) => write!(f, "Parse error: {}", err),
            SolverError::Evaluation(err) => write!(f, "Evaluation error: {}", err),
            SolverError::Minimization(err) => write!(f, "Minimization error: {}", err),
            SolverError::Io(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for SolverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SolverError::Parse(err) => Some(err),
            SolverError::Evaluation(err) => Some(err),
            SolverError::Minimization(err) => Some(err),
            SolverError::Io(err) => Some(err),
        }
    }
}

impl From<ExpressionParseError> for SolverError {
    fn from(err: ExpressionParseError) -> Self {
        SolverError::Parse(err)
    }
}

impl From<EvaluationError> for SolverError {
    fn from(err: EvaluationError) -> Self {
        SolverError::Evaluation(err)
    }
}

impl From<MinimizationError> for SolverError {
    fn from(err: MinimizationError) -> Self {
        SolverError::Minimization(err)
    }
}

impl From<io::Error> for SolverError {
    fn from(err: io::Error) -> Self {
        SolverError::Io(err)
    }
}

impl From<PLAWriteError> for SolverError {
    fn from(err: PLAWriteError) -> Self {
        SolverError::Io(err.into())
    }
}

// Conversion from SolverError to io::Error for callers working in io::Result
impl From<SolverError> for io::Error {
    fn from(err: SolverError) -> Self {
        match err {
            SolverError::Io(io_err) => io_err,
            SolverError::Parse(parse) => parse.into(),
            other => io::Error::new(io::ErrorKind::InvalidInput, other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_too_many_variables_display() {
        let err = EvaluationError::TooManyVariables { count: 21, max: 20 };
        let msg = err.to_string();
        assert!(msg.contains("21 variables"));
        assert!(msg.contains("at most 20"));
        assert!(msg.contains("2097152 rows"));
    }

    #[test]
    fn test_inconsistent_partition_display() {
        let err = MinimizationError::InconsistentPartition { index: 7 };
        assert!(err.to_string().contains("row 7"));
        assert!(MinimizationError::EmptyVariableSet
            .to_string()
            .contains("zero variables"));
    }

    #[test]
    fn test_solver_error_wraps_stage_errors() {
        let err: SolverError = ExpressionParseError::DanglingNot { position: 0 }.into();
        assert!(matches!(err, SolverError::Parse(_)));
        assert!(err.to_string().starts_with("Parse error"));
        assert!(err.source().is_some());

        let err: SolverError = MinimizationError::EmptyVariableSet.into();
        assert!(matches!(err, SolverError::Minimization(_)));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: SolverError = io_err.into();
        let back: io::Error = err.into();
        assert_eq!(back.kind(), io::ErrorKind::NotFound);

        let parse: io::Error =
            SolverError::Parse(ExpressionParseError::EmptyExpression).into();
        assert_eq!(parse.kind(), io::ErrorKind::InvalidData);

        let limit: io::Error = SolverError::Evaluation(EvaluationError::TooManyVariables {
            count: 30,
            max: 20,
        })
        .into();
        assert_eq!(limit.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn test_pla_write_error_from_io_error() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "permission denied");
        let write_err: PLAWriteError = io_err.into();
        assert!(write_err.source().is_some());
        let err: SolverError = write_err.into();
        assert!(matches!(err, SolverError::Io(_)));
    }
}
