//! # Boolean Expression Solver
//!
//! This crate parses boolean expressions written in a compact calculator-keypad
//! notation, enumerates their truth tables, and derives minimal two-level
//! Sum-of-Products (SOP) and Product-of-Sums (POS) forms with the
//! Quine-McCluskey method.
//!
//! ## Notation
//!
//! | Symbol | Meaning |
//! |--------|---------|
//! | `A`..`Z` | variables (case-insensitive, one letter each) |
//! | `'` | NOT, written after its operand: `A'`, `(A.B)'` |
//! | `.` | AND |
//! | `^` | XOR |
//! | `+` | OR |
//! | `(` `)` | grouping |
//!
//! Precedence from tightest to loosest is `'`, `.`, `^`, `+`; binary operators
//! are left-associative.
//!
//! ## Quick Start
//!
//! ```
//! use bool_solver::{minimize, parse_and_evaluate};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let table = parse_and_evaluate("A.B' + A'.B")?;
//! assert_eq!(table.minterms(), vec![1, 2]);
//!
//! let min = minimize(&table)?;
//! assert_eq!(min.sop().to_string(), "A.B'+A'.B");
//! assert_eq!(min.pos().to_string(), "(A+B).(A'+B')");
//! # Ok(())
//! # }
//! ```
//!
//! ## The Minimizable Trait
//!
//! [`Minimizable`] works on both parsed expressions and truth tables:
//!
//! ```
//! use bool_solver::{BoolExpr, Minimizable};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let expr = BoolExpr::parse("A.B + A.B.C")?;
//! let min = expr.minimize()?;
//! assert_eq!(min.sop().to_string(), "A.B");
//!
//! // Exact cover search instead of the greedy default
//! let exact = expr.minimize_exact()?;
//! assert_eq!(exact.sop(), min.sop());
//! # Ok(())
//! # }
//! ```
//!
//! ## Interactive Use
//!
//! [`Session`] remembers the last evaluated expression so that asking for the
//! table and then the simplification of the same input only enumerates once.
//!
//! ## PLA Export
//!
//! Tables and minimized forms implement [`PLAWriter`]:
//!
//! ```
//! use bool_solver::{minimize, parse_and_evaluate, PLAType, PLAWriter};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let min = minimize(&parse_and_evaluate("A^B")?)?;
//! let pla = min.to_pla_string(PLAType::F)?;
//! assert!(pla.starts_with(".i 2\n.ilb A B\n"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Logging
//!
//! The library logs through the [`log`] facade (`debug!` for per-stage
//! summaries, `trace!` for individual merges) and never installs a logger.

pub mod error;
pub mod expression;
pub mod minimize;
pub mod pla;
pub mod session;
pub mod table;

pub use error::{
    EvaluationError, ExpressionParseError, MinimizationError, PLAWriteError, SolverError,
};
pub use expression::{BoolExpr, Expr, ExprNode};
pub use minimize::{
    minimize_terms, CoverStrategy, FormKind, Implicant, Literal, Minimizable, Minimized,
    MinimizedForm,
};
pub use pla::{PLAType, PLAWriter};
pub use session::Session;
pub use table::{Assignment, TruthTable, TruthTableRow, VariableSet, MAX_VARIABLES};

/// Default cap on distinct variables, keeping tables at or below 2^20 rows
pub const DEFAULT_MAX_VARIABLES: usize = 20;

/// Configuration for evaluation and minimization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    /// Reject expressions with more distinct variables than this
    ///
    /// Values above [`MAX_VARIABLES`] behave as [`MAX_VARIABLES`].
    pub max_variables: usize,
    /// How the minimizer picks non-essential primes
    pub strategy: CoverStrategy,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            max_variables: DEFAULT_MAX_VARIABLES,
            strategy: CoverStrategy::Greedy,
        }
    }
}

impl SolverConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_variables(mut self, max_variables: usize) -> Self {
        self.max_variables = max_variables;
        self
    }

    pub fn with_strategy(mut self, strategy: CoverStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}

/// Parse `raw` and build its truth table with the default configuration
///
/// # Errors
///
/// [`SolverError::Parse`] for malformed input, [`SolverError::Evaluation`]
/// when the expression has too many variables.
pub fn parse_and_evaluate(raw: &str) -> Result<TruthTable, SolverError> {
    parse_and_evaluate_with_config(raw, &SolverConfig::default())
}

pub fn parse_and_evaluate_with_config(
    raw: &str,
    config: &SolverConfig,
) -> Result<TruthTable, SolverError> {
    let expr = BoolExpr::parse(raw)?;
    let table = expr.truth_table_with_config(config)?;
    Ok(table)
}

/// Minimize a truth table into SOP and POS forms using the greedy cover
pub fn minimize(table: &TruthTable) -> Result<Minimized, MinimizationError> {
    minimize_terms(
        table.variables(),
        &table.minterms(),
        &table.maxterms(),
        CoverStrategy::Greedy,
    )
}

/// Render a minimized form in the keypad notation; same as its `Display`
pub fn format(form: &MinimizedForm) -> String {
    form.to_string()
}
