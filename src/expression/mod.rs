//! Boolean expressions in the keypad notation
//!
//! This module turns raw text into an owned expression tree and evaluates it.
//!
//! # Notation
//!
//! | Symbol | Meaning | Precedence |
//! |--------|---------|------------|
//! | `'`    | NOT (postfix) | highest |
//! | `.`    | AND | 3 |
//! | `^`    | XOR | 2 |
//! | `+`    | OR  | 1 |
//!
//! Binary operators are left-associative. Variables are single ASCII letters,
//! case-insensitive and normalised to upper case. Whitespace is ignored.
//!
//! # Main Types
//!
//! - [`BoolExpr`] - A parsed expression together with its sorted variable set
//! - [`Expr`] - The owned tree itself
//! - [`ExpressionParseError`] - Why a string was rejected, with its position
//!
//! # Quick Start
//!
//! ```
//! use bool_solver::BoolExpr;
//!
//! let expr = BoolExpr::parse("A.B' + A'.B").unwrap();
//! let table = expr.truth_table().unwrap();
//! assert_eq!(table.minterms(), vec![1, 2]);
//! println!("{}", table);
//! ```

mod ast;
mod display;
pub mod error;
mod eval;
mod parser;
pub mod token;

pub use ast::{Expr, ExprNode};
pub use error::ExpressionParseError;

pub(crate) use crate::table::VariableSet;

/// A parsed boolean expression
///
/// Owns its [`Expr`] tree and the set of variables that appear in it, sorted
/// alphabetically. The variable order defines truth-table row indices.
///
/// Instances are only produced by [`BoolExpr::parse`] (or [`str::parse`]), so
/// every variable in the tree is an upper-case ASCII letter present in
/// [`BoolExpr::variables`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoolExpr {
    root: Expr,
    variables: VariableSet,
}

impl BoolExpr {
    /// Root of the expression tree
    pub fn root(&self) -> &Expr {
        &self.root
    }

    /// Distinct variables in the expression, sorted ascending
    pub fn variables(&self) -> &VariableSet {
        &self.variables
    }

    pub fn into_parts(self) -> (Expr, VariableSet) {
        (self.root, self.variables)
    }
}
