//! Last-expression memoisation for interactive callers
//!
//! A keypad front end re-submits the same string when the user asks for the
//! truth table and then for the simplification. [`Session`] keeps the table
//! of the last successfully evaluated string so the second request does not
//! re-enumerate `2^n` rows.

use log::debug;

use crate::error::SolverError;
use crate::expression::BoolExpr;
use crate::minimize::{minimize_terms, Minimized};
use crate::table::TruthTable;
use crate::SolverConfig;

#[derive(Debug, Clone)]
struct Cached {
    raw: String,
    table: TruthTable,
}

/// Evaluates expressions and remembers the most recent truth table
///
/// ```
/// use bool_solver::{Session, SolverConfig};
///
/// let mut session = Session::new(SolverConfig::default());
/// assert_eq!(session.truth_table("A^B").unwrap().minterms(), vec![1, 2]);
///
/// let min = session.simplify("A^B").unwrap();
/// assert_eq!(min.sop().to_string(), "A.B'+A'.B");
/// assert_eq!(session.last_expression(), Some("A^B"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Session {
    config: SolverConfig,
    last: Option<Cached>,
    hits: usize,
}

impl Session {
    pub fn new(config: SolverConfig) -> Self {
        Session {
            config,
            last: None,
            hits: 0,
        }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Truth table for `raw`, reusing the cached one if `raw` is unchanged
    ///
    /// On error the previous cache entry is kept.
    pub fn truth_table(&mut self, raw: &str) -> Result<&TruthTable, SolverError> {
        let cached = match self.last.take() {
            Some(cached) if cached.raw == raw => {
                self.hits += 1;
                debug!("session cache hit #{} for {:?}", self.hits, raw);
                cached
            }
            previous => {
                debug!("session cache miss for {:?}", raw);
                match self.evaluate(raw) {
                    Ok(table) => Cached {
                        raw: raw.to_string(),
                        table,
                    },
                    Err(err) => {
                        self.last = previous;
                        return Err(err);
                    }
                }
            }
        };
        Ok(&self.last.insert(cached).table)
    }

    fn evaluate(&self, raw: &str) -> Result<TruthTable, SolverError> {
        let table = BoolExpr::parse(raw)?.truth_table_with_config(&self.config)?;
        Ok(table)
    }

    /// Minimize `raw`, building its truth table first if needed
    pub fn simplify(&mut self, raw: &str) -> Result<Minimized, SolverError> {
        let strategy = self.config.strategy;
        let table = self.truth_table(raw)?;
        let minimized = minimize_terms(
            table.variables(),
            &table.minterms(),
            &table.maxterms(),
            strategy,
        )?;
        Ok(minimized)
    }

    /// The string whose table is currently cached
    pub fn last_expression(&self) -> Option<&str> {
        self.last.as_ref().map(|cached| cached.raw.as_str())
    }

    /// The currently cached table
    pub fn last_table(&self) -> Option<&TruthTable> {
        self.last.as_ref().map(|cached| &cached.table)
    }

    /// Requests answered from the cache so far
    pub fn cache_hits(&self) -> usize {
        self.hits
    }

    pub fn clear(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExpressionParseError;

    use test_log::test;

    #[test]
    fn test_cache_replaced_on_new_expression() {
        let mut session = Session::default();
        session.truth_table("A").unwrap();
        assert_eq!(session.last_expression(), Some("A"));
        session.truth_table("A.B").unwrap();
        assert_eq!(session.last_expression(), Some("A.B"));
        assert_eq!(session.last_table().map(TruthTable::len), Some(4));
    }

    #[test]
    fn test_simplify_after_table_is_a_cache_hit() {
        let mut session = Session::default();
        session.truth_table("A.B + A'.C").unwrap();
        assert_eq!(session.cache_hits(), 0);

        let min = session.simplify("A.B + A'.C").unwrap();
        assert_eq!(min.sop().to_string(), "A.B+A'.C");
        assert_eq!(session.cache_hits(), 1);

        // Same function, different spelling: recomputed
        session.simplify("A'.C + A.B").unwrap();
        assert_eq!(session.cache_hits(), 1);
        session.truth_table("A'.C + A.B").unwrap();
        assert_eq!(session.cache_hits(), 2);
    }

    #[test]
    fn test_failed_parse_keeps_previous_cache() {
        let mut session = Session::default();
        session.truth_table("A+B").unwrap();
        let err = session.truth_table("A+").unwrap_err();
        assert!(matches!(
            err,
            SolverError::Parse(ExpressionParseError::MissingOperand { .. })
        ));
        assert_eq!(session.last_expression(), Some("A+B"));
    }

    #[test]
    fn test_simplify_uses_configured_limits() {
        let mut session = Session::new(SolverConfig::new().with_max_variables(1));
        assert!(matches!(
            session.simplify("A.B"),
            Err(SolverError::Evaluation(_))
        ));
        assert_eq!(session.last_expression(), None);
    }

    #[test]
    fn test_clear() {
        let mut session = Session::default();
        session.simplify("A.A'").unwrap();
        session.clear();
        assert!(session.last_table().is_none());
    }
}
