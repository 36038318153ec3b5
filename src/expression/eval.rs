//! Evaluation and truth-table generation for boolean expressions

use super::ast::{Expr, ExprNode};
use super::token::BinaryOp;
use super::BoolExpr;
use crate::error::EvaluationError;
use crate::table::{bit_at, Assignment, TruthTable, MAX_VARIABLES};
use crate::SolverConfig;

impl Expr {
    /// Evaluate the tree with `lookup` supplying each variable's value
    ///
    /// # Examples
    ///
    /// ```
    /// use bool_solver::BoolExpr;
    ///
    /// let expr = BoolExpr::parse("A^B'").unwrap();
    /// // A = 1, B = 0: 1 ^ 1
    /// assert!(!expr.root().evaluate(|name| name == 'A'));
    /// // A = 0, B = 0: 0 ^ 1
    /// assert!(expr.root().evaluate(|_| false));
    /// ```
    pub fn evaluate<F>(&self, lookup: F) -> bool
    where
        F: Fn(char) -> bool,
    {
        self.fold(&mut |node: ExprNode<bool>| match node {
            ExprNode::Variable(name) => lookup(name),
            ExprNode::Not(inner) => !inner,
            ExprNode::And(l, r) => BinaryOp::And.eval(l, r),
            ExprNode::Or(l, r) => BinaryOp::Or.eval(l, r),
            ExprNode::Xor(l, r) => BinaryOp::Xor.eval(l, r),
        })
    }
}

impl BoolExpr {
    /// Evaluate the expression with a given variable assignment
    ///
    /// The assignment is positional over [`BoolExpr::variables`]; missing
    /// trailing values read as `false`.
    pub fn evaluate(&self, assignment: &Assignment) -> bool {
        self.root.evaluate(|name| {
            self.variables
                .index_of(name)
                .and_then(|position| assignment.value(position))
                .unwrap_or(false)
        })
    }

    /// Generate the truth table with the default configuration
    pub fn truth_table(&self) -> Result<TruthTable, EvaluationError> {
        self.truth_table_with_config(&SolverConfig::default())
    }

    /// Generate the full `2^n`-row truth table
    ///
    /// Fails with [`EvaluationError::TooManyVariables`] when the expression
    /// has more variables than `config.max_variables` allows.
    ///
    /// # Examples
    ///
    /// ```
    /// use bool_solver::BoolExpr;
    ///
    /// let xor = BoolExpr::parse("A.B'+A'.B").unwrap();
    /// let table = xor.truth_table().unwrap();
    /// assert_eq!(table.outputs(), &[false, true, true, false]);
    /// ```
    pub fn truth_table_with_config(
        &self,
        config: &SolverConfig,
    ) -> Result<TruthTable, EvaluationError> {
        let count = self.variables.len();
        let max = config.max_variables.min(MAX_VARIABLES);
        if count > max {
            return Err(EvaluationError::TooManyVariables { count, max });
        }

        let variables = &self.variables;
        let table = TruthTable::from_fn(variables.clone(), |index| {
            self.root.evaluate(|name| {
                variables
                    .index_of(name)
                    .map_or(false, |position| bit_at(index, count, position))
            })
        });
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    #[test]
    fn test_evaluate_by_assignment() {
        let expr = BoolExpr::parse("A.(B+C')").unwrap();
        assert!(expr.evaluate(&Assignment::new(vec![true, false, false])));
        assert!(!expr.evaluate(&Assignment::new(vec![true, false, true])));
        assert!(!expr.evaluate(&Assignment::new(vec![false, true, true])));
    }

    #[test]
    fn test_evaluate_with_lookup_negates_before_xor() {
        let expr = BoolExpr::parse("A^B'").unwrap();
        assert!(!expr.root().evaluate(|name| name == 'A'));
        assert!(expr.root().evaluate(|_| false));
        assert!(expr.root().evaluate(|_| true));
        assert!(!expr.root().evaluate(|name| name == 'B'));
    }

    #[test]
    fn test_truth_table_matches_direct_evaluation() {
        let expr = BoolExpr::parse("(A^B).C + A'").unwrap();
        let table = expr.truth_table().unwrap();
        assert_eq!(table.len(), 8);
        for row in table.rows() {
            assert_eq!(row.output(), expr.evaluate(row.assignment()));
        }
    }

    #[test]
    fn test_too_many_variables() {
        let expr = BoolExpr::parse("A+B+C+D").unwrap();
        let config = SolverConfig::new().with_max_variables(3);
        assert_eq!(
            expr.truth_table_with_config(&config),
            Err(EvaluationError::TooManyVariables { count: 4, max: 3 })
        );
    }

    #[test]
    fn test_cap_is_clamped_to_alphabet() {
        let expr = BoolExpr::parse("A").unwrap();
        let config = SolverConfig::new().with_max_variables(1000);
        assert_eq!(expr.truth_table_with_config(&config).unwrap().len(), 2);
    }

    #[test]
    fn test_contradiction_and_tautology() {
        let never = BoolExpr::parse("A.A'").unwrap().truth_table().unwrap();
        assert!(never.outputs().iter().all(|&out| !out));
        let always = BoolExpr::parse("A+A'").unwrap().truth_table().unwrap();
        assert!(always.outputs().iter().all(|&out| out));
    }
}
