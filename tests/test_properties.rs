//! Property tests over randomly generated expressions in up to four variables

use bool_solver::*;
use proptest::prelude::*;

fn expr_strategy() -> impl Strategy<Value = Expr> {
    let leaf = prop::sample::select(vec!['A', 'B', 'C', 'D']).prop_map(Expr::var);
    leaf.prop_recursive(5, 32, 2, |inner| {
        prop_oneof![
            inner.clone().prop_map(Expr::not),
            (inner.clone(), inner.clone()).prop_map(|(l, r)| Expr::and(l, r)),
            (inner.clone(), inner.clone()).prop_map(|(l, r)| Expr::or(l, r)),
            (inner.clone(), inner).prop_map(|(l, r)| Expr::xor(l, r)),
        ]
    })
}

/// Evaluate `expr` on `row`, looking variables up in `vars`
fn eval_on_row(expr: &Expr, vars: &VariableSet, row: &TruthTableRow) -> bool {
    expr.evaluate(|name| {
        vars.index_of(name)
            .and_then(|position| row.assignment().value(position))
            .unwrap_or(false)
    })
}

proptest! {
    #[test]
    fn prop_display_parse_round_trip(expr in expr_strategy()) {
        let text = expr.to_string();
        let parsed = BoolExpr::parse(&text).unwrap();
        prop_assert_eq!(parsed.root(), &expr);
    }

    #[test]
    fn prop_table_has_all_rows_in_order(expr in expr_strategy()) {
        let parsed = BoolExpr::parse(&expr.to_string()).unwrap();
        let table = parsed.truth_table().unwrap();
        let n = parsed.variables().len();
        prop_assert!(n >= 1);
        prop_assert_eq!(table.len(), 1usize << n);
        for (expected, row) in table.rows().enumerate() {
            prop_assert_eq!(row.index(), expected);
            prop_assert_eq!(row.output(), parsed.evaluate(row.assignment()));
        }
        prop_assert_eq!(table.minterms().len() + table.maxterms().len(), table.len());
    }

    #[test]
    fn prop_forms_match_table(expr in expr_strategy()) {
        let table = parse_and_evaluate(&expr.to_string()).unwrap();
        let min = minimize(&table).unwrap();
        for row in table.rows() {
            prop_assert_eq!(min.sop().evaluate(row.assignment()), row.output());
            prop_assert_eq!(min.pos().evaluate(row.assignment()), row.output());
        }
    }

    #[test]
    fn prop_formatted_forms_reparse_to_same_function(expr in expr_strategy()) {
        let table = parse_and_evaluate(&expr.to_string()).unwrap();
        let min = minimize(&table).unwrap();
        for form in [min.sop(), min.pos()] {
            // Constants have no notation of their own
            if form.as_constant().is_some() {
                continue;
            }
            let reparsed = BoolExpr::parse(&format(form)).unwrap();
            for row in table.rows() {
                prop_assert_eq!(
                    eval_on_row(reparsed.root(), table.variables(), &row),
                    row.output(),
                    "{:?} form {}", form.kind(), form
                );
            }
        }
    }

    #[test]
    fn prop_exact_cover_is_no_larger(expr in expr_strategy()) {
        let parsed = BoolExpr::parse(&expr.to_string()).unwrap();
        let greedy = parsed.minimize().unwrap();
        let exact = parsed.minimize_exact().unwrap();
        prop_assert!(exact.sop().term_count() <= greedy.sop().term_count());
        prop_assert!(exact.pos().term_count() <= greedy.pos().term_count());
        let table = parsed.truth_table().unwrap();
        for row in table.rows() {
            prop_assert_eq!(exact.sop().evaluate(row.assignment()), row.output());
            prop_assert_eq!(exact.pos().evaluate(row.assignment()), row.output());
        }
    }
}
