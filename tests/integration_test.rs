//! End-to-end tests: raw string to truth table to minimal forms

use bool_solver::*;

fn outputs(table: &TruthTable) -> Vec<u8> {
    table.rows().map(|row| u8::from(row.output())).collect()
}

#[test]
fn test_xor_written_as_sum_of_products() {
    let table = parse_and_evaluate("A.B'+A'.B").unwrap();
    assert_eq!(table.variables().as_slice(), &['A', 'B']);
    assert_eq!(outputs(&table), vec![0, 1, 1, 0]);

    let min = minimize(&table).unwrap();
    assert_eq!(format(min.sop()), "A.B'+A'.B");
    assert_eq!(format(min.pos()), "(A+B).(A'+B')");
}

#[test]
fn test_xor_operator_gives_same_forms() {
    let min = BoolExpr::parse("a ^ b").unwrap().minimize().unwrap();
    assert_eq!(min.sop().to_string(), "A.B'+A'.B");
    assert_eq!(min.pos().to_string(), "(A+B).(A'+B')");
}

#[test]
fn test_contradiction() {
    let table = parse_and_evaluate("A.A'").unwrap();
    assert_eq!(outputs(&table), vec![0, 0]);
    let min = minimize(&table).unwrap();
    assert_eq!(min.sop().to_string(), "0");
    assert_eq!(min.pos().to_string(), "0");
}

#[test]
fn test_tautology() {
    let table = parse_and_evaluate("A+A'").unwrap();
    assert_eq!(outputs(&table), vec![1, 1]);
    let min = minimize(&table).unwrap();
    assert_eq!(min.sop().to_string(), "1");
    assert_eq!(min.pos().to_string(), "1");
}

#[test]
fn test_double_negation() {
    let expr = BoolExpr::parse("A''").unwrap();
    assert_eq!(expr.root(), &Expr::not(Expr::not(Expr::var('A'))));
    let min = expr.minimize().unwrap();
    assert_eq!(min.sop().to_string(), "A");
}

#[test]
fn test_parse_errors() {
    assert_eq!(
        BoolExpr::parse("'A"),
        Err(ExpressionParseError::DanglingNot { position: 0 })
    );
    assert!(matches!(
        BoolExpr::parse("(A+B"),
        Err(ExpressionParseError::UnbalancedParens { .. })
    ));
    assert!(matches!(
        BoolExpr::parse("AB"),
        Err(ExpressionParseError::MissingOperator { .. })
    ));
}

#[test]
fn test_multiplexer() {
    // f = S'.A + S.B, variables A, B, S
    let table = parse_and_evaluate("S'.A + S.B").unwrap();
    assert_eq!(table.variables().as_slice(), &['A', 'B', 'S']);
    assert_eq!(table.minterms(), vec![3, 4, 6, 7]);

    let min = minimize(&table).unwrap();
    assert_eq!(min.sop().to_string(), "A.S'+B.S");
    assert_eq!(min.pos().to_string(), "(A+S).(B+S')");
}

#[test]
fn test_consensus_term_is_removed() {
    let min = BoolExpr::parse("A.B + A'.C + B.C")
        .unwrap()
        .minimize()
        .unwrap();
    assert_eq!(min.sop().to_string(), "A.B+A'.C");
    assert_eq!(min.pos().to_string(), "(A+C).(A'+B)");
}

#[test]
fn test_variable_cap() {
    let config = SolverConfig::new().with_max_variables(2);
    let err = parse_and_evaluate_with_config("A+B+C", &config).unwrap_err();
    assert!(matches!(
        err,
        SolverError::Evaluation(EvaluationError::TooManyVariables { count: 3, max: 2 })
    ));
}

#[test]
fn test_minimize_terms_directly() {
    let vars = VariableSet::from_chars("XYZ".chars());
    let min = minimize_terms(&vars, &[7], &[0, 1, 2, 3, 4, 5, 6], CoverStrategy::Greedy).unwrap();
    assert_eq!(min.sop().to_string(), "X.Y.Z");
    assert_eq!(min.pos().to_string(), "X.Y.Z");
    assert_eq!(min.sop().literal_count(), 3);
}

#[test]
fn test_forms_agree_with_table_on_every_row() {
    for raw in ["A^B^C", "(A+B').(C^D)", "A.B.C+A'.B'.C'", "(A.B)'+C.D'"] {
        let table = parse_and_evaluate(raw).unwrap();
        let min = minimize(&table).unwrap();
        for row in table.rows() {
            assert_eq!(min.sop().evaluate(row.assignment()), row.output(), "{} SOP", raw);
            assert_eq!(min.pos().evaluate(row.assignment()), row.output(), "{} POS", raw);
        }
    }
}

#[test]
fn test_wide_or_chain_minimizes_quickly() {
    let letters: Vec<String> = ('A'..='N').map(String::from).collect();
    let raw = letters.join("+");
    let started = std::time::Instant::now();

    let table = parse_and_evaluate(&raw).unwrap();
    assert_eq!(table.len(), 1 << 14);
    let min = minimize(&table).unwrap();

    assert_eq!(min.sop().to_string(), raw);
    assert_eq!(min.sop().term_count(), 14);
    // A single sum term needs no parentheses
    assert_eq!(min.pos().to_string(), raw);
    assert_eq!(min.pos().term_count(), 1);
    assert!(
        started.elapsed() < std::time::Duration::from_secs(60),
        "took {:?}",
        started.elapsed()
    );
}
