//! Display formatting for boolean expressions

use std::fmt;

use super::ast::Expr;
use super::token::BinaryOp;
use super::BoolExpr;

/// Where a sub-expression sits relative to its parent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OpContext {
    None, // Top level or inside parentheses
    Not,  // Operand of a postfix NOT
    Left(BinaryOp),
    Right(BinaryOp),
}

impl OpContext {
    /// Whether a binary node with operator `op` must be parenthesised here
    fn wraps(self, op: BinaryOp) -> bool {
        match self {
            OpContext::None => false,
            OpContext::Not => true,
            // Left-associative: equal precedence only needs parens on the right
            OpContext::Left(parent) => op.precedence() < parent.precedence(),
            OpContext::Right(parent) => op.precedence() <= parent.precedence(),
        }
    }
}

impl Expr {
    /// Format with operator precedence context to minimise parentheses
    fn fmt_with_context(&self, f: &mut fmt::Formatter<'_>, ctx: OpContext) -> fmt::Result {
        match self {
            Expr::Var(name) => write!(f, "{}", name),
            Expr::Not(inner) => {
                inner.fmt_with_context(f, OpContext::Not)?;
                write!(f, "'")
            }
            Expr::And(left, right) => Self::fmt_binary(f, ctx, BinaryOp::And, left, right),
            Expr::Or(left, right) => Self::fmt_binary(f, ctx, BinaryOp::Or, left, right),
            Expr::Xor(left, right) => Self::fmt_binary(f, ctx, BinaryOp::Xor, left, right),
        }
    }

    fn fmt_binary(
        f: &mut fmt::Formatter<'_>,
        ctx: OpContext,
        op: BinaryOp,
        left: &Expr,
        right: &Expr,
    ) -> fmt::Result {
        let needs_parens = ctx.wraps(op);

        if needs_parens {
            write!(f, "(")?;
        }

        left.fmt_with_context(f, OpContext::Left(op))?;
        write!(f, "{}", op.symbol())?;
        right.fmt_with_context(f, OpContext::Right(op))?;

        if needs_parens {
            write!(f, ")")?;
        }
        Ok(())
    }
}

/// Renders in the input notation with minimal parentheses
///
/// Re-parsing the output yields a structurally equal tree.
///
/// ```
/// use bool_solver::Expr;
///
/// let expr = Expr::and(Expr::or(Expr::var('A'), Expr::var('B')), Expr::var('C'));
/// assert_eq!(expr.to_string(), "(A+B).C");
/// ```
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_with_context(f, OpContext::None)
    }
}

impl fmt::Display for BoolExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.root.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn a() -> Expr {
        Expr::var('A')
    }
    fn b() -> Expr {
        Expr::var('B')
    }
    fn c() -> Expr {
        Expr::var('C')
    }

    #[test]
    fn test_negation_placement() {
        assert_eq!(Expr::not(a()).to_string(), "A'");
        assert_eq!(Expr::not(Expr::not(a())).to_string(), "A''");
        assert_eq!(Expr::not(Expr::and(a(), b())).to_string(), "(A.B)'");
    }

    #[test]
    fn test_precedence_drops_redundant_parens() {
        let expr = Expr::or(Expr::and(a(), b()), Expr::xor(b(), c()));
        assert_eq!(expr.to_string(), "A.B+B^C");
    }

    #[test]
    fn test_lower_precedence_child_is_wrapped() {
        let expr = Expr::and(Expr::xor(a(), b()), c());
        assert_eq!(expr.to_string(), "(A^B).C");
    }

    #[test]
    fn test_right_nested_same_operator_keeps_parens() {
        let left = Expr::or(Expr::or(a(), b()), c());
        let right = Expr::or(a(), Expr::or(b(), c()));
        assert_eq!(left.to_string(), "A+B+C");
        assert_eq!(right.to_string(), "A+(B+C)");
    }
}
