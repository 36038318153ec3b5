//! AST representation and tree traversal operations
//!
//! This module contains the expression tree produced by the parser and the
//! fold operation used to evaluate and inspect it.

use super::token::BinaryOp;

/// Node type for expression tree folding
///
/// This enum represents the structure of an expression node with the child
/// subtrees already replaced by their folded results. It is used with
/// [`Expr::fold`] to traverse the tree bottom-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExprNode<T> {
    /// A variable with the given name
    Variable(char),
    /// Logical NOT with result from inner subtree
    Not(T),
    /// Logical AND with results from left and right subtrees
    And(T, T),
    /// Logical OR with results from left and right subtrees
    Or(T, T),
    /// Logical XOR with results from left and right subtrees
    Xor(T, T),
}

/// Boolean expression tree
///
/// Each node exclusively owns its children; the tree is immutable once the
/// parser hands it out.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    /// A single-letter variable
    Var(char),
    /// Logical NOT of an expression
    Not(Box<Expr>),
    /// Logical AND of two expressions
    And(Box<Expr>, Box<Expr>),
    /// Logical OR of two expressions
    Or(Box<Expr>, Box<Expr>),
    /// Logical XOR of two expressions
    Xor(Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn var(name: char) -> Self {
        Expr::Var(name)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(inner: Expr) -> Self {
        Expr::Not(Box::new(inner))
    }

    pub fn and(lhs: Expr, rhs: Expr) -> Self {
        Expr::And(Box::new(lhs), Box::new(rhs))
    }

    pub fn or(lhs: Expr, rhs: Expr) -> Self {
        Expr::Or(Box::new(lhs), Box::new(rhs))
    }

    pub fn xor(lhs: Expr, rhs: Expr) -> Self {
        Expr::Xor(Box::new(lhs), Box::new(rhs))
    }

    /// Combine two operands with a binary operator
    pub(crate) fn binary(op: BinaryOp, lhs: Expr, rhs: Expr) -> Self {
        match op {
            BinaryOp::And => Expr::and(lhs, rhs),
            BinaryOp::Or => Expr::or(lhs, rhs),
            BinaryOp::Xor => Expr::xor(lhs, rhs),
        }
    }

    /// Fold the expression tree depth-first from leaves to root
    ///
    /// The function receives an [`ExprNode`] holding the node type and the
    /// accumulated results of its children.
    ///
    /// # Examples
    ///
    /// Count the number of operators in an expression:
    ///
    /// ```
    /// use bool_solver::{BoolExpr, ExprNode};
    ///
    /// let expr = BoolExpr::parse("A.B'+C").unwrap();
    ///
    /// let op_count = expr.root().fold(&mut |node: ExprNode<usize>| match node {
    ///     ExprNode::Variable(_) => 0,
    ///     ExprNode::Not(inner) => inner + 1,
    ///     ExprNode::And(l, r) | ExprNode::Or(l, r) | ExprNode::Xor(l, r) => l + r + 1,
    /// });
    ///
    /// assert_eq!(op_count, 3);
    /// ```
    pub fn fold<T, F>(&self, f: &mut F) -> T
    where
        F: FnMut(ExprNode<T>) -> T,
    {
        match self {
            Expr::Var(name) => f(ExprNode::Variable(*name)),
            Expr::Not(inner) => {
                let inner_result = inner.fold(f);
                f(ExprNode::Not(inner_result))
            }
            Expr::And(left, right) => {
                let left_result = left.fold(f);
                let right_result = right.fold(f);
                f(ExprNode::And(left_result, right_result))
            }
            Expr::Or(left, right) => {
                let left_result = left.fold(f);
                let right_result = right.fold(f);
                f(ExprNode::Or(left_result, right_result))
            }
            Expr::Xor(left, right) => {
                let left_result = left.fold(f);
                let right_result = right.fold(f);
                f(ExprNode::Xor(left_result, right_result))
            }
        }
    }

    /// Number of nodes on the longest root-to-leaf path
    pub fn depth(&self) -> usize {
        self.fold(&mut |node: ExprNode<usize>| match node {
            ExprNode::Variable(_) => 1,
            ExprNode::Not(inner) => inner + 1,
            ExprNode::And(l, r) | ExprNode::Or(l, r) | ExprNode::Xor(l, r) => l.max(r) + 1,
        })
    }
}
