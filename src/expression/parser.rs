//! Parsing support for boolean expressions
//!
//! The postfix `'` makes the grammar positional rather than prefix-driven, so
//! parsing is an explicit output-stack (shunting-yard) pass instead of
//! recursive descent: `'` wraps whatever sub-expression was completed last,
//! while binary operators wait on a pending stack until precedence or a
//! closing parenthesis forces them to reduce.

use std::str::FromStr;

use log::debug;

use super::ast::Expr;
use super::error::ExpressionParseError;
use super::token::{tokenize, BinaryOp, Spanned, Token};
use super::{BoolExpr, VariableSet};

/// Entry on the pending-operator stack
#[derive(Debug, Clone, Copy)]
enum Pending {
    /// A binary operator and its position
    Op(BinaryOp, usize),
    /// An open parenthesis and its position
    Open(usize),
}

/// Shunting-yard state
#[derive(Debug)]
struct Builder {
    /// Completed sub-expressions
    output: Vec<Expr>,
    pending: Vec<Pending>,
    /// True at the start, after a binary operator and after `(`
    expect_operand: bool,
}

impl Builder {
    fn new() -> Self {
        Builder {
            output: Vec::new(),
            pending: Vec::new(),
            expect_operand: true,
        }
    }

    fn feed(&mut self, spanned: Spanned) -> Result<(), ExpressionParseError> {
        let Spanned { token, position } = spanned;
        match token {
            Token::Variable(name) => {
                if !self.expect_operand {
                    return Err(ExpressionParseError::MissingOperator { position });
                }
                self.output.push(Expr::var(name));
                self.expect_operand = false;
            }
            Token::Not => {
                if self.expect_operand {
                    return Err(ExpressionParseError::DanglingNot { position });
                }
                let operand = self
                    .output
                    .pop()
                    .ok_or(ExpressionParseError::DanglingNot { position })?;
                self.output.push(Expr::not(operand));
            }
            Token::And => self.push_operator(BinaryOp::And, position)?,
            Token::Or => self.push_operator(BinaryOp::Or, position)?,
            Token::Xor => self.push_operator(BinaryOp::Xor, position)?,
            Token::LParen => {
                if !self.expect_operand {
                    return Err(ExpressionParseError::MissingOperator { position });
                }
                self.pending.push(Pending::Open(position));
            }
            Token::RParen => {
                if self.expect_operand {
                    return Err(ExpressionParseError::MissingOperand { position });
                }
                loop {
                    match self.pending.pop() {
                        Some(Pending::Op(op, op_position)) => self.reduce(op, op_position)?,
                        Some(Pending::Open(_)) => break,
                        None => return Err(ExpressionParseError::UnbalancedParens { position }),
                    }
                }
            }
        }
        Ok(())
    }

    /// Reduce everything that binds at least as tightly as `op`, then queue it
    fn push_operator(&mut self, op: BinaryOp, position: usize) -> Result<(), ExpressionParseError> {
        if self.expect_operand {
            return Err(ExpressionParseError::MissingOperand { position });
        }
        while let Some(&Pending::Op(top, top_position)) = self.pending.last() {
            if top.precedence() < op.precedence() {
                break;
            }
            self.pending.pop();
            self.reduce(top, top_position)?;
        }
        self.pending.push(Pending::Op(op, position));
        self.expect_operand = true;
        Ok(())
    }

    /// Pop two operands and push their combination
    fn reduce(&mut self, op: BinaryOp, position: usize) -> Result<(), ExpressionParseError> {
        let missing = ExpressionParseError::MissingOperand { position };
        let rhs = self.output.pop().ok_or(missing.clone())?;
        let lhs = self.output.pop().ok_or(missing)?;
        self.output.push(Expr::binary(op, lhs, rhs));
        Ok(())
    }

    /// Drain the pending stack. `end` is the position just past the input.
    fn finish(mut self, end: usize) -> Result<Expr, ExpressionParseError> {
        if self.expect_operand {
            return Err(ExpressionParseError::MissingOperand { position: end });
        }
        while let Some(pending) = self.pending.pop() {
            match pending {
                Pending::Op(op, position) => self.reduce(op, position)?,
                Pending::Open(position) => {
                    return Err(ExpressionParseError::UnbalancedParens { position })
                }
            }
        }
        let root = self
            .output
            .pop()
            .ok_or(ExpressionParseError::EmptyExpression)?;
        if !self.output.is_empty() {
            return Err(ExpressionParseError::MissingOperator { position: end });
        }
        Ok(root)
    }
}

impl BoolExpr {
    /// Parse a boolean expression from the keypad notation
    ///
    /// Supports:
    /// - `.` for AND, `^` for XOR, `+` for OR (in decreasing precedence)
    /// - postfix `'` for NOT, applied to the preceding variable or group
    /// - parentheses for grouping
    /// - single-letter variables, case-insensitive
    ///
    /// # Examples
    ///
    /// ```
    /// use bool_solver::BoolExpr;
    ///
    /// let expr = BoolExpr::parse("a.b' + (c^d)'").unwrap();
    /// assert_eq!(expr.to_string(), "A.B'+(C^D)'");
    /// assert_eq!(expr.variables().to_string(), "A, B, C, D");
    /// ```
    pub fn parse(input: &str) -> Result<Self, ExpressionParseError> {
        let tokens = tokenize(input)?;
        if tokens.is_empty() {
            return Err(ExpressionParseError::EmptyExpression);
        }

        let variables = VariableSet::from_chars(tokens.iter().filter_map(|s| match s.token {
            Token::Variable(name) => Some(name),
            _ => None,
        }));

        let mut builder = Builder::new();
        for spanned in tokens.iter().copied() {
            builder.feed(spanned)?;
        }
        let root = builder.finish(input.chars().count())?;

        debug!(
            "parsed {:?}: {} tokens, depth {}, variables [{}]",
            input,
            tokens.len(),
            root.depth(),
            variables
        );

        Ok(BoolExpr { root, variables })
    }
}

impl FromStr for BoolExpr {
    type Err = ExpressionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BoolExpr::parse(s)
    }
}
