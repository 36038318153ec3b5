//! Two-level minimized forms and their rendering in the keypad notation

use std::fmt;

use super::implicant::Implicant;
use crate::table::{Assignment, VariableSet};

/// Which two-level form a [`MinimizedForm`] holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormKind {
    /// Sum of products, built from the minterms
    Sop,
    /// Product of sums, built from the maxterms
    Pos,
}

impl FormKind {
    /// Bit value that renders as a plain (uncomplemented) literal
    pub(crate) fn plain_bit(self) -> bool {
        matches!(self, FormKind::Sop)
    }

    fn literal_separator(self) -> char {
        match self {
            FormKind::Sop => '.',
            FormKind::Pos => '+',
        }
    }

    fn term_separator(self) -> char {
        match self {
            FormKind::Sop => '+',
            FormKind::Pos => '.',
        }
    }
}

/// A variable, possibly complemented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Literal {
    pub variable: char,
    pub negated: bool,
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negated {
            write!(f, "{}'", self.variable)
        } else {
            write!(f, "{}", self.variable)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum FormBody {
    Constant(bool),
    Terms(Vec<Implicant>),
}

/// A minimal SOP or POS expression
///
/// Either a constant or an ordered list of implicants. For [`FormKind::Sop`]
/// each implicant is a product term over the ON-set; for [`FormKind::Pos`]
/// each implicant covers part of the OFF-set and stands for the sum term that
/// is false exactly there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinimizedForm {
    kind: FormKind,
    variables: VariableSet,
    body: FormBody,
}

impl MinimizedForm {
    pub(crate) fn constant(kind: FormKind, variables: VariableSet, value: bool) -> Self {
        MinimizedForm {
            kind,
            variables,
            body: FormBody::Constant(value),
        }
    }

    pub(crate) fn from_terms(kind: FormKind, variables: VariableSet, terms: Vec<Implicant>) -> Self {
        MinimizedForm {
            kind,
            variables,
            body: FormBody::Terms(terms),
        }
    }

    pub fn kind(&self) -> FormKind {
        self.kind
    }

    pub fn variables(&self) -> &VariableSet {
        &self.variables
    }

    /// `Some(value)` if the form is the constant `1` or `0`
    pub fn as_constant(&self) -> Option<bool> {
        match self.body {
            FormBody::Constant(value) => Some(value),
            FormBody::Terms(_) => None,
        }
    }

    /// Implicants in emission order; empty for constants
    pub fn implicants(&self) -> &[Implicant] {
        match &self.body {
            FormBody::Constant(_) => &[],
            FormBody::Terms(terms) => terms,
        }
    }

    pub fn term_count(&self) -> usize {
        self.implicants().len()
    }

    pub fn literal_count(&self) -> usize {
        self.implicants().iter().map(Implicant::literal_count).sum()
    }

    /// Terms as literal lists, in variable order within each term
    ///
    /// ```
    /// use bool_solver::{BoolExpr, Minimizable};
    ///
    /// let min = BoolExpr::parse("A.B'+A'.B").unwrap().minimize().unwrap();
    /// let pos = min.pos().terms();
    /// assert_eq!(pos.len(), 2);
    /// assert_eq!(pos[1][0].to_string(), "A'");
    /// ```
    pub fn terms(&self) -> Vec<Vec<Literal>> {
        self.implicants()
            .iter()
            .map(|imp| self.literals(imp).collect())
            .collect()
    }

    fn literals<'a>(&'a self, imp: &'a Implicant) -> impl Iterator<Item = Literal> + 'a {
        let plain = self.kind.plain_bit();
        self.variables
            .iter()
            .enumerate()
            .filter_map(move |(position, variable)| {
                imp.value(position).map(|value| Literal {
                    variable,
                    negated: value != plain,
                })
            })
    }

    /// Value of the form on truth-table row `index`
    pub fn evaluate_index(&self, index: usize) -> bool {
        match (&self.body, self.kind) {
            (FormBody::Constant(value), _) => *value,
            (FormBody::Terms(terms), FormKind::Sop) => terms.iter().any(|t| t.covers(index)),
            (FormBody::Terms(terms), FormKind::Pos) => !terms.iter().any(|t| t.covers(index)),
        }
    }

    pub fn evaluate(&self, assignment: &Assignment) -> bool {
        self.evaluate_index(assignment.index())
    }
}

/// Renders in the keypad notation
///
/// SOP: `A.B'+A'.B`. POS: `(A+B).(A'+B')`. Constants: `1` and `0`.
impl fmt::Display for MinimizedForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let terms = match &self.body {
            FormBody::Constant(value) => return write!(f, "{}", u8::from(*value)),
            FormBody::Terms(terms) => terms,
        };

        for (i, imp) in terms.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", self.kind.term_separator())?;
            }
            let wrap =
                self.kind == FormKind::Pos && terms.len() > 1 && imp.literal_count() > 1;
            if wrap {
                write!(f, "(")?;
            }
            for (j, literal) in self.literals(imp).enumerate() {
                if j > 0 {
                    write!(f, "{}", self.kind.literal_separator())?;
                }
                write!(f, "{}", literal)?;
            }
            if wrap {
                write!(f, ")")?;
            }
        }
        Ok(())
    }
}
