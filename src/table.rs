//! Truth tables and the variable ordering they are indexed by
//!
//! A [`TruthTable`] over `n` variables always has exactly `2^n` rows, ordered
//! by increasing row index. The index of a row is its [`Assignment`] read as a
//! binary number with the alphabetically first variable as the most
//! significant bit, so for variables `A, B`:
//!
//! | index | A | B |
//! |-------|---|---|
//! | 0     | 0 | 0 |
//! | 1     | 0 | 1 |
//! | 2     | 1 | 0 |
//! | 3     | 1 | 1 |
//!
//! Minterm and maxterm indices handed to the minimizer are computed against
//! this ordering.

use std::collections::BTreeSet;
use std::fmt;

use log::debug;

use crate::error::MinimizationError;

/// Upper bound on variables imposed by the single-letter alphabet
pub const MAX_VARIABLES: usize = 26;

/// Ordered set of distinct single-letter variable names, sorted ascending
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct VariableSet {
    names: Vec<char>,
}

impl VariableSet {
    /// Build a set from arbitrary characters
    ///
    /// ASCII letters are upper-cased; everything else is ignored.
    ///
    /// ```
    /// use bool_solver::VariableSet;
    ///
    /// let vars = VariableSet::from_chars("cab+A".chars());
    /// assert_eq!(vars.as_slice(), &['A', 'B', 'C']);
    /// ```
    pub fn from_chars<I>(chars: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        let names: BTreeSet<char> = chars
            .into_iter()
            .filter(char::is_ascii_alphabetic)
            .map(|c| c.to_ascii_uppercase())
            .collect();
        VariableSet {
            names: names.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.names.iter().copied()
    }

    pub fn as_slice(&self) -> &[char] {
        &self.names
    }

    /// Name of the variable at `position` (0 is the most significant bit)
    pub fn get(&self, position: usize) -> Option<char> {
        self.names.get(position).copied()
    }

    /// Position of `name` in the ordering
    pub fn index_of(&self, name: char) -> Option<usize> {
        self.names.binary_search(&name).ok()
    }
}

impl fmt::Display for VariableSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, name) in self.names.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", name)?;
        }
        Ok(())
    }
}

/// One boolean per variable, in [`VariableSet`] order
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Assignment {
    values: Vec<bool>,
}

impl Assignment {
    pub fn new(values: Vec<bool>) -> Self {
        Assignment { values }
    }

    /// Decode a row index into `width` values, most significant bit first
    pub fn from_index(index: usize, width: usize) -> Self {
        let values = (0..width)
            .map(|position| bit_at(index, width, position))
            .collect();
        Assignment { values }
    }

    /// Row index of this assignment, reading the first value as the MSB
    pub fn index(&self) -> usize {
        self.values
            .iter()
            .fold(0, |acc, &value| (acc << 1) | usize::from(value))
    }

    pub fn values(&self) -> &[bool] {
        &self.values
    }

    pub fn value(&self, position: usize) -> Option<bool> {
        self.values.get(position).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Value of the variable at `position` in row `index` of a `width`-variable table
#[inline]
pub(crate) fn bit_at(index: usize, width: usize, position: usize) -> bool {
    (index >> (width - 1 - position)) & 1 == 1
}

/// A single row of a truth table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTableRow {
    assignment: Assignment,
    output: bool,
}

impl TruthTableRow {
    pub fn assignment(&self) -> &Assignment {
        &self.assignment
    }

    pub fn output(&self) -> bool {
        self.output
    }

    pub fn index(&self) -> usize {
        self.assignment.index()
    }
}

/// Complete truth table of a single-output boolean function
///
/// Stores one output bit per row; rows are materialised on demand by
/// [`TruthTable::rows`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTable {
    variables: VariableSet,
    outputs: Vec<bool>,
}

impl TruthTable {
    /// Build a table by computing the output of every row index in order
    pub(crate) fn from_fn<F>(variables: VariableSet, mut f: F) -> Self
    where
        F: FnMut(usize) -> bool,
    {
        let rows = 1usize << variables.len();
        let outputs: Vec<bool> = (0..rows).map(&mut f).collect();
        debug!(
            "built truth table over [{}]: {} rows, {} minterms",
            variables,
            rows,
            outputs.iter().filter(|&&out| out).count()
        );
        TruthTable { variables, outputs }
    }

    /// Build a table that is 1 exactly on the given minterm indices
    ///
    /// Fails with [`MinimizationError::InconsistentPartition`] if an index is
    /// outside `0..2^n`.
    ///
    /// ```
    /// use bool_solver::{TruthTable, VariableSet};
    ///
    /// let vars = VariableSet::from_chars("AB".chars());
    /// let table = TruthTable::from_minterms(vars, &[1, 2]).unwrap();
    /// assert_eq!(table.maxterms(), vec![0, 3]);
    /// ```
    pub fn from_minterms(
        variables: VariableSet,
        minterms: &[usize],
    ) -> Result<Self, MinimizationError> {
        let rows = 1usize << variables.len();
        let mut outputs = vec![false; rows];
        for &index in minterms {
            match outputs.get_mut(index) {
                Some(slot) => *slot = true,
                None => return Err(MinimizationError::InconsistentPartition { index }),
            }
        }
        Ok(TruthTable { variables, outputs })
    }

    pub fn variables(&self) -> &VariableSet {
        &self.variables
    }

    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    /// Number of rows, always `2^n`
    pub fn len(&self) -> usize {
        self.outputs.len()
    }

    /// Never true: even a zero-variable table has one row
    pub fn is_empty(&self) -> bool {
        self.outputs.is_empty()
    }

    /// Output bits indexed by row
    pub fn outputs(&self) -> &[bool] {
        &self.outputs
    }

    pub fn output(&self, index: usize) -> Option<bool> {
        self.outputs.get(index).copied()
    }

    pub fn row(&self, index: usize) -> Option<TruthTableRow> {
        let output = self.output(index)?;
        Some(TruthTableRow {
            assignment: Assignment::from_index(index, self.num_variables()),
            output,
        })
    }

    /// All rows in increasing index order
    pub fn rows(&self) -> impl Iterator<Item = TruthTableRow> + '_ {
        let width = self.num_variables();
        self.outputs
            .iter()
            .enumerate()
            .map(move |(index, &output)| TruthTableRow {
                assignment: Assignment::from_index(index, width),
                output,
            })
    }

    /// Indices of rows whose output is 1, ascending
    pub fn minterms(&self) -> Vec<usize> {
        self.indices_where(true)
    }

    /// Indices of rows whose output is 0, ascending
    pub fn maxterms(&self) -> Vec<usize> {
        self.indices_where(false)
    }

    fn indices_where(&self, value: bool) -> Vec<usize> {
        self.outputs
            .iter()
            .enumerate()
            .filter(|(_, out)| **out == value)
            .map(|(index, _)| index)
            .collect()
    }
}

/// Plain-text rendering: one column per variable, then the output
///
/// ```text
/// A B | F
/// ----+--
/// 0 0 | 0
/// 0 1 | 1
/// ```
impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.num_variables();
        for name in self.variables.iter() {
            write!(f, "{} ", name)?;
        }
        writeln!(f, "| F")?;
        writeln!(f, "{}+--", "-".repeat(width * 2))?;
        for (index, &output) in self.outputs.iter().enumerate() {
            for position in 0..width {
                write!(f, "{} ", u8::from(bit_at(index, width, position)))?;
            }
            writeln!(f, "| {}", u8::from(output))?;
        }
        Ok(())
    }
}
