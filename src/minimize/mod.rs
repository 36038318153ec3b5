//! Two-level minimization with Quine-McCluskey
//!
//! One call produces both forms of a function:
//!
//! - **SOP** from the minterms: prime implicants of the ON-set, rendered as
//!   product terms joined by `+`.
//! - **POS** from the maxterms: prime implicants of the OFF-set, each
//!   rendered as the sum term that is false exactly on it, joined by `.`.
//!
//! Essential primes are emitted first in term order, then further primes
//! are chosen by the configured [`CoverStrategy`].
//!
//! # Examples
//!
//! ```
//! use bool_solver::{BoolExpr, Minimizable};
//!
//! let expr = BoolExpr::parse("A.B' + A'.B").unwrap();
//! let min = expr.minimize().unwrap();
//! assert_eq!(min.sop().to_string(), "A.B'+A'.B");
//! assert_eq!(min.pos().to_string(), "(A+B).(A'+B')");
//! ```

mod cover;
mod form;
mod implicant;
mod qm;

pub use form::{FormKind, Literal, MinimizedForm};
pub use implicant::Implicant;

use log::debug;

use crate::error::{MinimizationError, SolverError};
use crate::expression::BoolExpr;
use crate::table::{TruthTable, VariableSet};
use crate::SolverConfig;

/// How primes are chosen once the essential ones are taken
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CoverStrategy {
    /// Repeatedly take the prime covering the most uncovered rows, ties to
    /// the smallest term order key
    #[default]
    Greedy,
    /// Search for a cover with the fewest terms, then fewest literals
    ///
    /// Exponential in the size of the cyclic core.
    Exact,
}

/// Both minimal forms of one function
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Minimized {
    sop: MinimizedForm,
    pos: MinimizedForm,
}

impl Minimized {
    /// The sum-of-products form
    pub fn sop(&self) -> &MinimizedForm {
        &self.sop
    }

    /// The product-of-sums form
    pub fn pos(&self) -> &MinimizedForm {
        &self.pos
    }

    pub fn variables(&self) -> &VariableSet {
        self.sop.variables()
    }

    pub fn into_parts(self) -> (MinimizedForm, MinimizedForm) {
        (self.sop, self.pos)
    }
}

/// Minimize a function given as a partition of its rows
///
/// `minterms` and `maxterms` must together list every index in `0..2^n`
/// exactly once, where `n` is the number of variables.
///
/// # Errors
///
/// - [`MinimizationError::EmptyVariableSet`] if `variables` is empty
/// - [`MinimizationError::InconsistentPartition`] naming the first index that
///   is out of range, listed twice, or missing
///
/// # Examples
///
/// ```
/// use bool_solver::{minimize_terms, CoverStrategy, VariableSet};
///
/// let vars = VariableSet::from_chars("ABC".chars());
/// let min = minimize_terms(&vars, &[1, 3, 6, 7], &[0, 2, 4, 5], CoverStrategy::Greedy).unwrap();
/// assert_eq!(min.sop().to_string(), "A.B+A'.C");
/// assert_eq!(min.pos().to_string(), "(A+C).(A'+B)");
/// ```
pub fn minimize_terms(
    variables: &VariableSet,
    minterms: &[usize],
    maxterms: &[usize],
    strategy: CoverStrategy,
) -> Result<Minimized, MinimizationError> {
    let width = variables.len();
    if width == 0 {
        return Err(MinimizationError::EmptyVariableSet);
    }
    check_partition(width, minterms, maxterms)?;

    debug!(
        "minimizing over [{}]: {} minterms, {} maxterms, {:?}",
        variables,
        minterms.len(),
        maxterms.len(),
        strategy
    );

    let sop = minimize_form(FormKind::Sop, variables, minterms, strategy);
    let pos = minimize_form(FormKind::Pos, variables, maxterms, strategy);
    debug!("SOP {} / POS {}", sop, pos);

    Ok(Minimized { sop, pos })
}

fn check_partition(
    width: usize,
    minterms: &[usize],
    maxterms: &[usize],
) -> Result<(), MinimizationError> {
    let rows = 1usize << width;
    let mut seen = vec![false; rows];
    for &index in minterms.iter().chain(maxterms) {
        match seen.get_mut(index) {
            Some(slot) if !*slot => *slot = true,
            _ => return Err(MinimizationError::InconsistentPartition { index }),
        }
    }
    match seen.iter().position(|&listed| !listed) {
        Some(index) => Err(MinimizationError::InconsistentPartition { index }),
        None => Ok(()),
    }
}

/// Minimize one side of the partition. `targets` are the rows the form's
/// implicants must cover: minterms for SOP, maxterms for POS.
fn minimize_form(
    kind: FormKind,
    variables: &VariableSet,
    targets: &[usize],
    strategy: CoverStrategy,
) -> MinimizedForm {
    let width = variables.len();
    let rows = 1usize << width;

    // Nothing to cover: SOP is 0, POS is 1. Everything: SOP is 1, POS is 0.
    if targets.is_empty() {
        return MinimizedForm::constant(kind, variables.clone(), kind == FormKind::Pos);
    }
    if targets.len() == rows {
        return MinimizedForm::constant(kind, variables.clone(), kind == FormKind::Sop);
    }

    let primes = qm::prime_implicants(width, targets);
    let terms = cover::select_cover(&primes, targets, kind.plain_bit(), strategy);
    MinimizedForm::from_terms(kind, variables.clone(), terms)
}

/// Types that can be minimized into SOP and POS forms
///
/// Implemented for [`TruthTable`] and for [`BoolExpr`] (which builds its truth
/// table first). All methods take `&self` and leave the input untouched.
///
/// ```
/// use bool_solver::{parse_and_evaluate, Minimizable};
///
/// let table = parse_and_evaluate("A + A'").unwrap();
/// let min = table.minimize().unwrap();
/// assert_eq!(min.sop().to_string(), "1");
/// assert_eq!(min.pos().to_string(), "1");
/// ```
pub trait Minimizable {
    /// Minimize with the default configuration
    fn minimize(&self) -> Result<Minimized, SolverError> {
        self.minimize_with_config(&SolverConfig::default())
    }

    /// Minimize with a custom configuration
    ///
    /// This is the method implementations must provide.
    fn minimize_with_config(&self, config: &SolverConfig) -> Result<Minimized, SolverError>;

    /// Minimize with the exact cover search
    fn minimize_exact(&self) -> Result<Minimized, SolverError> {
        let config = SolverConfig::default().with_strategy(CoverStrategy::Exact);
        self.minimize_with_config(&config)
    }
}

impl Minimizable for TruthTable {
    fn minimize_with_config(&self, config: &SolverConfig) -> Result<Minimized, SolverError> {
        let minimized = minimize_terms(
            self.variables(),
            &self.minterms(),
            &self.maxterms(),
            config.strategy,
        )?;
        Ok(minimized)
    }
}

impl Minimizable for BoolExpr {
    fn minimize_with_config(&self, config: &SolverConfig) -> Result<Minimized, SolverError> {
        let table = self.truth_table_with_config(config)?;
        table.minimize_with_config(config)
    }
}
