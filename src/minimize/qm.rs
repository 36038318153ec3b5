//! Prime implicant generation
//!
//! Tabular Quine-McCluskey: start from the fully specified minterms,
//! repeatedly merge implicants whose popcount groups are adjacent, and keep
//! those that never merge. Instead of scanning every pair across two groups,
//! each implicant looks up its one-bit neighbours in the current round, so
//! only implicants with the same don't-care mask are ever compared.

use std::collections::HashSet;

use log::{debug, trace};

use super::implicant::Implicant;

/// All prime implicants of the function that is 1 exactly on `ones`
///
/// Returned sorted and free of duplicates.
pub(crate) fn prime_implicants(width: usize, ones: &[usize]) -> Vec<Implicant> {
    let mut current: HashSet<Implicant> = ones
        .iter()
        .map(|&index| Implicant::minterm(index, width))
        .collect();
    let mut primes = Vec::new();
    let mut round = 0;

    while !current.is_empty() {
        round += 1;

        let mut next = HashSet::new();
        let mut round_primes = 0;
        for imp in &current {
            let mut merged_any = false;
            for other in imp.neighbours().filter(|n| current.contains(n)) {
                merged_any = true;
                // Each pair is merged once, from its lower popcount group
                if imp.ones() < other.ones() {
                    if let Some(merged) = imp.combine(&other) {
                        trace!("combine {} + {} -> {}", imp, other, merged);
                        next.insert(merged);
                    }
                }
            }
            if !merged_any {
                primes.push(*imp);
                round_primes += 1;
            }
        }

        debug!(
            "round {}: {} implicants, {} merged, {} new primes",
            round,
            current.len(),
            next.len(),
            round_primes
        );
        current = next;
    }

    primes.sort();
    primes
}
