//! Prime implicant selection
//!
//! Essential primes are always taken first. The remaining rows are covered
//! either greedily (most newly covered rows, ties to the smallest order key)
//! or by an exhaustive branch-and-bound search.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use log::{debug, trace};

use super::implicant::Implicant;
use super::CoverStrategy;

/// A prime together with its order key and the rows it covers
#[derive(Debug, Clone)]
struct Candidate {
    implicant: Implicant,
    key: Vec<u8>,
    rows: Vec<usize>,
}

/// Choose a subset of `primes` covering every row in `targets`
///
/// `plain` is the bit value rendered as a plain literal; it drives the order
/// key. The result lists essential primes first (sorted by key) followed by
/// the remaining picks in selection order.
pub(crate) fn select_cover(
    primes: &[Implicant],
    targets: &[usize],
    plain: bool,
    strategy: CoverStrategy,
) -> Vec<Implicant> {
    let mut candidates: Vec<Candidate> = primes
        .iter()
        .map(|imp| Candidate {
            implicant: *imp,
            key: imp.order_key(plain),
            rows: targets
                .iter()
                .copied()
                .filter(|&row| imp.covers(row))
                .collect(),
        })
        .collect();
    candidates.sort_by(|a, b| a.key.cmp(&b.key));

    let mut taken = vec![false; candidates.len()];
    for &row in targets {
        let mut covering = candidates
            .iter()
            .enumerate()
            .filter(|(_, c)| c.implicant.covers(row))
            .map(|(i, _)| i);
        if let (Some(only), None) = (covering.next(), covering.next()) {
            taken[only] = true;
        }
    }

    // Candidates are key-sorted, so essentials come out in key order
    let mut selected: Vec<usize> = (0..candidates.len()).filter(|&i| taken[i]).collect();
    let mut uncovered: BTreeSet<usize> = targets.iter().copied().collect();
    for &i in &selected {
        for row in &candidates[i].rows {
            uncovered.remove(row);
        }
    }
    debug!(
        "{} primes, {} essential, {} rows left to cover",
        candidates.len(),
        selected.len(),
        uncovered.len()
    );

    match strategy {
        CoverStrategy::Greedy => {
            greedy(&candidates, &mut taken, &mut uncovered, &mut selected);
        }
        CoverStrategy::Exact => {
            let remaining: Vec<usize> = (0..candidates.len())
                .filter(|&i| !taken[i] && candidates[i].rows.iter().any(|r| uncovered.contains(r)))
                .collect();
            let mut best = None;
            let mut chosen = Vec::new();
            search(&candidates, &remaining, &uncovered, &mut chosen, &mut best);
            if let Some(best) = best {
                selected.extend(best.picks);
            }
        }
    }

    selected
        .into_iter()
        .map(|i| candidates[i].implicant)
        .collect()
}

fn greedy(
    candidates: &[Candidate],
    taken: &mut [bool],
    uncovered: &mut BTreeSet<usize>,
    selected: &mut Vec<usize>,
) {
    while !uncovered.is_empty() {
        // Key order means the first maximum is also the smallest key
        let mut best: Option<(usize, usize)> = None;
        for (i, candidate) in candidates.iter().enumerate() {
            if taken[i] {
                continue;
            }
            let gain = candidate
                .rows
                .iter()
                .filter(|row| uncovered.contains(row))
                .count();
            if gain > 0 && best.map_or(true, |(_, top)| gain > top) {
                best = Some((i, gain));
            }
        }

        let Some((pick, gain)) = best else {
            // Primes always cover every target; nothing left can help
            break;
        };
        debug!(
            "greedy pick {} covering {} new rows",
            candidates[pick].implicant, gain
        );
        taken[pick] = true;
        selected.push(pick);
        for row in &candidates[pick].rows {
            uncovered.remove(row);
        }
    }
}

/// Best complete selection found so far by [`search`]
#[derive(Debug)]
struct Solution {
    picks: Vec<usize>,
    literals: usize,
}

impl Solution {
    /// Fewer terms, then fewer literals, then the smaller key sequence
    fn compare(&self, other: &Solution, candidates: &[Candidate]) -> Ordering {
        self.picks
            .len()
            .cmp(&other.picks.len())
            .then(self.literals.cmp(&other.literals))
            .then_with(|| {
                let lhs = self.picks.iter().map(|&i| &candidates[i].key);
                let rhs = other.picks.iter().map(|&i| &candidates[i].key);
                lhs.cmp(rhs)
            })
    }
}

/// Branch on the candidates covering the lowest uncovered row
fn search(
    candidates: &[Candidate],
    remaining: &[usize],
    uncovered: &BTreeSet<usize>,
    chosen: &mut Vec<usize>,
    best: &mut Option<Solution>,
) {
    let Some(&row) = uncovered.iter().next() else {
        let mut picks = chosen.clone();
        picks.sort_unstable();
        let solution = Solution {
            literals: picks
                .iter()
                .map(|&i| candidates[i].implicant.literal_count())
                .sum(),
            picks,
        };
        let better = best
            .as_ref()
            .map_or(true, |b| solution.compare(b, candidates) == Ordering::Less);
        if better {
            trace!(
                "exact cover: new best with {} terms, {} literals",
                solution.picks.len(),
                solution.literals
            );
            *best = Some(solution);
        }
        return;
    };

    // Any extension adds at least one more term
    if let Some(b) = best {
        if chosen.len() >= b.picks.len() {
            return;
        }
    }

    for &i in remaining {
        if chosen.contains(&i) || !candidates[i].implicant.covers(row) {
            continue;
        }
        let mut rest = uncovered.clone();
        for r in &candidates[i].rows {
            rest.remove(r);
        }
        chosen.push(i);
        search(candidates, remaining, &rest, chosen, best);
        chosen.pop();
    }
}
