//! Implicants: partial assignments produced by Quine-McCluskey combination

use std::fmt;

/// A product of literals over `width` variables, stored as a bit pattern
///
/// Bit `width - 1 - position` of `bits` holds the required value of the
/// variable at `position`, unless the same bit is set in `dont_care`. Bits
/// under the don't-care mask are always zero in `bits`, so two implicants
/// covering the same rows compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Implicant {
    width: usize,
    bits: u32,
    dont_care: u32,
}

impl Implicant {
    /// The fully specified implicant matching exactly row `index`
    pub fn minterm(index: usize, width: usize) -> Self {
        Implicant {
            width,
            bits: index as u32,
            dont_care: 0,
        }
    }

    /// Number of variables this implicant ranges over
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    fn shift(&self, position: usize) -> u32 {
        (self.width - 1 - position) as u32
    }

    /// Required value of the variable at `position`, or `None` if unconstrained
    pub fn value(&self, position: usize) -> Option<bool> {
        let bit = 1u32 << self.shift(position);
        if self.dont_care & bit != 0 {
            None
        } else {
            Some(self.bits & bit != 0)
        }
    }

    /// Per-variable view in variable order
    ///
    /// - `Some(false)` - variable must be 0
    /// - `Some(true)` - variable must be 1
    /// - `None` - don't care
    pub fn inputs(&self) -> Vec<Option<bool>> {
        (0..self.width).map(|position| self.value(position)).collect()
    }

    /// Whether row `index` matches this pattern
    #[inline]
    pub fn covers(&self, index: usize) -> bool {
        (index as u32) & !self.dont_care == self.bits
    }

    /// Number of constrained positions
    pub fn literal_count(&self) -> usize {
        self.width - self.dont_care.count_ones() as usize
    }

    /// Number of positions required to be 1; the Quine-McCluskey group
    pub(crate) fn ones(&self) -> u32 {
        self.bits.count_ones()
    }

    /// Implicants with the same don't-care mask that differ from this one in
    /// exactly one defined position
    pub(crate) fn neighbours(&self) -> impl Iterator<Item = Implicant> {
        let Implicant {
            width,
            bits,
            dont_care,
        } = *self;
        (0..width)
            .map(|shift| 1u32 << shift)
            .filter(move |bit| dont_care & bit == 0)
            .map(move |bit| Implicant {
                width,
                bits: bits ^ bit,
                dont_care,
            })
    }

    /// Merge two implicants that differ in exactly one defined position
    pub(crate) fn combine(&self, other: &Implicant) -> Option<Implicant> {
        if self.width != other.width || self.dont_care != other.dont_care {
            return None;
        }
        let diff = self.bits ^ other.bits;
        if diff.count_ones() != 1 {
            return None;
        }
        Some(Implicant {
            width: self.width,
            bits: self.bits & !diff,
            dont_care: self.dont_care | diff,
        })
    }

    /// Ordering key used for tie-breaking and for emitting terms
    ///
    /// Per position: 0 when the variable appears as a plain literal, 1 when
    /// complemented, 2 when absent. `plain` is the bit value that renders as
    /// a plain literal (1 for product terms, 0 for sum terms).
    pub(crate) fn order_key(&self, plain: bool) -> Vec<u8> {
        (0..self.width)
            .map(|position| match self.value(position) {
                Some(value) if value == plain => 0,
                Some(_) => 1,
                None => 2,
            })
            .collect()
    }
}

/// Renders the pattern as `0`, `1` and `-`, most significant variable first
impl fmt::Display for Implicant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self.inputs() {
            let c = match value {
                Some(false) => '0',
                Some(true) => '1',
                None => '-',
            };
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minterm_pattern() {
        let imp = Implicant::minterm(0b101, 3);
        assert_eq!(imp.to_string(), "101");
        assert_eq!(imp.literal_count(), 3);
        assert!(imp.covers(5));
        assert!(!imp.covers(4));
    }

    #[test]
    fn test_combine_adjacent() {
        let a = Implicant::minterm(0b100, 3);
        let b = Implicant::minterm(0b110, 3);
        let merged = a.combine(&b).unwrap();
        assert_eq!(merged.to_string(), "1-0");
        assert_eq!(merged.inputs(), vec![Some(true), None, Some(false)]);
        assert!(merged.covers(4) && merged.covers(6));
        assert!(!merged.covers(5));
    }

    #[test]
    fn test_neighbours_flip_one_defined_bit() {
        let imp = Implicant::minterm(0b100, 3)
            .combine(&Implicant::minterm(0b110, 3))
            .unwrap();
        let mut found: Vec<String> = imp.neighbours().map(|n| n.to_string()).collect();
        found.sort();
        assert_eq!(found, vec!["0-0", "1-1"]);
        assert!(imp.neighbours().all(|n| imp.combine(&n).is_some()));
    }

    #[test]
    fn test_combine_rejects_distance_two_and_mismatched_masks() {
        let a = Implicant::minterm(0b000, 3);
        let b = Implicant::minterm(0b011, 3);
        assert_eq!(a.combine(&b), None);

        let ab = a.combine(&Implicant::minterm(0b001, 3)).unwrap();
        assert_eq!(ab.combine(&Implicant::minterm(0b010, 3)), None);
    }

    #[test]
    fn test_order_key() {
        let merged = Implicant::minterm(0b10, 2)
            .combine(&Implicant::minterm(0b11, 2))
            .unwrap();
        // "1-"
        assert_eq!(merged.order_key(true), vec![0, 2]);
        assert_eq!(merged.order_key(false), vec![1, 2]);
    }
}
