//! Crossover, mutation and deduplication for bit vectors.

use crate::problem::BitVector;
use rand::Rng;
use std::collections::HashMap;

// ============================================================================
// Crossover operators
// ============================================================================

/// Recombination style used when a crossover event fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CrossoverKind {
    /// Each bit comes from either parent with probability 0.5.
    #[default]
    Uniform,

    /// Prefix of the first parent followed by the suffix of the second,
    /// split at a point drawn uniformly from `[1, n - 1]`.
    SinglePoint,
}

/// Uniform crossover: every bit is taken from `parent1` or `parent2`
/// with probability 0.5.
///
/// # Complexity
/// O(n)
///
/// # Panics
/// Panics if parents have different lengths.
pub fn uniform_crossover<R: Rng>(parent1: &[bool], parent2: &[bool], rng: &mut R) -> BitVector {
    assert_eq!(parent1.len(), parent2.len(), "parents must have equal length");
    parent1
        .iter()
        .zip(parent2.iter())
        .map(|(&a, &b)| if rng.random_bool(0.5) { a } else { b })
        .collect()
}

/// Single-point crossover: `parent1[..point] ++ parent2[point..]` with
/// `point` uniform in `[1, n - 1]`.
///
/// Vectors shorter than two bits have no interior split point; a copy of
/// `parent1` is returned.
///
/// # Panics
/// Panics if parents have different lengths.
pub fn single_point_crossover<R: Rng>(
    parent1: &[bool],
    parent2: &[bool],
    rng: &mut R,
) -> BitVector {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    if n < 2 {
        return parent1.to_vec();
    }

    let point = rng.random_range(1..n);
    let mut child = Vec::with_capacity(n);
    child.extend_from_slice(&parent1[..point]);
    child.extend_from_slice(&parent2[point..]);
    child
}

/// Applies `kind` with probability `rate`; otherwise returns a copy of
/// `parent1`.
///
/// A `rate` of 0 never recombines, so the child is always bit-identical to
/// the first parent.
pub fn crossover<R: Rng>(
    kind: CrossoverKind,
    rate: f64,
    parent1: &[bool],
    parent2: &[bool],
    rng: &mut R,
) -> BitVector {
    if rng.random_range(0.0..1.0) < rate {
        match kind {
            CrossoverKind::Uniform => uniform_crossover(parent1, parent2, rng),
            CrossoverKind::SinglePoint => single_point_crossover(parent1, parent2, rng),
        }
    } else {
        parent1.to_vec()
    }
}

// ============================================================================
// Mutation
// ============================================================================

/// Flips each bit independently with probability `rate`.
///
/// # Complexity
/// O(n)
pub fn bit_flip_mutation<R: Rng>(bits: &mut [bool], rate: f64, rng: &mut R) {
    if rate <= 0.0 {
        return;
    }
    for bit in bits.iter_mut() {
        if rng.random_range(0.0..1.0) < rate {
            *bit = !*bit;
        }
    }
}

/// Uniformly random bit vector of length `n`.
pub fn random_bits<R: Rng>(n: usize, rng: &mut R) -> BitVector {
    (0..n).map(|_| rng.random_bool(0.5)).collect()
}

// ============================================================================
// Deduplication
// ============================================================================

/// Positions of first occurrences and of repeated vectors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deduplicated {
    /// Indices of the first occurrence of every distinct vector, in input order.
    pub unique: Vec<usize>,

    /// `(repeat, first)` pairs: every bit-identical repeat, in input order,
    /// with the index of its first occurrence.
    pub duplicates: Vec<(usize, usize)>,
}

/// Splits `vectors` into first occurrences and exact repeats.
///
/// # Complexity
/// O(n * b) expected, where b is the vector length
pub fn deduplicate(vectors: &[BitVector]) -> Deduplicated {
    let mut first_seen: HashMap<&[bool], usize> = HashMap::with_capacity(vectors.len());
    let mut result = Deduplicated::default();
    for (i, bits) in vectors.iter().enumerate() {
        match first_seen.get(bits.as_slice()) {
            Some(&first) => result.duplicates.push((i, first)),
            None => {
                first_seen.insert(bits.as_slice(), i);
                result.unique.push(i);
            }
        }
    }
    result
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn ones(n: usize) -> BitVector {
        vec![true; n]
    }

    fn zeros(n: usize) -> BitVector {
        vec![false; n]
    }

    #[test]
    fn test_uniform_takes_each_bit_from_a_parent() {
        let mut rng = create_rng(42);
        let p1 = vec![true, false, true, false, true, false, true, false];
        let p2 = vec![false, false, true, true, false, true, true, false];
        for _ in 0..100 {
            let child = uniform_crossover(&p1, &p2, &mut rng);
            assert_eq!(child.len(), 8);
            for i in 0..8 {
                assert!(child[i] == p1[i] || child[i] == p2[i]);
            }
        }
    }

    #[test]
    fn test_uniform_mixes_roughly_half() {
        let mut rng = create_rng(7);
        let n = 10_000;
        let child = uniform_crossover(&ones(n), &zeros(n), &mut rng);
        let from_p1 = child.iter().filter(|&&b| b).count();
        assert!(
            (4_500..5_500).contains(&from_p1),
            "expected about half the bits from parent1, got {from_p1}"
        );
    }

    #[test]
    fn test_single_point_is_prefix_plus_suffix() {
        let mut rng = create_rng(42);
        let n = 10;
        for _ in 0..200 {
            let child = single_point_crossover(&ones(n), &zeros(n), &mut rng);
            let point = child.iter().take_while(|&&b| b).count();
            assert!((1..n).contains(&point), "split point {point} out of range");
            assert!(child[point..].iter().all(|&b| !b));
        }
    }

    #[test]
    fn test_single_point_short_vectors() {
        let mut rng = create_rng(42);
        assert_eq!(single_point_crossover(&[true], &[false], &mut rng), vec![true]);
        assert!(single_point_crossover(&[], &[], &mut rng).is_empty());
    }

    #[test]
    fn test_zero_crossover_rate_copies_first_parent() {
        let mut rng = create_rng(3);
        let p1 = vec![true, false, false, true, true];
        let p2 = vec![false, true, true, false, false];
        for kind in [CrossoverKind::Uniform, CrossoverKind::SinglePoint] {
            for _ in 0..100 {
                assert_eq!(crossover(kind, 0.0, &p1, &p2, &mut rng), p1);
            }
        }
    }

    #[test]
    fn test_full_crossover_rate_recombines() {
        let mut rng = create_rng(5);
        let n = 16;
        let recombined = (0..50)
            .map(|_| crossover(CrossoverKind::SinglePoint, 1.0, &ones(n), &zeros(n), &mut rng))
            .all(|child| child != ones(n) && child != zeros(n));
        assert!(recombined);
    }

    #[test]
    fn test_zero_mutation_rate_is_identity() {
        let mut rng = create_rng(11);
        let original = vec![true, false, true, true, false, false];
        let mut bits = original.clone();
        for _ in 0..100 {
            bit_flip_mutation(&mut bits, 0.0, &mut rng);
        }
        assert_eq!(bits, original);
    }

    #[test]
    fn test_full_mutation_rate_flips_everything() {
        let mut rng = create_rng(11);
        let mut bits = vec![true, false, true];
        bit_flip_mutation(&mut bits, 1.0, &mut rng);
        assert_eq!(bits, vec![false, true, false]);
    }

    #[test]
    fn test_mutation_rate_frequency() {
        let mut rng = create_rng(19);
        let mut bits = zeros(20_000);
        bit_flip_mutation(&mut bits, 0.1, &mut rng);
        let flipped = bits.iter().filter(|&&b| b).count();
        assert!((1_700..2_300).contains(&flipped), "flipped {flipped}");
    }

    #[test]
    fn test_deduplicate_keeps_first_occurrence() {
        let vectors = vec![
            vec![true, false],
            vec![false, false],
            vec![true, false],
            vec![false, true],
            vec![false, false],
        ];
        let d = deduplicate(&vectors);
        assert_eq!(d.unique, vec![0, 1, 3]);
        assert_eq!(d.duplicates, vec![(2, 0), (4, 1)]);
    }

    #[test]
    fn test_random_bits_length() {
        let mut rng = create_rng(0);
        assert_eq!(random_bits(37, &mut rng).len(), 37);
    }
}
