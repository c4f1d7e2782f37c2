//! Pairwise dominance.

/// Dominance relation between two objective vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dominance {
    /// Left dominates right.
    Left,
    /// Right dominates left.
    Right,
    /// Neither dominates the other (including equal vectors).
    Neither,
}

/// Returns `true` iff `a` Pareto-dominates `b` (minimization).
///
/// `a` dominates `b` when it is no worse in every objective and strictly
/// better in at least one. The relation is irreflexive, so
/// `dominates(x, x)` is always `false`.
///
/// # Example
///
/// ```
/// use u_moea::pareto::dominates;
///
/// assert!(dominates(&[1.0, 2.0], &[1.0, 3.0]));
/// assert!(!dominates(&[1.0, 3.0], &[2.0, 1.0]));
/// assert!(!dominates(&[1.0, 1.0], &[1.0, 1.0]));
/// ```
pub fn dominates(a: &[f64], b: &[f64]) -> bool {
    debug_assert_eq!(a.len(), b.len(), "objective vectors must have equal length");
    let mut strictly_better = false;
    for (&va, &vb) in a.iter().zip(b.iter()) {
        if va > vb {
            return false;
        }
        if va < vb {
            strictly_better = true;
        }
    }
    strictly_better
}

/// Compares two objective vectors in a single pass.
pub fn dominance_cmp(a: &[f64], b: &[f64]) -> Dominance {
    let mut a_better_in_some = false;
    let mut b_better_in_some = false;

    for (&va, &vb) in a.iter().zip(b.iter()) {
        if va < vb {
            a_better_in_some = true;
        } else if vb < va {
            b_better_in_some = true;
        }
    }

    match (a_better_in_some, b_better_in_some) {
        (true, false) => Dominance::Left,
        (false, true) => Dominance::Right,
        _ => Dominance::Neither,
    }
}

/// Indices of the points not dominated by any other point, in input order.
///
/// Duplicated points are all kept since equal vectors do not dominate
/// each other.
pub fn non_dominated_indices(objectives: &[Vec<f64>]) -> Vec<usize> {
    (0..objectives.len())
        .filter(|&i| {
            !objectives
                .iter()
                .enumerate()
                .any(|(j, other)| j != i && dominates(other, &objectives[i]))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_irreflexive() {
        for v in [vec![0.0], vec![1.0, 2.0], vec![-3.0, 4.0, 5.5]] {
            assert!(!dominates(&v, &v));
            assert_eq!(dominance_cmp(&v, &v), Dominance::Neither);
        }
    }

    #[test]
    fn test_asymmetric() {
        let a = [1.0, 2.0];
        let b = [2.0, 2.0];
        assert!(dominates(&a, &b));
        assert!(!dominates(&b, &a));
        assert_eq!(dominance_cmp(&a, &b), Dominance::Left);
        assert_eq!(dominance_cmp(&b, &a), Dominance::Right);
    }

    #[test]
    fn test_mutually_non_dominating() {
        let a = [1.0, 4.0];
        let b = [4.0, 1.0];
        assert!(!dominates(&a, &b));
        assert!(!dominates(&b, &a));
        assert_eq!(dominance_cmp(&a, &b), Dominance::Neither);
    }

    #[test]
    fn test_transitive_chain() {
        let a = [1.0, 1.0, 1.0];
        let b = [1.0, 2.0, 1.0];
        let c = [2.0, 2.0, 1.0];
        assert!(dominates(&a, &b));
        assert!(dominates(&b, &c));
        assert!(dominates(&a, &c));
    }

    #[test]
    fn test_non_dominated_indices() {
        let objs = vec![
            vec![1.0, 4.0],
            vec![2.0, 2.0],
            vec![4.0, 1.0],
            vec![3.0, 3.0],
            vec![2.0, 2.0],
        ];
        assert_eq!(non_dominated_indices(&objs), vec![0, 1, 2, 4]);
    }

    #[test]
    fn test_non_dominated_indices_empty() {
        assert!(non_dominated_indices(&[]).is_empty());
    }
}
