//! Fast non-dominated sorting.

use super::dominance::{dominance_cmp, Dominance};

/// Result of non-dominated sorting.
///
/// Each element of `ranks` corresponds to the Pareto rank of the solution
/// at the same index. Rank 0 is the Pareto front (non-dominated solutions).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NondominatedSortResult {
    /// Pareto rank for each solution (0 = front).
    pub ranks: Vec<usize>,

    /// Indices grouped by front: `fronts[0]` contains rank-0 indices, etc.
    pub fronts: Vec<Vec<usize>>,
}

/// Fast non-dominated sorting.
///
/// Partitions the solutions into fronts of equal Pareto rank. All
/// objectives are **minimized**.
///
/// # Algorithm (Deb et al., 2002)
///
/// 1. For every solution `p`, collect the set `S[p]` of solutions it
///    dominates and the number `n[p]` of solutions dominating it
/// 2. Solutions with `n[p] == 0` form front 0
/// 3. For each member of the current front, decrement `n[q]` for every
///    `q` in `S[p]`; solutions reaching zero join the next front
/// 4. Stop when a front comes out empty
///
/// The output depends only on the input order: within a front, members
/// appear in the order they were discovered.
///
/// # Complexity
///
/// O(m * n²) where m = number of objectives, n = number of solutions
///
/// # Example
///
/// ```
/// use u_moea::pareto::non_dominated_sort;
///
/// let objectives = vec![
///     vec![1.0, 4.0],
///     vec![2.0, 2.0],
///     vec![4.0, 1.0],
///     vec![3.0, 3.0], // dominated by (2, 2)
/// ];
///
/// let result = non_dominated_sort(&objectives);
///
/// assert_eq!(result.fronts, vec![vec![0, 1, 2], vec![3]]);
/// assert_eq!(result.ranks, vec![0, 0, 0, 1]);
/// ```
pub fn non_dominated_sort(objectives: &[Vec<f64>]) -> NondominatedSortResult {
    let n = objectives.len();
    if n == 0 {
        return NondominatedSortResult::default();
    }

    debug_assert!(
        objectives.iter().all(|o| o.len() == objectives[0].len()),
        "all objective vectors must have the same length"
    );

    let mut domination_count = vec![0usize; n];
    let mut dominated_by: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut ranks = vec![0usize; n];
    let mut front_0 = Vec::new();

    for i in 0..n {
        for j in (i + 1)..n {
            match dominance_cmp(&objectives[i], &objectives[j]) {
                Dominance::Left => {
                    dominated_by[i].push(j);
                    domination_count[j] += 1;
                }
                Dominance::Right => {
                    dominated_by[j].push(i);
                    domination_count[i] += 1;
                }
                Dominance::Neither => {}
            }
        }

        // every pair involving i has been visited at this point
        if domination_count[i] == 0 {
            front_0.push(i);
        }
    }

    let mut fronts = vec![front_0];
    loop {
        let current = fronts
            .last()
            .expect("fronts is initialized with front_0; never empty");
        let mut next_front = Vec::new();

        for &i in current {
            for &j in &dominated_by[i] {
                domination_count[j] -= 1;
                if domination_count[j] == 0 {
                    ranks[j] = fronts.len();
                    next_front.push(j);
                }
            }
        }

        if next_front.is_empty() {
            break;
        }
        fronts.push(next_front);
    }

    NondominatedSortResult { ranks, fronts }
}
