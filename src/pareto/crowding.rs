//! Crowding distance.

/// Crowding distance of the members of one front.
///
/// `front` holds indices into `objectives`; the returned vector is aligned
/// with `front`. Distances are only meaningful within a single front and
/// must be recomputed per front.
///
/// # Algorithm (Deb et al., 2002)
///
/// For each objective:
/// 1. Sort the front by that objective (stable)
/// 2. The first and last members get `f64::INFINITY`
/// 3. Interior members add `(next - prev) / (max - min)`; an objective
///    whose range is zero adds nothing
///
/// # Complexity
///
/// O(m * n * log n) where m = number of objectives, n = front size
///
/// # Example
///
/// ```
/// use u_moea::pareto::crowding_distance;
///
/// let objectives = vec![vec![1.0, 5.0], vec![3.0, 3.0], vec![5.0, 1.0]];
/// let distances = crowding_distance(&[0, 1, 2], &objectives);
///
/// assert!(distances[0].is_infinite());
/// assert!(distances[2].is_infinite());
/// assert!((distances[1] - 2.0).abs() < 1e-12);
/// ```
pub fn crowding_distance(front: &[usize], objectives: &[Vec<f64>]) -> Vec<f64> {
    let n = front.len();
    if n <= 2 {
        return vec![f64::INFINITY; n];
    }

    let m = objectives[front[0]].len();
    let mut distances = vec![0.0f64; n];
    let mut order: Vec<usize> = (0..n).collect();

    for obj_idx in 0..m {
        let value = |pos: usize| objectives[front[pos]][obj_idx];

        order.clear();
        order.extend(0..n);
        order.sort_by(|&a, &b| {
            value(a)
                .partial_cmp(&value(b))
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        distances[order[0]] = f64::INFINITY;
        distances[order[n - 1]] = f64::INFINITY;

        let min_val = value(order[0]);
        let max_val = value(order[n - 1]);
        let range = max_val - min_val;
        if range <= 0.0 {
            continue;
        }

        for i in 1..(n - 1) {
            let prev = value(order[i - 1]);
            let next = value(order[i + 1]);
            distances[order[i]] += (next - prev) / range;
        }
    }

    distances
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_front() {
        assert!(crowding_distance(&[], &[vec![1.0]]).is_empty());
    }

    #[test]
    fn test_small_fronts_are_infinite() {
        let objs = vec![vec![1.0, 3.0], vec![3.0, 1.0]];
        assert!(crowding_distance(&[0], &objs)[0].is_infinite());
        assert!(crowding_distance(&[0, 1], &objs).iter().all(|d| d.is_infinite()));
    }

    #[test]
    fn test_uses_global_indices() {
        let objs = vec![
            vec![9.0, 9.0], // not part of the front
            vec![0.0, 4.0],
            vec![1.0, 3.0],
            vec![3.0, 1.0],
            vec![4.0, 0.0],
        ];
        let d = crowding_distance(&[4, 2, 1, 3], &objs);
        assert!(d[0].is_infinite()); // index 4
        assert!(d[2].is_infinite()); // index 1
        // index 2: (3-0)/4 + (4-1)/4 = 1.5
        assert!((d[1] - 1.5).abs() < 1e-12);
        // index 3: (4-1)/4 + (3-0)/4 = 1.5
        assert!((d[3] - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_evenly_spaced() {
        let objs = vec![
            vec![0.0, 4.0],
            vec![1.0, 3.0],
            vec![2.0, 2.0],
            vec![3.0, 1.0],
            vec![4.0, 0.0],
        ];
        let d = crowding_distance(&[0, 1, 2, 3, 4], &objs);
        assert!(d[0].is_infinite());
        assert!(d[4].is_infinite());
        assert!((d[1] - d[2]).abs() < 1e-10);
        assert!((d[2] - d[3]).abs() < 1e-10);
    }

    #[test]
    fn test_zero_range_objective_contributes_nothing() {
        let objs = vec![vec![1.0, 5.0], vec![2.0, 5.0], vec![3.0, 5.0]];
        let d = crowding_distance(&[0, 1, 2], &objs);
        assert!(d[0].is_infinite());
        assert!(d[2].is_infinite());
        assert!((d[1] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_all_identical_points() {
        let objs = vec![vec![2.0, 2.0]; 4];
        let d = crowding_distance(&[0, 1, 2, 3], &objs);
        // stable sort keeps input order, so positions 0 and 3 are the extremes
        assert!(d[0].is_infinite());
        assert!(d[3].is_infinite());
        assert_eq!(d[1], 0.0);
        assert_eq!(d[2], 0.0);
    }

    #[test]
    fn test_boundary_exceeds_interior() {
        let objs = vec![
            vec![0.0, 10.0],
            vec![0.5, 6.0],
            vec![2.0, 5.0],
            vec![6.0, 1.0],
            vec![10.0, 0.0],
        ];
        let d = crowding_distance(&[0, 1, 2, 3, 4], &objs);
        let max_interior = d[1..4].iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        assert!(max_interior.is_finite());
        assert!(d[0] > max_interior && d[4] > max_interior);
    }
}
