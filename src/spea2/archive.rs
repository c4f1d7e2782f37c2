//! Bounded archive maintenance.

use super::types::Individual;
use crate::pareto::DistanceMatrix;

/// Chooses the next archive from a union whose fitness is already assigned.
///
/// Returns positions into `union`:
///
/// 1. every member with fitness below 1, in union order;
/// 2. if that is more than `archive_size`, members are removed one at a
///    time, each time the one whose nearest other surviving member is
///    closest (the earliest on ties), until exactly `archive_size` remain;
/// 3. if it is fewer, the remaining members are appended in ascending
///    fitness (stable) until `archive_size` is reached or the union is
///    exhausted.
pub fn environmental_selection(union: &[Individual], archive_size: usize) -> Vec<usize> {
    let mut archive: Vec<usize> = (0..union.len())
        .filter(|&i| union[i].is_non_dominated())
        .collect();

    if archive.len() > archive_size {
        truncate_archive(union, &mut archive, archive_size);
    } else if archive.len() < archive_size {
        let mut rest: Vec<usize> = (0..union.len())
            .filter(|&i| !union[i].is_non_dominated())
            .collect();
        rest.sort_by(|&a, &b| union[a].fitness.total_cmp(&union[b].fitness));
        let missing = archive_size - archive.len();
        archive.extend(rest.into_iter().take(missing));
    }

    archive
}

/// Removes crowded members from `archive` until `target` remain.
fn truncate_archive(union: &[Individual], archive: &mut Vec<usize>, target: usize) {
    let points: Vec<Vec<f64>> = archive
        .iter()
        .map(|&i| union[i].objectives.clone())
        .collect();
    let distances = DistanceMatrix::from_points(&points);

    // positions into `points` that are still in the archive
    let mut alive: Vec<usize> = (0..points.len()).collect();

    while alive.len() > target {
        let mut victim = 0;
        let mut closest = f64::INFINITY;
        for (slot, &a) in alive.iter().enumerate() {
            let nearest = alive
                .iter()
                .filter(|&&b| b != a)
                .map(|&b| distances.get(a, b))
                .fold(f64::INFINITY, f64::min);
            if nearest < closest {
                closest = nearest;
                victim = slot;
            }
        }
        alive.remove(victim);
    }

    *archive = alive.into_iter().map(|p| archive[p]).collect();
}
