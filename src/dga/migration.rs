//! Ring migration between islands.

use crate::problem::{best_index, Individual};
use rand::Rng;

/// Whether generation `generation` (0-based) triggers a migration.
pub(crate) fn is_migration_generation(generation: usize, interval: usize) -> bool {
    generation > 0 && interval > 0 && generation % interval == 0
}

/// Copies every island's elite into the next island of the ring.
///
/// Elites are snapshotted before any island is modified. Each migrant
/// overwrites a uniformly chosen member of its destination other than the
/// destination's own elite (lowest index on ties), so no island's best
/// fitness can get worse. With fewer than two islands this is a no-op.
///
/// Returns the number of migrants placed.
pub(crate) fn ring_migrate<R: Rng>(islands: &mut [Vec<Individual>], rng: &mut R) -> usize {
    let count = islands.len();
    if count < 2 {
        return 0;
    }

    let elites: Vec<Individual> = islands
        .iter()
        .map(|island| island[best_index(island)].clone())
        .collect();

    for (k, elite) in elites.into_iter().enumerate() {
        let dest = &mut islands[(k + 1) % count];
        let protected = best_index(dest);
        // uniform over every slot except `protected`
        let mut slot = rng.random_range(0..dest.len() - 1);
        if slot >= protected {
            slot += 1;
        }
        dest[slot] = elite;
    }

    count
}
