use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::seq::index;
use rand::SeedableRng;

/// Bounds the enumerated result list. When the list already fits (or no
/// bound was requested), it is returned untouched, in enumeration order.
/// Otherwise a uniform sample of exactly `max_results` distinct entries
/// is drawn; the survivors keep their relative enumeration order.
///
/// # Parameters
/// - `results`: The full enumerated result list.
/// - `max_results`: The requested bound, if any.
/// - `seed`: A seed for the sampler. With a fixed seed the drawn sample
///   is reproducible; without one the sampler is seeded from entropy.
///
/// # Returns
/// The bounded result list.
pub(crate) fn sample<T>(results: Vec<T>, max_results: Option<usize>, seed: Option<u64>) -> Vec<T> {
    let Some(max_results) = max_results else {
        return results;
    };
    if results.len() <= max_results {
        return results;
    }

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let keep: HashSet<usize> = index::sample(&mut rng, results.len(), max_results)
        .into_iter()
        .collect();

    results
        .into_iter()
        .enumerate()
        .filter(|(at, _)| keep.contains(at))
        .map(|(_, schedule)| schedule)
        .collect()
}
