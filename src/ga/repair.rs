//! Fixed-cardinality repair for bit-vector chromosomes.

use rand::seq::index;
use rand::Rng;

/// Restores exactly `k` set bits.
///
/// - more than `k` ones: clears `count - k` set positions chosen uniformly
///   without replacement
/// - fewer than `k` ones: sets `k - count` unset positions chosen uniformly
///   without replacement
/// - exactly `k` ones: no-op, and no random numbers are drawn
///
/// Returns the number of bits that were changed. Idempotent.
///
/// # Panics
/// Panics if `k > bits.len()`.
///
/// # Examples
///
/// ```
/// use u_subset::ga::repair_cardinality;
/// use u_subset::random::create_rng;
///
/// let mut bits = vec![true; 9];
/// bits.extend([false; 6]);
/// let changed = repair_cardinality(&mut bits, 7, &mut create_rng(1));
/// assert_eq!(changed, 2);
/// assert_eq!(bits.iter().filter(|&&b| b).count(), 7);
/// ```
pub fn repair_cardinality<R: Rng>(bits: &mut [bool], k: usize, rng: &mut R) -> usize {
    assert!(
        k <= bits.len(),
        "cannot repair to {k} ones in a genome of length {}",
        bits.len()
    );

    let count = bits.iter().filter(|&&b| b).count();
    if count == k {
        return 0;
    }

    // Positions currently holding the over-represented value
    let surplus_value = count > k;
    let candidates: Vec<usize> = (0..bits.len())
        .filter(|&i| bits[i] == surplus_value)
        .collect();
    let changes = count.abs_diff(k);

    for pick in index::sample(rng, candidates.len(), changes) {
        bits[candidates[pick]] = !surplus_value;
    }

    changes
}
