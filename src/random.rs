//! Seeded random source shared by every operator of a run.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates the deterministic generator used for a whole run.
///
/// Two generators built from the same seed produce the same stream, so a
/// run that draws in a fixed order is reproducible.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
