//! Seedable random number generation.
//!
//! Every engine owns exactly one generator created here. No process-wide
//! random state is touched after a run starts, so a fixed seed reproduces
//! a run bit for bit.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// The generator type threaded through all engines.
pub type EmoRng = StdRng;

/// Creates a deterministic generator from a 64-bit seed.
pub fn create_rng(seed: u64) -> EmoRng {
    StdRng::seed_from_u64(seed)
}

/// Creates a generator from an optional seed, drawing a fresh seed when
/// `None` is given.
pub(crate) fn rng_from_option(seed: Option<u64>) -> EmoRng {
    match seed {
        Some(seed) => create_rng(seed),
        None => create_rng(rand::random()),
    }
}
