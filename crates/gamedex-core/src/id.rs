//! Identifier allocation for newly created games.

use rand::Rng;

/// Produces an identifier for a newly created record.
///
/// The allocator is a seam: a monotonic counter or UUID generator can be
/// swapped in without touching any catalog caller.
pub trait IdAllocator: Send + Sync {
    fn allocate(&self) -> String;
}

/// Allocates a uniformly random integer in `[0, 10000)`, rendered as a
/// decimal string.
///
/// No uniqueness check is made against existing records, so two games can
/// end up sharing an id after enough inserts. Swap in a different
/// [`IdAllocator`] if that matters for your deployment.
pub struct RandomIdAllocator;

impl IdAllocator for RandomIdAllocator {
    fn allocate(&self) -> String {
        rand::thread_rng().gen_range(0..10_000).to_string()
    }
}
