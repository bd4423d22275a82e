//! Seed derivation for deterministic per-agent randomness.
//!
//! Every random decision in the core (wander direction, patrol point
//! sampling) draws from a [`ChaCha8Rng`] owned by the agent. Seeds are
//! derived from a world seed so a whole simulation replays exactly from a
//! single number, while agents still get independent streams.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Independent random streams that may be derived for one agent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RngStream {
    /// Per-tick decisions (wander direction).
    Behavior = 0,
    /// One-off decisions at spawn (patrol points).
    Spawn = 1,
}

/// Compute a deterministic seed from simulation components.
///
/// # Arguments
///
/// * `world_seed` - Base seed set at world creation (for replay/determinism)
/// * `agent_id` - Agent the stream belongs to
/// * `stream` - Which independent stream of that agent
pub fn compute_seed(world_seed: u64, agent_id: u32, stream: RngStream) -> u64 {
    // Mix all inputs using simple hash combiners
    // These constants are based on SplitMix64 and FxHash multipliers
    let mut hash = world_seed;

    hash ^= (agent_id as u64).wrapping_mul(0x517cc1b727220a95);
    hash ^= (stream as u64 + 1).wrapping_mul(0x9e3779b97f4a7c15);

    // Final avalanche step
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}

/// Seeded generator for one agent stream.
pub fn agent_rng(world_seed: u64, agent_id: u32, stream: RngStream) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(compute_seed(world_seed, agent_id, stream))
}
