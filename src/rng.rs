use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg64;

/// Deterministic RNG factory for a given (seed, game_id) pair.
///
/// Implementation detail:
/// - Derives a per-game 64-bit seed as `seed ^ game_id`.
/// - Uses PCG 64-bit generator (rand_pcg::Pcg64) for reproducible sequences.
#[inline]
pub fn rng_for_game(seed: u64, game_id: u64) -> Pcg64 {
    Pcg64::seed_from_u64(seed ^ game_id)
}

/// Fresh seed for games started without one, so the run can be replayed.
#[inline]
pub fn fresh_seed() -> u64 {
    rand::thread_rng().gen()
}
