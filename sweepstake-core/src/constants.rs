/// How many entrants go into the top tier. Everyone below this position
/// in the points-sorted standings lands in the remainder tier.
pub const TIER_CUTOFF: usize = 10;

/// Seed offset for the remainder tier's shuffle.
///
/// The top tier is shuffled with the upcoming round number as its seed
/// and the remainder tier with `round + SECOND_TIER_SEED_OFFSET`, so the
/// two permutations are never correlated even though both come from the
/// same generator family.
pub const SECOND_TIER_SEED_OFFSET: u32 = 1;
