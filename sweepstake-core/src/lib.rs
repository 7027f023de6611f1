/// sweepstake-core: Deterministic sweepstake draw engine.
///
/// Standings in → filtered, points-sorted, split into two tiers,
/// each tier shuffled with a seed derived from the upcoming round
/// number → one entrant per tier per participant.
/// No IO, no HTTP, no filesystem — a draw is a pure function of the
/// standings, the race context, the roster, and the exclusion list.
///
/// # Quick start
///
/// ```rust
/// use sweepstake_core::{draw, Entrant, RaceContext};
///
/// let standings: Vec<Entrant> = (0..20)
///     .map(|i| Entrant::new("Given", format!("Family{i}"), "Team", (400 - i * 20) as f64))
///     .collect();
/// let race = RaceContext { name: "Monaco Grand Prix".to_string(), round: 8 };
/// let roster: Vec<String> = (0..10).map(|i| format!("Player{i}")).collect();
///
/// let result = draw(standings, race, &roster, &[]).unwrap();
/// assert_eq!(result.picks.len(), 10);
/// for pick in &result.picks {
///     println!("{}: {} / {}", pick.participant, pick.first.family_name, pick.second.family_name);
/// }
/// ```

pub mod assign;
pub mod constants;
pub mod export;
pub mod rng;
pub mod shuffle;
pub mod standings;
pub mod types;

// Re-export primary public API at crate root.
pub use assign::{build_draw, sort_roster};
pub use constants::{SECOND_TIER_SEED_OFFSET, TIER_CUTOFF};
pub use export::format_tsv;
pub use rng::{Entropy, SeededRng};
pub use shuffle::shuffle;
pub use standings::{filter_excluded, sort_by_points, split_tiers};
pub use types::{Draw, DrawError, Entrant, Pick, RaceContext, TierKind, Tiers};

/// Run the whole pipeline for one cycle: filter the exclusion list out,
/// sort by points descending, split at [`TIER_CUTOFF`], shuffle both
/// tiers off the round number, and assign to the sorted roster.
pub fn draw(
    standings: Vec<Entrant>,
    race: RaceContext,
    roster: &[String],
    excluded: &[String],
) -> Result<Draw, DrawError> {
    let mut filtered = filter_excluded(standings, excluded);
    sort_by_points(&mut filtered);
    let tiers = split_tiers(filtered, TIER_CUTOFF);
    build_draw(roster, tiers, race)
}
