/// Assignment of shuffled tier entrants to the participant roster.
use crate::constants::SECOND_TIER_SEED_OFFSET;
use crate::rng::Entropy;
use crate::shuffle::shuffle;
use crate::types::{Draw, DrawError, Pick, RaceContext, TierKind, Tiers};

/// Sort the roster ascending, case-insensitively.
///
/// This order is part of the contract: assignment position is determined
/// by the sorted roster, not by the order participants were configured.
pub fn sort_roster(roster: &mut [String]) {
    roster.sort_by_key(|name| name.to_lowercase());
}

/// Build the draw for the upcoming race.
///
/// Both tiers are shuffled deterministically — the top tier seeded with
/// the round number, the remainder with `round + 1` — and the sorted
/// roster is zipped positionally against them: participant i gets the
/// top tier's entrant i as first pick and the remainder tier's entrant i
/// as second pick.
///
/// A tier shorter than the roster is a reported condition
/// ([`DrawError::NotEnoughEntrants`]), not a panic.
pub fn build_draw(roster: &[String], tiers: Tiers, race: RaceContext) -> Result<Draw, DrawError> {
    let needed = roster.len();
    if tiers.top.len() < needed {
        return Err(DrawError::NotEnoughEntrants {
            tier: TierKind::Top,
            available: tiers.top.len(),
            needed,
        });
    }
    if tiers.rest.len() < needed {
        return Err(DrawError::NotEnoughEntrants {
            tier: TierKind::Rest,
            available: tiers.rest.len(),
            needed,
        });
    }

    let mut sorted_roster = roster.to_vec();
    sort_roster(&mut sorted_roster);

    let Tiers { mut top, mut rest } = tiers;
    shuffle(&mut top, &mut Entropy::seeded(race.round));
    shuffle(
        &mut rest,
        &mut Entropy::seeded(race.round + SECOND_TIER_SEED_OFFSET),
    );

    let picks = sorted_roster
        .into_iter()
        .zip(top.into_iter().zip(rest))
        .map(|(participant, (first, second))| Pick {
            participant,
            first,
            second,
        })
        .collect();

    Ok(Draw { race, picks })
}
