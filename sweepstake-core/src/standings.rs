/// Standings preparation: denylist filter, points sort, tier split.
use crate::types::{Entrant, Tiers};

/// Drop entrants whose family name appears in the exclusion list.
///
/// Matching is exact string equality — a denylist, not a pattern. Order
/// of the survivors is preserved.
pub fn filter_excluded(entrants: Vec<Entrant>, excluded: &[String]) -> Vec<Entrant> {
    entrants
        .into_iter()
        .filter(|e| !excluded.iter().any(|x| x == &e.family_name))
        .collect()
}

/// Stable-sort entrants by points, descending.
///
/// Equal points keep their original relative order, which for standings
/// data means the source's official ranking.
pub fn sort_by_points(entrants: &mut [Entrant]) {
    entrants.sort_by(|a, b| b.points.total_cmp(&a.points));
}

/// Split the sorted list at `cutoff`: the first `cutoff` entries become
/// the top tier, everything after them the remainder tier, both in input
/// order. No length validation happens here — a tier too small for the
/// roster is caught at assignment time.
pub fn split_tiers(mut entrants: Vec<Entrant>, cutoff: usize) -> Tiers {
    let rest = entrants.split_off(cutoff.min(entrants.len()));
    Tiers {
        top: entrants,
        rest,
    }
}
