/// Core data model for a sweepstake draw.
///
/// Every type here is immutable after construction within a single
/// derivation cycle: each cycle builds a fresh `Draw` from freshly
/// fetched standings.
use thiserror::Error;

/// A ranked competitor from the standings source.
///
/// `points` is already numeric here: the caller parses the source's
/// textual points field before constructing an `Entrant`, so comparisons
/// are always numeric, never lexicographic.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entrant {
    pub given_name: String,
    pub family_name: String,
    /// Team/constructor affiliation. Kept in the model, not shown in the
    /// assignment table.
    pub team: String,
    pub points: f64,
}

impl Entrant {
    pub fn new(
        given_name: impl Into<String>,
        family_name: impl Into<String>,
        team: impl Into<String>,
        points: f64,
    ) -> Self {
        Entrant {
            given_name: given_name.into(),
            family_name: family_name.into(),
            team: team.into(),
            points,
        }
    }
}

/// The upcoming event. `round` is the sole seed source for the draw, so
/// it must be the source's stable sequential identifier for the event.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RaceContext {
    pub name: String,
    pub round: u32,
}

/// The two disjoint tiers a filtered, score-sorted entrant list is split
/// into: the top `TIER_CUTOFF` entries and the remainder, both in input
/// order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tiers {
    pub top: Vec<Entrant>,
    pub rest: Vec<Entrant>,
}

/// One participant's assignment: an entrant from each tier.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pick {
    pub participant: String,
    /// Entrant drawn from the top tier.
    pub first: Entrant,
    /// Entrant drawn from the remainder tier.
    pub second: Entrant,
}

/// Result of one complete derivation cycle. Never persisted; recomputed
/// whenever the source data changes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Draw {
    pub race: RaceContext,
    /// Rows in roster order (sorted participant names).
    pub picks: Vec<Pick>,
}

/// Which tier failed the roster-length precondition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TierKind {
    Top,
    Rest,
}

impl std::fmt::Display for TierKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TierKind::Top => write!(f, "top"),
            TierKind::Rest => write!(f, "remainder"),
        }
    }
}

/// A failed draw. This is a reported condition, not a panic: the caller
/// surfaces the message and renders no table.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DrawError {
    #[error(
        "not enough entrants to assign to participants \
         ({tier} tier has {available}, roster needs {needed})"
    )]
    NotEnoughEntrants {
        tier: TierKind,
        available: usize,
        needed: usize,
    },
}
