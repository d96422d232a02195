//! Tournament structure error types.

use thiserror::Error;

use super::models::Amount;

/// Tournament structure errors
#[derive(Debug, Error)]
pub enum TournamentError {
    /// Qualification lists no regions
    #[error("No qualification regions defined")]
    NoRegions,

    #[error("Regions send {qualifiers} qualifiers but only seat {players} players")]
    TooManyQualifiers { qualifiers: usize, players: usize },

    /// Qualification output does not fill the group stage
    #[error("Qualification produces {qualified} players but the group stage expects {expected}")]
    QualifierMismatch { qualified: usize, expected: usize },

    #[error("{groups} groups of {per_group} cannot seat {expected} players")]
    GroupSizeMismatch {
        groups: usize,
        per_group: usize,
        expected: usize,
    },

    #[error("{advancing} players cannot advance from groups of {per_group}")]
    TooManyAdvancing { advancing: usize, per_group: usize },

    /// Group stage output does not fill the playoffs
    #[error("Group stage advances {advancing} players but the playoffs expect {expected}")]
    AdvancementMismatch { advancing: usize, expected: usize },

    #[error("Playoffs have no rounds")]
    NoPlayoffRounds,

    /// Opening round cannot reduce the field to the next round's size
    #[error("A {rounds}-round single elimination ladder cannot start with {players} players")]
    PlayoffFieldMismatch { players: usize, rounds: usize },

    /// Tier place range is empty or starts at place 0
    #[error("Invalid prize tier: places {first}-{last}")]
    InvalidTier { first: usize, last: usize },

    /// Tiers must cover places contiguously from 1st
    #[error("Prize tiers skip places: expected tier starting at {expected}, found {found}")]
    TierGap { expected: usize, found: usize },

    /// Invalid amount (must not be negative)
    #[error("Invalid amount: {0}")]
    InvalidAmount(Amount),

    #[error("Prize tiers pay out {distributed} but the pool only holds {total}")]
    PrizeOverflow { distributed: Amount, total: Amount },

    /// Counts or payouts too large to compute
    #[error("Arithmetic overflow computing {0}")]
    Overflow(&'static str),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for tournament structure operations
pub type TournamentResult<T> = Result<T, TournamentError>;
