//! Championship data models: qualification, group stage, playoffs and prizes.

use serde::{Deserialize, Serialize};

use super::errors::{TournamentError, TournamentResult};

/// Prize amount in whole US dollars
pub type Amount = i64;

/// Regional qualification phase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Qualification {
    /// Region names, in display order
    pub regions: Vec<String>,
    /// Players entering each regional qualifier
    pub players_per_region: usize,
    /// Players each region sends on to the group stage
    pub qualifiers_per_region: usize,
}

impl Qualification {
    /// Total players leaving qualification, `None` on overflow
    pub fn qualified_players(&self) -> Option<usize> {
        self.regions.len().checked_mul(self.qualifiers_per_region)
    }
}

/// Group stage configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupStage {
    /// Players entering the group stage
    pub total_players: usize,
    /// Number of groups
    pub groups: usize,
    /// Players seated in each group
    pub players_per_group: usize,
    /// Group format name (e.g. "Dual Tournament")
    pub format: String,
    /// Players advancing from each group
    pub advancement: usize,
}

impl GroupStage {
    /// Players the groups can seat, `None` on overflow
    pub fn seated_players(&self) -> Option<usize> {
        self.groups.checked_mul(self.players_per_group)
    }

    /// Total players advancing to the playoffs, `None` on overflow
    pub fn advancing_players(&self) -> Option<usize> {
        self.groups.checked_mul(self.advancement)
    }
}

/// Single-elimination playoff ladder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playoffs {
    /// Players entering the first playoff round
    pub total_players: usize,
    /// Elimination format name
    pub format: String,
    /// Round names, first round first
    pub rounds: Vec<String>,
}

impl Playoffs {
    /// Players contesting each round.
    ///
    /// The opening round holds the full playoff field; every later round is a
    /// power of two ending with 2 players in the last round.
    pub fn round_player_counts(&self) -> Vec<usize> {
        let rounds = self.rounds.len();
        (0..rounds)
            .map(|i| {
                if i == 0 {
                    self.total_players
                } else {
                    1usize
                        .checked_shl((rounds - i) as u32)
                        .unwrap_or(usize::MAX)
                }
            })
            .collect()
    }
}

/// Payout for a contiguous range of finishing places
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrizeTier {
    /// Best place in the tier (1-indexed)
    pub first_place: usize,
    /// Worst place in the tier (inclusive)
    pub last_place: usize,
    /// Amount paid to each place in the tier
    pub amount: Amount,
}

impl PrizeTier {
    /// Create a tier paying `amount` to every place in `first_place..=last_place`
    pub fn new(first_place: usize, last_place: usize, amount: Amount) -> Self {
        Self {
            first_place,
            last_place,
            amount,
        }
    }

    /// Create a tier for a single place
    pub fn single(place: usize, amount: Amount) -> Self {
        Self::new(place, place, amount)
    }

    /// Number of places paid by this tier
    pub fn places(&self) -> usize {
        self.last_place
            .saturating_sub(self.first_place)
            .saturating_add(1)
    }

    /// Total paid out across the tier, `None` on overflow
    pub fn total(&self) -> Option<Amount> {
        Amount::try_from(self.places())
            .ok()?
            .checked_mul(self.amount)
    }

    pub fn contains(&self, place: usize) -> bool {
        (self.first_place..=self.last_place).contains(&place)
    }

    /// Place range as ordinals, e.g. `"9th-16th"` or `"1st"`
    pub fn place_label(&self) -> String {
        if self.first_place == self.last_place {
            ordinal(self.first_place)
        } else {
            format!("{}-{}", ordinal(self.first_place), ordinal(self.last_place))
        }
    }
}

/// Prize pool and its payout tiers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrizePool {
    /// Advertised total pool
    pub total: Amount,
    /// Payout tiers ordered from 1st place downwards
    pub tiers: Vec<PrizeTier>,
}

impl PrizePool {
    /// Sum actually paid out by the tiers, `None` on overflow
    pub fn distributed(&self) -> Option<Amount> {
        self.tiers
            .iter()
            .try_fold(0 as Amount, |sum, tier| sum.checked_add(tier.total()?))
    }

    /// Part of the advertised total not assigned to any place
    pub fn unallocated(&self) -> Option<Amount> {
        self.total.checked_sub(self.distributed()?)
    }

    /// Get payout for a specific finishing place (1-indexed)
    pub fn payout_for_place(&self, place: usize) -> Option<Amount> {
        self.tiers
            .iter()
            .find(|tier| tier.contains(place))
            .map(|tier| tier.amount)
    }

    /// Tier paying every place in `first..=last`, if a single tier does
    pub fn tier_covering(&self, first: usize, last: usize) -> Option<&PrizeTier> {
        self.tiers
            .iter()
            .find(|tier| tier.first_place <= first && tier.last_place >= last)
    }

    /// Tier paying the smallest per-place amount
    pub fn lowest_tier(&self) -> Option<&PrizeTier> {
        self.tiers.iter().min_by_key(|tier| tier.amount)
    }

    /// Number of paid places
    pub fn paid_places(&self) -> usize {
        self.tiers
            .iter()
            .fold(0usize, |sum, tier| sum.saturating_add(tier.places()))
    }
}

/// Full championship structure, from regional qualifiers to the final
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentStructure {
    /// Championship display name
    pub name: String,
    pub qualification: Qualification,
    pub group_stage: GroupStage,
    pub playoffs: Playoffs,
    pub prize_pool: PrizePool,
}

impl TournamentStructure {
    /// The Ninja Clan Wars Championship.
    ///
    /// Three regions of 64 send 16 players each into a 12-group dual
    /// tournament stage; the top two of every group play a five-round
    /// single-elimination ladder for a $1,000,000 pool.
    pub fn championship() -> Self {
        Self {
            name: "Ninja Clan Wars Championship".to_string(),
            qualification: Qualification {
                regions: vec![
                    "Americas".to_string(),
                    "Europe".to_string(),
                    "Asia-Pacific".to_string(),
                ],
                players_per_region: 64,
                qualifiers_per_region: 16,
            },
            group_stage: GroupStage {
                total_players: 48,
                groups: 12,
                players_per_group: 4,
                format: "Dual Tournament".to_string(),
                advancement: 2,
            },
            playoffs: Playoffs {
                total_players: 24,
                format: "Single Elimination".to_string(),
                rounds: vec![
                    "Round of 24".to_string(),
                    "Round of 16".to_string(),
                    "Quarterfinals".to_string(),
                    "Semifinals".to_string(),
                    "Finals".to_string(),
                ],
            },
            prize_pool: PrizePool {
                total: 1_000_000,
                tiers: vec![
                    PrizeTier::single(1, 250_000),
                    PrizeTier::single(2, 150_000),
                    PrizeTier::new(3, 4, 75_000),
                    PrizeTier::new(5, 8, 50_000),
                    PrizeTier::new(9, 16, 25_000),
                ],
            },
        }
    }

    /// Parse a structure from its JSON form
    pub fn from_json(json: &str) -> TournamentResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the structure to pretty-printed JSON
    pub fn to_json(&self) -> TournamentResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that every phase hands the next one exactly the players it expects
    ///
    /// # Errors
    ///
    /// Returns the first inconsistency found, checking phases in
    /// tournament order and the prize pool last.
    pub fn validate(&self) -> TournamentResult<()> {
        let qualification = &self.qualification;
        if qualification.regions.is_empty() {
            return Err(TournamentError::NoRegions);
        }
        if qualification.qualifiers_per_region > qualification.players_per_region {
            return Err(TournamentError::TooManyQualifiers {
                qualifiers: qualification.qualifiers_per_region,
                players: qualification.players_per_region,
            });
        }

        let groups = &self.group_stage;
        let qualified = qualification
            .qualified_players()
            .ok_or(TournamentError::Overflow("qualified players"))?;
        if qualified != groups.total_players {
            return Err(TournamentError::QualifierMismatch {
                qualified,
                expected: groups.total_players,
            });
        }
        let seated = groups
            .seated_players()
            .ok_or(TournamentError::Overflow("group seats"))?;
        if seated != groups.total_players {
            return Err(TournamentError::GroupSizeMismatch {
                groups: groups.groups,
                per_group: groups.players_per_group,
                expected: groups.total_players,
            });
        }
        if groups.advancement > groups.players_per_group {
            return Err(TournamentError::TooManyAdvancing {
                advancing: groups.advancement,
                per_group: groups.players_per_group,
            });
        }

        let playoffs = &self.playoffs;
        let advancing = groups
            .advancing_players()
            .ok_or(TournamentError::Overflow("advancing players"))?;
        if advancing != playoffs.total_players {
            return Err(TournamentError::AdvancementMismatch {
                advancing,
                expected: playoffs.total_players,
            });
        }
        if playoffs.rounds.is_empty() {
            return Err(TournamentError::NoPlayoffRounds);
        }
        let counts = playoffs.round_player_counts();
        let field_fits = match counts.get(1) {
            // Opening round must cut the field down to the next power of two
            Some(&next) => playoffs.total_players > next && playoffs.total_players <= next.saturating_mul(2),
            None => playoffs.total_players == 2,
        };
        if !field_fits {
            return Err(TournamentError::PlayoffFieldMismatch {
                players: playoffs.total_players,
                rounds: playoffs.rounds.len(),
            });
        }

        self.validate_prize_pool()
    }

    fn validate_prize_pool(&self) -> TournamentResult<()> {
        let pool = &self.prize_pool;
        if pool.total < 0 {
            return Err(TournamentError::InvalidAmount(pool.total));
        }

        let mut next_place = 1;
        for tier in &pool.tiers {
            if tier.first_place == 0 || tier.first_place > tier.last_place {
                return Err(TournamentError::InvalidTier {
                    first: tier.first_place,
                    last: tier.last_place,
                });
            }
            if tier.amount < 0 {
                return Err(TournamentError::InvalidAmount(tier.amount));
            }
            if tier.first_place != next_place {
                return Err(TournamentError::TierGap {
                    expected: next_place,
                    found: tier.first_place,
                });
            }
            next_place = tier
                .last_place
                .checked_add(1)
                .ok_or(TournamentError::Overflow("prize places"))?;
        }

        let distributed = pool
            .distributed()
            .ok_or(TournamentError::Overflow("prize payouts"))?;
        if distributed > pool.total {
            return Err(TournamentError::PrizeOverflow {
                distributed,
                total: pool.total,
            });
        }

        Ok(())
    }
}

/// English ordinal for a place, e.g. `1st`, `12th`, `23rd`
pub fn ordinal(place: usize) -> String {
    let suffix = match (place % 10, place % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{place}{suffix}")
}

/// Amount with thousands separators, e.g. `$1,000,000`
pub fn format_amount(amount: Amount) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if amount < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Compact amount for bracket labels.
///
/// Whole thousands below one million render as `$250k`; anything else falls
/// back to [`format_amount`].
pub fn format_amount_short(amount: Amount) -> String {
    if amount > 0 && amount < 1_000_000 && amount % 1_000 == 0 {
        format!("${}k", amount / 1_000)
    } else {
        format_amount(amount)
    }
}
