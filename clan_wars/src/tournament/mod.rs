//! Championship structure for Ninja Clan Wars.
//!
//! This module describes the tournament pipeline the bracket diagram depicts:
//! - Regional qualification
//! - Group stage seating and advancement
//! - Single-elimination playoff rounds
//! - Prize pool tiers and payouts
//!
//! ## Example
//!
//! ```
//! use clan_wars::tournament::TournamentStructure;
//!
//! let structure = TournamentStructure::championship();
//! structure.validate().expect("championship is consistent");
//!
//! assert_eq!(structure.prize_pool.payout_for_place(1), Some(250_000));
//! assert_eq!(structure.playoffs.round_player_counts(), vec![24, 16, 8, 4, 2]);
//! ```

pub mod errors;
pub mod models;

pub use errors::{TournamentError, TournamentResult};
pub use models::{
    Amount, GroupStage, Playoffs, PrizePool, PrizeTier, Qualification, TournamentStructure,
    format_amount, format_amount_short, ordinal,
};
