//! # Clan Wars
//!
//! Championship structure and bracket diagram for the Ninja Clan Wars
//! trading-card game.
//!
//! The crate models the competitive pipeline (regional qualifiers, a group
//! stage, a single-elimination playoff ladder and its prize pool) and renders
//! it as a static diagram in SVG and PNG form. Layout is a fixed composition:
//! every box sits at literal coordinates, only labels are derived from the
//! tournament data.
//!
//! ## Core Modules
//!
//! - [`tournament`]: championship structure, validation and prize tiers
//! - [`bracket`]: scene composition, SVG rendering and rasterization
//!
//! ## Example
//!
//! ```
//! use clan_wars::bracket::{Bracket, PhaseKind};
//!
//! let bracket = Bracket::championship().unwrap();
//! assert_eq!(bracket.connectors.len(), 9);
//! assert_eq!(bracket.phases_of(PhaseKind::PlayoffRound).count(), 5);
//! ```

/// Championship structure and prize pool.
pub mod tournament;
pub use tournament::{TournamentError, TournamentStructure};

/// Bracket scene, rendering and output.
pub mod bracket;
pub use bracket::{Bracket, BracketError, RenderConfig, render_svg, write_artifacts};
