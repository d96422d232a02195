//! Championship bracket diagram.
//!
//! This module turns a [`TournamentStructure`](crate::tournament::TournamentStructure)
//! into a fixed visual composition and draws it:
//! - Scene composition with literal data-space coordinates
//! - Bounds and connector checks
//! - SVG rendering
//! - PNG rasterization
//! - Artifact output
//!
//! ## Example
//!
//! ```no_run
//! use clan_wars::bracket::{Bracket, RenderConfig, write_artifacts};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let bracket = Bracket::championship()?;
//!     let artifacts = write_artifacts(&bracket, &RenderConfig::default())?;
//!     println!("Wrote {}", artifacts.svg_path.display());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod errors;
pub mod layout;
pub mod models;
pub mod output;
pub mod raster;
pub mod render;

pub use config::{Canvas, ConfigError, Projection, RenderConfig, Theme};
pub use errors::{BracketError, BracketResult};
pub use models::{
    AxisRange, Bracket, Color, Connector, Label, LabelLine, LegendEntry, Phase, PhaseKind, Point,
    Rect,
};
pub use output::{Artifacts, write_artifacts};
pub use raster::render_png;
pub use render::render_svg;
