//! Renders the Ninja Clan Wars championship bracket.
//!
//! Writes `tournament_bracket.svg` and `tournament_bracket.png` to the
//! working directory and exits. Takes no arguments.

use anyhow::{Context, Result};
use clan_wars::{Bracket, RenderConfig, TournamentStructure, write_artifacts};
use log::info;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_target(false)
        .init();

    let config = RenderConfig::default();
    let bracket = Bracket::from_structure(&TournamentStructure::championship(), &config.theme)
        .context("Failed to compose championship bracket")?;
    info!(
        "Rendering '{}' ({} phases, {} connectors)",
        bracket.title,
        bracket.phases.len(),
        bracket.connectors.len()
    );

    let artifacts = write_artifacts(&bracket, &config).context("Failed to write bracket")?;
    info!(
        "Tournament bracket saved to {} and {}",
        artifacts.svg_path.display(),
        artifacts.png_path.display()
    );

    Ok(())
}
