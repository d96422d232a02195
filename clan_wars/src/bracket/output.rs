//! Writing the bracket artifacts to disk.

use std::fs;
use std::path::{Path, PathBuf};

use super::config::RenderConfig;
use super::errors::{BracketError, BracketResult};
use super::models::Bracket;
use super::raster::render_png;
use super::render::render_svg;

/// Files produced by [`write_artifacts`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifacts {
    pub svg_path: PathBuf,
    pub png_path: PathBuf,
    /// Size of the SVG file in bytes
    pub svg_bytes: usize,
    /// Size of the PNG file in bytes
    pub png_bytes: usize,
}

/// Render the bracket and write the vector and raster artifacts.
///
/// The scene must have been composed with `config.theme`, e.g. through
/// [`Bracket::from_structure`]. It is bounds-checked and colour-checked
/// against that theme before anything touches the disk.
///
/// # Errors
///
/// Returns the first configuration, layout, rendering or I/O failure.
pub fn write_artifacts(bracket: &Bracket, config: &RenderConfig) -> BracketResult<Artifacts> {
    config.validate()?;
    bracket.check_bounds()?;
    bracket.check_connectors()?;
    bracket.check_theme(&config.theme)?;

    let svg = render_svg(bracket, &config.theme, &config.canvas);
    write_file(&config.svg_path, svg.as_bytes())?;
    log::info!("Wrote {} ({} bytes)", config.svg_path.display(), svg.len());

    let png = render_png(&svg, &config.canvas, &config.theme, config.png_scale)?;
    write_file(&config.png_path, &png)?;
    log::info!("Wrote {} ({} bytes)", config.png_path.display(), png.len());

    Ok(Artifacts {
        svg_path: config.svg_path.clone(),
        png_path: config.png_path.clone(),
        svg_bytes: svg.len(),
        png_bytes: png.len(),
    })
}

fn write_file(path: &Path, contents: &[u8]) -> BracketResult<()> {
    fs::write(path, contents).map_err(|source| BracketError::Write {
        path: path.to_path_buf(),
        source,
    })
}
