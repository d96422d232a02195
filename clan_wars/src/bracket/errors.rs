//! Bracket error types.

use std::path::PathBuf;

use thiserror::Error;

use super::config::ConfigError;
use crate::tournament::TournamentError;

/// Bracket building and rendering errors
#[derive(Debug, Error)]
pub enum BracketError {
    /// Tournament structure is inconsistent
    #[error("Invalid tournament structure: {0}")]
    Tournament(#[from] TournamentError),

    #[error("Invalid render configuration: {0}")]
    Config(#[from] ConfigError),

    /// Box would be clipped by the declared canvas range
    #[error("'{name}' at ({x}, {y}) sized {width}x{height} falls outside the canvas")]
    OutOfBounds {
        name: String,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },

    /// Connector references a phase missing from the scene
    #[error("Connector references unknown phase '{0}'")]
    UnknownPhase(String),

    /// Generated SVG could not be parsed back for rasterization
    #[error("SVG error: {0}")]
    Svg(#[from] resvg::usvg::Error),

    #[error("Failed to allocate a {width}x{height} pixmap")]
    PixmapAlloc { width: u32, height: u32 },

    #[error("PNG encoding failed: {0}")]
    PngEncode(String),

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for bracket operations
pub type BracketResult<T> = Result<T, BracketError>;
