//! Scene primitives for the bracket diagram.
//!
//! All geometry is expressed in data space: the plot's axis coordinates with
//! y growing upwards. Projection to pixels happens only at render time.

use std::fmt;

use super::config::{ConfigError, Theme};
use super::errors::{BracketError, BracketResult};

/// Point in data space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle anchored at its lower-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y
    }

    pub fn top(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn top_center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.top())
    }

    pub fn bottom_center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.bottom())
    }

    pub fn bottom_left(&self) -> Point {
        Point::new(self.left(), self.bottom())
    }

    pub fn right_middle(&self) -> Point {
        Point::new(self.right(), self.center().y)
    }
}

/// Closed interval on one axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Whether `[lo, hi]` lies entirely inside the range
    pub fn contains_span(&self, lo: f64, hi: f64) -> bool {
        lo >= self.min && hi <= self.max
    }
}

/// Opaque RGB colour; fill transparency is a theme setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Hex form, e.g. `#1FB8CD`
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// One line of label text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelLine {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
}

impl LabelLine {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
            italic: false,
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            bold: true,
            ..Self::plain(text)
        }
    }

    pub fn italic(text: impl Into<String>) -> Self {
        Self {
            italic: true,
            ..Self::plain(text)
        }
    }
}

/// Multi-line text drawn centred inside a phase box
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub lines: Vec<LabelLine>,
    /// Font size in pixels
    pub font_size: f64,
    /// Font family override; the theme's family is used when unset
    pub font_family: Option<String>,
}

impl Label {
    pub fn new(lines: Vec<LabelLine>, font_size: f64) -> Self {
        Self {
            lines,
            font_size,
            font_family: None,
        }
    }

    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    /// Plain text with lines joined by `\n`
    pub fn text(&self) -> String {
        self.line_texts().join("\n")
    }

    pub fn line_texts(&self) -> Vec<&str> {
        self.lines.iter().map(|line| line.text.as_str()).collect()
    }
}

/// What a phase box stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhaseKind {
    Region,
    GroupStage,
    PlayoffRound,
    PrizePool,
}

/// Labelled stage box
#[derive(Debug, Clone, PartialEq)]
pub struct Phase {
    /// Unique name, used to address connectors
    pub name: String,
    pub kind: PhaseKind,
    pub rect: Rect,
    pub fill: Color,
    /// Outline width in pixels
    pub border_width: f64,
    pub label: Label,
}

/// Directed arrow between two phases
#[derive(Debug, Clone, PartialEq)]
pub struct Connector {
    /// Name of the phase the arrow leaves
    pub source: String,
    /// Name of the phase the arrow points at
    pub target: String,
    pub from: Point,
    pub to: Point,
    pub color: Color,
    /// Stroke width in pixels
    pub width: f64,
}

/// Colour swatch with a caption, drawn outside the phase graph
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub swatch: Rect,
    pub color: Color,
    pub text: String,
    /// Font size in pixels
    pub font_size: f64,
}

impl LegendEntry {
    /// Left anchor of the caption text
    pub fn text_anchor(&self) -> Point {
        Point::new(self.swatch.x + 0.8, self.swatch.y + 0.15)
    }
}

/// Complete bracket scene: everything drawn, nothing computed at draw time
#[derive(Debug, Clone, PartialEq)]
pub struct Bracket {
    pub title: String,
    pub subtitle: String,
    /// Declared horizontal data range of the canvas
    pub x_range: AxisRange,
    /// Declared vertical data range of the canvas
    pub y_range: AxisRange,
    pub phases: Vec<Phase>,
    pub connectors: Vec<Connector>,
    pub legend: Vec<LegendEntry>,
}

impl Bracket {
    /// Look up a phase by name
    pub fn phase(&self, name: &str) -> Option<&Phase> {
        self.phases.iter().find(|phase| phase.name == name)
    }

    /// Phases of one kind, in drawing order
    pub fn phases_of(&self, kind: PhaseKind) -> impl Iterator<Item = &Phase> {
        self.phases.iter().filter(move |phase| phase.kind == kind)
    }

    /// Verify that no phase or legend swatch is clipped by the canvas range
    ///
    /// # Errors
    ///
    /// Returns [`BracketError::OutOfBounds`] naming the first offending item.
    pub fn check_bounds(&self) -> BracketResult<()> {
        let boxes = self
            .phases
            .iter()
            .map(|phase| (phase.name.as_str(), phase.rect))
            .chain(
                self.legend
                    .iter()
                    .map(|entry| (entry.text.as_str(), entry.swatch)),
            );

        for (name, rect) in boxes {
            if !self.x_range.contains_span(rect.left(), rect.right())
                || !self.y_range.contains_span(rect.bottom(), rect.top())
            {
                return Err(BracketError::OutOfBounds {
                    name: name.to_string(),
                    x: rect.x,
                    y: rect.y,
                    width: rect.width,
                    height: rect.height,
                });
            }
        }

        Ok(())
    }

    /// Verify that the scene was composed with `theme`'s colours
    ///
    /// Fills and swatches must come from the palette; arrows may also use
    /// the outline colour.
    ///
    /// # Errors
    ///
    /// Returns [`BracketError::Config`] naming the first item painted in a
    /// colour the theme does not define.
    pub fn check_theme(&self, theme: &Theme) -> BracketResult<()> {
        let in_palette = |color: &Color| theme.palette.contains(color);
        let fills = self
            .phases
            .iter()
            .map(|phase| (phase.name.as_str(), phase.fill))
            .chain(
                self.legend
                    .iter()
                    .map(|entry| (entry.text.as_str(), entry.color)),
            );

        for (name, color) in fills {
            if !in_palette(&color) {
                return Err(theme_mismatch("theme.palette", name, color));
            }
        }

        for connector in &self.connectors {
            if connector.color != theme.line && !in_palette(&connector.color) {
                return Err(theme_mismatch(
                    "theme.line",
                    &format!("{} -> {}", connector.source, connector.target),
                    connector.color,
                ));
            }
        }

        Ok(())
    }

    /// Verify that every connector joins two phases present in the scene
    pub fn check_connectors(&self) -> BracketResult<()> {
        for connector in &self.connectors {
            for name in [&connector.source, &connector.target] {
                if self.phase(name).is_none() {
                    return Err(BracketError::UnknownPhase(name.clone()));
                }
            }
        }
        Ok(())
    }
}

fn theme_mismatch(var: &str, name: &str, color: Color) -> BracketError {
    BracketError::Config(ConfigError::Invalid {
        var: var.to_string(),
        reason: format!("'{name}' is drawn in {color}, which the render theme does not define"),
    })
}
