//! Render configuration: canvas geometry, theme and output files.
//!
//! Every value is a literal default; the renderer takes no outside input.

use std::path::PathBuf;

use super::models::{AxisRange, Color, Point, Rect};

/// Pixel canvas and margins around the plot area
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    pub margin_left: f64,
    pub margin_right: f64,
    /// Top margin, holds the title block
    pub margin_top: f64,
    pub margin_bottom: f64,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 800,
            margin_left: 60.0,
            margin_right: 60.0,
            margin_top: 110.0,
            margin_bottom: 50.0,
        }
    }
}

impl Canvas {
    pub fn plot_width(&self) -> f64 {
        f64::from(self.width) - self.margin_left - self.margin_right
    }

    pub fn plot_height(&self) -> f64 {
        f64::from(self.height) - self.margin_top - self.margin_bottom
    }

    /// Projection from the given data ranges onto this canvas
    pub fn projection(&self, x_range: AxisRange, y_range: AxisRange) -> Projection {
        Projection {
            origin_x: self.margin_left,
            origin_y: self.margin_top,
            scale_x: self.plot_width() / x_range.span(),
            scale_y: self.plot_height() / y_range.span(),
            x_range,
            y_range,
        }
    }
}

/// Maps data space (y up) to pixel space (y down)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    origin_x: f64,
    origin_y: f64,
    scale_x: f64,
    scale_y: f64,
    x_range: AxisRange,
    y_range: AxisRange,
}

impl Projection {
    pub fn x(&self, x: f64) -> f64 {
        self.origin_x + (x - self.x_range.min) * self.scale_x
    }

    pub fn y(&self, y: f64) -> f64 {
        self.origin_y + (self.y_range.max - y) * self.scale_y
    }

    pub fn point(&self, point: Point) -> (f64, f64) {
        (self.x(point.x), self.y(point.y))
    }

    /// Pixel `(x, y, width, height)` of a data-space rectangle, top-left anchored
    pub fn rect(&self, rect: Rect) -> (f64, f64, f64, f64) {
        (
            self.x(rect.left()),
            self.y(rect.top()),
            rect.width * self.scale_x,
            rect.height * self.scale_y,
        )
    }
}

/// Colours and fonts
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Phase fill colours, indexed by phase role
    pub palette: [Color; 5],
    /// Page background
    pub paper: Color,
    /// Box outlines and default arrow colour
    pub line: Color,
    /// Text inside phase boxes
    pub label_text: Color,
    /// Title and legend text
    pub text: Color,
    pub font_family: String,
    pub title_font_size: f64,
    /// Opacity applied to phase and swatch fills
    pub fill_opacity: f64,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            palette: [
                Color::rgb(0x1F, 0xB8, 0xCD),
                Color::rgb(0xDB, 0x45, 0x45),
                Color::rgb(0x2E, 0x8B, 0x57),
                Color::rgb(0x5D, 0x87, 0x8F),
                Color::rgb(0xD2, 0xBA, 0x4C),
            ],
            paper: Color::rgb(248, 248, 248),
            line: Color::BLACK,
            label_text: Color::WHITE,
            text: Color::BLACK,
            font_family: "Arial, Helvetica, sans-serif".to_string(),
            title_font_size: 20.0,
            fill_opacity: 0.9,
        }
    }
}

impl Theme {
    /// Palette colour, wrapping around the palette length
    pub fn color(&self, index: usize) -> Color {
        self.palette[index % self.palette.len()]
    }

    /// First family of the font stack, handed to the rasterizer
    pub fn primary_font(&self) -> String {
        self.font_family
            .split(',')
            .map(|s| s.trim().trim_matches('"'))
            .find(|s| !s.is_empty())
            .unwrap_or("Arial")
            .to_string()
    }
}

/// Complete render configuration
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub canvas: Canvas,
    pub theme: Theme,
    /// Vector artifact
    pub svg_path: PathBuf,
    /// Raster artifact
    pub png_path: PathBuf,
    /// Raster scale factor relative to the canvas size
    pub png_scale: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            canvas: Canvas::default(),
            theme: Theme::default(),
            svg_path: PathBuf::from("tournament_bracket.svg"),
            png_path: PathBuf::from("tournament_bracket.png"),
            png_scale: 1.0,
        }
    }
}

impl RenderConfig {
    /// Same configuration with both artifacts placed under `dir`
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        self.svg_path = dir.join(&self.svg_path);
        self.png_path = dir.join(&self.png_path);
        self
    }

    /// Validate configuration before rendering
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first bad setting.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let canvas = &self.canvas;
        if canvas.width == 0 || canvas.height == 0 {
            return Err(ConfigError::Invalid {
                var: "canvas".to_string(),
                reason: format!(
                    "Must have a non-zero size, got {}x{}",
                    canvas.width, canvas.height
                ),
            });
        }

        let margins = [
            canvas.margin_left,
            canvas.margin_right,
            canvas.margin_top,
            canvas.margin_bottom,
        ];
        if margins.iter().any(|m| !m.is_finite() || *m < 0.0) {
            return Err(ConfigError::Invalid {
                var: "canvas.margins".to_string(),
                reason: "Must be finite and non-negative".to_string(),
            });
        }

        if canvas.plot_width() <= 0.0 || canvas.plot_height() <= 0.0 {
            return Err(ConfigError::Invalid {
                var: "canvas.margins".to_string(),
                reason: "Must leave room for the plot area".to_string(),
            });
        }

        if !self.png_scale.is_finite() || self.png_scale <= 0.0 {
            return Err(ConfigError::Invalid {
                var: "png_scale".to_string(),
                reason: format!("Must be a positive number, got {}", self.png_scale),
            });
        }

        if self.theme.title_font_size <= 0.0 {
            return Err(ConfigError::Invalid {
                var: "theme.title_font_size".to_string(),
                reason: "Must be greater than 0".to_string(),
            });
        }

        if !(0.0..=1.0).contains(&self.theme.fill_opacity) {
            return Err(ConfigError::Invalid {
                var: "theme.fill_opacity".to_string(),
                reason: format!("Must be within 0..=1, got {}", self.theme.fill_opacity),
            });
        }

        if self.svg_path == self.png_path {
            return Err(ConfigError::Invalid {
                var: "png_path".to_string(),
                reason: format!(
                    "Must differ from the SVG path ({})",
                    self.svg_path.display()
                ),
            });
        }

        Ok(())
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(RenderConfig::default().validate().is_ok());
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Invalid {
            var: "png_scale".to_string(),
            reason: "Must be a positive number, got 0".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("png_scale"));
        assert!(msg.contains("positive"));
    }

    #[test]
    fn test_config_validation_zero_scale() {
        let config = RenderConfig {
            png_scale: 0.0, // Invalid
            ..RenderConfig::default()
        };

        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { ref var, .. } if var == "png_scale"));
    }

    #[test]
    fn test_config_validation_margins_swallow_plot() {
        let config = RenderConfig {
            canvas: Canvas {
                width: 100,
                margin_left: 60.0,
                margin_right: 60.0, // Invalid: wider than the canvas
                ..Canvas::default()
            },
            ..RenderConfig::default()
        };

        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn test_config_validation_same_output_path() {
        let config = RenderConfig {
            png_path: PathBuf::from("tournament_bracket.svg"),
            ..RenderConfig::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_in_dir_prefixes_both_paths() {
        let config = RenderConfig::default().in_dir("out");
        assert_eq!(config.svg_path, PathBuf::from("out/tournament_bracket.svg"));
        assert_eq!(config.png_path, PathBuf::from("out/tournament_bracket.png"));
    }

    #[test]
    fn test_projection_flips_y_axis() {
        let canvas = Canvas::default();
        let projection =
            canvas.projection(AxisRange::new(-1.0, 20.0), AxisRange::new(1.0, 12.0));

        assert_eq!(projection.x(-1.0), canvas.margin_left);
        assert_eq!(projection.y(12.0), canvas.margin_top);
        assert!((projection.x(20.0) - (1200.0 - canvas.margin_right)).abs() < 1e-9);
        assert!((projection.y(1.0) - (800.0 - canvas.margin_bottom)).abs() < 1e-9);
    }

    #[test]
    fn test_theme_color_wraps() {
        let theme = Theme::default();
        assert_eq!(theme.color(5), theme.color(0));
        assert_eq!(theme.color(1).to_hex(), "#DB4545");
    }

    #[test]
    fn test_primary_font() {
        let theme = Theme::default();
        assert_eq!(theme.primary_font(), "Arial");
    }
}
