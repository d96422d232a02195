//! SVG rendering of a bracket scene.

use std::fmt::Write as _;

use super::config::{Canvas, Projection, Theme};
use super::models::{Bracket, Color, Label, LabelLine, LegendEntry, Phase};

/// Line height as a multiple of the font size
const LINE_HEIGHT: f64 = 1.25;
/// Offset from a line's centre to its baseline, as a multiple of the font size
const BASELINE_SHIFT: f64 = 0.35;
const TITLE_TOP: f64 = 40.0;
const SUBTITLE_SCALE: f64 = 0.8;

/// Render the bracket as a standalone SVG document.
///
/// Output depends only on its inputs: the same scene, theme and canvas always
/// produce the same bytes.
pub fn render_svg(bracket: &Bracket, theme: &Theme, canvas: &Canvas) -> String {
    let projection = canvas.projection(bracket.x_range, bracket.y_range);
    let mut svg = String::new();

    let _ = write!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">",
        w = canvas.width,
        h = canvas.height,
    );
    let _ = write!(
        svg,
        "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>",
        theme.paper
    );

    svg.push_str("<defs>");
    for color in arrow_colors(bracket) {
        let _ = write!(
            svg,
            "<marker id=\"{}\" viewBox=\"0 0 10 10\" refX=\"9\" refY=\"5\" markerWidth=\"4\" markerHeight=\"4\" orient=\"auto\"><path d=\"M 0 0 L 10 5 L 0 10 z\" fill=\"{}\"/></marker>",
            marker_id(color),
            color
        );
    }
    svg.push_str("</defs>");

    push_title(&mut svg, bracket, theme, canvas);

    for phase in &bracket.phases {
        push_phase(&mut svg, phase, theme, &projection);
    }

    for connector in &bracket.connectors {
        let (x1, y1) = projection.point(connector.from);
        let (x2, y2) = projection.point(connector.to);
        let _ = write!(
            svg,
            "<line x1=\"{x1:.2}\" y1=\"{y1:.2}\" x2=\"{x2:.2}\" y2=\"{y2:.2}\" stroke=\"{}\" stroke-width=\"{:.1}\" marker-end=\"url(#{})\"/>",
            connector.color,
            connector.width,
            marker_id(connector.color)
        );
    }

    for entry in &bracket.legend {
        push_legend_entry(&mut svg, entry, theme, &projection);
    }

    svg.push_str("</svg>");
    svg
}

fn push_title(svg: &mut String, bracket: &Bracket, theme: &Theme, canvas: &Canvas) {
    let center = f64::from(canvas.width) / 2.0;
    let title = LabelLine::bold(bracket.title.as_str());
    let subtitle = LabelLine::italic(bracket.subtitle.as_str());
    let text = TextStyle {
        family: &theme.font_family,
        size: theme.title_font_size,
        fill: theme.text,
    };

    push_line(svg, &title, center, TITLE_TOP, &text);
    push_line(
        svg,
        &subtitle,
        center,
        TITLE_TOP + theme.title_font_size * LINE_HEIGHT,
        &TextStyle {
            size: theme.title_font_size * SUBTITLE_SCALE,
            ..text
        },
    );
}

fn push_phase(svg: &mut String, phase: &Phase, theme: &Theme, projection: &Projection) {
    let (x, y, w, h) = projection.rect(phase.rect);
    let _ = write!(
        svg,
        "<rect x=\"{x:.2}\" y=\"{y:.2}\" width=\"{w:.2}\" height=\"{h:.2}\" fill=\"{}\" fill-opacity=\"{}\" stroke=\"{}\" stroke-width=\"{:.1}\"/>",
        phase.fill, theme.fill_opacity, theme.line, phase.border_width
    );

    let (cx, cy) = projection.point(phase.rect.center());
    push_label(svg, &phase.label, cx, cy, theme);
}

/// Centre a multi-line label on `(cx, cy)`, one `<text>` per line
fn push_label(svg: &mut String, label: &Label, cx: f64, cy: f64, theme: &Theme) {
    let text = TextStyle {
        family: label.font_family.as_deref().unwrap_or(&theme.font_family),
        size: label.font_size,
        fill: theme.label_text,
    };
    let line_height = label.font_size * LINE_HEIGHT;
    let first_offset = -(label.lines.len().saturating_sub(1) as f64) * line_height / 2.0;

    for (i, line) in label.lines.iter().enumerate() {
        let baseline = cy + first_offset + i as f64 * line_height + label.font_size * BASELINE_SHIFT;
        push_line(svg, line, cx, baseline, &text);
    }
}

/// Font settings shared by the lines of one text block
#[derive(Clone, Copy)]
struct TextStyle<'a> {
    family: &'a str,
    size: f64,
    fill: Color,
}

/// One horizontally centred `<text>` with its baseline at `y`
fn push_line(svg: &mut String, line: &LabelLine, x: f64, y: f64, text: &TextStyle<'_>) {
    let weight = if line.bold { " font-weight=\"bold\"" } else { "" };
    let style = if line.italic { " font-style=\"italic\"" } else { "" };
    let _ = write!(
        svg,
        "<text x=\"{x:.2}\" y=\"{y:.2}\" text-anchor=\"middle\" font-family=\"{}\" font-size=\"{}\"{weight}{style} fill=\"{}\">{}</text>",
        escape_xml(text.family),
        text.size,
        text.fill,
        escape_xml(&line.text)
    );
}

fn push_legend_entry(svg: &mut String, entry: &LegendEntry, theme: &Theme, projection: &Projection) {
    let (x, y, w, h) = projection.rect(entry.swatch);
    let _ = write!(
        svg,
        "<rect x=\"{x:.2}\" y=\"{y:.2}\" width=\"{w:.2}\" height=\"{h:.2}\" fill=\"{}\" fill-opacity=\"{}\" stroke=\"{}\" stroke-width=\"1\"/>",
        entry.color, theme.fill_opacity, theme.line
    );

    let (tx, ty) = projection.point(entry.text_anchor());
    let _ = write!(
        svg,
        "<text x=\"{tx:.2}\" y=\"{:.2}\" font-family=\"{}\" font-size=\"{}\" fill=\"{}\">{}</text>",
        ty + entry.font_size * BASELINE_SHIFT,
        escape_xml(&theme.font_family),
        entry.font_size,
        theme.text,
        escape_xml(&entry.text)
    );
}

/// Distinct connector colours in first-use order
fn arrow_colors(bracket: &Bracket) -> Vec<Color> {
    let mut colors: Vec<Color> = Vec::new();
    for connector in &bracket.connectors {
        if !colors.contains(&connector.color) {
            colors.push(connector.color);
        }
    }
    colors
}

fn marker_id(color: Color) -> String {
    format!("arrow-{:02x}{:02x}{:02x}", color.r, color.g, color.b)
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
