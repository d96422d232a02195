//! PNG rasterization of rendered SVG.

use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg;

use super::config::{Canvas, Theme};
use super::errors::{BracketError, BracketResult};

/// Rasterize an SVG document to PNG bytes.
///
/// Text is shaped with the system font database; the theme's primary family
/// is used where the document's font stack cannot be matched.
pub fn render_png(svg: &str, canvas: &Canvas, theme: &Theme, scale: f32) -> BracketResult<Vec<u8>> {
    let mut opt = usvg::Options::default();
    opt.font_family = theme.primary_font();
    opt.default_size = usvg::Size::from_wh(canvas.width as f32, canvas.height as f32)
        .ok_or(BracketError::PixmapAlloc {
            width: canvas.width,
            height: canvas.height,
        })?;
    opt.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_str(svg, &opt)?;
    let size = tree.size().to_int_size();
    let width = (size.width() as f32 * scale).ceil() as u32;
    let height = (size.height() as f32 * scale).ceil() as u32;

    let mut pixmap =
        Pixmap::new(width, height).ok_or(BracketError::PixmapAlloc { width, height })?;
    resvg::render(&tree, Transform::from_scale(scale, scale), &mut pixmap.as_mut());
    log::debug!("Rasterized bracket at {}x{}", width, height);

    pixmap
        .encode_png()
        .map_err(|e| BracketError::PngEncode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE: &str = "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"20\" height=\"10\" viewBox=\"0 0 20 10\"><rect width=\"20\" height=\"10\" fill=\"#1FB8CD\"/></svg>";

    fn decode_size(png: &[u8]) -> (u32, u32) {
        let pixmap = Pixmap::decode_png(png).unwrap();
        (pixmap.width(), pixmap.height())
    }

    #[test]
    fn test_render_png_keeps_document_size() {
        let png = render_png(SQUARE, &Canvas::default(), &Theme::default(), 1.0).unwrap();
        assert_eq!(decode_size(&png), (20, 10));
    }

    #[test]
    fn test_render_png_applies_scale() {
        let png = render_png(SQUARE, &Canvas::default(), &Theme::default(), 2.0).unwrap();
        assert_eq!(decode_size(&png), (40, 20));
    }

    #[test]
    fn test_render_png_rejects_malformed_svg() {
        let err = render_png("<svg", &Canvas::default(), &Theme::default(), 1.0).unwrap_err();
        assert!(matches!(err, BracketError::Svg(_)));
    }
}
