//! SVG to PNG rasterization via resvg

use std::sync::Arc;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg;
use tracing::{debug, info};

use crate::error::{CardError, CardResult};

/// A captured card. Exists only for the duration of one export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedCard {
    pub png: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl RenderedCard {
    /// `data:image/png;base64,...`
    pub fn to_data_uri(&self) -> String {
        format!("data:image/png;base64,{}", STANDARD.encode(&self.png))
    }
}

/// Rasterizes card markup.
///
/// Loading system fonts is slow, so the font database is built once and
/// shared; clones are cheap.
#[derive(Clone)]
pub struct Rasterizer {
    fontdb: Arc<usvg::fontdb::Database>,
}

impl Rasterizer {
    /// Rasterizer backed by the system fonts
    pub fn with_system_fonts() -> Self {
        let mut db = usvg::fontdb::Database::new();
        db.load_system_fonts();
        info!("Loaded {} font faces for card rendering", db.len());
        Self { fontdb: Arc::new(db) }
    }

    /// Rasterizer with no fonts. Text is dropped; shapes and images still render.
    pub fn without_fonts() -> Self {
        Self {
            fontdb: Arc::new(usvg::fontdb::Database::new()),
        }
    }

    /// Render `svg` at `scale` and encode it as PNG.
    pub fn rasterize(&self, svg: &str, scale: f32) -> CardResult<RenderedCard> {
        let mut opt = usvg::Options::default();
        opt.fontdb = self.fontdb.clone();

        let tree = usvg::Tree::from_data(svg.as_bytes(), &opt)?;

        let size = tree.size();
        let width = (size.width() * scale).ceil() as u32;
        let height = (size.height() * scale).ceil() as u32;

        let mut pixmap = Pixmap::new(width, height).ok_or(CardError::Pixmap { width, height })?;
        resvg::render(&tree, Transform::from_scale(scale, scale), &mut pixmap.as_mut());

        let png = pixmap
            .encode_png()
            .map_err(|e| CardError::PngEncode(e.to_string()))?;

        debug!("Rasterized card {}x{} ({} bytes)", width, height, png.len());
        Ok(RenderedCard { png, width, height })
    }
}

impl Default for Rasterizer {
    fn default() -> Self {
        Self::with_system_fonts()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

    const RED_SQUARE: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10"><rect width="10" height="10" fill="red"/></svg>"#;

    #[test]
    fn test_rasterize_scales_output() {
        let card = Rasterizer::without_fonts().rasterize(RED_SQUARE, 2.0).unwrap();
        assert_eq!((card.width, card.height), (20, 20));
        assert_eq!(&card.png[..8], &PNG_SIGNATURE);

        let img = image::load_from_memory(&card.png).unwrap().to_rgba8();
        assert_eq!(img.get_pixel(10, 10).0, [255, 0, 0, 255]);
    }

    #[test]
    fn test_invalid_markup_is_svg_error() {
        let err = Rasterizer::without_fonts().rasterize("<svg", 1.0).unwrap_err();
        assert!(matches!(err, CardError::SvgParse(_)));
    }

    #[test]
    fn test_data_uri() {
        let card = RenderedCard {
            png: vec![1, 2, 3],
            width: 1,
            height: 1,
        };
        assert_eq!(card.to_data_uri(), "data:image/png;base64,AQID");
    }
}
