//! Card studio: ties form state to rendering and export
//!
//! The studio holds no form state of its own. Every call takes the form as it
//! is right now, so an export can never be stale.

use std::path::PathBuf;

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::config::CardConfig;
use crate::error::CardResult;
use crate::export::{save_capture, ShareIntent};
use crate::render::{render_card_svg, Rasterizer, RenderedCard};
use crate::types::FormState;

/// Everything the share action needs.
///
/// The URL never depends on the capture, so it is always there; `card` is
/// `None` when the capture failed and there is nothing to hand over.
#[derive(Debug, Clone)]
pub struct SharePackage {
    pub url: String,
    pub card: Option<RenderedCard>,
}

impl SharePackage {
    pub fn new(url: String, capture: CardResult<RenderedCard>) -> Self {
        let card = match capture {
            Ok(card) if !card.png.is_empty() => Some(card),
            Ok(_) => None,
            Err(e) => {
                warn!("Card capture failed, sharing without image: {}", e);
                None
            }
        };
        Self { url, card }
    }
}

#[derive(Clone)]
pub struct CardStudio {
    config: CardConfig,
    rasterizer: Rasterizer,
}

impl CardStudio {
    pub fn new(config: CardConfig, rasterizer: Rasterizer) -> Self {
        Self { config, rasterizer }
    }

    pub fn config(&self) -> &CardConfig {
        &self.config
    }

    /// Card markup for the live preview
    pub fn preview(&self, form: &FormState, date: NaiveDate) -> String {
        render_card_svg(form, &self.config, date)
    }

    /// Capture the card exactly as the preview shows it.
    pub fn capture(&self, form: &FormState, date: NaiveDate) -> CardResult<RenderedCard> {
        let svg = self.preview(form, date);
        debug!("Capturing card for theme {}", form.theme);
        self.rasterizer.rasterize(&svg, self.config.clamped_scale())
    }

    /// "Save as Image". `None` when nothing could be captured or written.
    pub fn save_as_image(&self, form: &FormState, date: NaiveDate) -> Option<PathBuf> {
        save_capture(self.capture(form, date), &self.config.output_dir())
    }

    /// Capture the card and build the share intent URL.
    pub fn prepare_share(&self, form: &FormState, date: NaiveDate) -> SharePackage {
        let url = ShareIntent::from_config(&self.config).to_url();
        SharePackage::new(url, self.capture(form, date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CardError;
    use crate::export::CARD_FILENAME;
    use crate::types::Theme;
    use tempfile::TempDir;

    fn studio(dir: &TempDir) -> CardStudio {
        let mut config = CardConfig::default();
        config.output_dir = Some(dir.path().to_path_buf());
        config.scale = 1.0;
        CardStudio::new(config, Rasterizer::without_fonts())
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn test_save_as_image_writes_fixed_file() {
        let dir = TempDir::new().unwrap();
        let path = studio(&dir).save_as_image(&FormState::new(), date()).unwrap();
        assert_eq!(path, dir.path().join(CARD_FILENAME));

        let img = image::open(&path).unwrap();
        assert_eq!((img.width(), img.height()), (448, 232));
    }

    #[test]
    fn test_capture_reflects_current_theme() {
        let dir = TempDir::new().unwrap();
        let studio = studio(&dir);
        let mut form = FormState::new();

        let before = studio.capture(&form, date()).unwrap();
        form.set_theme(Theme::Monochrome);
        let after = studio.capture(&form, date()).unwrap();

        assert_ne!(before.png, after.png);
    }

    #[test]
    fn test_prepare_share_keeps_image_out_of_url() {
        let dir = TempDir::new().unwrap();
        let package = studio(&dir).prepare_share(&FormState::new(), date());
        assert!(!package.url.contains("data%3Aimage"));
        assert!(!package.card.unwrap().png.is_empty());
    }

    #[test]
    fn test_share_url_survives_failed_capture() {
        let dir = TempDir::new().unwrap();
        let studio = studio(&dir);
        let expected = ShareIntent::from_config(studio.config()).to_url();

        let package = SharePackage::new(expected.clone(), Err(CardError::PngEncode("boom".into())));
        assert_eq!(package.url, expected);
        assert!(package.card.is_none());

        let empty = RenderedCard { png: Vec::new(), width: 0, height: 0 };
        assert!(SharePackage::new(expected, Ok(empty)).card.is_none());
    }

    #[test]
    fn test_control_characters_in_name_still_export() {
        let dir = TempDir::new().unwrap();
        let studio = studio(&dir);

        for name in ["Ali\u{1}", "Ali\u{b}", "Ali\u{c}", "Ali\u{fffe}"] {
            let mut form = FormState::new();
            form.set_name(name);

            assert!(studio.capture(&form, date()).is_ok(), "capture failed for {:?}", name);
            let path = studio.save_as_image(&form, date());
            assert_eq!(path, Some(dir.path().join(CARD_FILENAME)), "save failed for {:?}", name);
            assert!(studio.prepare_share(&form, date()).card.is_some());
        }
    }
}
