//! Export actions: save to disk and share intent
//!
//! Both actions capture the card fresh from the form state at the moment
//! they are invoked. Nothing is cached between exports.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::config::CardConfig;
use crate::error::CardResult;
use crate::render::RenderedCard;

/// Fixed name of the downloaded card
pub const CARD_FILENAME: &str = "membership-card.png";

/// Write `card` as `dir/membership-card.png`, overwriting any previous card.
pub fn save_card(card: &RenderedCard, dir: &Path) -> CardResult<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(CARD_FILENAME);
    std::fs::write(&path, &card.png)?;
    info!("Saved membership card to {}", path.display());
    Ok(path)
}

/// Save a capture if there is one; an empty capture is a silent no-op.
pub fn save_capture(capture: CardResult<RenderedCard>, dir: &Path) -> Option<PathBuf> {
    let card = match capture {
        Ok(card) if !card.png.is_empty() => card,
        Ok(_) => {
            warn!("Card capture produced no image; nothing saved");
            return None;
        }
        Err(e) => {
            warn!("Card capture failed: {}", e);
            return None;
        }
    };

    match save_card(&card, dir) {
        Ok(path) => Some(path),
        Err(e) => {
            warn!("Failed to save card: {}", e);
            None
        }
    }
}

/// Share intent for a social network.
///
/// The card image itself is never put in the URL: data URIs blow past URL
/// length limits. The caller hands the image over out of band (clipboard).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareIntent {
    pub base_url: String,
    pub text: String,
    pub url: Option<String>,
}

impl ShareIntent {
    pub fn from_config(config: &CardConfig) -> Self {
        Self {
            base_url: config.share_base_url.clone(),
            text: config.share_text.clone(),
            url: config.share_url.clone(),
        }
    }

    /// `<base>?text=<encoded>[&url=<encoded>]`
    pub fn to_url(&self) -> String {
        let mut out = format!("{}?text={}", self.base_url, urlencoding::encode(&self.text));
        if let Some(url) = &self.url {
            out.push_str("&url=");
            out.push_str(&urlencoding::encode(url));
        }
        out
    }
}
