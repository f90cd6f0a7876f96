//! Card generator configuration
//!
//! Defaults reproduce the Global Ikhwan card. A JSON file can override any
//! subset of fields:
//!
//! ```json
//! { "organization": "Global Ikhwan Sdn Bhd", "scale": 3.0 }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::CardResult;

pub const DEFAULT_ORGANIZATION: &str = "Global Ikhwan Sdn Bhd";
pub const DEFAULT_TAGLINE: &str = "Pasar Ikhwan di Putrajaya, siapakah dia Abuya";
pub const DEFAULT_SHARE_TEXT: &str = "Check out my Global Ikhwan Sdn Bhd membership card!";
pub const DEFAULT_SHARE_BASE_URL: &str = "https://twitter.com/intent/tweet";
pub const DEFAULT_SCALE: f32 = 2.0;

/// Scale is clamped to this range before rasterizing
pub const MIN_SCALE: f32 = 0.25;
pub const MAX_SCALE: f32 = 8.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct CardConfig {
    /// Header printed at the top of the card
    pub organization: String,
    /// Italic quote at the bottom of the card
    pub tagline: String,
    /// Pre-filled post text for the share intent
    pub share_text: String,
    /// Share intent endpoint
    pub share_base_url: String,
    /// Public link appended as `url=` when sharing
    pub share_url: Option<String>,
    /// Where "Save as Image" writes (default: downloads directory)
    pub output_dir: Option<PathBuf>,
    /// Pixel density of the exported PNG
    pub scale: f32,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            organization: DEFAULT_ORGANIZATION.to_string(),
            tagline: DEFAULT_TAGLINE.to_string(),
            share_text: DEFAULT_SHARE_TEXT.to_string(),
            share_base_url: DEFAULT_SHARE_BASE_URL.to_string(),
            share_url: None,
            output_dir: None,
            scale: DEFAULT_SCALE,
        }
    }
}

impl CardConfig {
    /// Load overrides from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> CardResult<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> CardResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Load when a path is given, otherwise defaults.
    pub fn load_or_default(path: Option<&Path>) -> CardResult<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    /// Resolved output directory for saved cards
    pub fn output_dir(&self) -> PathBuf {
        self.output_dir.clone().unwrap_or_else(default_output_dir)
    }

    pub fn clamped_scale(&self) -> f32 {
        if self.scale.is_finite() {
            self.scale.clamp(MIN_SCALE, MAX_SCALE)
        } else {
            DEFAULT_SCALE
        }
    }
}

/// Downloads directory, falling back to home, then the working directory.
pub fn default_output_dir() -> PathBuf {
    dirs::download_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}
