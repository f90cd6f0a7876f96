//! Card color themes

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CardError;

/// Background gradient applied to the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    #[default]
    Default,
    Nature,
    Sunset,
    Monochrome,
}

impl Theme {
    pub fn key(&self) -> &'static str {
        match self {
            Theme::Default => "default",
            Theme::Nature => "nature",
            Theme::Sunset => "sunset",
            Theme::Monochrome => "monochrome",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Theme::Default => "Default",
            Theme::Nature => "Nature",
            Theme::Sunset => "Sunset",
            Theme::Monochrome => "Monochrome",
        }
    }

    /// Left-to-right gradient stops as `#rrggbb`
    pub fn gradient(&self) -> (&'static str, &'static str) {
        match self {
            Theme::Default => ("#3b82f6", "#a855f7"),
            Theme::Nature => ("#4ade80", "#3b82f6"),
            Theme::Sunset => ("#f97316", "#ec4899"),
            Theme::Monochrome => ("#374151", "#111827"),
        }
    }

    pub fn all() -> &'static [Theme] {
        &[Theme::Default, Theme::Nature, Theme::Sunset, Theme::Monochrome]
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Theme {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::all()
            .iter()
            .copied()
            .find(|t| t.key() == s)
            .ok_or_else(|| CardError::InvalidTheme(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme() {
        assert_eq!(Theme::default(), Theme::Default);
    }

    #[test]
    fn test_parse() {
        assert_eq!("sunset".parse::<Theme>().unwrap(), Theme::Sunset);
        assert!(matches!(
            "neon".parse::<Theme>(),
            Err(CardError::InvalidTheme(_))
        ));
    }

    #[test]
    fn test_gradients_are_distinct() {
        let mut seen = std::collections::HashSet::new();
        for theme in Theme::all() {
            assert!(seen.insert(theme.gradient()), "duplicate gradient for {}", theme);
        }
    }
}
