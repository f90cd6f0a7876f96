//! Form state mirrored into the card preview

use tracing::{debug, warn};

use super::{Branch, PhotoDataUri, Theme};
use crate::error::CardResult;

/// Shown on the card while the name field is empty
pub const NAME_PLACEHOLDER: &str = "Member Name";

/// Shown on the card while no branch is selected
pub const NO_BRANCH_LABEL: &str = "Not selected";

/// Everything the user has entered so far.
///
/// Never persisted; it lives as long as the window (or CLI invocation).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub name: String,
    pub branch: Option<Branch>,
    pub photo: Option<PhotoDataUri>,
    pub theme: Theme,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_branch(&mut self, branch: Branch) {
        self.branch = Some(branch);
    }

    /// Select a branch by its key. Unknown keys leave the selection alone.
    pub fn select_branch(&mut self, key: &str) -> CardResult<()> {
        self.branch = Some(key.parse()?);
        Ok(())
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Select a theme by its key. Unknown keys leave the theme alone.
    pub fn select_theme(&mut self, key: &str) -> CardResult<()> {
        self.theme = key.parse()?;
        Ok(())
    }

    /// Apply the outcome of a photo upload.
    ///
    /// `Ok(None)` is a cancelled picker. Failures are logged and dropped; in
    /// both cases the previous photo stays. Returns whether the photo changed.
    pub fn apply_photo(&mut self, outcome: CardResult<Option<PhotoDataUri>>) -> bool {
        match outcome {
            Ok(Some(photo)) => {
                debug!("Photo updated ({} bytes of data URI)", photo.as_str().len());
                self.photo = Some(photo);
                true
            }
            Ok(None) => false,
            Err(e) => {
                warn!("Ignoring photo upload: {}", e);
                false
            }
        }
    }

    /// Name as printed on the card
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            NAME_PLACEHOLDER
        } else {
            &self.name
        }
    }

    /// Branch as printed on the card
    pub fn branch_label(&self) -> String {
        self.branch
            .map(|b| b.card_label())
            .unwrap_or_else(|| NO_BRANCH_LABEL.to_string())
    }
}
