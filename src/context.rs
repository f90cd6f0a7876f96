//! Card context for the Membership Card Generator.
//!
//! Provides the form state and the card studio to all components via
//! use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let mut form = use_card_form();
//! form.write().set_name("Aminah");
//!
//! let studio = use_studio();
//! let markup = studio.preview(&form.read(), today());
//! ```

use dioxus::prelude::*;
use membercard_core::{CardStudio, FormState};

/// Get the card studio configured from the command line.
pub fn get_studio() -> CardStudio {
    crate::get_studio()
}

/// Hook to access the form state from context.
///
/// Returns the signal itself, so writes re-render the preview.
pub fn use_card_form() -> Signal<FormState> {
    use_context::<Signal<FormState>>()
}

/// Hook to access the card studio from context.
pub fn use_studio() -> CardStudio {
    use_context::<CardStudio>()
}
