//! Card Preview - live rendering of the membership card

use dioxus::prelude::*;
use membercard_core::text::today;

use crate::context::{use_card_form, use_studio};

/// Live card preview.
///
/// Uses the same markup the export rasterizes. The date is taken fresh on
/// every render.
#[component]
pub fn CardPreview() -> Element {
    let form = use_card_form();
    let studio = use_studio();

    let markup = studio.preview(&form.read(), today());

    rsx! {
        div {
            class: "card-preview",
            dangerous_inner_html: "{markup}",
        }
    }
}
