use dioxus::prelude::*;
use membercard_core::FormState;

use crate::components::{CardForm, CardPreview, ExportActions};
use crate::context::get_studio;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles, form state and the card studio. There is a
/// single screen: the form, the live preview and the export buttons.
#[component]
pub fn App() -> Element {
    let form: Signal<FormState> = use_signal(FormState::new);

    use_context_provider(|| form);
    use_context_provider(get_studio);

    rsx! {
        style { {GLOBAL_STYLES} }
        main { class: "generator",
            h1 { class: "generator__title", "Membership Card Generator" }
            CardForm {}
            CardPreview {}
            ExportActions {}
        }
    }
}
