//! Card Form - name, cawangan, photo and theme fields

use dioxus::prelude::*;
use membercard_core::{Branch, Theme};

use crate::components::PhotoUpload;
use crate::context::use_card_form;

/// Form fields bound to the shared form state.
///
/// Selects only offer the defined keys; anything else coming back from the
/// webview is logged and ignored.
#[component]
pub fn CardForm() -> Element {
    let mut form = use_card_form();

    let on_branch_change = move |evt: FormEvent| {
        if let Err(e) = form.write().select_branch(&evt.value()) {
            tracing::warn!("Ignoring branch selection: {}", e);
        }
    };

    let on_theme_change = move |evt: FormEvent| {
        if let Err(e) = form.write().select_theme(&evt.value()) {
            tracing::warn!("Ignoring theme selection: {}", e);
        }
    };

    let name = form.read().name.clone();
    let branch = form.read().branch;
    let theme = form.read().theme;

    rsx! {
        div { class: "field",
            label { r#for: "name", "Name" }
            input {
                id: "name",
                class: "input-field",
                placeholder: "Enter your name",
                value: "{name}",
                oninput: move |e| form.write().set_name(e.value()),
            }
        }

        div { class: "field",
            label { r#for: "cawangan", "Cawangan" }
            select {
                id: "cawangan",
                class: "select-field",
                onchange: on_branch_change,
                option {
                    value: "",
                    disabled: true,
                    selected: branch.is_none(),
                    "Select cawangan"
                }
                for option_branch in Branch::all().iter().copied() {
                    option {
                        key: "{option_branch.key()}",
                        value: "{option_branch.key()}",
                        selected: branch == Some(option_branch),
                        "{option_branch.option_label()}"
                    }
                }
            }
        }

        div { class: "field",
            label { "Upload Image" }
            PhotoUpload {}
        }

        div { class: "field",
            label { r#for: "theme", "Theme" }
            select {
                id: "theme",
                class: "select-field",
                onchange: on_theme_change,
                for option_theme in Theme::all().iter().copied() {
                    option {
                        key: "{option_theme.key()}",
                        value: "{option_theme.key()}",
                        selected: theme == option_theme,
                        "{option_theme.label()}"
                    }
                }
            }
        }
    }
}
