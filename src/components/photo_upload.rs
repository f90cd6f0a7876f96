//! Photo Upload Component
//!
//! File picker that turns the chosen image into a square PNG data URI.

use dioxus::prelude::*;
use membercard_core::PhotoDataUri;
use rfd::FileDialog;

use crate::context::use_card_form;

/// Photo picker button.
///
/// Cancelled picks and unreadable files leave the current photo in place;
/// nothing is shown to the user.
#[component]
pub fn PhotoUpload(
    /// Optional button label
    #[props(default = "Choose Image".to_string())]
    label: String,
) -> Element {
    let mut form = use_card_form();
    let mut loading = use_signal(|| false);

    let handle_upload = move |_| {
        loading.set(true);

        spawn(async move {
            // Picker and decode both block, keep them off the UI thread
            let outcome = tokio::task::spawn_blocking(move || {
                FileDialog::new()
                    .add_filter("images", &["png", "jpg", "jpeg", "webp"])
                    .set_title("Select Image")
                    .pick_file()
                    .map(PhotoDataUri::load)
                    .transpose()
            })
            .await;

            match outcome {
                Ok(result) => {
                    form.write().apply_photo(result);
                }
                Err(e) => {
                    tracing::warn!("Photo picker task failed: {:?}", e);
                }
            }
            loading.set(false);
        });
    };

    let has_photo = form.read().photo.is_some();

    rsx! {
        div { class: "photo-upload",
            button {
                class: "btn-secondary",
                onclick: handle_upload,
                disabled: loading(),
                "{label}"
            }
            span { class: "photo-upload__status",
                if has_photo { "Photo selected" } else { "No file chosen" }
            }
        }
    }
}
