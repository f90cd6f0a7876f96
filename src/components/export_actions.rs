//! Export Actions - "Save as Image" and "Share to Twitter"
//!
//! Both are fire and forget: no progress, no retry, failures only logged.

use std::borrow::Cow;

use dioxus::prelude::*;
use membercard_core::text::today;
use membercard_core::{CardError, CardResult, RenderedCard};

use crate::context::{use_card_form, use_studio};

#[component]
pub fn ExportActions() -> Element {
    let form = use_card_form();
    let studio = use_studio();
    let share_studio = studio.clone();

    let on_save = move |_: MouseEvent| {
        // Capture the state as it is at the click
        let snapshot = form.read().clone();
        let studio = studio.clone();

        spawn(async move {
            let saved =
                tokio::task::spawn_blocking(move || studio.save_as_image(&snapshot, today())).await;
            match saved {
                Ok(Some(path)) => tracing::info!("Card saved to {}", path.display()),
                Ok(None) => {}
                Err(e) => tracing::warn!("Save task failed: {:?}", e),
            }
        });
    };

    let on_share = move |_: MouseEvent| {
        let snapshot = form.read().clone();
        let studio = share_studio.clone();

        spawn(async move {
            let prepared =
                tokio::task::spawn_blocking(move || studio.prepare_share(&snapshot, today())).await;
            match prepared {
                Ok(package) => {
                    // The link opens even when there is no image to hand over
                    if let Some(card) = &package.card {
                        if let Err(e) = copy_card_to_clipboard(card) {
                            tracing::warn!("Could not copy card to clipboard: {}", e);
                        }
                    }
                    if let Err(e) = open_in_browser(&package.url) {
                        tracing::warn!("Could not open share link: {}", e);
                    }
                }
                Err(e) => tracing::warn!("Share task failed: {:?}", e),
            }
        });
    };

    rsx! {
        div { class: "export-actions",
            button { class: "btn-primary", onclick: on_save,
                span { class: "btn-icon", "⭳" }
                "Save as Image"
            }
            button { class: "btn-primary", onclick: on_share,
                span { class: "btn-icon", "↗" }
                "Share to Twitter"
            }
        }
    }
}

/// Put the card on the clipboard so it can be pasted into the post.
fn copy_card_to_clipboard(card: &RenderedCard) -> CardResult<()> {
    let rgba = image::load_from_memory(&card.png)?.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| CardError::Clipboard(e.to_string()))?;
    clipboard
        .set_image(arboard::ImageData {
            width: width as usize,
            height: height as usize,
            bytes: Cow::Owned(rgba.into_raw()),
        })
        .map_err(|e| CardError::Clipboard(e.to_string()))?;

    tracing::debug!("Copied {}x{} card to clipboard", width, height);
    Ok(())
}

/// Open the share intent in a new browser tab.
fn open_in_browser(url: &str) -> CardResult<()> {
    webbrowser::open(url).map_err(|e| CardError::Browser(e.to_string()))
}
