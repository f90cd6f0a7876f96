//! Membership Card Generator Core Library
//!
//! Form state, card rendering and export for the Global Ikhwan membership
//! card.
//!
//! ## Overview
//!
//! A member enters a name, picks a cawangan (branch) and a color theme, and
//! optionally uploads a photo. The card is rendered as SVG for the live
//! preview; the same markup is rasterized to PNG when the card is saved or
//! shared.
//!
//! ## Quick Start
//!
//! ```ignore
//! use membercard_core::{text, Branch, CardConfig, CardStudio, FormState, Rasterizer};
//!
//! let studio = CardStudio::new(CardConfig::default(), Rasterizer::with_system_fonts());
//!
//! let mut form = FormState::new();
//! form.set_name("Aminah");
//! form.set_branch(Branch::Putrajaya);
//!
//! if let Some(path) = studio.save_as_image(&form, text::today()) {
//!     println!("Saved {}", path.display());
//! }
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod render;
pub mod studio;
pub mod text;
pub mod types;

// Re-exports
pub use config::CardConfig;
pub use error::{CardError, CardResult};
pub use export::{save_card, ShareIntent, CARD_FILENAME};
pub use render::{render_card_svg, Rasterizer, RenderedCard};
pub use studio::{CardStudio, SharePackage};
pub use types::*;
