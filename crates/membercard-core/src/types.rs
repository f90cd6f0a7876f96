//! Core types for the membership card generator

mod branch;
mod form;
mod photo;
mod theme;

pub use branch::Branch;
pub use form::{FormState, NAME_PLACEHOLDER, NO_BRANCH_LABEL};
pub use photo::{crop_to_square, PhotoDataUri};
pub use theme::Theme;
