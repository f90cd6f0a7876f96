//! UI Components for the Membership Card Generator.

mod card_form;
mod card_preview;
mod export_actions;
mod photo_upload;

pub use card_form::CardForm;
pub use card_preview::CardPreview;
pub use export_actions::ExportActions;
pub use photo_upload::PhotoUpload;
