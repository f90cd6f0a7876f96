//! Error types for the membership card generator

use thiserror::Error;

/// Main error type for card operations
#[derive(Error, Debug)]
pub enum CardError {
    /// Branch key is not one of the defined cawangan
    #[error("Invalid branch: {0}")]
    InvalidBranch(String),

    /// Theme key is not one of the defined themes
    #[error("Invalid theme: {0}")]
    InvalidTheme(String),

    /// Photo bytes could not be decoded as an image
    #[error("Photo decode error: {0}")]
    PhotoDecode(#[from] image::ImageError),

    /// Photo format is not accepted (or the data URI is malformed)
    #[error("Unsupported photo: {0}")]
    PhotoFormat(String),

    /// Card markup could not be parsed for rasterization
    #[error("SVG parse error: {0}")]
    SvgParse(#[from] resvg::usvg::Error),

    /// Pixmap could not be allocated at the requested size
    #[error("Pixmap error: cannot allocate {width}x{height}")]
    Pixmap { width: u32, height: u32 },

    /// Rasterized card could not be encoded as PNG
    #[error("PNG encode error: {0}")]
    PngEncode(String),

    /// Configuration file is malformed
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    /// Clipboard access failed
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// System browser could not be opened
    #[error("Browser error: {0}")]
    Browser(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using CardError
pub type CardResult<T> = Result<T, CardError>;
