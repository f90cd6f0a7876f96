//! Member photo as an embeddable data URI
//!
//! Uploaded files are decoded, turned upright per their EXIF orientation,
//! center-cropped to a square and re-encoded as PNG so the card renderer only
//! ever embeds one format.

use std::io::Cursor;
use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageDecoder, ImageFormat, ImageReader};

use crate::error::{CardError, CardResult};

const PNG_PREFIX: &str = "data:image/png;base64,";

/// Largest side kept after cropping. The card shows the photo at 96px, so
/// anything bigger only bloats the markup.
pub const MAX_PHOTO_SIDE: u32 = 512;

/// Base64 PNG data URI: `data:image/png;base64,...`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoDataUri(String);

impl PhotoDataUri {
    /// Read a photo file from disk and convert it.
    pub fn load(path: impl AsRef<Path>) -> CardResult<Self> {
        let bytes = std::fs::read(path.as_ref())?;
        Self::from_image_bytes(&bytes)
    }

    /// Convert raw PNG/JPEG/WebP bytes.
    pub fn from_image_bytes(bytes: &[u8]) -> CardResult<Self> {
        let format = image::guess_format(bytes)
            .map_err(|_| CardError::PhotoFormat("unrecognized image data".to_string()))?;
        if !matches!(format, ImageFormat::Png | ImageFormat::Jpeg | ImageFormat::WebP) {
            return Err(CardError::PhotoFormat(format!("{:?} is not accepted", format)));
        }

        let mut decoder = ImageReader::with_format(Cursor::new(bytes), format).into_decoder()?;
        let orientation = decoder.orientation()?;
        let mut img = DynamicImage::from_decoder(decoder)?;
        img.apply_orientation(orientation);

        let mut square = crop_to_square(img);
        if square.width() > MAX_PHOTO_SIDE {
            square = square.resize_exact(MAX_PHOTO_SIDE, MAX_PHOTO_SIDE, FilterType::Triangle);
        }

        let mut buffer = Vec::new();
        square.write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)?;

        Ok(Self(format!("{}{}", PNG_PREFIX, STANDARD.encode(&buffer))))
    }

    /// Accept an existing PNG data URI.
    pub fn parse(uri: &str) -> CardResult<Self> {
        let payload = uri
            .strip_prefix(PNG_PREFIX)
            .ok_or_else(|| CardError::PhotoFormat("expected a PNG data URI".to_string()))?;
        STANDARD
            .decode(payload)
            .map_err(|e| CardError::PhotoFormat(e.to_string()))?;
        Ok(Self(uri.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decoded PNG payload
    pub fn png_bytes(&self) -> CardResult<Vec<u8>> {
        let payload = &self.0[PNG_PREFIX.len()..];
        STANDARD
            .decode(payload)
            .map_err(|e| CardError::PhotoFormat(e.to_string()))
    }
}

/// Center-crop to the largest square that fits.
pub fn crop_to_square(img: DynamicImage) -> DynamicImage {
    let (width, height) = img.dimensions();
    let side = width.min(height);

    let x = (width - side) / 2;
    let y = (height - side) / 2;

    img.crop_imm(x, y, side, side)
}
