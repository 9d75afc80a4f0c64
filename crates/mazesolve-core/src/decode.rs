//! Image decoding.
//!
//! Accepts raw image bytes (PNG, JPEG, BMP, WebP) and produces a decoded
//! image for the grid builder. No filesystem access happens here.

use image::DynamicImage;

use crate::types::SolveError;

/// Decode raw image bytes.
///
/// # Errors
///
/// Returns [`SolveError::EmptyInput`] if `bytes` is empty.
/// Returns [`SolveError::ImageDecode`] if the image format is
/// unrecognized or the data is corrupt.
pub fn decode_image(bytes: &[u8]) -> Result<DynamicImage, SolveError> {
    if bytes.is_empty() {
        return Err(SolveError::EmptyInput);
    }

    Ok(image::load_from_memory(bytes)?)
}
