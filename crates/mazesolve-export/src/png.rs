//! PNG encoding of rendered mazes.

use image::ImageEncoder;
use image::codecs::png::PngEncoder;
use mazesolve_core::types::RgbaImage;

/// Errors that can occur while encoding an output image.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The encoder rejected the image or failed to write it.
    #[error("failed to encode image: {0}")]
    ImageEncode(#[from] image::ImageError),
}

/// Encode an RGBA image as PNG bytes.
///
/// # Errors
///
/// Returns [`ExportError::ImageEncode`] if encoding fails.
pub fn to_png(image: &RgbaImage) -> Result<Vec<u8>, ExportError> {
    let mut buf = Vec::new();
    let encoder = PngEncoder::new(&mut buf);
    encoder.write_image(
        image.as_raw(),
        image.width(),
        image.height(),
        image::ExtendedColorType::Rgba8,
    )?;
    Ok(buf)
}
