//! Image decoding - raw upload bytes to an RGB pixel buffer

use crate::error::DecodeError;
use image::{ImageReader, RgbImage};
use std::io::Cursor;

/// Decode `data` as a color image and convert it to 8-bit RGB.
///
/// The format is sniffed from the bytes, not taken from the filename, so a PNG
/// uploaded as `face.jpg` still decodes.
pub fn decode_rgb(data: &[u8]) -> Result<RgbImage, DecodeError> {
    let reader = ImageReader::new(Cursor::new(data))
        .with_guessed_format()
        .map_err(image::ImageError::IoError)?;
    let img = reader.decode()?;

    if img.width() == 0 || img.height() == 0 {
        return Err(DecodeError::ZeroDimensions);
    }

    Ok(img.to_rgb8())
}
