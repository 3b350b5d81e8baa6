//! Test fixtures: generated images and multipart forms.

use axum_test::multipart::{MultipartForm, Part};
use image::{ImageFormat, Rgb, RgbImage};
use std::io::Cursor;

fn encode(format: ImageFormat) -> Vec<u8> {
    let img = RgbImage::from_fn(32, 24, |x, y| Rgb([(x * 8) as u8, (y * 10) as u8, 128]));
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, format).expect("encode fixture");
    buf.into_inner()
}

pub fn create_png() -> Vec<u8> {
    encode(ImageFormat::Png)
}

pub fn create_jpeg() -> Vec<u8> {
    encode(ImageFormat::Jpeg)
}

pub fn corrupt_bytes() -> Vec<u8> {
    b"\xff\xd8\xff\xe0 this is not really a jpeg".to_vec()
}

/// Form with a single file part.
pub fn file_form(field: &str, filename: &str, data: Vec<u8>) -> MultipartForm {
    MultipartForm::new().add_part(
        field,
        Part::bytes(data)
            .file_name(filename)
            .mime_type("application/octet-stream"),
    )
}

/// Form whose part has the right name but no `filename` parameter.
pub fn field_without_filename(field: &str, data: Vec<u8>) -> MultipartForm {
    MultipartForm::new().add_part(field, Part::bytes(data))
}
