use image::{DynamicImage, GrayImage, ImageBuffer, Luma};
use std::io::Cursor;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PreprocessError {
    #[error("Failed to load image: {0}")]
    Load(#[from] image::ImageError),
    #[error("Failed to encode processed image: {0}")]
    Encode(String),
}

/// An image ready to hand to an OCR backend.
#[derive(Debug, Clone)]
pub struct PreparedImage {
    pub png: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Decode raw image bytes (JPEG / PNG / WEBP / …) and return normalized PNG
/// bytes. Dimensions are preserved so recognized boxes map back onto the
/// source photo.
pub fn prepare_for_ocr(data: &[u8]) -> Result<PreparedImage, PreprocessError> {
    let img = image::load_from_memory(data)?;
    let (width, height) = (img.width(), img.height());
    let png = encode_as_png(normalize(img))?;
    Ok(PreparedImage { png, width, height })
}

/// Grayscale + contrast stretch.
fn normalize(img: DynamicImage) -> DynamicImage {
    let gray: GrayImage = img.to_luma8();

    let (min_px, max_px) = gray
        .pixels()
        .fold((255u8, 0u8), |(mn, mx), p| (mn.min(p[0]), mx.max(p[0])));

    if max_px <= min_px {
        // Uniform (or empty) image.
        return DynamicImage::ImageLuma8(gray);
    }

    let range = u32::from(max_px - min_px);
    let stretched: GrayImage = ImageBuffer::from_fn(gray.width(), gray.height(), |x, y| {
        let p = gray.get_pixel(x, y)[0];
        Luma([(u32::from(p - min_px) * 255 / range) as u8])
    });

    DynamicImage::ImageLuma8(stretched)
}

fn encode_as_png(img: DynamicImage) -> Result<Vec<u8>, PreprocessError> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .map_err(|e| PreprocessError::Encode(e.to_string()))?;
    Ok(buf)
}
