//! Pure decode/resize/encode over image bytes

use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;

use super::errors::ImageError;

/// Decode `bytes`, scale to `width` keeping the aspect ratio, encode as JPEG
///
/// Images narrower than `width` are scaled up, matching what a fixed-width
/// preview column expects.
pub fn resize_to_jpeg(bytes: &[u8], width: u32, quality: u8) -> Result<Vec<u8>, ImageError> {
    if width == 0 {
        return Err(ImageError::Encode("target width must be non-zero".into()));
    }

    let img = image::load_from_memory(bytes).map_err(|e| ImageError::Decode(e.to_string()))?;

    let (src_w, src_h) = (img.width(), img.height());
    if src_w == 0 || src_h == 0 {
        return Err(ImageError::Decode(format!("empty image {src_w}x{src_h}")));
    }

    let height = scaled_height(src_w, src_h, width);
    let resized = img.resize_exact(width, height, FilterType::Lanczos3);

    let mut out = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut out, quality.clamp(1, 100));
    resized
        .to_rgb8()
        .write_with_encoder(encoder)
        .map_err(|e| ImageError::Encode(e.to_string()))?;

    Ok(out)
}

fn scaled_height(src_w: u32, src_h: u32, width: u32) -> u32 {
    let h = (u64::from(src_h) * u64::from(width) + u64::from(src_w) / 2) / u64::from(src_w);
    u32::try_from(h).unwrap_or(u32::MAX).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, RgbImage};
    use std::io::Cursor;

    fn png(width: u32, height: u32) -> Vec<u8> {
        let img = RgbImage::from_pixel(width, height, image::Rgb([200, 40, 90]));
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Png).unwrap();
        out.into_inner()
    }

    #[test]
    fn keeps_aspect_ratio() {
        let jpeg = resize_to_jpeg(&png(600, 400), 300, 80).unwrap();
        let decoded = image::load_from_memory(&jpeg).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (300, 200));
        assert_eq!(image::guess_format(&jpeg).unwrap(), ImageFormat::Jpeg);
    }

    #[test]
    fn very_wide_images_keep_one_row() {
        assert_eq!(scaled_height(10_000, 1, 300), 1);
        assert_eq!(scaled_height(100, 50, 300), 150);
    }

    #[test]
    fn garbage_is_a_decode_error() {
        let err = resize_to_jpeg(b"<html>not an image</html>", 300, 80).unwrap_err();
        assert!(matches!(err, ImageError::Decode(_)));
    }
}
