use std::path::Path;

use image::{ImageFormat, RgbaImage};
use pngtocss_core::{Color, PixelSource};

use crate::error::FileError;

/// A decoded PNG, normalized to 8-bit straight RGBA.
///
/// Images without an alpha channel come out fully opaque.
pub struct PngImage {
    pixels: RgbaImage,
}

impl PngImage {
    pub fn open(path: &Path) -> Result<Self, FileError> {
        let bytes = std::fs::read(path).map_err(FileError::Open)?;
        Self::from_bytes(&bytes)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, FileError> {
        if !matches!(image::guess_format(bytes), Ok(ImageFormat::Png)) {
            return Err(FileError::NotPng);
        }
        let decoded = image::load_from_memory_with_format(bytes, ImageFormat::Png)?;
        Ok(Self { pixels: decoded.to_rgba8() })
    }
}

impl PixelSource for PngImage {
    fn width(&self) -> u32 {
        self.pixels.width()
    }

    fn height(&self) -> u32 {
        self.pixels.height()
    }

    fn color_at(&self, x: u32, y: u32) -> Color {
        let [r, g, b, a] = self.pixels.get_pixel(x, y).0;
        Color::rgba(r, g, b, a)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::io::Cursor;

    use image::{DynamicImage, RgbImage, Rgb, Rgba};

    use super::*;

    pub(crate) fn encode_png(image: DynamicImage) -> Vec<u8> {
        let mut out = Cursor::new(Vec::new());
        image.write_to(&mut out, ImageFormat::Png).unwrap();
        out.into_inner()
    }

    #[test]
    fn decodes_rgba_png() {
        let img = RgbaImage::from_fn(3, 2, |x, y| Rgba([x as u8 * 10, y as u8, 7, 128]));
        let png = PngImage::from_bytes(&encode_png(DynamicImage::ImageRgba8(img))).unwrap();
        assert_eq!((png.width(), png.height()), (3, 2));
        assert_eq!(png.color_at(2, 1), Color::rgba(20, 1, 7, 128));
    }

    #[test]
    fn rgb_png_is_opaque() {
        let img = RgbImage::from_fn(2, 2, |_, _| Rgb([1, 2, 3]));
        let png = PngImage::from_bytes(&encode_png(DynamicImage::ImageRgb8(img))).unwrap();
        assert_eq!(png.color_at(1, 1), Color::rgb(1, 2, 3));
    }

    #[test]
    fn rejects_non_png_bytes() {
        assert!(matches!(PngImage::from_bytes(b"GIF89a not a png"), Err(FileError::NotPng)));
        assert!(matches!(PngImage::from_bytes(&[]), Err(FileError::NotPng)));
    }

    #[test]
    fn truncated_png_is_a_decode_error() {
        let img = RgbaImage::from_fn(8, 8, |_, _| Rgba([0, 0, 0, 255]));
        let bytes = encode_png(DynamicImage::ImageRgba8(img));
        let err = PngImage::from_bytes(&bytes[..bytes.len() / 2]).err();
        assert!(matches!(err, Some(FileError::Decode(_))));
    }

    #[test]
    fn missing_file_is_an_open_error() {
        let err = PngImage::open(Path::new("/nonexistent/pngtocss/gradient.png")).err();
        assert!(matches!(err, Some(FileError::Open(_))));
    }
}
