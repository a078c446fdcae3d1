//! Decoder adapter: turns an image file into something that can be sampled
//! pixel by pixel as 8-bit RGB.
use crate::error::ConvertError;
use image::{ImageBuffer, ImageReader, Rgb, RgbImage, Rgba};
use std::path::Path;

/// Row-major RGB sampling over a fixed-size image.
pub trait RgbSampler {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    /// Colour at `(x, y)`, valid for `x < width()` and `y < height()`.
    fn at(&self, x: u32, y: u32) -> Rgb<u8>;
}

/// A decoded image held at 16 bits per channel, whatever the file stored.
pub struct SourceImage {
    pixels: ImageBuffer<Rgba<u16>, Vec<u16>>,
}

impl SourceImage {
    pub fn open(path: &Path) -> Result<Self, ConvertError> {
        let reader = ImageReader::open(path)
            .and_then(|reader| reader.with_guessed_format())
            .map_err(ConvertError::OpenImage)?;
        let image = reader.decode().map_err(ConvertError::DecodeImage)?;
        Ok(Self {
            pixels: image.into_rgba16(),
        })
    }
}

impl RgbSampler for SourceImage {
    fn width(&self) -> u32 {
        self.pixels.width()
    }

    fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Channels are premultiplied by alpha at 16 bits, then alpha is dropped
    /// and each channel narrowed to its high byte.
    fn at(&self, x: u32, y: u32) -> Rgb<u8> {
        let Rgba([r, g, b, a]) = *self.pixels.get_pixel(x, y);
        let narrow = |c: u16| ((u32::from(c) * u32::from(a) / 0xFFFF) >> 8) as u8;
        Rgb([narrow(r), narrow(g), narrow(b)])
    }
}

impl RgbSampler for RgbImage {
    fn width(&self) -> u32 {
        self.width()
    }

    fn height(&self) -> u32 {
        self.height()
    }

    fn at(&self, x: u32, y: u32) -> Rgb<u8> {
        *self.get_pixel(x, y)
    }
}
