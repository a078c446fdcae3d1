use crate::color::PixelFormat;
use crate::error::ConvertError;
use crate::header::Header;
use image::RgbImage;

/// Rebuild an 8-bit RGB image from a packed stream. Each channel comes back
/// with its quantised low bits set to zero.
pub fn unpack(bytes: &[u8], format: PixelFormat) -> Result<RgbImage, ConvertError> {
    let (header, payload) = Header::parse(bytes)?;
    let bpp = format.bytes_per_pixel();
    let expected = header.pixel_count() * bpp;
    if payload.len() != expected {
        return Err(ConvertError::TruncatedStream {
            expected,
            actual: payload.len(),
        });
    }

    let width = u32::from(header.width);
    let mut image = RgbImage::new(width, u32::from(header.height));
    for (i, chunk) in payload.chunks_exact(bpp).enumerate() {
        let i = i as u32;
        image.put_pixel(i % width, i / width, format.decode_pixel(chunk));
    }
    Ok(image)
}
