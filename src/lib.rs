mod color;
mod error;
mod header;
mod output;
mod source;
mod unpack;

pub use crate::color::PixelFormat;
pub use crate::error::ConvertError;
pub use crate::header::{Header, HEADER_LEN};
pub use crate::source::{RgbSampler, SourceImage};
pub use crate::unpack::unpack;

use image::RgbImage;
use std::path::Path;
use tracing::{debug, info};

/// Header followed by every pixel of `image` packed as `format`, rows top to
/// bottom and pixels left to right.
pub fn assemble<S: RgbSampler>(image: &S, format: PixelFormat) -> Vec<u8> {
    let (width, height) = (image.width(), image.height());
    let pixel_bytes = width as usize * height as usize * format.bytes_per_pixel();
    let mut buf = Vec::with_capacity(HEADER_LEN + pixel_bytes);

    let header = Header::from_dimensions(width, height);
    header.write_to(&mut buf);
    debug!("Header written for {}x{}", header.width, header.height);

    for y in 0..height {
        for x in 0..width {
            format.encode_into(image.at(x, y), &mut buf);
        }
    }
    buf
}

/// What `image` looks like on the display: every pixel packed as `format`
/// and expanded back to 8 bits per channel.
pub fn quantise<S: RgbSampler>(image: &S, format: PixelFormat) -> RgbImage {
    let mut packed = Vec::with_capacity(format.bytes_per_pixel());
    RgbImage::from_fn(image.width(), image.height(), |x, y| {
        packed.clear();
        format.encode_into(image.at(x, y), &mut packed);
        format.decode_pixel(&packed)
    })
}

/// Decode `file`, pack it as `format` and write the result to `out_file`.
/// When `preview_file` is given the quantised image is also saved there.
pub fn convert(
    format: PixelFormat,
    file: &Path,
    out_file: &Path,
    preview_file: Option<&Path>,
) -> Result<(), ConvertError> {
    let img = SourceImage::open(file)?;
    info!("Opened image {} ({}x{})", file.display(), img.width(), img.height());

    let packed = assemble(&img, format);
    info!("Image packed to {} format, {} bytes", format, packed.len());

    if let Some(preview_path) = preview_file {
        quantise(&img, format)
            .save(preview_path)
            .map_err(ConvertError::SavePreview)?;
        info!("Saved preview image {}", preview_path.display());
    }

    output::write_replacing(out_file, &packed)?;
    info!("Image written. Done");
    Ok(())
}
