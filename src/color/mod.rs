mod rgb332;
mod rgb565;

use crate::error::ConvertError;
use image::Rgb;
use std::fmt;
use std::str::FromStr;

/// Packed pixel layouts understood by small display controllers.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    /// One byte per pixel, RRRGGGBB.
    Rgb332,
    /// Two bytes per pixel, RRRRRGGGGGGBBBBB, big-endian.
    Rgb565,
}

impl PixelFormat {
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            PixelFormat::Rgb332 => 1,
            PixelFormat::Rgb565 => 2,
        }
    }

    /// Quantise `color` and append its packed bytes to `buf`.
    pub fn encode_into(self, color: Rgb<u8>, buf: &mut Vec<u8>) {
        match self {
            PixelFormat::Rgb332 => rgb332::encode(color, buf),
            PixelFormat::Rgb565 => rgb565::encode(color, buf),
        }
    }

    /// Expand one packed pixel back to 8 bits per channel, low bits zeroed.
    /// `bytes` must hold exactly `bytes_per_pixel()` bytes.
    pub(crate) fn decode_pixel(self, bytes: &[u8]) -> Rgb<u8> {
        match self {
            PixelFormat::Rgb332 => rgb332::decode(bytes[0]),
            PixelFormat::Rgb565 => rgb565::decode([bytes[0], bytes[1]]),
        }
    }
}

impl FromStr for PixelFormat {
    type Err = ConvertError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "rgb332" => Ok(PixelFormat::Rgb332),
            "rgb565" => Ok(PixelFormat::Rgb565),
            other => Err(ConvertError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PixelFormat::Rgb332 => f.write_str("rgb332"),
            PixelFormat::Rgb565 => f.write_str("rgb565"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_accepts_exactly_two_tokens() {
        assert_eq!("rgb332".parse::<PixelFormat>().unwrap(), PixelFormat::Rgb332);
        assert_eq!("rgb565".parse::<PixelFormat>().unwrap(), PixelFormat::Rgb565);
        for token in ["foo", "RGB332", "rgb-565", "", " rgb332"] {
            assert!(matches!(
                token.parse::<PixelFormat>(),
                Err(ConvertError::UnknownFormat(t)) if t == token
            ));
        }
    }

    #[test]
    fn unknown_token_message_names_the_choices() {
        let err = "foo".parse::<PixelFormat>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "foo is not a valid converter (should be rgb332 or rgb565)"
        );
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for format in [PixelFormat::Rgb332, PixelFormat::Rgb565] {
            assert_eq!(format.to_string().parse::<PixelFormat>().unwrap(), format);
        }
    }

    #[test]
    fn encoded_width_matches_bytes_per_pixel() {
        for format in [PixelFormat::Rgb332, PixelFormat::Rgb565] {
            let mut buf = Vec::new();
            format.encode_into(Rgb([10, 200, 30]), &mut buf);
            assert_eq!(buf.len(), format.bytes_per_pixel());
        }
    }
}
