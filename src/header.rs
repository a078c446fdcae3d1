use crate::error::ConvertError;
use tracing::warn;

pub const HEADER_LEN: usize = 4;

/// Image dimensions as stored at the front of a packed stream: little-endian
/// u16 width, then height.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Header {
    pub width: u16,
    pub height: u16,
}

impl Header {
    /// Dimensions wider than 16 bits keep only their low 16 bits.
    pub fn from_dimensions(width: u32, height: u32) -> Self {
        if width > u32::from(u16::MAX) || height > u32::from(u16::MAX) {
            warn!(
                "Image is {}x{}, dimensions above {} are truncated in the header",
                width,
                height,
                u16::MAX
            );
        }
        Self {
            width: (width & 0xFFFF) as u16,
            height: (height & 0xFFFF) as u16,
        }
    }

    pub fn write_to(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(&self.width.to_le_bytes());
        buf.extend_from_slice(&self.height.to_le_bytes());
    }

    /// Split a packed stream into its header and pixel payload.
    pub fn parse(bytes: &[u8]) -> Result<(Header, &[u8]), ConvertError> {
        if bytes.len() < HEADER_LEN {
            return Err(ConvertError::MissingHeader(HEADER_LEN));
        }
        let (head, rest) = bytes.split_at(HEADER_LEN);
        let header = Header {
            width: u16::from_le_bytes([head[0], head[1]]),
            height: u16::from_le_bytes([head[2], head[3]]),
        };
        Ok((header, rest))
    }

    pub fn pixel_count(&self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_little_endian_width_then_height() {
        let mut buf = Vec::new();
        Header::from_dimensions(0x0312, 0xABCD).write_to(&mut buf);
        assert_eq!(buf, [0x12, 0x03, 0xCD, 0xAB]);
    }

    #[test]
    fn oversized_dimensions_keep_low_bits() {
        let header = Header::from_dimensions(0x1_0005, 65_535);
        assert_eq!(header, Header { width: 5, height: 65_535 });
    }

    #[test]
    fn parse_reads_back_written_header() {
        let mut buf = Vec::new();
        Header::from_dimensions(640, 480).write_to(&mut buf);
        buf.push(0x7F);
        let (header, rest) = Header::parse(&buf).unwrap();
        assert_eq!(header, Header { width: 640, height: 480 });
        assert_eq!(rest, [0x7F]);
    }

    #[test]
    fn parse_rejects_short_input() {
        assert!(matches!(
            Header::parse(&[1, 0, 1]),
            Err(ConvertError::MissingHeader(HEADER_LEN))
        ));
    }
}
