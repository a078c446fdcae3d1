use image::Rgb;

/// Pack to a RRRRRGGGGGGBBBBB word, written high byte first.
pub fn encode(Rgb([r, g, b]): Rgb<u8>, buf: &mut Vec<u8>) {
    let value = u16::from(r >> 3) << 11 | u16::from(g >> 2) << 5 | u16::from(b >> 3);
    buf.extend_from_slice(&value.to_be_bytes());
}

pub fn decode(bytes: [u8; 2]) -> Rgb<u8> {
    let value = u16::from_be_bytes(bytes);
    Rgb([
        ((value >> 11) as u8) << 3,
        (((value >> 5) & 0x3F) as u8) << 2,
        ((value & 0x1F) as u8) << 3,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn packed(r: u8, g: u8, b: u8) -> [u8; 2] {
        let mut buf = Vec::new();
        encode(Rgb([r, g, b]), &mut buf);
        [buf[0], buf[1]]
    }

    #[test]
    fn primaries_are_big_endian() {
        assert_eq!(packed(255, 255, 255), [0xFF, 0xFF]);
        assert_eq!(packed(0, 0, 0), [0x00, 0x00]);
        assert_eq!(packed(255, 0, 0), [0xF8, 0x00]);
        assert_eq!(packed(0, 255, 0), [0x07, 0xE0]);
        assert_eq!(packed(0, 0, 255), [0x00, 0x1F]);
    }

    #[test]
    fn appends_without_touching_existing_bytes() {
        let mut buf = vec![0xAA];
        encode(Rgb([255, 0, 0]), &mut buf);
        assert_eq!(buf, [0xAA, 0xF8, 0x00]);
    }

    #[test]
    fn decode_clears_quantised_bits_only() {
        for (r, g, b) in [(0x12, 0xAB, 0xFE), (0xFF, 0x01, 0x80), (0x07, 0x03, 0x07)] {
            assert_eq!(decode(packed(r, g, b)), Rgb([r & 0xF8, g & 0xFC, b & 0xF8]));
        }
    }
}
