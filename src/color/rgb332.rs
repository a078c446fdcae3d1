use image::Rgb;

/// Pack to one byte laid out RRRGGGBB.
pub fn encode(Rgb([r, g, b]): Rgb<u8>, buf: &mut Vec<u8>) {
    buf.push((r >> 5) << 5 | (g >> 5) << 2 | b >> 6);
}

pub fn decode(byte: u8) -> Rgb<u8> {
    Rgb([byte & 0xE0, (byte << 3) & 0xE0, (byte << 6) & 0xC0])
}
