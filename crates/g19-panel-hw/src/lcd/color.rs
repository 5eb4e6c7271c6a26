//! RGB565 color packing.
//!
//! Packed layout: bits [15:11] red (5 bits), [10:5] green (6 bits),
//! [4:0] blue (5 bits).

/// Channel masks for a packed RGB565 value.
pub const RED_MASK: u16 = 0x1F;
pub const GREEN_MASK: u16 = 0x3F;
pub const BLUE_MASK: u16 = 0x1F;

/// Converts RGB888 to RGB565.
///
/// Each channel is scaled into its target width by `channel * (2^bits - 1) / 255`
/// with truncation, so 255 maps onto a full 5 or 6 bit channel.
#[inline]
pub fn rgb888_to_rgb565(r: u8, g: u8, b: u8) -> u16 {
    let r5 = r as u16 * 31 / 255;
    let g6 = g as u16 * 63 / 255;
    let b5 = b as u16 * 31 / 255;
    (r5 & RED_MASK) << 11 | (g6 & GREEN_MASK) << 5 | (b5 & BLUE_MASK)
}

/// Extracts the raw 5/6/5-bit channels of a packed color, without rescaling.
#[inline]
pub fn rgb565_channels(pixel: u16) -> (u8, u8, u8) {
    let r = (pixel >> 11 & RED_MASK) as u8;
    let g = (pixel >> 5 & GREEN_MASK) as u8;
    let b = (pixel & BLUE_MASK) as u8;
    (r, g, b)
}

/// Converts RGB565 to RGB888.
#[inline]
pub fn rgb565_to_rgb888(pixel: u16) -> (u8, u8, u8) {
    let (r, g, b) = rgb565_channels(pixel);
    // Expand to 8-bit
    let r8 = (r << 3) | (r >> 2);
    let g8 = (g << 2) | (g >> 4);
    let b8 = (b << 3) | (b >> 2);
    (r8, g8, b8)
}

/// Parses a hex color string to RGB888 channels.
pub fn parse_hex_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Parses a hex color string to RGB565.
pub fn parse_hex_color(hex: &str) -> Option<u16> {
    let (r, g, b) = parse_hex_rgb(hex)?;
    Some(rgb888_to_rgb565(r, g, b))
}
