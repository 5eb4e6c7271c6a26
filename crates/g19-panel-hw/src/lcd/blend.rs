//! Alpha blending of packed RGB565 colors.

use super::color::{rgb565_channels, BLUE_MASK, GREEN_MASK, RED_MASK};

/// Linearly interpolates between two packed colors.
///
/// `alpha` is the coverage of `overlay` in `[0.0, 1.0]`. Exactly 0.0 and 1.0
/// return `base` and `overlay` unchanged; every value strictly in between
/// takes the per-channel path.
#[inline]
pub fn blend(base: u16, overlay: u16, alpha: f32) -> u16 {
    if alpha == 1.0 {
        return overlay;
    }
    if alpha == 0.0 {
        return base;
    }

    let (r1, g1, b1) = rgb565_channels(base);
    let (r2, g2, b2) = rgb565_channels(overlay);

    let mix = |under: u8, over: u8| (over as f32 * alpha + under as f32 * (1.0 - alpha)) as u16;

    // Mask after mixing so truncation can never leak into a neighbor channel.
    let r = mix(r1, r2) & RED_MASK;
    let g = mix(g1, g2) & GREEN_MASK;
    let b = mix(b1, b2) & BLUE_MASK;
    r << 11 | g << 5 | b
}
