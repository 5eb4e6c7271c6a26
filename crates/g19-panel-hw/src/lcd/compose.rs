//! Region compositing operations.
//!
//! All three operations target a rectangle `(x, y, sx, sy)` given in signed
//! coordinates; regions may start before the origin or hang past an edge.
//! `fill_rect` clamps the rectangle to the buffer before iterating. The two
//! mask-driven operations instead skip clipped pixels while still consuming
//! their mask/source entries, so rows that follow a clipped one stay aligned
//! with the right part of the input.

use crate::{Error, Result};

use super::blend::blend;
use super::framebuffer::Framebuffer;

/// Number of input entries a `sx` by `sy` region consumes.
#[inline]
fn region_len(sx: i32, sy: i32) -> usize {
    sx.max(0) as usize * sy.max(0) as usize
}

impl Framebuffer {
    /// Blends a solid color over a rectangle.
    ///
    /// Every in-bounds pixel of the region becomes
    /// `blend(current, color, alpha)`; with `alpha` 1.0 this is an opaque
    /// fill, with 0.0 a no-op.
    pub fn fill_rect(&mut self, x: i32, y: i32, sx: i32, sy: i32, color: u16, alpha: f32) {
        let x0 = x.clamp(0, self.width() as i32);
        let y0 = y.clamp(0, self.height() as i32);
        let x1 = x.saturating_add(sx).clamp(0, self.width() as i32);
        let y1 = y.saturating_add(sy).clamp(0, self.height() as i32);

        for px in x0..x1 {
            for py in y0..y1 {
                let idx = self.index(px as u16, py as u16);
                self.data[idx] = blend(self.data[idx], color, alpha);
            }
        }
    }

    /// Blends an RGB565 source image over a rectangle, weighting each pixel
    /// by its mask coverage.
    ///
    /// `source` and `mask` hold exactly one entry per region pixel, rows
    /// outer, columns inner. Both lengths are checked against `sx * sy`
    /// before anything is written, so a rejected call leaves the buffer
    /// untouched.
    pub fn copy_region(
        &mut self,
        x: i32,
        y: i32,
        sx: i32,
        sy: i32,
        source: &[u16],
        mask: &[u8],
    ) -> Result<()> {
        let expected = region_len(sx, sy);
        if source.len() != expected {
            return Err(Error::RegionSize {
                expected,
                actual: source.len(),
            });
        }
        if mask.len() != expected {
            return Err(Error::RegionSize {
                expected,
                actual: mask.len(),
            });
        }

        let width = self.width() as i32;
        let height = self.height() as i32;
        let mut cursor = 0;

        for py in y..y.saturating_add(sy) {
            if py < 0 || py >= height {
                // Clipped row: consume its input entries so later rows stay aligned.
                cursor += sx.max(0) as usize;
                continue;
            }
            for px in x..x.saturating_add(sx) {
                if px < 0 || px >= width {
                    cursor += 1;
                    continue;
                }
                let idx = self.index(px as u16, py as u16);
                self.data[idx] = blend(
                    self.data[idx],
                    source[cursor],
                    mask[cursor] as f32 / 255.0,
                );
                cursor += 1;
            }
        }
        Ok(())
    }

    /// Blends a single color over a rectangle through a per-pixel coverage
    /// mask, as produced by glyph rasterization.
    ///
    /// Traversal and clipping follow [`Framebuffer::copy_region`] exactly,
    /// with the fixed `color` standing in for the source image.
    pub fn stamp_region(
        &mut self,
        x: i32,
        y: i32,
        sx: i32,
        sy: i32,
        color: u16,
        mask: &[u8],
    ) -> Result<()> {
        let expected = region_len(sx, sy);
        if mask.len() != expected {
            return Err(Error::RegionSize {
                expected,
                actual: mask.len(),
            });
        }

        let width = self.width() as i32;
        let height = self.height() as i32;
        let mut cursor = 0;

        for py in y..y.saturating_add(sy) {
            if py < 0 || py >= height {
                cursor += sx.max(0) as usize;
                continue;
            }
            for px in x..x.saturating_add(sx) {
                if px < 0 || px >= width {
                    cursor += 1;
                    continue;
                }
                let idx = self.index(px as u16, py as u16);
                self.data[idx] = blend(self.data[idx], color, mask[cursor] as f32 / 255.0);
                cursor += 1;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lcd::color::rgb888_to_rgb565;

    #[test]
    fn test_fill_rect_opaque_and_blended() {
        let mut fb = Framebuffer::with_dimensions(4, 4);
        let red = rgb888_to_rgb565(255, 0, 0);
        let blue = rgb888_to_rgb565(0, 0, 255);

        fb.fill_rect(0, 0, 4, 4, red, 1.0);
        assert!(fb.data().iter().all(|&p| p == red));

        fb.fill_rect(1, 1, 2, 2, blue, 0.5);
        let mixed = blend(red, blue, 0.5);
        for x in 0..4u16 {
            for y in 0..4u16 {
                let expected = if (1..3).contains(&x) && (1..3).contains(&y) {
                    mixed
                } else {
                    red
                };
                assert_eq!(fb.get_pixel(x, y), Some(expected));
            }
        }
    }

    #[test]
    fn test_fill_rect_zero_alpha_is_identity() {
        let mut fb = Framebuffer::with_dimensions(4, 4);
        fb.fill_rect(0, 0, 4, 4, 0x1234, 1.0);
        let before = fb.to_bytes();

        fb.fill_rect(-2, -2, 8, 8, 0xFFFF, 0.0);
        assert_eq!(fb.to_bytes(), before);
    }

    #[test]
    fn test_fill_rect_clamps_out_of_range() {
        let mut fb = Framebuffer::with_dimensions(4, 4);
        fb.fill_rect(-3, 2, 10, 10, 0xFFFF, 1.0);
        for x in 0..4u16 {
            for y in 0..4u16 {
                let expected = if y >= 2 { 0xFFFF } else { 0x0000 };
                assert_eq!(fb.get_pixel(x, y), Some(expected));
            }
        }
    }

    #[test]
    fn test_copy_region_applies_source_and_mask() {
        let mut fb = Framebuffer::with_dimensions(3, 3);
        // Row-major source: second row fully opaque, others transparent.
        let source = vec![0xFFFF; 9];
        let mask = vec![0, 0, 0, 255, 255, 255, 0, 0, 0];

        fb.copy_region(0, 0, 3, 3, &source, &mask).unwrap();
        for x in 0..3u16 {
            for y in 0..3u16 {
                let expected = if y == 1 { 0xFFFF } else { 0x0000 };
                assert_eq!(fb.get_pixel(x, y), Some(expected));
            }
        }
    }

    #[test]
    fn test_copy_region_keeps_cursor_aligned_across_bottom_edge() {
        // Region hangs two rows past the bottom; the clipped rows' input
        // must still be consumed so visible rows map to the right source rows.
        let mut fb = Framebuffer::with_dimensions(2, 4);
        let source: Vec<u16> = (1..=8).collect();
        let mask = vec![255; 8];

        fb.copy_region(0, 2, 2, 4, &source, &mask).unwrap();
        assert_eq!(fb.get_pixel(0, 2), Some(1));
        assert_eq!(fb.get_pixel(1, 2), Some(2));
        assert_eq!(fb.get_pixel(0, 3), Some(3));
        assert_eq!(fb.get_pixel(1, 3), Some(4));
        // Source entries 5..=8 fell below the buffer and were discarded.
        assert_eq!(fb.get_pixel(0, 0), Some(0));
        assert_eq!(fb.get_pixel(0, 1), Some(0));
    }

    #[test]
    fn test_copy_region_keeps_cursor_aligned_across_left_edge() {
        let mut fb = Framebuffer::with_dimensions(3, 2);
        let source: Vec<u16> = (1..=6).collect();
        let mask = vec![255; 6];

        // One column hangs off the left edge.
        fb.copy_region(-1, 0, 3, 2, &source, &mask).unwrap();
        assert_eq!(fb.get_pixel(0, 0), Some(2));
        assert_eq!(fb.get_pixel(1, 0), Some(3));
        assert_eq!(fb.get_pixel(0, 1), Some(5));
        assert_eq!(fb.get_pixel(1, 1), Some(6));
        assert_eq!(fb.get_pixel(2, 0), Some(0));
    }

    #[test]
    fn test_copy_region_rejects_short_input_atomically() {
        let mut fb = Framebuffer::with_dimensions(3, 3);
        fb.fill_rect(0, 0, 3, 3, 0x1234, 1.0);
        let before = fb.to_bytes();

        let short_source = vec![0xFFFF; 8];
        let mask = vec![255; 9];
        let err = fb.copy_region(0, 0, 3, 3, &short_source, &mask);
        assert!(matches!(
            err,
            Err(Error::RegionSize {
                expected: 9,
                actual: 8
            })
        ));
        assert_eq!(fb.to_bytes(), before);

        let source = vec![0xFFFF; 9];
        let short_mask = vec![255; 4];
        assert!(fb.copy_region(0, 0, 3, 3, &source, &short_mask).is_err());
        assert_eq!(fb.to_bytes(), before);
    }

    #[test]
    fn test_stamp_region_renders_coverage() {
        let mut fb = Framebuffer::with_dimensions(2, 2);
        let white = rgb888_to_rgb565(255, 255, 255);
        // Diagonal coverage, row-major.
        let mask = vec![255, 0, 0, 255];

        fb.stamp_region(0, 0, 2, 2, white, &mask).unwrap();
        assert_eq!(fb.get_pixel(0, 0), Some(white));
        assert_eq!(fb.get_pixel(1, 0), Some(0));
        assert_eq!(fb.get_pixel(0, 1), Some(0));
        assert_eq!(fb.get_pixel(1, 1), Some(white));
    }

    #[test]
    fn test_stamp_region_rejects_wrong_mask_length() {
        let mut fb = Framebuffer::with_dimensions(2, 2);
        let before = fb.to_bytes();
        assert!(fb.stamp_region(0, 0, 2, 2, 0xFFFF, &[255; 5]).is_err());
        assert_eq!(fb.to_bytes(), before);
    }

    #[test]
    fn test_empty_region_is_a_no_op() {
        let mut fb = Framebuffer::with_dimensions(2, 2);
        fb.fill_rect(0, 0, -1, 2, 0xFFFF, 1.0);
        fb.copy_region(0, 0, 0, 0, &[], &[]).unwrap();
        fb.stamp_region(0, 0, 2, -3, 0xFFFF, &[]).unwrap();
        assert!(fb.data().iter().all(|&p| p == 0));
    }
}
