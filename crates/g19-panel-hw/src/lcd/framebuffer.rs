//! RGB565 framebuffer for the LCD display.

use crate::{LCD_HEIGHT, LCD_WIDTH};

use super::color::rgb565_to_rgb888;

/// Total pixel count for the display.
pub const PIXEL_COUNT: usize = LCD_WIDTH as usize * LCD_HEIGHT as usize;

/// RGB565 framebuffer for the 320x240 display.
///
/// Pixels are stored column-major: a full column of `height` pixels, top to
/// bottom, then the next column. That ordering is what the display expects
/// on the wire, so it is preserved all the way through [`Framebuffer::to_bytes`].
#[derive(Clone)]
pub struct Framebuffer {
    /// Pixel data in RGB565 format, column-major.
    pub(crate) data: Vec<u16>,
    /// Width of the framebuffer.
    width: u16,
    /// Height of the framebuffer.
    height: u16,
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Framebuffer {
    /// Creates a new framebuffer initialized to black.
    pub fn new() -> Self {
        Self {
            data: vec![0; PIXEL_COUNT],
            width: LCD_WIDTH,
            height: LCD_HEIGHT,
        }
    }

    /// Creates a framebuffer with custom dimensions.
    pub fn with_dimensions(width: u16, height: u16) -> Self {
        let size = width as usize * height as usize;
        Self {
            data: vec![0; size],
            width,
            height,
        }
    }

    /// Returns the width of the framebuffer.
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Returns the height of the framebuffer.
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Linear index of the pixel at column `x`, row `y`.
    ///
    /// Column-major, so `x` strides by the buffer height. Every pixel access
    /// goes through here to keep the unusual ordering in one place.
    #[inline]
    pub(crate) fn index(&self, x: u16, y: u16) -> usize {
        x as usize * self.height as usize + y as usize
    }

    /// Returns a reference to the raw pixel data.
    pub fn data(&self) -> &[u16] {
        &self.data
    }

    /// Clears the framebuffer to a solid color.
    pub fn clear(&mut self, color: u16) {
        self.data.fill(color);
    }

    /// Sets a pixel at the given coordinates.
    pub fn set_pixel(&mut self, x: u16, y: u16, color: u16) {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            self.data[idx] = color;
        }
    }

    /// Gets a pixel at the given coordinates.
    pub fn get_pixel(&self, x: u16, y: u16) -> Option<u16> {
        if x < self.width && y < self.height {
            Some(self.data[self.index(x, y)])
        } else {
            None
        }
    }

    /// Exports the pixel array as little-endian bytes in wire order.
    ///
    /// The result is an independent copy, `width * height * 2` bytes long;
    /// the caller may keep it across later draws.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.data.len() * 2);
        for &pixel in &self.data {
            bytes.extend_from_slice(&pixel.to_le_bytes());
        }
        bytes
    }

    /// Converts the framebuffer to row-major RGBA8 bytes for PNG encoding.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut rgba = Vec::with_capacity(self.data.len() * 4);
        for y in 0..self.height {
            for x in 0..self.width {
                let (r, g, b) = rgb565_to_rgb888(self.data[self.index(x, y)]);
                rgba.push(r);
                rgba.push(g);
                rgba.push(b);
                rgba.push(255);
            }
        }
        rgba
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_black() {
        let fb = Framebuffer::new();
        assert_eq!(fb.width(), 320);
        assert_eq!(fb.height(), 240);
        assert!(fb.data().iter().all(|&p| p == 0));
    }

    #[test]
    fn test_column_major_addressing() {
        let mut fb = Framebuffer::with_dimensions(4, 3);
        fb.set_pixel(1, 0, 0xF800);
        fb.set_pixel(0, 2, 0x001F);
        // Column 1 starts at linear index height (3).
        assert_eq!(fb.data()[3], 0xF800);
        assert_eq!(fb.data()[2], 0x001F);
        assert_eq!(fb.get_pixel(1, 0), Some(0xF800));
        assert_eq!(fb.get_pixel(4, 0), None);
        assert_eq!(fb.get_pixel(0, 3), None);
    }

    #[test]
    fn test_to_bytes_round_trip() {
        let mut fb = Framebuffer::with_dimensions(3, 2);
        fb.set_pixel(2, 1, 0xABCD);
        let bytes = fb.to_bytes();
        assert_eq!(bytes.len(), 3 * 2 * 2);

        let recovered: Vec<u16> = bytes
            .chunks_exact(2)
            .map(|c| u16::from_le_bytes([c[0], c[1]]))
            .collect();
        assert_eq!(recovered, fb.data());
    }

    #[test]
    fn test_to_bytes_is_independent() {
        let mut fb = Framebuffer::with_dimensions(2, 2);
        let bytes = fb.to_bytes();
        fb.clear(0xFFFF);
        assert!(bytes.iter().all(|&b| b == 0));
    }
}
