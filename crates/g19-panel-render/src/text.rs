//! Text rendering using fontdue.

use std::path::Path;

use fontdue::{Font, FontSettings};
use g19_panel_hw::Framebuffer;

use crate::{Error, Result};

/// Text renderer rasterizing glyphs into coverage masks for the compositor.
pub struct TextRenderer {
    font: Font,
}

impl TextRenderer {
    /// Loads a font from a file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = std::fs::read(path)?;
        Self::from_bytes(&data)
    }

    /// Loads a font from raw bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let font = Font::from_bytes(data, FontSettings::default()).map_err(Error::Font)?;
        Ok(Self { font })
    }

    /// Draws text onto a framebuffer at the specified position.
    ///
    /// `x`, `y` is the top-left corner of the first line; `\n` starts a new
    /// line. Each glyph's coverage bitmap is stamped over the buffer in the
    /// given color, so text anti-aliases against whatever is already there.
    pub fn draw_text(
        &self,
        fb: &mut Framebuffer,
        x: i32,
        y: i32,
        text: &str,
        size: f32,
        color: u16,
    ) -> Result<()> {
        let mut cursor_x = x;
        let mut line_y = y;

        for ch in text.chars() {
            if ch == '\n' {
                cursor_x = x;
                line_y += self.line_height(size);
                continue;
            }

            let (metrics, bitmap) = self.font.rasterize(ch, size);
            let glyph_x = cursor_x + metrics.xmin;
            let glyph_y = line_y + (size as i32 - metrics.ymin - metrics.height as i32);

            fb.stamp_region(
                glyph_x,
                glyph_y,
                metrics.width as i32,
                metrics.height as i32,
                color,
                &bitmap,
            )?;

            cursor_x += metrics.advance_width as i32;
        }

        Ok(())
    }

    /// Returns the width of a single line of text at the specified size.
    pub fn text_width(&self, text: &str, size: f32) -> i32 {
        text.chars()
            .map(|ch| {
                let (metrics, _) = self.font.rasterize(ch, size);
                metrics.advance_width as i32
            })
            .sum()
    }

    /// Returns the line height for the specified font size.
    pub fn line_height(&self, size: f32) -> i32 {
        // fontdue doesn't provide line metrics directly, approximate
        (size * 1.2) as i32
    }
}
