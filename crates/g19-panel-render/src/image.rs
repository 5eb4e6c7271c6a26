//! Image drawing.

use std::path::Path;

use ::image::imageops::FilterType;
use ::image::DynamicImage;
use g19_panel_hw::lcd::rgb888_to_rgb565;
use g19_panel_hw::Framebuffer;

use crate::Result;

/// Loads an image from a file.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<DynamicImage> {
    Ok(::image::open(path)?)
}

/// Draws an image over a rectangle, resizing it to fit.
///
/// RGBA images blend by their alpha channel; images without one are copied
/// fully opaque. The rectangle may extend past the buffer edges.
pub fn draw_image(
    fb: &mut Framebuffer,
    x: i32,
    y: i32,
    sx: i32,
    sy: i32,
    img: &DynamicImage,
) -> Result<()> {
    let width = sx.max(0) as u32;
    let height = sy.max(0) as u32;

    let resized = if img.width() != width || img.height() != height {
        img.resize_exact(width, height, FilterType::CatmullRom)
    } else {
        img.clone()
    };

    let rgba = resized.to_rgba8();
    let mut pixels = Vec::with_capacity(rgba.len() / 4);
    let mut mask = Vec::with_capacity(rgba.len() / 4);
    for p in rgba.pixels() {
        pixels.push(rgb888_to_rgb565(p[0], p[1], p[2]));
        mask.push(p[3]);
    }

    fb.copy_region(x, y, sx, sy, &pixels, &mask)?;
    Ok(())
}
