//! LCD display module.
//!
//! Compositing into and control of the 320x240 RGB565 display.

mod compose;
mod device;
mod protocol;

pub mod blend;
pub mod color;
pub mod framebuffer;

pub use blend::blend;
pub use color::{parse_hex_color, parse_hex_rgb, rgb565_to_rgb888, rgb888_to_rgb565};
pub use device::LcdDevice;
pub use framebuffer::Framebuffer;
