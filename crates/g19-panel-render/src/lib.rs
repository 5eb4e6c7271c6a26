//! Rendering helpers for the G19 panel.
//!
//! Turns fonts and decoded images into the alpha masks and RGB565 pixel runs
//! that the framebuffer compositor consumes.

pub mod error;
pub mod image;
pub mod text;

pub use error::{Error, Result};
pub use image::{draw_image, load_image};
pub use text::TextRenderer;
