//! G19 Panel Hardware Library
//!
//! Provides hardware abstraction for the LCD built into Logitech G19 gaming
//! keyboards: an RGB565 framebuffer with alpha compositing, and the USB
//! transport that ships rendered frames to the display.

pub mod error;
pub mod lcd;

pub use error::{Error, Result};
pub use lcd::{Framebuffer, LcdDevice};

/// LCD display dimensions
pub const LCD_WIDTH: u16 = 320;
pub const LCD_HEIGHT: u16 = 240;

/// USB VID:PID for the LCD device
pub const LCD_VID: u16 = 0x046D;
pub const LCD_PID: u16 = 0xC229;
