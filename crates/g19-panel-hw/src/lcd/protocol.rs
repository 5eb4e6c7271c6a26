//! G19 LCD wire protocol.
//!
//! Frame structure:
//! - 512-byte header: 16 fixed magic bytes, bytes 0x10..=0xFF, bytes 0x00..=0xFF
//! - Payload: 320 * 240 little-endian RGB565 values, column-major
//!
//! Backlight and brightness go over control transfers on interface 1.

use crate::{Error, Result, LCD_HEIGHT, LCD_WIDTH};

/// Frame header size in bytes.
pub const FRAME_HEADER_SIZE: usize = 512;

/// Pixel payload size in bytes.
pub const FRAME_DATA_SIZE: usize = LCD_WIDTH as usize * LCD_HEIGHT as usize * 2;

/// Total frame packet size.
pub const FRAME_SIZE: usize = FRAME_HEADER_SIZE + FRAME_DATA_SIZE;

/// Bulk OUT endpoint for frame data.
pub const BULK_ENDPOINT: u8 = 0x02;

/// HID SET_REPORT request used for backlight reports.
pub const SET_REPORT: u8 = 0x09;

/// wValue selecting the backlight color report.
pub const BACKLIGHT_COLOR_VALUE: u16 = 0x0307;

/// wValue selecting the stored-default backlight color report.
pub const BACKLIGHT_SAVE_VALUE: u16 = 0x0308;

/// Vendor request setting display brightness.
pub const BRIGHTNESS_REQUEST: u8 = 0x0A;

/// Fixed prefix of the frame header.
const HEADER_MAGIC: [u8; 16] = [
    0x10, 0x0F, 0x00, 0x58, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x3F, 0x01, 0xEF, 0x00,
    0x0F,
];

/// Builds a full frame packet around an exported pixel payload.
///
/// `data` must be exactly [`FRAME_DATA_SIZE`] bytes, as produced by
/// [`Framebuffer::to_bytes`](super::Framebuffer::to_bytes).
pub fn build_frame_packet(data: &[u8]) -> Result<Vec<u8>> {
    if data.len() != FRAME_DATA_SIZE {
        return Err(Error::FrameSize {
            expected: FRAME_DATA_SIZE,
            actual: data.len(),
        });
    }

    let mut packet = Vec::with_capacity(FRAME_SIZE);
    packet.extend_from_slice(&HEADER_MAGIC);
    packet.extend(0x10..=0xFFu8);
    packet.extend(0x00..=0xFFu8);
    packet.extend_from_slice(data);
    Ok(packet)
}

/// Builds a backlight color report.
pub fn backlight_report(r: u8, g: u8, b: u8) -> [u8; 4] {
    [7, r, g, b]
}

/// Builds a stored-default backlight color report.
///
/// The leading report ID matches the low byte of [`BACKLIGHT_SAVE_VALUE`];
/// the device ignores the save when they disagree.
pub fn backlight_save_report(r: u8, g: u8, b: u8) -> [u8; 4] {
    [8, r, g, b]
}

/// Builds a display brightness report, `level` in 0..=100.
pub fn brightness_report(level: u8) -> [u8; 9] {
    [level, 0xE2, 0x12, 0x00, 0x8C, 0x11, 0x00, 0x10, 0x00]
}
