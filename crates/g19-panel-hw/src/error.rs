//! Error types for the G19 Panel hardware library.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when compositing or talking to the hardware.
#[derive(Error, Debug)]
pub enum Error {
    /// LCD device not found or could not be opened.
    #[error("G19 LCD not found (VID:PID 046D:C229)")]
    LcdNotFound,

    /// USB communication error.
    #[error("USB error: {0}")]
    Usb(#[from] rusb::Error),

    /// Source image or alpha mask length does not match the target region.
    #[error("region input size mismatch: expected {expected}, got {actual}")]
    RegionSize { expected: usize, actual: usize },

    /// Frame payload size mismatch.
    #[error("frame size mismatch: expected {expected}, got {actual}")]
    FrameSize { expected: usize, actual: usize },

    /// Invalid display brightness value.
    #[error("invalid brightness (must be 0-100): {0}")]
    InvalidBrightness(u8),
}
