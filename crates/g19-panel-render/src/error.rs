//! Error types for rendering.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while rendering text or images.
#[derive(Error, Debug)]
pub enum Error {
    /// Compositing error from the hardware library.
    #[error("compositing error: {0}")]
    Hw(#[from] g19_panel_hw::Error),

    /// Image decoding or processing error.
    #[error("image error: {0}")]
    Image(#[from] ::image::ImageError),

    /// Font loading error.
    #[error("font error: {0}")]
    Font(&'static str),

    /// I/O error reading a font file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
