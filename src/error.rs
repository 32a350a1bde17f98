//! Error types for drawing and exporting the logo.

use thiserror::Error;

/// Errors raised while turning a logo description into a canvas.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("icon size must be a positive finite number, got {0}")]
    InvalidIconSize(f64),

    /// The arc would leave the canvas.
    #[error("arc {index}: radius fraction {fraction} is outside (0, 1]")]
    RadiusOutOfRange { index: usize, fraction: f64 },

    #[error("arc {index}: angles must be finite")]
    NonFiniteAngle { index: usize },

    #[error("no drawing for label letter {0:?}")]
    UnknownGlyph(char),
}

/// Errors raised by the raster export. Each step of the export maps to one
/// variant, so a failed export is always observable by the caller.
#[cfg(feature = "png")]
#[derive(Error, Debug)]
pub enum ExportError {
    /// The page holds no `<svg>` element.
    #[error("no drawing surface found in page")]
    MissingSurface,

    #[error("not a base64 data URI: {0}")]
    InvalidDataUri(String),

    #[error("data URI payload is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    /// The serialized drawing could not be decoded into an image.
    #[error("failed to decode drawing: {0}")]
    Decode(#[from] usvg::Error),

    #[error("raster surface of {width}x{height} pixels is not allowed")]
    SurfaceSize { width: u32, height: u32 },

    #[error("failed to encode PNG: {0}")]
    Encode(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The background decode task died before reporting back.
    #[error("export task failed: {0}")]
    Task(String),
}
