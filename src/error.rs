use thiserror::Error;
use tone_dither::{ParseColorError, ToneError};

/// Errors that abort a single render. The cached source image and the last
/// successful output are never touched when one of these is returned.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("No source image loaded")]
    MissingSource,

    #[error("Unable to decode image: {0}")]
    Decode(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Invalid theme color: {0}")]
    Color(#[from] ParseColorError),

    #[error("Tone error: {0}")]
    Tone(#[from] ToneError),

    #[error("Rendering error: {0}")]
    Render(#[from] RenderError),
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Unsupported surface dimensions: {width}x{height}")]
    UnsupportedDimensions { width: u32, height: u32 },

    #[error("Failed to allocate pixmap")]
    PixmapAllocation,

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
