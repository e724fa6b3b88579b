//! Error type for tone pipeline configuration.

use std::fmt;

/// Invalid input to the tone pipeline.
///
/// All variants are detected before any quantization runs.
#[derive(Debug, Clone, PartialEq)]
pub enum ToneError {
    /// Level count below 2 (the quantization step would divide by zero)
    InvalidLevels(u32),
    /// Contrast percentage that is not a positive finite number
    InvalidContrast(f32),
    /// RGBA buffer length does not match `width * height * 4`
    BufferSize {
        /// Expected byte count
        expected: usize,
        /// Actual byte count
        actual: usize,
    },
}

impl fmt::Display for ToneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToneError::InvalidLevels(n) => {
                write!(f, "invalid level count {} (must be at least 2)", n)
            }
            ToneError::InvalidContrast(c) => {
                write!(f, "invalid contrast {} (must be a positive number)", c)
            }
            ToneError::BufferSize { expected, actual } => {
                write!(
                    f,
                    "pixel buffer has {} bytes, expected {}",
                    actual, expected
                )
            }
        }
    }
}

impl std::error::Error for ToneError {}
