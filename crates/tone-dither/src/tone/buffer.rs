//! Scalar tone buffer built from RGBA pixels.

use super::{adjust_contrast, luminance, Levels, ToneError};

/// One quantized brightness value per pixel, row-major.
///
/// Created fresh for every render and consumed by a dither algorithm.
#[derive(Debug, Clone, PartialEq)]
pub struct ToneBuffer {
    values: Vec<f32>,
    width: usize,
    height: usize,
}

impl ToneBuffer {
    /// Grayscale, contrast-adjust and quantize an RGBA buffer.
    ///
    /// # Errors
    ///
    /// - [`ToneError::BufferSize`] if `rgba.len() != width * height * 4`
    /// - [`ToneError::InvalidContrast`] if `contrast_percent` is not a
    ///   positive finite number
    pub fn from_rgba(
        rgba: &[u8],
        width: usize,
        height: usize,
        contrast_percent: f32,
        levels: Levels,
    ) -> Result<Self, ToneError> {
        let expected = width * height * 4;
        if rgba.len() != expected {
            return Err(ToneError::BufferSize {
                expected,
                actual: rgba.len(),
            });
        }
        if !(contrast_percent.is_finite() && contrast_percent > 0.0) {
            return Err(ToneError::InvalidContrast(contrast_percent));
        }

        let values = rgba
            .chunks_exact(4)
            .map(|px| {
                let gray = luminance(px[0], px[1], px[2]);
                levels.quantize(adjust_contrast(gray, contrast_percent))
            })
            .collect();

        Ok(Self {
            values,
            width,
            height,
        })
    }

    /// Tone values as a row-major slice.
    #[inline]
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }
}
