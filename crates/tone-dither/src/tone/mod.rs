//! Tone pipeline: luminance, contrast and quantization.
//!
//! Turns an RGBA source buffer into a scalar tone buffer, one `f32` per
//! pixel in `0..=255`:
//!
//! ```text
//! RGBA ──> L = 0.299R + 0.587G + 0.114B
//!      ──> L' = clamp((L - 128) * C/100 + 128, 0, 255)
//!      ──> Q(L') = round(L' / step) * step,  step = 255 / (N - 1)
//! ```
//!
//! The quantizer ([`Levels::quantize`]) is also the primitive every dither
//! algorithm re-applies after injecting spatial error.

mod buffer;
mod error;
mod levels;

pub use buffer::ToneBuffer;
pub use error::ToneError;
pub use levels::Levels;

/// Perceptual luma weighting of an 8-bit RGB sample.
#[inline]
pub fn luminance(r: u8, g: u8, b: u8) -> f32 {
    0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32
}

/// Scale a tone value around mid-gray by `percent / 100`, clamped to `0..=255`.
///
/// 100 is neutral, lower values pull toward 128, higher values push away.
#[inline]
pub fn adjust_contrast(value: f32, percent: f32) -> f32 {
    let c = percent / 100.0;
    ((value - 128.0) * c + 128.0).clamp(0.0, 255.0)
}
