//! Floyd-Steinberg error diffusion.
//!
//! Distributes 100% of the quantization residual to 4 neighbors. Single
//! left-to-right pass per row, so textures show the classic directional
//! "worms".

use super::{dither_with_kernel, Dither, FLOYD_STEINBERG};
use crate::tone::Levels;

/// Floyd-Steinberg error diffusion dithering.
///
/// ```text
///        X   7
///    3   5   1
/// ```
///
/// Weights: 7/16 right, 3/16 bottom-left, 5/16 bottom, 1/16 bottom-right.
/// Paired with the horizontal-hatch renderer by the `floyd` style.
#[derive(Debug, Clone, Copy, Default)]
pub struct FloydSteinberg;

impl Dither for FloydSteinberg {
    fn dither(&self, tone: &[f32], width: usize, height: usize, levels: Levels) -> Vec<f32> {
        dither_with_kernel(tone, width, height, levels, &FLOYD_STEINBERG)
    }
}
