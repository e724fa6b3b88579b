//! Threshold (flat) quantization.

use super::Dither;
use crate::tone::Levels;

/// Quantize every pixel independently.
///
/// No error propagation and no spatial pattern: the simplest baseline, used
/// by the dot, grain and pixel styles.
#[derive(Debug, Clone, Copy, Default)]
pub struct Threshold;

impl Dither for Threshold {
    fn dither(&self, tone: &[f32], width: usize, height: usize, levels: Levels) -> Vec<f32> {
        debug_assert_eq!(tone.len(), width * height);
        tone.iter().map(|&v| levels.quantize(v)).collect()
    }
}
