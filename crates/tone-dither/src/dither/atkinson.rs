//! Atkinson error diffusion.
//!
//! Distributes only 75% of the residual (6/8) over a wider neighborhood,
//! giving a smoother, more isotropic grain and stronger contrast.

use super::{dither_with_kernel, Dither, ATKINSON};
use crate::tone::Levels;

/// Atkinson error diffusion dithering.
///
/// ```text
///        X   1   1
///    1   1   1
///        1
/// ```
///
/// Each neighbor receives 1/8 of the error, 6/8 in total. Paired with the
/// vertical-hatch renderer by the `atkinson` style.
#[derive(Debug, Clone, Copy, Default)]
pub struct Atkinson;

impl Dither for Atkinson {
    fn dither(&self, tone: &[f32], width: usize, height: usize, levels: Levels) -> Vec<f32> {
        dither_with_kernel(tone, width, height, levels, &ATKINSON)
    }
}
