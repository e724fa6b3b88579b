//! Dithering algorithms over scalar tone buffers.
//!
//! # Algorithms
//!
//! - **Threshold**: per-pixel quantization, no error propagation
//! - **Ordered**: 4×4 Bayer threshold matrix, stateless per pixel
//! - **Floyd-Steinberg**: error diffusion, 100% propagation, 4 neighbors
//! - **Atkinson**: error diffusion, 75% propagation, 6 neighbors
//!
//! # Architecture
//!
//! All algorithms implement the [`Dither`] trait and share one signature:
//! `(tone, width, height, levels) -> quantized`. The input slice is never
//! modified. Every output value is one of the `levels` steps.
//!
//! The two diffusion algorithms share [`dither_with_kernel`], which walks a
//! private working copy in strict row-major order. Later pixels depend on
//! error accumulated from earlier ones, so the loop is sequential.
//!
//! # Example
//!
//! ```
//! use tone_dither::{Atkinson, Dither, Levels};
//!
//! let tone = vec![128.0; 16];
//! let out = Atkinson.dither(&tone, 4, 4, Levels::BINARY);
//! assert!(out.iter().all(|&v| v == 0.0 || v == 255.0));
//! ```

mod atkinson;
mod floyd_steinberg;
mod kernel;
mod ordered;
mod threshold;

pub use atkinson::Atkinson;
pub use floyd_steinberg::FloydSteinberg;
pub use kernel::*;
pub use ordered::{Ordered, BAYER_4X4};
pub use threshold::Threshold;

use std::fmt;

use crate::tone::Levels;

/// Trait for dithering algorithms.
pub trait Dither {
    /// Dither a tone buffer to quantization levels.
    ///
    /// # Arguments
    ///
    /// * `tone` - Tone values, nominally `0..=255`, row-major
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `levels` - Quantization level count
    ///
    /// # Returns
    ///
    /// A new buffer of `width * height` values, each one of the level steps.
    ///
    /// # Panics
    ///
    /// May panic if `tone.len()` is less than `width * height`; debug builds
    /// assert the lengths match.
    fn dither(&self, tone: &[f32], width: usize, height: usize, levels: Levels) -> Vec<f32>;
}

/// Dither algorithm selection.
///
/// Used by the style table to bind one algorithm to each rendering style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DitherAlgorithm {
    /// Per-pixel quantization.
    #[default]
    Threshold,
    /// 4×4 Bayer ordered dithering.
    Ordered,
    /// Floyd-Steinberg error diffusion (100% propagation).
    FloydSteinberg,
    /// Atkinson error diffusion (75% propagation).
    Atkinson,
}

impl DitherAlgorithm {
    /// Every algorithm, in display order.
    pub const ALL: [DitherAlgorithm; 4] = [
        DitherAlgorithm::Threshold,
        DitherAlgorithm::Ordered,
        DitherAlgorithm::FloydSteinberg,
        DitherAlgorithm::Atkinson,
    ];

    /// Stable lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            DitherAlgorithm::Threshold => "threshold",
            DitherAlgorithm::Ordered => "ordered",
            DitherAlgorithm::FloydSteinberg => "floyd-steinberg",
            DitherAlgorithm::Atkinson => "atkinson",
        }
    }

    /// The diffusion kernel, for error diffusion algorithms.
    pub fn kernel(self) -> Option<&'static Kernel> {
        match self {
            DitherAlgorithm::FloydSteinberg => Some(&FLOYD_STEINBERG),
            DitherAlgorithm::Atkinson => Some(&ATKINSON),
            DitherAlgorithm::Threshold | DitherAlgorithm::Ordered => None,
        }
    }

    /// Run the selected algorithm.
    ///
    /// # Panics
    ///
    /// May panic if `tone.len()` is less than `width * height`. A
    /// [`ToneBuffer`](crate::ToneBuffer) always has matching dimensions.
    pub fn apply(self, tone: &[f32], width: usize, height: usize, levels: Levels) -> Vec<f32> {
        match self {
            DitherAlgorithm::Threshold => Threshold.dither(tone, width, height, levels),
            DitherAlgorithm::Ordered => Ordered.dither(tone, width, height, levels),
            DitherAlgorithm::FloydSteinberg => FloydSteinberg.dither(tone, width, height, levels),
            DitherAlgorithm::Atkinson => Atkinson.dither(tone, width, height, levels),
        }
    }
}

impl fmt::Display for DitherAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Core error diffusion loop parameterized by kernel.
///
/// Seeds a working buffer from `tone`, then for every pixel in row-major
/// order: quantize the accumulated value, store it, and hand
/// `residual * weight / divisor` to each in-bounds kernel neighbor.
/// Contributions that would land outside the image are dropped, not
/// redistributed. No serpentine scanning: direction is always left to right.
pub(crate) fn dither_with_kernel(
    tone: &[f32],
    width: usize,
    height: usize,
    levels: Levels,
    kernel: &Kernel,
) -> Vec<f32> {
    debug_assert_eq!(tone.len(), width * height);

    let mut work = tone.to_vec();
    let divisor = kernel.divisor as f32;

    for y in 0..height {
        for x in 0..width {
            let idx = y * width + x;
            let old = work[idx];
            let new = levels.quantize(old);
            work[idx] = new;

            let error = old - new;
            if error == 0.0 {
                continue;
            }

            for &(dx, dy, weight) in kernel.entries {
                let nx = x as i64 + dx as i64;
                let ny = y + dy;
                if nx < 0 || nx as usize >= width || ny >= height {
                    continue;
                }
                work[ny * width + nx as usize] += error * weight as f32 / divisor;
            }
        }
    }

    work
}
