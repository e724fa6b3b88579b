//! Ordered dithering with a 4×4 Bayer matrix.
//!
//! Each pixel gets a fixed offset from the matrix cell at `(x % 4, y % 4)`
//! before quantization. Banding turns into a regular dot-grid pattern; no
//! error is carried between pixels, so the result depends only on position
//! and value.

use super::Dither;
use crate::tone::Levels;

/// 4×4 Bayer threshold matrix, ranks 0..=15, indexed `[y % 4][x % 4]`.
pub const BAYER_4X4: [[u8; 4]; 4] = [
    [0, 8, 2, 10],
    [12, 4, 14, 6],
    [3, 11, 1, 9],
    [15, 7, 13, 5],
];

/// Tone offset added before quantization at a pixel position.
///
/// `((rank + 0.5) / 16 - 0.5) * 32`, i.e. odd values from -15 to +15.
#[inline]
pub(crate) fn bayer_offset(x: usize, y: usize) -> f32 {
    let rank = BAYER_4X4[y % 4][x % 4] as f32;
    ((rank + 0.5) / 16.0 - 0.5) * 32.0
}

/// 4×4 Bayer ordered dithering.
///
/// Deterministic and stateless per pixel. Paired with the cross-hatch
/// renderer by the `bayer` style.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ordered;

impl Dither for Ordered {
    fn dither(&self, tone: &[f32], width: usize, height: usize, levels: Levels) -> Vec<f32> {
        debug_assert_eq!(tone.len(), width * height);
        let mut output = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                let v = tone[y * width + x];
                output.push(levels.quantize(v + bayer_offset(x, y)));
            }
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_is_a_permutation() {
        let mut ranks: Vec<u8> = BAYER_4X4.iter().flatten().copied().collect();
        ranks.sort_unstable();
        assert_eq!(ranks, (0..16).collect::<Vec<u8>>());
    }

    #[test]
    fn test_offset_range() {
        assert_eq!(bayer_offset(0, 0), -15.0);
        assert_eq!(bayer_offset(0, 3), 15.0);
        assert_eq!(bayer_offset(2, 2), -13.0);
    }

    #[test]
    fn test_flat_tone_lights_top_ranks() {
        // 120 + (2m - 15) >= 127.5 only for ranks 12..=15
        let tone = vec![120.0; 16];
        let out = Ordered.dither(&tone, 4, 4, Levels::BINARY);
        for y in 0..4 {
            for x in 0..4 {
                let expected = if BAYER_4X4[y][x] >= 12 { 255.0 } else { 0.0 };
                assert_eq!(out[y * 4 + x], expected, "pixel ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_pattern_repeats_every_four_pixels() {
        let tone = vec![100.0; 12 * 8];
        let out = Ordered.dither(&tone, 12, 8, Levels::BINARY);
        for y in 0..4 {
            for x in 0..8 {
                assert_eq!(out[y * 12 + x], out[y * 12 + x + 4]);
                assert_eq!(out[y * 12 + x], out[(y + 4) * 12 + x]);
            }
        }
    }

    #[test]
    fn test_deterministic() {
        let tone: Vec<f32> = (0..100).map(|i| (i * 7 % 256) as f32).collect();
        let a = Ordered.dither(&tone, 10, 10, Levels::new(4).unwrap());
        let b = Ordered.dither(&tone, 10, 10, Levels::new(4).unwrap());
        assert_eq!(a, b);
    }
}
