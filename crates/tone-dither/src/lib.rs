#![allow(clippy::needless_range_loop)]

//! tone-dither: tone reduction and dithering for halftone rendering
//!
//! This library turns RGBA pixels into a quantized scalar tone buffer, ready
//! for an ink-pattern renderer to consume.
//!
//! # Quick Start
//!
//! ```
//! use tone_dither::{DitherAlgorithm, Levels, ToneBuffer};
//!
//! let rgba = vec![128u8; 4 * 4 * 4];
//! let levels = Levels::new(2).unwrap();
//!
//! let tone = ToneBuffer::from_rgba(&rgba, 4, 4, 110.0, levels).unwrap();
//! let quantized = DitherAlgorithm::FloydSteinberg.apply(tone.values(), 4, 4, levels);
//!
//! assert_eq!(quantized.len(), 16);
//! ```
//!
//! # Pipeline Overview
//!
//! ```text
//! RGBA source (0..=255 per channel)
//!     |
//!     v
//! luminance            0.299 R + 0.587 G + 0.114 B
//!     |
//!     v
//! contrast             (L - 128) * C/100 + 128, clamped
//!     |
//!     v
//! quantize             N evenly spaced levels
//!     |
//!     v
//! ╔═══════════════════════════════════════╗
//! ║  Dither (one of four algorithms)      ║
//! ║                                       ║
//! ║  threshold | ordered 4x4 |            ║
//! ║  floyd-steinberg | atkinson           ║
//! ║                                       ║
//! ║  -> one level value per pixel         ║
//! ╚═══════════════════════════════════════╝
//! ```
//!
//! Tone values are plain `f32` in `0..=255`. Error diffusion may push working
//! values outside that range; the quantizer always snaps back onto a level.
//!
//! # Dithering Algorithms
//!
//! - Threshold (no spatial pattern)
//! - Ordered 4×4 Bayer (regular dot grid, stateless)
//! - Floyd-Steinberg (100% error propagation)
//! - Atkinson (75% error propagation, kept deliberately)

pub mod color;
pub mod dither;
pub mod tone;


pub use color::{clamp_channel, darkness, mix_white_to, ParseColorError, Rgb};
pub use dither::{Atkinson, Dither, DitherAlgorithm, FloydSteinberg, Kernel, Ordered, Threshold};
pub use tone::{adjust_contrast, luminance, Levels, ToneBuffer, ToneError};
