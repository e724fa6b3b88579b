//! Halftone - stylized dither and ink-pattern renderer
//!
//! Decodes a raster image, reduces it to a quantized tone buffer with
//! `tone-dither`, then draws dots, hatching, stipple or pixel blocks onto a
//! tiny-skia surface. This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
