//! Color utilities for ink rendering.
//!
//! - [`Rgb`]: 8-bit RGB triple with hex parsing
//! - [`mix_white_to`]: blend from white toward an ink color by darkness
//! - [`clamp_channel`]: round and clamp a float channel into `0..=255`
//! - [`darkness`]: convert a tone value into ink coverage

mod error;
mod mix;
mod rgb;

pub use error::ParseColorError;
pub use mix::{clamp_channel, darkness, mix_white_to};
pub use rgb::Rgb;
