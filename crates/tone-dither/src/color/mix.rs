//! Channel clamping and white-to-ink interpolation.

use super::Rgb;

/// Round a float channel value and clamp it into `0..=255`.
///
/// Rounds half up, matching how canvas-style color strings are resolved.
#[inline]
pub fn clamp_channel(value: f32) -> u8 {
    (value + 0.5).floor().clamp(0.0, 255.0) as u8
}

/// Ink coverage of a tone value: `1 - v/255`, with `v` clamped to `0..=255`.
///
/// Diffusion output may leave the nominal range; renderers always read
/// darkness through this function.
#[inline]
pub fn darkness(tone: f32) -> f32 {
    1.0 - tone.clamp(0.0, 255.0) / 255.0
}

/// Blend from white toward `color` by `darkness`.
///
/// Each channel is `255 - darkness * (255 - channel)`: darkness 0 gives
/// white, darkness 1 gives `color` unchanged.
pub fn mix_white_to(color: Rgb, darkness: f32) -> Rgb {
    let mix = |c: u8| clamp_channel(255.0 - darkness * (255.0 - c as f32));
    Rgb::new(mix(color.r), mix(color.g), mix(color.b))
}
