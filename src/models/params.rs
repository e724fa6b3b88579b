use tone_dither::{Levels, Rgb};

use super::{ColorMode, Style};

/// Validated parameters for one render.
///
/// Built by [`RenderSettings::resolve`](super::RenderSettings::resolve);
/// `texture` is a fraction in `[0, 1]`, not a percentage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderParams {
    pub style: Style,
    pub color_mode: ColorMode,
    pub theme_color: Rgb,
    /// Output pixels per processed pixel
    pub scale: u32,
    pub levels: Levels,
    /// Contrast in percent, 100 is neutral
    pub contrast: f32,
    pub texture: f32,
}

impl RenderParams {
    pub const DEFAULT_THEME_COLOR: Rgb = Rgb::new(0xc7, 0x46, 0x34);

    /// Texture as the rounded percentage reported in summaries
    pub fn texture_percent(&self) -> u32 {
        (self.texture * 100.0 + 0.5).floor().max(0.0) as u32
    }

    /// `{stem}-{style}-{color mode}.png`, with `dither` for an empty stem
    pub fn output_file_name(&self, stem: &str) -> String {
        let stem = if stem.is_empty() { "dither" } else { stem };
        format!("{stem}-{}-{}.png", self.style, self.color_mode)
    }
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            style: Style::Dot,
            color_mode: ColorMode::Mono,
            theme_color: Self::DEFAULT_THEME_COLOR,
            scale: 8,
            levels: Levels::BINARY,
            contrast: 110.0,
            texture: 0.55,
        }
    }
}
