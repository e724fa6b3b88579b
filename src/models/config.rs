use serde::Deserialize;
use std::path::Path;
use tone_dither::{Levels, Rgb};

use super::{ColorMode, RenderParams, Style};
use crate::error::PipelineError;

/// User-facing render settings, loaded from YAML and overridden by CLI flags.
///
/// Values stay raw until [`resolve`](Self::resolve) so a config file with a
/// bad entry is reported at render time rather than silently dropped.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct RenderSettings {
    /// Style name (dot, floyd, atkinson, bayer, grain, pixel)
    #[serde(default = "default_style")]
    pub style: String,

    /// Color mode name (mono, theme, source)
    #[serde(default = "default_color_mode")]
    pub color_mode: String,

    /// Theme ink as `#rgb` or `#rrggbb`
    #[serde(default = "default_theme_color")]
    pub theme_color: String,

    #[serde(default = "default_scale")]
    pub scale: u32,

    #[serde(default = "default_levels")]
    pub levels: u32,

    /// Contrast percent, 100 is neutral
    #[serde(default = "default_contrast")]
    pub contrast: f32,

    /// Texture percent, 0 to 100
    #[serde(default = "default_texture")]
    pub texture: f32,
}

fn default_style() -> String {
    Style::default().name().to_string()
}

fn default_color_mode() -> String {
    ColorMode::default().name().to_string()
}

fn default_theme_color() -> String {
    RenderParams::DEFAULT_THEME_COLOR.to_hex()
}

fn default_scale() -> u32 {
    8
}

fn default_levels() -> u32 {
    2
}

fn default_contrast() -> f32 {
    110.0
}

fn default_texture() -> f32 {
    55.0
}

impl RenderSettings {
    /// Load settings from an optional YAML file.
    ///
    /// A missing path yields defaults. Unreadable or unparsable files log a
    /// warning and also yield defaults.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml_str(&content) {
                Ok(settings) => {
                    tracing::info!(
                        path = %path.display(),
                        style = %settings.style,
                        color_mode = %settings.color_mode,
                        "Loaded render settings"
                    );
                    settings
                }
                Err(e) => {
                    tracing::warn!(%e, path = %path.display(), "Failed to parse settings, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read settings, using defaults");
                Self::default()
            }
        }
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, serde_yaml::Error> {
        // An empty document deserializes as null, not as an empty mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Validate every field and produce render parameters
    pub fn resolve(&self) -> Result<RenderParams, PipelineError> {
        let style: Style = self.style.parse()?;
        let color_mode: ColorMode = self.color_mode.parse()?;
        let theme_color: Rgb = self.theme_color.parse()?;
        let levels = Levels::new(self.levels)?;

        if self.scale == 0 {
            return Err(PipelineError::InvalidParameter(
                "scale must be at least 1".to_string(),
            ));
        }
        if !(self.contrast.is_finite() && self.contrast > 0.0) {
            return Err(PipelineError::InvalidParameter(format!(
                "contrast must be a positive percentage, got {}",
                self.contrast
            )));
        }
        if !(0.0..=100.0).contains(&self.texture) {
            return Err(PipelineError::InvalidParameter(format!(
                "texture must be within 0-100, got {}",
                self.texture
            )));
        }

        Ok(RenderParams {
            style,
            color_mode,
            theme_color,
            scale: self.scale,
            levels,
            contrast: self.contrast,
            texture: self.texture / 100.0,
        })
    }
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            style: default_style(),
            color_mode: default_color_mode(),
            theme_color: default_theme_color(),
            scale: default_scale(),
            levels: default_levels(),
            contrast: default_contrast(),
            texture: default_texture(),
        }
    }
}
