use std::fmt;
use std::str::FromStr;

use crate::error::PipelineError;

/// Ink color policy, consulted per mark at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorMode {
    /// Fixed near-black ink
    #[default]
    Mono,
    /// The user-supplied theme color
    Theme,
    /// The color of the source pixel under the mark
    Source,
}

impl ColorMode {
    pub const ALL: [ColorMode; 3] = [ColorMode::Mono, ColorMode::Theme, ColorMode::Source];

    pub fn name(self) -> &'static str {
        match self {
            ColorMode::Mono => "mono",
            ColorMode::Theme => "theme",
            ColorMode::Source => "source",
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorMode {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mono" | "monochrome" => Ok(ColorMode::Mono),
            "theme" => Ok(ColorMode::Theme),
            "source" | "original" => Ok(ColorMode::Source),
            other => Err(PipelineError::InvalidParameter(format!(
                "unknown color mode {other:?} (expected mono, theme or source)"
            ))),
        }
    }
}
