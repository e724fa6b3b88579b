use std::fmt;
use std::str::FromStr;

use tone_dither::DitherAlgorithm;

use crate::error::PipelineError;
use crate::rendering::Pattern;

/// A rendering style: one dither algorithm bound to one ink pattern.
///
/// The pairing is fixed per variant, so a style can never mix, say, Atkinson
/// diffusion with dot marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Style {
    /// Threshold quantization, filled circles
    #[default]
    Dot,
    /// Floyd-Steinberg diffusion, horizontal hatching
    Floyd,
    /// Atkinson diffusion, vertical hatching
    Atkinson,
    /// Ordered 4x4 Bayer dithering, cross hatching
    Bayer,
    /// Threshold quantization, scattered stipple
    Grain,
    /// Threshold quantization, flat pixel blocks
    Pixel,
}

impl Style {
    pub const ALL: [Style; 6] = [
        Style::Dot,
        Style::Floyd,
        Style::Atkinson,
        Style::Bayer,
        Style::Grain,
        Style::Pixel,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Style::Dot => "dot",
            Style::Floyd => "floyd",
            Style::Atkinson => "atkinson",
            Style::Bayer => "bayer",
            Style::Grain => "grain",
            Style::Pixel => "pixel",
        }
    }

    /// The dither algorithm this style quantizes with
    pub fn algorithm(self) -> DitherAlgorithm {
        match self {
            Style::Dot | Style::Grain | Style::Pixel => DitherAlgorithm::Threshold,
            Style::Floyd => DitherAlgorithm::FloydSteinberg,
            Style::Atkinson => DitherAlgorithm::Atkinson,
            Style::Bayer => DitherAlgorithm::Ordered,
        }
    }

    /// The ink pattern this style draws with
    pub fn pattern(self) -> Pattern {
        match self {
            Style::Dot => Pattern::Dots,
            Style::Floyd => Pattern::HorizontalHatch,
            Style::Atkinson => Pattern::VerticalHatch,
            Style::Bayer => Pattern::CrossHatch,
            Style::Grain => Pattern::Stipple,
            Style::Pixel => Pattern::PixelBlocks,
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Style {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Style::ALL
            .into_iter()
            .find(|style| style.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                PipelineError::InvalidParameter(format!(
                    "unknown style {s:?} (expected one of: dot, floyd, atkinson, bayer, grain, pixel)"
                ))
            })
    }
}
