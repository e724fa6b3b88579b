//! Ink-pattern rendering.
//!
//! A [`Pattern`] turns a dithered tone buffer into a list of [`Mark`]s, one
//! cell of `scale x scale` output pixels per processed pixel. The
//! [`Canvas`] rasterizes those marks onto a white tiny-skia pixmap.

pub mod canvas;
pub mod dots;
pub mod hatch;
pub mod ink;
pub mod marks;
pub mod noise;
pub mod pixel;
pub mod png_output;
pub mod stipple;

pub use canvas::Canvas;
pub use ink::PatternInput;
pub use marks::Mark;
pub use png_output::encode_rgba_png;

/// Mark-placement strategy for one style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pattern {
    Dots,
    HorizontalHatch,
    VerticalHatch,
    CrossHatch,
    Stipple,
    PixelBlocks,
}

impl Pattern {
    pub fn name(self) -> &'static str {
        match self {
            Pattern::Dots => "dots",
            Pattern::HorizontalHatch => "horizontal hatch",
            Pattern::VerticalHatch => "vertical hatch",
            Pattern::CrossHatch => "cross hatch",
            Pattern::Stipple => "stipple",
            Pattern::PixelBlocks => "pixel blocks",
        }
    }

    /// Place marks for every cell of `input`
    pub fn marks(self, input: &PatternInput<'_>) -> Vec<Mark> {
        match self {
            Pattern::Dots => dots::dot_marks(input),
            Pattern::HorizontalHatch => hatch::horizontal_marks(input),
            Pattern::VerticalHatch => hatch::vertical_marks(input),
            Pattern::CrossHatch => hatch::cross_marks(input),
            Pattern::Stipple => stipple::stipple_marks(input),
            Pattern::PixelBlocks => pixel::block_marks(input),
        }
    }
}
