use tone_dither::Rgb;

/// A single drawing primitive in output pixel coordinates.
///
/// `alpha` is the opacity in `[0, 1]` the mark is composited with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mark {
    /// Filled circle, always opaque
    Disc {
        cx: f32,
        cy: f32,
        radius: f32,
        color: Rgb,
    },
    /// Stroked straight segment
    Line {
        from: (f32, f32),
        to: (f32, f32),
        width: f32,
        color: Rgb,
        alpha: f32,
    },
    /// Filled axis-aligned rectangle
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Rgb,
        alpha: f32,
    },
}

impl Mark {
    pub fn color(&self) -> Rgb {
        match *self {
            Mark::Disc { color, .. } | Mark::Line { color, .. } | Mark::Rect { color, .. } => color,
        }
    }

    pub fn alpha(&self) -> f32 {
        match *self {
            Mark::Disc { .. } => 1.0,
            Mark::Line { alpha, .. } | Mark::Rect { alpha, .. } => alpha,
        }
    }
}
