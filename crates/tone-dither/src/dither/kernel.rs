//! Error diffusion kernel definitions.
//!
//! Each kernel specifies how quantization error is distributed to
//! neighboring pixels that have not been visited yet.

/// An error diffusion kernel.
///
/// Each entry is an offset `(dx, dy)` from the current pixel plus a weight
/// numerator; a neighbor receives `error * weight / divisor`.
///
/// # Error Propagation
///
/// The total error propagated is `sum(weights) / divisor`. Floyd-Steinberg
/// propagates 100%; Atkinson intentionally propagates only 75%, which gives
/// it higher contrast and a lighter grain.
#[derive(Debug, Clone, Copy)]
pub struct Kernel {
    /// (dx, dy, weight) entries.
    ///
    /// - `dx`: horizontal offset (positive = right)
    /// - `dy`: vertical offset (0 = current row, positive = rows below)
    /// - `weight`: numerator of the fraction of error to diffuse
    pub entries: &'static [(i32, usize, u8)],

    /// Denominator shared by every entry.
    pub divisor: u8,
}

impl Kernel {
    /// Fraction of the residual this kernel hands on at an interior pixel.
    pub fn propagation(&self) -> f32 {
        let total: u32 = self.entries.iter().map(|&(_, _, w)| w as u32).sum();
        total as f32 / self.divisor as f32
    }

    /// Number of rows below the current one the kernel reaches.
    pub fn max_dy(&self) -> usize {
        self.entries.iter().map(|&(_, dy, _)| dy).max().unwrap_or(0)
    }
}

/// Floyd-Steinberg dithering kernel.
///
/// Distributes error to 4 neighbors with 100% total propagation (16/16).
///
/// ```text
///        X   7
///    3   5   1
/// ```
pub const FLOYD_STEINBERG: Kernel = Kernel {
    entries: &[
        (1, 0, 7),  // right
        (-1, 1, 3), // bottom-left
        (0, 1, 5),  // bottom
        (1, 1, 1),  // bottom-right
    ],
    divisor: 16,
};

/// Atkinson dithering kernel.
///
/// Distributes error to 6 neighbors with 75% total propagation (6/8).
/// The lost quarter is part of the look; it is not a rounding mistake.
///
/// ```text
///        X   1   1
///    1   1   1
///        1
/// ```
pub const ATKINSON: Kernel = Kernel {
    entries: &[
        (1, 0, 1),  // right
        (2, 0, 1),  // two right
        (-1, 1, 1), // bottom-left
        (0, 1, 1),  // bottom
        (1, 1, 1),  // bottom-right
        (0, 2, 1),  // two below
    ],
    divisor: 8,
};
