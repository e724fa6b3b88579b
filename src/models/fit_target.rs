/// Maximum-dimension budget an image is fitted into before use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FitTarget {
    pub max_dimension: u32,
}

impl FitTarget {
    /// Processing budget: every render dithers at most 260x260 pixels
    pub const PROCESSING: Self = Self { max_dimension: 260 };

    /// Preview budget for showing the original image
    pub const PREVIEW: Self = Self { max_dimension: 960 };

    /// Scale `width`x`height` down to fit, keeping aspect ratio.
    ///
    /// Never upscales; each side is rounded half up and at least 1.
    pub fn fit(&self, width: u32, height: u32) -> (u32, u32) {
        let max = self.max_dimension as f64;
        let ratio = (max / width.max(1) as f64)
            .min(max / height.max(1) as f64)
            .min(1.0);
        let side = |v: u32| ((v as f64 * ratio + 0.5).floor() as u32).max(1);
        (side(width), side(height))
    }
}
