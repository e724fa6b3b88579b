//! Quantization level count.

use super::ToneError;

/// Number of evenly spaced brightness steps across `0..=255`.
///
/// Construction rejects counts below 2, so [`quantize`](Levels::quantize)
/// never divides by zero.
///
/// # Example
///
/// ```
/// use tone_dither::Levels;
///
/// let levels = Levels::new(3).unwrap();
/// assert_eq!(levels.quantize(100.0), 127.5);
/// assert!(Levels::new(1).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Levels(u32);

impl Levels {
    /// Two levels: pure black and pure white.
    pub const BINARY: Levels = Levels(2);

    /// Validate a level count.
    pub fn new(count: u32) -> Result<Self, ToneError> {
        if count < 2 {
            return Err(ToneError::InvalidLevels(count));
        }
        Ok(Self(count))
    }

    /// The level count N.
    #[inline]
    pub fn count(self) -> u32 {
        self.0
    }

    /// Distance between adjacent levels: `255 / (N - 1)`.
    #[inline]
    pub fn step(self) -> f32 {
        255.0 / (self.0 - 1) as f32
    }

    /// Snap a tone value to the nearest level.
    ///
    /// Rounds half up. The level index is clamped to `0..N`, so the result
    /// is always one of the N steps in `0..=255`, even for values pushed out
    /// of range by accumulated diffusion error.
    #[inline]
    pub fn quantize(self, value: f32) -> f32 {
        let step = self.step();
        let max_index = (self.0 - 1) as f32;
        let index = (value / step + 0.5).floor().clamp(0.0, max_index);
        index * step
    }

    /// All N level values in ascending order.
    pub fn values(self) -> impl Iterator<Item = f32> {
        let step = self.step();
        (0..self.0).map(move |i| i as f32 * step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_fewer_than_two() {
        assert_eq!(Levels::new(0), Err(ToneError::InvalidLevels(0)));
        assert_eq!(Levels::new(1), Err(ToneError::InvalidLevels(1)));
        assert!(Levels::new(2).is_ok());
    }

    #[test]
    fn test_binary_quantize() {
        let levels = Levels::BINARY;
        assert_eq!(levels.quantize(0.0), 0.0);
        assert_eq!(levels.quantize(127.0), 0.0);
        assert_eq!(levels.quantize(127.5), 255.0);
        assert_eq!(levels.quantize(255.0), 255.0);
    }

    #[test]
    fn test_out_of_range_values_clamp_to_extremes() {
        let levels = Levels::new(4).unwrap();
        assert_eq!(levels.quantize(-90.0), 0.0);
        assert_eq!(levels.quantize(400.0), 255.0);
    }

    #[test]
    fn test_idempotent() {
        for n in 2..=16 {
            let levels = Levels::new(n).unwrap();
            let mut v = -64.0;
            while v <= 320.0 {
                let once = levels.quantize(v);
                assert_eq!(levels.quantize(once), once, "N={} v={}", n, v);
                v += 0.75;
            }
        }
    }

    #[test]
    fn test_result_is_one_of_n_values() {
        for n in [2, 3, 5, 7, 16] {
            let levels = Levels::new(n).unwrap();
            let allowed: Vec<f32> = levels.values().collect();
            assert_eq!(allowed.len(), n as usize);
            for i in 0..=300 {
                let q = levels.quantize(i as f32 - 20.0);
                assert!(allowed.contains(&q), "N={} produced {}", n, q);
                assert!((0.0..=255.0).contains(&q));
            }
        }
    }
}
