/// Degrees-to-radians factor the stipple hash was tuned with
const DEG_TO_RAD: f64 = 0.0174533;

/// Deterministic pseudo-random value in `[0, 1)` for a cell and seed.
///
/// `frac(sin((x*127.1 + y*311.7 + seed*17.3) * DEG_TO_RAD) * 43758.5453)`.
/// Pure, so the same image renders the same stipple every time.
pub fn hash_noise(x: usize, y: usize, seed: u32) -> f64 {
    let angle = (x as f64 * 127.1 + y as f64 * 311.7 + seed as f64 * 17.3) * DEG_TO_RAD;
    let t = angle.sin() * 43758.5453;
    t - t.floor()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_reproducible() {
        for (x, y, s) in [(0, 0, 1), (3, 7, 11), (259, 1, 5)] {
            assert_eq!(hash_noise(x, y, s), hash_noise(x, y, s));
        }
    }

    #[test]
    fn test_hash_stays_in_unit_interval() {
        for x in 0..40 {
            for y in 0..40 {
                for s in [1, 2, 11, 12, 30] {
                    let v = hash_noise(x, y, s);
                    assert!((0.0..1.0).contains(&v), "hash({x},{y},{s}) = {v}");
                }
            }
        }
    }

    #[test]
    fn test_hash_known_value() {
        // sin(17.3 * DEG_TO_RAD) * 43758.5453
        let t = (17.3f64 * DEG_TO_RAD).sin() * 43758.5453;
        assert_eq!(hash_noise(0, 0, 1), t - t.floor());
    }

    #[test]
    fn test_hash_depends_on_argument_order() {
        assert_ne!(hash_noise(1, 2, 3), hash_noise(2, 1, 3));
    }
}
