use super::ink::DOT_INK;
use super::{Mark, PatternInput};

/// Discs smaller than this are not drawn
const MIN_RADIUS: f32 = 0.2;

/// One centered disc per cell, radius proportional to darkness.
///
/// `radius = d * s * 0.45 * N * boost / max(N - 1, 1)` with
/// `boost = 0.6 + texture * 0.9`.
pub fn dot_marks(input: &PatternInput<'_>) -> Vec<Mark> {
    let size = input.cell_size();
    let n = input.levels.count() as f32;
    let boost = 0.6 + input.texture * 0.9;
    let spread = (n - 1.0).max(1.0);

    input
        .cells()
        .filter_map(|cell| {
            let radius = cell.darkness * size * 0.45 * n * boost / spread;
            (radius > MIN_RADIUS).then(|| Mark::Disc {
                cx: cell.x0 + size / 2.0,
                cy: cell.y0 + size / 2.0,
                radius,
                color: input.ink(cell.index, DOT_INK),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ColorMode;
    use crate::rendering::test_support::{Fixture, THEME};

    #[test]
    fn test_black_cell_disc() {
        let fixture = Fixture::uniform(1, 1, 0.0);
        let marks = dot_marks(&fixture.input(8, 0.55, ColorMode::Mono));

        assert_eq!(marks.len(), 1);
        match marks[0] {
            Mark::Disc {
                cx,
                cy,
                radius,
                color,
            } => {
                assert_eq!((cx, cy), (4.0, 4.0));
                assert!((radius - 7.884).abs() < 1e-4, "radius {radius}");
                assert_eq!(color, DOT_INK);
            }
            other => panic!("expected a disc, got {other:?}"),
        }
    }

    #[test]
    fn test_white_cells_have_no_disc() {
        let fixture = Fixture::from_values(vec![255.0, 0.0, 255.0], 3, 1);
        let marks = dot_marks(&fixture.input(8, 0.55, ColorMode::Mono));

        assert_eq!(marks.len(), 1);
        assert!(matches!(marks[0], Mark::Disc { cx, .. } if cx == 12.0));
    }

    #[test]
    fn test_tiny_radius_is_skipped() {
        // d = 1/255 gives a radius well below the cutoff at scale 2
        let fixture = Fixture::uniform(1, 1, 254.0);
        assert!(dot_marks(&fixture.input(2, 0.0, ColorMode::Mono)).is_empty());
    }

    #[test]
    fn test_theme_ink() {
        let fixture = Fixture::uniform(2, 2, 0.0);
        let marks = dot_marks(&fixture.input(6, 0.55, ColorMode::Theme));

        assert_eq!(marks.len(), 4);
        assert!(marks.iter().all(|m| m.color() == THEME && m.alpha() == 1.0));
    }

    #[test]
    fn test_texture_grows_discs() {
        let fixture = Fixture::uniform(1, 1, 128.0);
        let radius = |texture| match dot_marks(&fixture.input(8, texture, ColorMode::Mono))[0] {
            Mark::Disc { radius, .. } => radius,
            _ => unreachable!(),
        };
        assert!(radius(1.0) > radius(0.0));
    }
}
