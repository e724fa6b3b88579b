use super::ink::LINE_INK;
use super::noise::hash_noise;
use super::{Mark, PatternInput};

const MIN_DARKNESS: f32 = 0.05;

/// Square specks scattered inside each cell by [`hash_noise`].
///
/// Darker cells get more specks, and every speck is at least 35% opaque.
pub fn stipple_marks(input: &PatternInput<'_>) -> Vec<Mark> {
    let s = input.cell_size();
    let t = input.texture;
    let size = (s * (0.14 + t * 0.2)).max(1.0);
    let room = (s - size) as f64;
    let mut marks = Vec::new();

    for cell in input.cells().filter(|c| c.darkness >= MIN_DARKNESS) {
        let count = 1 + (cell.darkness * (2.5 + t * 6.5)).floor() as u32;
        let color = input.ink(cell.index, LINE_INK);
        let alpha = 0.35 + cell.darkness * 0.65;

        for n in 0..count {
            let rx = hash_noise(cell.x, cell.y, n + 1);
            let ry = hash_noise(cell.y, cell.x, n + 11);
            marks.push(Mark::Rect {
                x: (cell.x0 as f64 + rx * room) as f32,
                y: (cell.y0 as f64 + ry * room) as f32,
                width: size,
                height: size,
                color,
                alpha,
            });
        }
    }

    marks
}
