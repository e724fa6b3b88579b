use super::ink::LINE_INK;
use super::{Mark, PatternInput};

/// Cells lighter than this get no lines
const MIN_DARKNESS: f32 = 0.06;

/// Evenly spaced lines inside a cell; darker cells get more of them
fn line_count(darkness: f32, texture: f32) -> u32 {
    1 + (darkness * (1.4 + texture * 3.8)).floor() as u32
}

fn parallel_thickness(input: &PatternInput<'_>) -> f32 {
    (input.cell_size() * (0.1 + input.texture * 0.12)).max(1.0)
}

/// Horizontal strokes spanning 10%..90% of the cell width
pub fn horizontal_marks(input: &PatternInput<'_>) -> Vec<Mark> {
    parallel_marks(input, |x0, y0, s, offset| {
        ((x0 + s * 0.1, y0 + offset), (x0 + s * 0.9, y0 + offset))
    })
}

/// Vertical strokes spanning 10%..90% of the cell height
pub fn vertical_marks(input: &PatternInput<'_>) -> Vec<Mark> {
    parallel_marks(input, |x0, y0, s, offset| {
        ((x0 + offset, y0 + s * 0.1), (x0 + offset, y0 + s * 0.9))
    })
}

type Segment = ((f32, f32), (f32, f32));

fn parallel_marks(
    input: &PatternInput<'_>,
    segment: impl Fn(f32, f32, f32, f32) -> Segment,
) -> Vec<Mark> {
    let size = input.cell_size();
    let width = parallel_thickness(input);
    let mut marks = Vec::new();

    for cell in input.cells().filter(|c| c.darkness >= MIN_DARKNESS) {
        let count = line_count(cell.darkness, input.texture);
        let step = size / (count + 1) as f32;
        let color = input.ink(cell.index, LINE_INK);

        for n in 1..=count {
            let (from, to) = segment(cell.x0, cell.y0, size, n as f32 * step);
            marks.push(Mark::Line {
                from,
                to,
                width,
                color,
                alpha: cell.darkness,
            });
        }
    }

    marks
}

/// Up to three strokes per cell: an anti-diagonal always, then a diagonal
/// and a vertical as darkness crosses texture-dependent thresholds.
pub fn cross_marks(input: &PatternInput<'_>) -> Vec<Mark> {
    let s = input.cell_size();
    let t = input.texture;
    let width = (s * (0.08 + t * 0.11)).max(1.0);
    let diagonal_at = 0.3 - t * 0.12;
    let vertical_at = 0.62 - t * 0.15;
    let mut marks = Vec::new();

    for cell in input.cells().filter(|c| c.darkness >= MIN_DARKNESS) {
        let d = cell.darkness;
        let color = input.ink(cell.index, LINE_INK);
        let at = |fx: f32, fy: f32| (cell.x0 + s * fx, cell.y0 + s * fy);
        let mut line = |from, to, alpha| {
            marks.push(Mark::Line {
                from,
                to,
                width,
                color,
                alpha,
            })
        };

        line(at(0.12, 0.88), at(0.88, 0.12), d);
        if d > diagonal_at {
            line(at(0.12, 0.12), at(0.88, 0.88), d * 0.9);
        }
        if d > vertical_at {
            line(at(0.5, 0.08), at(0.5, 0.92), d * 0.8);
        }
    }

    marks
}
