use tone_dither::{clamp_channel, mix_white_to, Rgb};

use super::{Mark, PatternInput};
use crate::models::ColorMode;

/// One opaque square per cell.
///
/// Mono mode paints the grey of the dithered tone itself; the other modes
/// blend from white toward the ink by darkness.
pub fn block_marks(input: &PatternInput<'_>) -> Vec<Mark> {
    let size = input.cell_size();

    input
        .cells()
        .map(|cell| {
            let color = match input.color_mode {
                ColorMode::Mono => {
                    let grey = clamp_channel(cell.value);
                    Rgb::new(grey, grey, grey)
                }
                _ => mix_white_to(input.ink(cell.index, Rgb::WHITE), cell.darkness),
            };
            Mark::Rect {
                x: cell.x0,
                y: cell.y0,
                width: size,
                height: size,
                color,
                alpha: 1.0,
            }
        })
        .collect()
}
