use tone_dither::{darkness, Levels, Rgb};

use crate::models::ColorMode;

/// Ink for dots in mono mode
pub const DOT_INK: Rgb = Rgb::new(17, 17, 17);

/// Ink for lines, stipple and blocks in mono mode
pub const LINE_INK: Rgb = Rgb::new(20, 20, 20);

/// Everything a pattern needs to place marks.
///
/// `values` holds one dithered tone per cell in row-major order and
/// `source_rgba` the downsampled source pixels of the same dimensions.
#[derive(Debug, Clone, Copy)]
pub struct PatternInput<'a> {
    pub values: &'a [f32],
    pub source_rgba: &'a [u8],
    pub width: usize,
    pub height: usize,
    pub scale: u32,
    pub levels: Levels,
    pub color_mode: ColorMode,
    pub theme: Rgb,
    /// Texture fraction in `[0, 1]`
    pub texture: f32,
}

/// One processed pixel and the output cell it maps to
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
    pub index: usize,
    pub value: f32,
    pub darkness: f32,
    /// Top-left corner of the cell in output pixels
    pub x0: f32,
    pub y0: f32,
}

impl PatternInput<'_> {
    pub fn cell_size(&self) -> f32 {
        self.scale as f32
    }

    /// Cells in row-major order.
    ///
    /// `values` must hold `width * height` tones and `source_rgba` as many
    /// RGBA pixels; debug builds assert both.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let cells = self.width * self.height;
        debug_assert_eq!(
            self.values.len(),
            cells,
            "tone length ({}) must match width * height ({}x{})",
            self.values.len(),
            self.width,
            self.height,
        );
        debug_assert_eq!(
            self.source_rgba.len(),
            cells * 4,
            "source length ({}) must match width * height * 4 ({}x{})",
            self.source_rgba.len(),
            self.width,
            self.height,
        );

        let size = self.cell_size();
        (0..self.height).flat_map(move |y| {
            (0..self.width).map(move |x| {
                let index = y * self.width + x;
                let value = self.values.get(index).copied().unwrap_or(255.0);
                Cell {
                    x,
                    y,
                    index,
                    value,
                    darkness: darkness(value),
                    x0: x as f32 * size,
                    y0: y as f32 * size,
                }
            })
        })
    }

    /// Ink for a mark at `index`, with `mono` as the fixed mono-mode ink
    pub fn ink(&self, index: usize, mono: Rgb) -> Rgb {
        match self.color_mode {
            ColorMode::Mono => mono,
            ColorMode::Theme => self.theme,
            ColorMode::Source => Rgb::from_rgba_pixel(self.source_rgba, index).unwrap_or(mono),
        }
    }
}
