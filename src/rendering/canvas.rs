use tiny_skia::{Color, FillRule, Paint, PathBuilder, Pixmap, Rect, Stroke, Transform};
use tone_dither::Rgb;

use super::Mark;
use crate::error::RenderError;

/// Largest surface a canvas allocates, in pixels (256 MiB of RGBA)
pub const MAX_SURFACE_PIXELS: u64 = 64 * 1024 * 1024;

/// Output size of a `width`x`height` cell grid at `scale` pixels per cell
pub fn surface_size(width: u32, height: u32, scale: u32) -> Result<(u32, u32), RenderError> {
    let unsupported = || RenderError::UnsupportedDimensions {
        width: width.saturating_mul(scale),
        height: height.saturating_mul(scale),
    };
    let out_width = width.checked_mul(scale).ok_or_else(unsupported)?;
    let out_height = height.checked_mul(scale).ok_or_else(unsupported)?;
    check_surface(out_width, out_height)?;
    Ok((out_width, out_height))
}

fn check_surface(width: u32, height: u32) -> Result<(), RenderError> {
    if width == 0 || height == 0 || width as u64 * height as u64 > MAX_SURFACE_PIXELS {
        return Err(RenderError::UnsupportedDimensions { width, height });
    }
    Ok(())
}

/// White raster surface that [`Mark`]s are composited onto
pub struct Canvas {
    pixmap: Pixmap,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Result<Self, RenderError> {
        check_surface(width, height)?;
        let mut pixmap = Pixmap::new(width, height).ok_or(RenderError::PixmapAllocation)?;
        pixmap.fill(Color::WHITE);
        Ok(Self { pixmap })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Composite marks in order, later marks over earlier ones
    pub fn draw_all(&mut self, marks: &[Mark]) {
        for mark in marks {
            self.draw(mark);
        }
    }

    pub fn draw(&mut self, mark: &Mark) {
        match *mark {
            Mark::Disc {
                cx,
                cy,
                radius,
                color,
            } => {
                // Degenerate radii produce no path and draw nothing
                if let Some(path) = PathBuilder::from_circle(cx, cy, radius) {
                    self.pixmap.fill_path(
                        &path,
                        &paint(color, 1.0),
                        FillRule::Winding,
                        Transform::identity(),
                        None,
                    );
                }
            }
            Mark::Line {
                from,
                to,
                width,
                color,
                alpha,
            } => {
                let mut pb = PathBuilder::new();
                pb.move_to(from.0, from.1);
                pb.line_to(to.0, to.1);
                if let Some(path) = pb.finish() {
                    let stroke = Stroke {
                        width,
                        ..Stroke::default()
                    };
                    self.pixmap.stroke_path(
                        &path,
                        &paint(color, alpha),
                        &stroke,
                        Transform::identity(),
                        None,
                    );
                }
            }
            Mark::Rect {
                x,
                y,
                width,
                height,
                color,
                alpha,
            } => {
                if let Some(rect) = Rect::from_xywh(x, y, width, height) {
                    self.pixmap
                        .fill_rect(rect, &paint(color, alpha), Transform::identity(), None);
                }
            }
        }
    }

    pub fn into_pixmap(self) -> Pixmap {
        self.pixmap
    }
}

fn paint(color: Rgb, alpha: f32) -> Paint<'static> {
    let mut color = Color::from_rgba8(color.r, color.g, color.b, 255);
    color.set_alpha(alpha.clamp(0.0, 1.0));

    let mut paint = Paint::default();
    paint.set_color(color);
    paint.anti_alias = true;
    paint
}

/// Straight (non-premultiplied) RGBA8 bytes of a pixmap
pub fn pixmap_to_rgba(pixmap: &Pixmap) -> Vec<u8> {
    pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let c = p.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect()
}
