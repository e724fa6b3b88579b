use std::path::Path;
use std::time::Instant;

use image::RgbaImage;
use tiny_skia::Pixmap;
use tone_dither::ToneBuffer;

use super::SourceImage;
use crate::error::{PipelineError, RenderError};
use crate::models::{FitTarget, RenderParams};
use crate::rendering::canvas::{pixmap_to_rgba, surface_size};
use crate::rendering::{encode_rgba_png, Canvas, PatternInput};

/// A finished render
#[derive(Debug, Clone)]
pub struct RenderOutput {
    pub pixmap: Pixmap,
    pub summary: String,
    pub width: u32,
    pub height: u32,
    pub mark_count: usize,
}

impl RenderOutput {
    pub fn to_rgba(&self) -> Vec<u8> {
        pixmap_to_rgba(&self.pixmap)
    }

    pub fn encode_png(&self) -> Result<Vec<u8>, RenderError> {
        encode_rgba_png(self.width, self.height, &self.to_rgba())
    }

    /// Encode and write to `path`, returning the number of bytes written
    pub fn write_png(&self, path: &Path) -> Result<usize, RenderError> {
        write_file(path, self.encode_png()?)
    }
}

/// The source image fitted for display
#[derive(Debug, Clone)]
pub struct PreviewOutput {
    pub image: RgbaImage,
    pub summary: String,
}

impl PreviewOutput {
    pub fn encode_png(&self) -> Result<Vec<u8>, RenderError> {
        encode_rgba_png(self.image.width(), self.image.height(), self.image.as_raw())
    }

    pub fn write_png(&self, path: &Path) -> Result<usize, RenderError> {
        write_file(path, self.encode_png()?)
    }
}

fn write_file(path: &Path, bytes: Vec<u8>) -> Result<usize, RenderError> {
    std::fs::write(path, &bytes)?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "Wrote PNG");
    Ok(bytes.len())
}

/// Holds the current source image and the last successful render.
///
/// Failed loads and renders leave both untouched.
#[derive(Debug, Default)]
pub struct HalftonePipeline {
    source: Option<SourceImage>,
    last_output: Option<RenderOutput>,
}

impl HalftonePipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode `bytes` and make them the current source
    pub fn load(&mut self, bytes: &[u8]) -> Result<&SourceImage, PipelineError> {
        let source = SourceImage::decode(bytes)?;
        tracing::debug!(
            width = source.width(),
            height = source.height(),
            "Decoded source image"
        );
        Ok(self.set_source(source))
    }

    pub fn set_source(&mut self, source: SourceImage) -> &SourceImage {
        self.source.insert(source)
    }

    pub fn source(&self) -> Option<&SourceImage> {
        self.source.as_ref()
    }

    pub fn last_output(&self) -> Option<&RenderOutput> {
        self.last_output.as_ref()
    }

    /// The source fitted into the preview budget
    pub fn preview(&self) -> Result<PreviewOutput, PipelineError> {
        let source = self.source.as_ref().ok_or(PipelineError::MissingSource)?;
        let image = source.fit(FitTarget::PREVIEW);
        let summary = format!(
            "Showing original image ({}x{}).",
            image.width(),
            image.height()
        );
        Ok(PreviewOutput { image, summary })
    }

    /// Render the current source and remember the result
    pub fn render(&mut self, params: &RenderParams) -> Result<&RenderOutput, PipelineError> {
        let source = self.source.as_ref().ok_or(PipelineError::MissingSource)?;

        let start = Instant::now();
        let small = source.fit(FitTarget::PROCESSING);
        tracing::debug!(
            from_width = source.width(),
            from_height = source.height(),
            width = small.width(),
            height = small.height(),
            "Downsampled source"
        );

        let output = render_halftone(small.as_raw(), small.width(), small.height(), params)?;
        tracing::info!(
            style = %params.style,
            color_mode = %params.color_mode,
            width = output.width,
            height = output.height,
            marks = output.mark_count,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Rendered halftone"
        );

        Ok(&*self.last_output.insert(output))
    }
}

/// Run tone mapping, dithering and pattern rendering on processed pixels.
///
/// `rgba` must hold `width * height` straight RGBA8 pixels. The output
/// surface is `width * scale` by `height * scale` and must fit within
/// [`MAX_SURFACE_PIXELS`](crate::rendering::canvas::MAX_SURFACE_PIXELS).
pub fn render_halftone(
    rgba: &[u8],
    width: u32,
    height: u32,
    params: &RenderParams,
) -> Result<RenderOutput, PipelineError> {
    let (w, h) = (width as usize, height as usize);
    let (out_width, out_height) = surface_size(width, height, params.scale)?;

    let tone = ToneBuffer::from_rgba(rgba, w, h, params.contrast, params.levels)?;
    let algorithm = params.style.algorithm();
    let dither_start = Instant::now();
    let dithered = algorithm.apply(tone.values(), tone.width(), tone.height(), params.levels);
    tracing::debug!(
        algorithm = %algorithm,
        levels = params.levels.count(),
        elapsed_us = dither_start.elapsed().as_micros() as u64,
        "Dithered tone buffer"
    );

    let input = PatternInput {
        values: &dithered,
        source_rgba: rgba,
        width: w,
        height: h,
        scale: params.scale,
        levels: params.levels,
        color_mode: params.color_mode,
        theme: params.theme_color,
        texture: params.texture,
    };
    let marks = params.style.pattern().marks(&input);

    let mut canvas = Canvas::new(out_width, out_height)?;
    canvas.draw_all(&marks);

    let summary = format!(
        "Rendered {} with {} color mode at {}x{} (texture {}).",
        params.style,
        params.color_mode,
        out_width,
        out_height,
        params.texture_percent()
    );

    Ok(RenderOutput {
        pixmap: canvas.into_pixmap(),
        summary,
        width: out_width,
        height: out_height,
        mark_count: marks.len(),
    })
}
