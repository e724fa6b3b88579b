pub mod pipeline;
pub mod source;

pub use pipeline::{render_halftone, HalftonePipeline, PreviewOutput, RenderOutput};
pub use source::SourceImage;
