use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use halftone::models::{RenderSettings, Style};
use halftone::services::HalftonePipeline;

#[derive(Parser)]
#[command(name = "halftone")]
#[command(about = "Halftone - render images as dithered dots, hatching and stipple")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render an image to a stylized PNG
    Render {
        /// Input image (PNG, JPEG, GIF, BMP or WebP)
        input: PathBuf,

        /// Output PNG path (default: <input>-<style>-<color-mode>.png)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Style: dot, floyd, atkinson, bayer, grain or pixel
        #[arg(short, long)]
        style: Option<String>,

        /// Color mode: mono, theme or source
        #[arg(short, long)]
        color_mode: Option<String>,

        /// Theme ink as hex, e.g. "#c74634"
        #[arg(long)]
        theme_color: Option<String>,

        /// Output pixels per processed pixel
        #[arg(long)]
        scale: Option<u32>,

        /// Number of tone levels (at least 2)
        #[arg(short, long)]
        levels: Option<u32>,

        /// Contrast percent, 100 is neutral
        #[arg(long)]
        contrast: Option<f32>,

        /// Texture percent, 0 to 100
        #[arg(short, long)]
        texture: Option<f32>,

        /// YAML settings file (default: $HALFTONE_CONFIG)
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Write the original image fitted to the preview size
    Preview {
        /// Input image
        input: PathBuf,

        /// Output PNG path (default: <input>-preview.png)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List available styles
    Styles,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Render {
            input,
            output,
            style,
            color_mode,
            theme_color,
            scale,
            levels,
            contrast,
            texture,
            config,
        }) => {
            init_logging();
            let config =
                config.or_else(|| std::env::var("HALFTONE_CONFIG").ok().map(PathBuf::from));
            let mut settings = RenderSettings::load(config.as_deref());

            if let Some(style) = style {
                settings.style = style;
            }
            if let Some(color_mode) = color_mode {
                settings.color_mode = color_mode;
            }
            if let Some(theme_color) = theme_color {
                settings.theme_color = theme_color;
            }
            if let Some(scale) = scale {
                settings.scale = scale;
            }
            if let Some(levels) = levels {
                settings.levels = levels;
            }
            if let Some(contrast) = contrast {
                settings.contrast = contrast;
            }
            if let Some(texture) = texture {
                settings.texture = texture;
            }

            run_render_command(&input, output, &settings)
        }
        Some(Commands::Preview { input, output }) => {
            init_logging();
            run_preview_command(&input, output)
        }
        Some(Commands::Styles) => {
            run_styles_command();
            Ok(())
        }
        None => {
            run_status_command();
            Ok(())
        }
    }
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "halftone=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

/// Render one image to a PNG file
fn run_render_command(
    input: &Path,
    output: Option<PathBuf>,
    settings: &RenderSettings,
) -> anyhow::Result<()> {
    let params = settings.resolve()?;

    let mut pipeline = HalftonePipeline::new();
    pipeline.load(&std::fs::read(input)?)?;
    let rendered = pipeline.render(&params)?;

    let output = output
        .unwrap_or_else(|| input.with_file_name(params.output_file_name(&file_stem(input))));
    let written = rendered.write_png(&output)?;

    println!("{}", rendered.summary);
    println!("Wrote {} ({} bytes)", output.display(), written);
    Ok(())
}

fn run_preview_command(input: &Path, output: Option<PathBuf>) -> anyhow::Result<()> {
    let mut pipeline = HalftonePipeline::new();
    pipeline.load(&std::fs::read(input)?)?;
    let preview = pipeline.preview()?;

    let output =
        output.unwrap_or_else(|| input.with_file_name(format!("{}-preview.png", file_stem(input))));
    let written = preview.write_png(&output)?;

    println!("{}", preview.summary);
    println!("Wrote {} ({} bytes)", output.display(), written);
    Ok(())
}

fn run_styles_command() {
    println!("Styles:");
    for style in Style::ALL {
        println!(
            "  {:<9} {} + {}",
            style.name(),
            style.algorithm(),
            style.pattern().name()
        );
    }
}

fn run_status_command() {
    println!("halftone {}", env!("CARGO_PKG_VERSION"));
    println!("Usage: halftone render <INPUT> [--style dot|floyd|atkinson|bayer|grain|pixel]");
    println!("Run `halftone --help` for all commands.");
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
