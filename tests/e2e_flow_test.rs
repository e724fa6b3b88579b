//! End-to-end: settings file and image on disk, through the pipeline, back to
//! a PNG on disk, and the `halftone` binary doing the same.

mod common;

use common::*;
use halftone::models::RenderSettings;
use halftone::services::HalftonePipeline;
use pretty_assertions::assert_eq;
use std::process::Command;

#[test]
fn test_settings_file_to_png() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("halftone.yaml");
    std::fs::write(
        &config,
        "style: floyd\ncolor_mode: theme\ntheme_color: \"#1e90ff\"\nscale: 4\nlevels: 3\n",
    )
    .unwrap();
    let input = dir.path().join("ramp.png");
    std::fs::write(&input, gradient_png(64, 32)).unwrap();

    let params = RenderSettings::load(Some(config.as_path())).resolve().unwrap();
    let mut pipeline = HalftonePipeline::new();
    pipeline.load(&std::fs::read(&input).unwrap()).unwrap();
    let output = pipeline.render(&params).unwrap();

    assert_eq!(
        output.summary,
        "Rendered floyd with theme color mode at 256x128 (texture 55)."
    );

    let out_path = dir.path().join(params.output_file_name("ramp"));
    std::fs::write(&out_path, output.encode_png().unwrap()).unwrap();
    assert!(out_path.ends_with("ramp-floyd-theme.png"));

    let decoded = assert_png(&std::fs::read(&out_path).unwrap());
    assert_eq!(decoded.dimensions(), (256, 128));
    assert_eq!(decoded.as_raw(), &output.to_rgba());
}

#[test]
fn test_cli_render_uses_default_output_name() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("photo.png");
    std::fs::write(&input, gradient_png(20, 10)).unwrap();

    let status = Command::new(env!("CARGO_BIN_EXE_halftone"))
        .args(["render", "--style", "grain", "--scale", "2"])
        .arg(&input)
        .env_remove("HALFTONE_CONFIG")
        .status()
        .unwrap();
    assert!(status.success());

    let written = dir.path().join("photo-grain-mono.png");
    let decoded = assert_png(&std::fs::read(written).unwrap());
    assert_eq!(decoded.dimensions(), (40, 20));
}

#[test]
fn test_cli_rejects_unknown_style() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("photo.png");
    std::fs::write(&input, solid_png(4, 4, BLACK)).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_halftone"))
        .args(["render", "--style", "sierra"])
        .arg(&input)
        .env_remove("HALFTONE_CONFIG")
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown style"));
    assert!(!dir.path().join("photo-sierra-mono.png").exists());
}

#[test]
fn test_cli_lists_styles() {
    let output = Command::new(env!("CARGO_BIN_EXE_halftone"))
        .arg("styles")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    for name in ["dot", "floyd", "atkinson", "bayer", "grain", "pixel"] {
        assert!(stdout.contains(name), "missing {name} in:\n{stdout}");
    }
}

#[test]
fn test_cli_preview_writes_fitted_original() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("wide.png");
    std::fs::write(&input, solid_png(1200, 300, RED)).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_halftone"))
        .arg("preview")
        .arg(&input)
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Showing original image (960x240)."));

    let decoded = assert_png(&std::fs::read(dir.path().join("wide-preview.png")).unwrap());
    assert_eq!(decoded.dimensions(), (960, 240));
}
