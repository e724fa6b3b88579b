//! Assertion helpers for tests.

use pretty_assertions::assert_eq;

use halftone::services::RenderOutput;

/// PNG file signature
pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Assert bytes are a PNG and decode them
pub fn assert_png(bytes: &[u8]) -> image::RgbaImage {
    assert!(
        bytes.starts_with(&PNG_SIGNATURE),
        "Expected PNG image, got {} bytes starting with {:?}",
        bytes.len(),
        &bytes[..8.min(bytes.len())]
    );
    image::load_from_memory(bytes)
        .expect("decode rendered PNG")
        .to_rgba8()
}

/// Straight RGBA of one output pixel
pub fn pixel_at(output: &RenderOutput, x: u32, y: u32) -> [u8; 4] {
    let p = output
        .pixmap
        .pixel(x, y)
        .unwrap_or_else(|| panic!("pixel ({x}, {y}) outside {}x{}", output.width, output.height))
        .demultiply();
    [p.red(), p.green(), p.blue(), p.alpha()]
}

/// Assert every output pixel has the given color
pub fn assert_uniform(output: &RenderOutput, expected: [u8; 4]) {
    for y in 0..output.height {
        for x in 0..output.width {
            assert_eq!(pixel_at(output, x, y), expected, "at ({x}, {y})");
        }
    }
}
