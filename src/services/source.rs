use image::imageops::{self, FilterType};
use image::RgbaImage;

use crate::error::PipelineError;
use crate::models::FitTarget;

/// A decoded source image, kept at full resolution
#[derive(Debug, Clone, PartialEq)]
pub struct SourceImage {
    image: RgbaImage,
}

impl SourceImage {
    /// Decode PNG, JPEG, GIF, BMP or WebP bytes
    pub fn decode(bytes: &[u8]) -> Result<Self, PipelineError> {
        let image = image::load_from_memory(bytes)
            .map_err(|e| PipelineError::Decode(e.to_string()))?
            .to_rgba8();
        Self::from_image(image)
    }

    /// Wrap already-decoded straight RGBA8 pixels
    pub fn from_rgba(width: u32, height: u32, rgba: Vec<u8>) -> Result<Self, PipelineError> {
        let len = rgba.len();
        let image = RgbaImage::from_raw(width, height, rgba).ok_or_else(|| {
            PipelineError::Decode(format!(
                "{len} bytes do not hold a {width}x{height} RGBA image"
            ))
        })?;
        Self::from_image(image)
    }

    fn from_image(image: RgbaImage) -> Result<Self, PipelineError> {
        if image.width() == 0 || image.height() == 0 {
            return Err(PipelineError::Decode("image has no pixels".to_string()));
        }
        Ok(Self { image })
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Downsample into `target` with a triangle filter; never upscales
    pub fn fit(&self, target: FitTarget) -> RgbaImage {
        let (width, height) = target.fit(self.width(), self.height());
        if (width, height) == (self.width(), self.height()) {
            return self.image.clone();
        }
        imageops::resize(&self.image, width, height, FilterType::Triangle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rgba_checks_length() {
        assert!(SourceImage::from_rgba(2, 2, vec![0; 16]).is_ok());
        assert!(matches!(
            SourceImage::from_rgba(2, 2, vec![0; 15]),
            Err(PipelineError::Decode(_))
        ));
    }

    #[test]
    fn test_from_rgba_rejects_empty() {
        assert!(SourceImage::from_rgba(0, 0, Vec::new()).is_err());
    }

    #[test]
    fn test_decode_garbage() {
        assert!(matches!(
            SourceImage::decode(b"definitely not an image"),
            Err(PipelineError::Decode(_))
        ));
    }

    #[test]
    fn test_fit_downsamples_large_images() {
        let source = SourceImage::from_rgba(520, 100, vec![90; 520 * 100 * 4]).unwrap();
        let fitted = source.fit(FitTarget::PROCESSING);

        assert_eq!(fitted.dimensions(), (260, 50));
        // A flat image stays flat through the filter
        assert!(fitted.as_raw().iter().all(|&b| (89..=91).contains(&b)));
    }

    #[test]
    fn test_fit_keeps_small_images() {
        let rgba: Vec<u8> = (0..16).collect();
        let source = SourceImage::from_rgba(2, 2, rgba.clone()).unwrap();
        assert_eq!(source.fit(FitTarget::PROCESSING).as_raw(), &rgba);
    }
}
