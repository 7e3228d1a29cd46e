//! Turns any raster source into a square single channel intensity matrix.

use std::path::Path;

use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageReader};
use log::debug;

use crate::error::LoadError;
use crate::matrix::{self, GrayMatrix};

/// Loads `path` and normalizes it to a `size x size` luma matrix.
pub fn normalize_file(path: impl AsRef<Path>, size: u32) -> Result<GrayMatrix, LoadError> {
    check_size(size)?;
    normalize_image(&open(path.as_ref())?, size)
}

/// Same as [`normalize_file`] for an encoded image held in memory.
pub fn normalize_bytes(bytes: &[u8], size: u32) -> Result<GrayMatrix, LoadError> {
    check_size(size)?;
    let image = image::load_from_memory(bytes).map_err(|source| LoadError::Decode { source })?;
    normalize_image(&image, size)
}

/// Converts to luma and resamples bilinearly to `size x size`.
pub fn normalize_image(image: &DynamicImage, size: u32) -> Result<GrayMatrix, LoadError> {
    check_size(size)?;
    let mut luma = image.to_luma8();
    if luma.dimensions() != (size, size) {
        debug!(
            "resampling {:?} to {size}x{size}",
            luma.dimensions()
        );
        luma = imageops::resize(&luma, size, size, FilterType::Triangle);
    }

    Ok(matrix::from_gray_image(&luma))
}

/// Loads `path` as luma at its native size.
pub fn load_file(path: impl AsRef<Path>) -> Result<GrayMatrix, LoadError> {
    let image = open(path.as_ref())?;
    Ok(matrix::from_gray_image(&image.to_luma8()))
}

fn open(path: &Path) -> Result<DynamicImage, LoadError> {
    let reader = ImageReader::open(path)
        .and_then(|r| r.with_guessed_format())
        .map_err(|_| LoadError::NotFound(path.to_path_buf()))?;

    reader.decode().map_err(|source| LoadError::Decode { source })
}

fn check_size(size: u32) -> Result<(), LoadError> {
    if size == 0 {
        return Err(LoadError::InvalidSize(size));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, Rgb, RgbImage};
    use std::io::Cursor;
    use tempfile::tempdir;

    fn png_bytes(image: &DynamicImage) -> Vec<u8> {
        let mut buf = Cursor::new(Vec::new());
        image
            .write_to(&mut buf, image::ImageFormat::Png)
            .expect("Failed to encode png");
        buf.into_inner()
    }

    #[test]
    fn should_resample_to_the_requested_square() {
        let img = DynamicImage::ImageLuma8(GrayImage::from_pixel(40, 20, Luma([90])));
        let m = normalize_image(&img, 16).unwrap();

        assert_eq!(m.dim(), (16, 16));
        assert!(m.iter().all(|&v| v == 90));
    }

    #[test]
    fn should_keep_pixels_when_the_size_already_matches() {
        let img = GrayImage::from_fn(8, 8, |x, y| Luma([(x * 8 + y) as u8]));
        let m = normalize_image(&DynamicImage::ImageLuma8(img.clone()), 8).unwrap();

        assert_eq!(matrix::to_gray_image(&m), img);
    }

    #[test]
    fn should_convert_color_to_a_single_channel() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(4, 4, Rgb([255, 255, 255])));
        let m = normalize_bytes(&png_bytes(&img), 4).unwrap();

        assert!(m.iter().all(|&v| v == 255));
    }

    #[test]
    fn should_load_files_from_disk() {
        let dir = tempdir().expect("Failed to create temporary directory");
        let path = dir.path().join("host.png");
        GrayImage::from_pixel(10, 6, Luma([3]))
            .save(&path)
            .expect("Failed to write fixture");

        assert_eq!(normalize_file(&path, 32).unwrap().dim(), (32, 32));
        assert_eq!(load_file(&path).unwrap().dim(), (6, 10));
    }

    #[test]
    fn should_report_missing_files() {
        let err = normalize_file("/does/not/exist.png", 512).unwrap_err();

        assert!(matches!(err, LoadError::NotFound(_)));
    }

    #[test]
    fn should_report_undecodable_data() {
        let err = normalize_bytes(b"definitely not an image", 512).unwrap_err();

        assert!(matches!(err, LoadError::Decode { .. }));
    }

    #[test]
    fn should_reject_a_zero_size() {
        let img = DynamicImage::ImageLuma8(GrayImage::new(2, 2));

        assert!(matches!(
            normalize_image(&img, 0),
            Err(LoadError::InvalidSize(0))
        ));
    }
}
