//! Intensity matrices in their two value domains.
//!
//! `GrayMatrix` holds storable 8-bit samples, `FloatMatrix` is what all transforms compute on.
//! Both are indexed `[[row, column]]`, so a `w x h` image becomes a `(h, w)` matrix.

use image::imageops::{self, FilterType};
use image::{GrayImage, Luma};
use ndarray::Array2;

pub type GrayMatrix = Array2<u8>;
pub type FloatMatrix = Array2<f64>;

pub fn to_float(matrix: &GrayMatrix) -> FloatMatrix {
    matrix.mapv(f64::from)
}

/// Clamps every sample into `[0, 255]` and rounds it, the only way back from the float domain.
pub fn to_gray(matrix: &FloatMatrix) -> GrayMatrix {
    matrix.mapv(|v| v.clamp(0.0, 255.0).round() as u8)
}

pub fn from_gray_image(image: &GrayImage) -> GrayMatrix {
    let (width, height) = image.dimensions();
    Array2::from_shape_fn((height as usize, width as usize), |(row, col)| {
        image.get_pixel(col as u32, row as u32).0[0]
    })
}

pub fn to_gray_image(matrix: &GrayMatrix) -> GrayImage {
    let (rows, cols) = matrix.dim();
    GrayImage::from_fn(cols as u32, rows as u32, |x, y| {
        Luma([matrix[[y as usize, x as usize]]])
    })
}

/// Bilinear resampling to `rows x cols`, a no-op copy when the shape already matches.
pub fn resample(matrix: &GrayMatrix, rows: usize, cols: usize) -> GrayMatrix {
    if matrix.dim() == (rows, cols) {
        return matrix.clone();
    }
    let resized = imageops::resize(
        &to_gray_image(matrix),
        cols as u32,
        rows as u32,
        FilterType::Triangle,
    );
    from_gray_image(&resized)
}
