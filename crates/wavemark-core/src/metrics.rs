//! Fidelity measures between two images or two recovered watermarks.

use std::fmt::{self, Display, Formatter};

use ndarray::Zip;

use crate::error::TransformError;
use crate::matrix::{self, FloatMatrix, GrayMatrix};

/// PSNR from which on a watermarked image counts as visually indistinguishable
pub const GOOD_PSNR_DB: f64 = 30.0;

const PEAK: f64 = 255.0;

/// Peak signal to noise ratio in dB, `f64::INFINITY` for identical inputs.
pub fn psnr(a: &GrayMatrix, b: &GrayMatrix) -> Result<f64, TransformError> {
    check_shape(a.dim(), b.dim())?;
    if a.is_empty() {
        return Err(TransformError::EmptyMatrix);
    }
    let mse = Zip::from(a)
        .and(b)
        .fold(0.0, |acc, &x, &y| {
            let d = f64::from(x) - f64::from(y);
            acc + d * d
        })
        / a.len() as f64;

    if mse == 0.0 {
        return Ok(f64::INFINITY);
    }
    Ok(10.0 * (PEAK * PEAK / mse).log10())
}

/// Like [`psnr`], but first resamples `b` bilinearly to the shape of `a`.
pub fn psnr_resampled(a: &GrayMatrix, b: &GrayMatrix) -> Result<f64, TransformError> {
    let (rows, cols) = a.dim();
    psnr(a, &matrix::resample(b, rows, cols))
}

/// Mean of the absolute differences, used to compare a recovered watermark to its payload.
pub fn mean_absolute_error(a: &FloatMatrix, b: &FloatMatrix) -> Result<f64, TransformError> {
    check_shape(a.dim(), b.dim())?;
    if a.is_empty() {
        return Err(TransformError::EmptyMatrix);
    }
    let sum = Zip::from(a).and(b).fold(0.0, |acc, x, y| acc + (x - y).abs());

    Ok(sum / a.len() as f64)
}

fn check_shape(expected: (usize, usize), actual: (usize, usize)) -> Result<(), TransformError> {
    if expected != actual {
        return Err(TransformError::ShapeMismatch { expected, actual });
    }
    Ok(())
}

/// Coarse verdict on a PSNR value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PsnrQuality {
    Good,
    Poor,
}

impl PsnrQuality {
    pub fn of(psnr: f64) -> Self {
        if psnr >= GOOD_PSNR_DB {
            PsnrQuality::Good
        } else {
            PsnrQuality::Poor
        }
    }
}

impl Display for PsnrQuality {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PsnrQuality::Good => f.write_str("good, differences are hardly visible"),
            PsnrQuality::Poor => f.write_str("poor, differences are likely visible"),
        }
    }
}
