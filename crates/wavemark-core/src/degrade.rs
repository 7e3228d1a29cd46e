//! Additive white Gaussian noise for robustness evaluation.

use log::debug;
use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::error::TransformError;
use crate::matrix::GrayMatrix;

/// Adds independent `N(0, sigma)` noise to every sample, clamped and rounded.
pub fn degrade(matrix: &GrayMatrix, sigma: f64) -> Result<GrayMatrix, TransformError> {
    degrade_with_rng(matrix, sigma, &mut rand::thread_rng())
}

/// [`degrade`] with a caller supplied random source, for reproducible runs.
pub fn degrade_with_rng<R: Rng + ?Sized>(
    matrix: &GrayMatrix,
    sigma: f64,
    rng: &mut R,
) -> Result<GrayMatrix, TransformError> {
    if !sigma.is_finite() || sigma < 0.0 {
        return Err(TransformError::InvalidSigma(sigma));
    }
    let normal = Normal::new(0.0, sigma).map_err(|_| TransformError::InvalidSigma(sigma))?;
    debug!("adding gaussian noise with sigma {sigma} to {:?}", matrix.dim());

    Ok(matrix.mapv(|v| {
        let noisy = f64::from(v) + normal.sample(rng);
        noisy.clamp(0.0, 255.0).round() as u8
    }))
}
