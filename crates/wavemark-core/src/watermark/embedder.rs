use ndarray::{s, Zip};

use crate::error::TransformError;
use crate::matrix::{self, GrayMatrix};
use crate::options::WatermarkOptions;
use crate::transform::{dct, dwt};

use super::{approximation_spectrum, check_region};

/// Embeds `payload` multiplicatively into the approximation spectrum of `host`.
///
/// Every covered coefficient is scaled by `1 + alpha * p / 255` for its payload sample `p`,
/// the rest of the spectrum and all detail subbands stay untouched.
/// The result is clamped and rounded back to 8 bit samples of the host's shape.
pub fn embed(
    host: &GrayMatrix,
    payload: &GrayMatrix,
    options: &WatermarkOptions,
) -> Result<GrayMatrix, TransformError> {
    options.validate_alpha()?;
    let (mut set, mut spectrum) = approximation_spectrum(host, options)?;
    let (rows, cols) = payload.dim();
    let (r0, c0) = check_region((rows, cols), spectrum.dim())?;

    let alpha = options.alpha;
    Zip::from(spectrum.slice_mut(s![r0..r0 + rows, c0..c0 + cols]))
        .and(payload)
        .for_each(|f, &p| *f *= 1.0 + alpha * f64::from(p) / 255.0);

    set.approximation = dct::inverse(&spectrum);
    let watermarked = dwt::reconstruct(&set, options.wavelet)?;

    Ok(matrix::to_gray(&watermarked))
}
