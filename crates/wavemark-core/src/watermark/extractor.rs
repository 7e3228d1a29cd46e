use log::debug;
use ndarray::{s, ArrayView2, Zip};

use crate::error::TransformError;
use crate::matrix::{FloatMatrix, GrayMatrix};
use crate::options::{
    ExtractionRegion, WatermarkOptions, BLIND_GAIN, DEGENERATE_EPSILON, NEUTRAL_MIDTONE,
};

use super::{approximation_spectrum, check_region};

/// How a watermark was recovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionMode {
    /// Inverted algebraically against the spectrum of the unmarked host
    ReferenceAssisted,
    /// Estimated from the watermarked image alone
    Blind,
}

/// A recovered watermark, still in the float domain and not clamped.
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    pub watermark: FloatMatrix,
    pub mode: ExtractionMode,
    /// Cells that were set to the neutral midtone because the reference could not be divided by
    pub degenerate_cells: usize,
}

/// Recovers the watermark from the default region, see [`extract_with_region`].
pub fn extract(
    watermarked: &GrayMatrix,
    reference: Option<&GrayMatrix>,
    options: &WatermarkOptions,
) -> Result<FloatMatrix, TransformError> {
    extract_with_region(watermarked, reference, options, ExtractionRegion::default())
        .map(|e| e.watermark)
}

/// Recovers the watermark embedded with `options` from `watermarked`.
///
/// With a `reference` every cell of the region is inverted as `(Fw / Fo - 1) / alpha * 255`,
/// cells with a reference coefficient of magnitude `<= 1e-6` (or any cell when `alpha` is 0)
/// become 128 instead. Without a reference the deviation from the region mean is
/// amplified five times around 128.
pub fn extract_with_region(
    watermarked: &GrayMatrix,
    reference: Option<&GrayMatrix>,
    options: &WatermarkOptions,
    region: ExtractionRegion,
) -> Result<Extraction, TransformError> {
    if let Some(reference) = reference {
        if reference.dim() != watermarked.dim() {
            return Err(TransformError::ShapeMismatch {
                expected: watermarked.dim(),
                actual: reference.dim(),
            });
        }
    }

    let (_, spectrum) = approximation_spectrum(watermarked, options)?;
    let (rows, cols) = region.shape(spectrum.dim());
    let (r0, c0) = check_region((rows, cols), spectrum.dim())?;
    let window = s![r0..r0 + rows, c0..c0 + cols];
    let fw = spectrum.slice(window);

    let Some(reference) = reference else {
        let mean = fw.mean().unwrap_or(0.0);
        return Ok(Extraction {
            watermark: fw.mapv(|f| (f - mean) * BLIND_GAIN + NEUTRAL_MIDTONE),
            mode: ExtractionMode::Blind,
            degenerate_cells: 0,
        });
    };

    let (_, reference_spectrum) = approximation_spectrum(reference, options)?;
    let fo = reference_spectrum.slice(window);
    let (watermark, degenerate_cells) = invert_against_reference(fw, fo, options.alpha);
    if degenerate_cells > 0 {
        debug!(
            "{degenerate_cells} of {} reference coefficients too small, substituted {NEUTRAL_MIDTONE}",
            watermark.len()
        );
    }

    Ok(Extraction {
        watermark,
        mode: ExtractionMode::ReferenceAssisted,
        degenerate_cells,
    })
}

/// Inverts the multiplicative embedding cell by cell, returns the values and the number of
/// cells set to the midtone.
fn invert_against_reference(
    fw: ArrayView2<'_, f64>,
    fo: ArrayView2<'_, f64>,
    alpha: f64,
) -> (FloatMatrix, usize) {
    let mut degenerate_cells = 0;
    let watermark = Zip::from(fw).and(fo).map_collect(|&w, &o| {
        if o.abs() > DEGENERATE_EPSILON && alpha != 0.0 {
            (w / o - 1.0) / alpha * 255.0
        } else {
            degenerate_cells += 1;
            NEUTRAL_MIDTONE
        }
    });

    (watermark, degenerate_cells)
}
