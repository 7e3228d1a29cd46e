//! Multi-level 2D discrete wavelet transform with symmetric boundary extension.
//!
//! A single level filters along columns and then along rows, downsampling by two each time.
//! A signal of length `n` yields `floor((n + F - 1) / 2)` coefficients per band for a filter
//! of length `F`; synthesis yields `2 * m - F + 2` samples out of `m` coefficients.

use log::debug;
use ndarray::{Array2, ArrayView1, Axis};

use crate::error::TransformError;
use crate::matrix::FloatMatrix;
use crate::transform::wavelet::{FilterBank, Wavelet};

/// The three detail subbands of one decomposition level.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailBands {
    pub horizontal: FloatMatrix,
    pub vertical: FloatMatrix,
    pub diagonal: FloatMatrix,
}

impl DetailBands {
    pub fn dim(&self) -> (usize, usize) {
        self.horizontal.dim()
    }
}

/// Output of [`decompose`]: the coarsest approximation and the details from coarsest to finest.
#[derive(Debug, Clone, PartialEq)]
pub struct SubbandSet {
    pub approximation: FloatMatrix,
    pub details: Vec<DetailBands>,
    shape: (usize, usize),
}

impl SubbandSet {
    pub fn level(&self) -> usize {
        self.details.len()
    }

    /// Shape of the matrix this set was decomposed from.
    pub fn shape(&self) -> (usize, usize) {
        self.shape
    }
}

/// Decomposes `matrix` `level` times, always continuing on the running approximation.
pub fn decompose(
    matrix: &FloatMatrix,
    wavelet: Wavelet,
    level: usize,
) -> Result<SubbandSet, TransformError> {
    let (rows, cols) = matrix.dim();
    if rows == 0 || cols == 0 {
        return Err(TransformError::EmptyMatrix);
    }
    let max = wavelet.max_level(rows, cols);
    if level == 0 || level > max {
        return Err(TransformError::InvalidLevel { level, max });
    }

    let bank = wavelet.filter_bank();
    let mut approximation = matrix.to_owned();
    let mut details = Vec::with_capacity(level);
    for _ in 0..level {
        let (a, d) = dwt2(&approximation, &bank);
        approximation = a;
        details.push(d);
    }
    details.reverse();
    debug!(
        "{wavelet} decomposition of {rows}x{cols} to level {level}, approximation {:?}",
        approximation.dim()
    );

    Ok(SubbandSet {
        approximation,
        details,
        shape: (rows, cols),
    })
}

/// Synthesizes the full resolution matrix, coarsest level first.
///
/// The approximation may have been modified, it only has to keep the shape of the details
/// of the coarsest level (or exceed it by one sample per axis).
pub fn reconstruct(set: &SubbandSet, wavelet: Wavelet) -> Result<FloatMatrix, TransformError> {
    let bank = wavelet.filter_bank();
    let shortest = bank.len() - 1;
    let mut approximation = set.approximation.to_owned();
    for bands in &set.details {
        let expected = bands.dim();
        if expected.0 < shortest || expected.1 < shortest {
            return Err(TransformError::ShapeMismatch {
                expected: (shortest, shortest),
                actual: expected,
            });
        }
        for band in [&bands.vertical, &bands.diagonal] {
            if band.dim() != expected {
                return Err(TransformError::ShapeMismatch {
                    expected,
                    actual: band.dim(),
                });
            }
        }
        approximation = fit_to(approximation, expected)?;
        approximation = idwt2(&approximation, bands, &bank);
    }

    fit_to(approximation, set.shape)
}

/// Trims the odd-length surplus of one sample per axis, anything else is a mismatch.
fn fit_to(matrix: FloatMatrix, shape: (usize, usize)) -> Result<FloatMatrix, TransformError> {
    let actual = matrix.dim();
    if actual == shape {
        return Ok(matrix);
    }
    let surplus = |have: usize, want: usize| have == want || have == want + 1;
    if !surplus(actual.0, shape.0) || !surplus(actual.1, shape.1) {
        return Err(TransformError::ShapeMismatch {
            expected: shape,
            actual,
        });
    }

    Ok(matrix
        .slice(ndarray::s![..shape.0, ..shape.1])
        .to_owned())
}

fn dwt2(matrix: &FloatMatrix, bank: &FilterBank) -> (FloatMatrix, DetailBands) {
    let (lo, hi) = analyze_axis(matrix, Axis(0), bank);
    let (approximation, vertical) = analyze_axis(&lo, Axis(1), bank);
    let (horizontal, diagonal) = analyze_axis(&hi, Axis(1), bank);

    (
        approximation,
        DetailBands {
            horizontal,
            vertical,
            diagonal,
        },
    )
}

fn idwt2(approximation: &FloatMatrix, bands: &DetailBands, bank: &FilterBank) -> FloatMatrix {
    let lo = synthesize_axis(approximation, &bands.vertical, Axis(1), bank);
    let hi = synthesize_axis(&bands.horizontal, &bands.diagonal, Axis(1), bank);
    synthesize_axis(&lo, &hi, Axis(0), bank)
}

fn analyze_axis(
    matrix: &FloatMatrix,
    axis: Axis,
    bank: &FilterBank,
) -> (FloatMatrix, FloatMatrix) {
    let len = matrix.len_of(axis);
    let out_len = (len + bank.len() - 1) / 2;
    let mut shape = [matrix.nrows(), matrix.ncols()];
    shape[axis.index()] = out_len;

    let mut lo = Array2::zeros(shape);
    let mut hi = Array2::zeros(shape);
    let mut signal = vec![0.0; len];
    for ((src, mut lo_lane), mut hi_lane) in matrix
        .lanes(axis)
        .into_iter()
        .zip(lo.lanes_mut(axis))
        .zip(hi.lanes_mut(axis))
    {
        copy_lane(src, &mut signal);
        for (o, (l, h)) in lo_lane.iter_mut().zip(hi_lane.iter_mut()).enumerate() {
            let i = 2 * o + 1;
            let (mut sum_lo, mut sum_hi) = (0.0, 0.0);
            for j in 0..bank.len() {
                let x = signal[symmetric_index(i as isize - j as isize, len)];
                sum_lo += bank.dec_lo[j] * x;
                sum_hi += bank.dec_hi[j] * x;
            }
            *l = sum_lo;
            *h = sum_hi;
        }
    }

    (lo, hi)
}

fn synthesize_axis(
    low: &FloatMatrix,
    high: &FloatMatrix,
    axis: Axis,
    bank: &FilterBank,
) -> FloatMatrix {
    let len = low.len_of(axis);
    let f = bank.len();
    let out_len = 2 * len + 2 - f;
    let mut shape = [low.nrows(), low.ncols()];
    shape[axis.index()] = out_len;

    let mut out = Array2::zeros(shape);
    let mut a = vec![0.0; len];
    let mut d = vec![0.0; len];
    for ((lo_lane, hi_lane), mut out_lane) in low
        .lanes(axis)
        .into_iter()
        .zip(high.lanes(axis))
        .zip(out.lanes_mut(axis))
    {
        copy_lane(lo_lane, &mut a);
        copy_lane(hi_lane, &mut d);
        for (m, y) in out_lane.iter_mut().enumerate() {
            // only coefficients with `m + f - 2 - 2k` inside the filter contribute
            let first = m.saturating_sub(1).div_ceil(2);
            let last = ((m + f - 2) / 2).min(len - 1);
            let mut sum = 0.0;
            for k in first..=last {
                let tap = m + f - 2 - 2 * k;
                sum += a[k] * bank.rec_lo[tap] + d[k] * bank.rec_hi[tap];
            }
            *y = sum;
        }
    }

    out
}

fn copy_lane(lane: ArrayView1<'_, f64>, into: &mut [f64]) {
    into.iter_mut().zip(lane.iter()).for_each(|(t, s)| *t = *s);
}

/// Half-sample symmetric extension: `x[-1] = x[0]`, `x[n] = x[n - 1]`, repeating as needed.
fn symmetric_index(i: isize, len: usize) -> usize {
    let period = 2 * len as isize;
    let m = i.rem_euclid(period);
    if m < len as isize {
        m as usize
    } else {
        (period - 1 - m) as usize
    }
}
