//! Separable 2D DCT-II / DCT-III with orthonormal scaling.
//!
//! `rustdct` computes the unnormalized kernels, the scaling to an orthonormal pair happens here:
//! forward `X[0] *= sqrt(1/n)`, `X[k] *= sqrt(2/n)`, and the matching pre-scaling before the DCT-III.
//! Forward runs along columns then rows, inverse along rows then columns.

use ndarray::Axis;
use rustdct::DctPlanner;

use crate::matrix::FloatMatrix;

/// Orthonormal 2D DCT-II of `matrix`, same shape as the input.
pub fn forward(matrix: &FloatMatrix) -> FloatMatrix {
    let mut planner = DctPlanner::<f64>::new();
    let mut out = matrix.to_owned();
    for axis in [Axis(0), Axis(1)] {
        let len = out.len_of(axis);
        if len == 0 {
            continue;
        }
        let dct = planner.plan_dct2(len);
        let (dc, ac) = scale_factors(len);
        for_each_lane(&mut out, axis, |buffer| {
            dct.process_dct2(buffer);
            buffer[0] *= dc;
            buffer[1..].iter_mut().for_each(|v| *v *= ac);
        });
    }

    out
}

/// Orthonormal 2D DCT-III, the exact inverse of [`forward`].
pub fn inverse(spectrum: &FloatMatrix) -> FloatMatrix {
    let mut planner = DctPlanner::<f64>::new();
    let mut out = spectrum.to_owned();
    for axis in [Axis(1), Axis(0)] {
        let len = out.len_of(axis);
        if len == 0 {
            continue;
        }
        let dct = planner.plan_dct3(len);
        let (dc, ac) = scale_factors(len);
        for_each_lane(&mut out, axis, |buffer| {
            // DCT-III halves the first input sample
            buffer[0] *= 2.0 * dc;
            buffer[1..].iter_mut().for_each(|v| *v *= ac);
            dct.process_dct3(buffer);
        });
    }

    out
}

fn scale_factors(len: usize) -> (f64, f64) {
    let n = len as f64;
    ((1.0 / n).sqrt(), (2.0 / n).sqrt())
}

/// Runs `f` on a contiguous copy of every lane along `axis` and writes the result back.
fn for_each_lane(matrix: &mut FloatMatrix, axis: Axis, mut f: impl FnMut(&mut [f64])) {
    let mut buffer = vec![0.0; matrix.len_of(axis)];
    for mut lane in matrix.lanes_mut(axis) {
        buffer
            .iter_mut()
            .zip(lane.iter())
            .for_each(|(b, v)| *b = *v);
        f(&mut buffer);
        lane.iter_mut().zip(buffer.iter()).for_each(|(v, b)| *v = *b);
    }
}
