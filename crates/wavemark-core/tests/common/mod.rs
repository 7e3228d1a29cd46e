#![allow(dead_code)]

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use wavemark_core::{FloatMatrix, GrayMatrix};

pub const HOST: usize = 512;
pub const PAYLOAD: usize = 128;

/// Random two level texture, every DCT coefficient of its approximation is far from zero.
pub fn textured_host(seed: u64) -> GrayMatrix {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    GrayMatrix::from_shape_simple_fn((HOST, HOST), || if rng.gen_bool(0.5) { 228 } else { 28 })
}

/// Diagonal gradient in the middle of the range with a little texture, leaves room for noise.
pub fn midrange_host(seed: u64) -> GrayMatrix {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    GrayMatrix::from_shape_fn((HOST, HOST), |(r, c)| {
        let base = 96 + ((r + c) * 64 / HOST) as i32;
        (base + rng.gen_range(-16..=16)) as u8
    })
}

/// Black and white squares of `block` pixels.
pub fn checkerboard(size: usize, block: usize) -> GrayMatrix {
    GrayMatrix::from_shape_fn((size, size), |(r, c)| {
        if (r / block + c / block) % 2 == 0 {
            255
        } else {
            0
        }
    })
}

pub fn as_float(m: &GrayMatrix) -> FloatMatrix {
    m.mapv(f64::from)
}

pub fn clamped(m: &FloatMatrix) -> FloatMatrix {
    m.mapv(|v| v.clamp(0.0, 255.0))
}
