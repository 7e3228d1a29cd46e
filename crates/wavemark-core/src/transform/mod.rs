//! The two transform stages every embedding and extraction runs through.

pub mod dct;
pub mod dwt;
pub mod wavelet;

pub use dwt::{decompose, reconstruct, DetailBands, SubbandSet};
pub use wavelet::{FilterBank, Wavelet};
