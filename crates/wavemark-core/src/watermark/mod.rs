//! Embedding into and extraction from the DCT spectrum of the wavelet approximation.
//!
//! Both directions decompose the image with the same [`WatermarkOptions`], transform the
//! approximation subband and address the spectrum at the offset `(rows / 4, cols / 4)`.

pub mod embedder;
pub mod extractor;

pub use embedder::embed;
pub use extractor::{extract, extract_with_region, Extraction, ExtractionMode};

use log::debug;

use crate::error::TransformError;
use crate::matrix::{self, FloatMatrix, GrayMatrix};
use crate::options::WatermarkOptions;
use crate::transform::{dct, dwt, SubbandSet};

/// Decomposes `image` and returns the subbands together with the spectrum of their approximation.
fn approximation_spectrum(
    image: &GrayMatrix,
    options: &WatermarkOptions,
) -> Result<(SubbandSet, FloatMatrix), TransformError> {
    let set = dwt::decompose(&matrix::to_float(image), options.wavelet, options.level)?;
    let spectrum = dct::forward(&set.approximation);
    debug!(
        "spectrum {:?} with {} at level {}",
        spectrum.dim(),
        options.wavelet,
        options.level
    );

    Ok((set, spectrum))
}

fn embedding_offset(spectrum: (usize, usize)) -> (usize, usize) {
    (spectrum.0 / 4, spectrum.1 / 4)
}

/// Fails unless a `region` placed at the embedding offset lies completely inside `spectrum`.
fn check_region(
    region: (usize, usize),
    spectrum: (usize, usize),
) -> Result<(usize, usize), TransformError> {
    let offset = embedding_offset(spectrum);
    if offset.0 + region.0 > spectrum.0 || offset.1 + region.1 > spectrum.1 {
        return Err(TransformError::PayloadOutOfBounds {
            payload: region,
            offset,
            spectrum,
        });
    }

    Ok(offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_place_the_offset_at_a_quarter() {
        assert_eq!(embedding_offset((256, 256)), (64, 64));
        assert_eq!(embedding_offset((130, 7)), (32, 1));
    }

    #[test]
    fn should_accept_regions_up_to_the_spectrum_border() {
        assert_eq!(check_region((192, 192), (256, 256)), Ok((64, 64)));
        assert_eq!(
            check_region((128, 193), (256, 256)),
            Err(TransformError::PayloadOutOfBounds {
                payload: (128, 193),
                offset: (64, 64),
                spectrum: (256, 256)
            })
        );
    }
}
