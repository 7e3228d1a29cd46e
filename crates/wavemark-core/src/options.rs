use crate::error::TransformError;
use crate::transform::Wavelet;

/// Side length hosts are normalized to before embedding
pub const HOST_SIZE: u32 = 512;

/// Side length watermark payloads are normalized to
pub const WATERMARK_SIZE: u32 = 128;

/// Standard deviation of the additive noise used by robustness runs
pub const DEFAULT_NOISE_SIGMA: f64 = 15.0;

/// Value substituted for cells that cannot be recovered, also the bias of blind extraction
pub const NEUTRAL_MIDTONE: f64 = 128.0;

/// Reference coefficients with a magnitude at or below this are not divided by
pub const DEGENERATE_EPSILON: f64 = 1e-6;

/// Amplification of the deviation from the region mean in blind extraction
pub const BLIND_GAIN: f64 = 5.0;

/// Parameters shared by embedding and extraction.
///
/// Nothing of this is stored in the watermarked image, extraction only works with exactly
/// the options the image was embedded with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WatermarkOptions {
    /// Wavelet family of the multi resolution decomposition
    pub wavelet: Wavelet,

    /// Number of decomposition levels, the payload lives in the approximation of the last one
    pub level: usize,

    /// Strength factor, a payload sample of 255 scales its coefficient by `1 + alpha`
    pub alpha: f64,
}

impl Default for WatermarkOptions {
    fn default() -> Self {
        Self {
            wavelet: Wavelet::Haar,
            level: 1,
            alpha: 0.1,
        }
    }
}

impl WatermarkOptions {
    pub fn with_wavelet(mut self, wavelet: Wavelet) -> Self {
        self.wavelet = wavelet;
        self
    }

    pub fn with_level(mut self, level: usize) -> Self {
        self.level = level;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// `alpha` has to be a finite positive number for embedding.
    pub fn validate_alpha(&self) -> Result<(), TransformError> {
        if self.alpha.is_finite() && self.alpha > 0.0 {
            Ok(())
        } else {
            Err(TransformError::InvalidAlpha(self.alpha))
        }
    }
}

/// Which part of the spectrum extraction reads back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExtractionRegion {
    /// Half of the spectrum in each dimension, starting at the embedding offset.
    ///
    /// Matches the payload only when the payload is exactly that size, which holds for the
    /// default sizes at level 1.
    #[default]
    HalfSpectrum,

    /// Exactly the size of the embedded payload
    Payload { rows: usize, cols: usize },
}

impl ExtractionRegion {
    /// Shape of the region for a spectrum of shape `spectrum`.
    pub fn shape(&self, spectrum: (usize, usize)) -> (usize, usize) {
        match *self {
            ExtractionRegion::HalfSpectrum => (spectrum.0 / 2, spectrum.1 / 2),
            ExtractionRegion::Payload { rows, cols } => (rows, cols),
        }
    }
}
