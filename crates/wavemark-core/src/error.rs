use std::path::PathBuf;
use thiserror::Error;

/// Failures while locating or decoding a raster source.
#[derive(Error, Debug)]
pub enum LoadError {
    /// Represents a missing source, for example a path that does not exist
    #[error("Image not found or cannot be read: {0}")]
    NotFound(PathBuf),

    /// Represents a source that exists but is no decodable image
    #[error("Image could not be decoded")]
    Decode {
        #[source]
        source: image::ImageError,
    },

    /// Represents a normalization target size that cannot hold any pixel
    #[error("Invalid normalization size: {0}")]
    InvalidSize(u32),
}

/// Failures of the transform pipeline, all of them caused by invalid parameters or shapes.
#[derive(Error, Debug, PartialEq)]
pub enum TransformError {
    /// Represents a wavelet name outside of the supported families
    #[error("Unsupported wavelet model: {0}")]
    UnsupportedWavelet(String),

    /// Represents a decomposition level that is zero or would shrink a subband below one sample
    #[error("Invalid decomposition level {level}, the input allows levels 1 to {max}")]
    InvalidLevel { level: usize, max: usize },

    /// Represents a matrix without any samples
    #[error("Matrix must not be empty")]
    EmptyMatrix,

    /// Represents two matrices or subbands that were expected to have the same shape
    #[error("Shape mismatch: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },

    /// Represents a payload that does not fit into the spectrum at the embedding offset
    #[error(
        "Payload of {payload:?} does not fit at offset {offset:?} into a spectrum of {spectrum:?}"
    )]
    PayloadOutOfBounds {
        payload: (usize, usize),
        offset: (usize, usize),
        spectrum: (usize, usize),
    },

    /// Represents a strength factor that is not a finite positive number
    #[error("Invalid strength factor alpha: {0}")]
    InvalidAlpha(f64),

    /// Represents a noise level that is negative or not finite
    #[error("Invalid noise standard deviation: {0}")]
    InvalidSigma(f64),
}

#[derive(Error, Debug)]
pub enum WavemarkError {
    /// Represents a host, watermark or reference image that could not be loaded
    #[error(transparent)]
    Load(#[from] LoadError),

    /// Represents an invalid parameter or shape inside the transform pipeline
    #[error(transparent)]
    Transform(#[from] TransformError),

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("No host image set")]
    CarrierNotSet,

    #[error("No watermark image set")]
    WatermarkNotSet,

    #[error("No watermarked image set")]
    WatermarkedNotSet,

    #[error("No target file set")]
    TargetNotSet,
}

impl WavemarkError {
    pub fn is_load_error(&self) -> bool {
        matches!(self, Self::Load(_))
    }

    pub fn is_transform_error(&self) -> bool {
        matches!(self, Self::Transform(_))
    }
}
