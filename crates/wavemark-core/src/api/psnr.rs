use std::path::{Path, PathBuf};

use crate::media::load_file;
use crate::metrics::psnr_resampled;
use crate::WavemarkError;

pub fn prepare() -> PsnrApi {
    PsnrApi::default()
}

/// Compares two image files, the second one is resampled to the first one's size if needed.
#[derive(Default, Debug)]
pub struct PsnrApi {
    original: Option<PathBuf>,
    watermarked: Option<PathBuf>,
}

impl PsnrApi {
    pub fn with_original<A: AsRef<Path>>(mut self, original: A) -> Self {
        self.original = Some(original.as_ref().to_path_buf());
        self
    }

    pub fn with_watermarked<A: AsRef<Path>>(mut self, watermarked: A) -> Self {
        self.watermarked = Some(watermarked.as_ref().to_path_buf());
        self
    }

    pub fn execute(self) -> Result<f64, WavemarkError> {
        let Some(original) = self.original else {
            return Err(WavemarkError::CarrierNotSet);
        };
        let Some(watermarked) = self.watermarked else {
            return Err(WavemarkError::WatermarkedNotSet);
        };

        let original = load_file(&original)?;
        let watermarked = load_file(&watermarked)?;

        Ok(psnr_resampled(&original, &watermarked)?)
    }
}
