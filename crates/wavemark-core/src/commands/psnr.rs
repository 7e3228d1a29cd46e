use std::path::Path;

use crate::WavemarkError;

pub fn psnr(original: &Path, watermarked: &Path) -> Result<f64, WavemarkError> {
    crate::api::psnr::prepare()
        .with_original(original)
        .with_watermarked(watermarked)
        .execute()
}
