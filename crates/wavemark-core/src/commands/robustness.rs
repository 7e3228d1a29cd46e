use std::path::Path;

use crate::api::RobustnessReport;
use crate::{ExtractionRegion, WatermarkOptions, WavemarkError};

#[allow(clippy::too_many_arguments)]
pub fn robustness(
    watermarked: &Path,
    reference: Option<&Path>,
    write_to_file: &Path,
    noisy_output: Option<&Path>,
    sigma: f64,
    seed: Option<u64>,
    options: WatermarkOptions,
    region: ExtractionRegion,
) -> Result<RobustnessReport, WavemarkError> {
    crate::api::robustness::prepare()
        .with_options(options)
        .with_region(region)
        .from_watermarked(watermarked)
        .use_reference(reference)
        .use_noisy_output(noisy_output)
        .with_output(write_to_file)
        .with_sigma(sigma)
        .use_seed(seed)
        .execute()
}
