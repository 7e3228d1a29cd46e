use std::path::Path;

use crate::watermark::ExtractionMode;
use crate::{ExtractionRegion, WatermarkOptions, WavemarkError};

pub fn extract(
    watermarked: &Path,
    reference: Option<&Path>,
    write_to_file: &Path,
    options: WatermarkOptions,
    region: ExtractionRegion,
) -> Result<ExtractionMode, WavemarkError> {
    crate::api::extract::prepare()
        .with_options(options)
        .with_region(region)
        .from_watermarked(watermarked)
        .use_reference(reference)
        .with_output(write_to_file)
        .execute()
}
