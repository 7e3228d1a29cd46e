use std::path::Path;

use crate::{WatermarkOptions, WavemarkError};

pub fn embed(
    host: &Path,
    watermark: &Path,
    write_to_file: &Path,
    options: WatermarkOptions,
) -> Result<(), WavemarkError> {
    crate::api::embed::prepare()
        .with_options(options)
        .with_host(host)
        .with_watermark(watermark)
        .with_output(write_to_file)
        .execute()
}
