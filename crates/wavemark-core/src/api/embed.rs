use std::path::{Path, PathBuf};

use log::debug;

use crate::media::{normalize_file, Persist};
use crate::{watermark, WatermarkOptions, WavemarkError, HOST_SIZE, WATERMARK_SIZE};

pub fn prepare() -> EmbedApi {
    EmbedApi::default()
}

#[derive(Debug)]
pub struct EmbedApi {
    host: Option<PathBuf>,
    watermark: Option<PathBuf>,
    output: Option<PathBuf>,
    options: WatermarkOptions,
    host_size: u32,
    watermark_size: u32,
}

impl Default for EmbedApi {
    fn default() -> Self {
        Self {
            host: None,
            watermark: None,
            output: None,
            options: WatermarkOptions::default(),
            host_size: HOST_SIZE,
            watermark_size: WATERMARK_SIZE,
        }
    }
}

impl EmbedApi {
    pub fn with_options(mut self, options: WatermarkOptions) -> Self {
        self.options = options;
        self
    }

    /// The image that carries the watermark afterwards
    pub fn with_host<A: AsRef<Path>>(mut self, host: A) -> Self {
        self.host = Some(host.as_ref().to_path_buf());
        self
    }

    /// The image to hide, it is reduced to grayscale
    pub fn with_watermark<A: AsRef<Path>>(mut self, watermark: A) -> Self {
        self.watermark = Some(watermark.as_ref().to_path_buf());
        self
    }

    /// Target file, the extension decides about the format
    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    pub fn with_host_size(mut self, size: u32) -> Self {
        self.host_size = size;
        self
    }

    pub fn with_watermark_size(mut self, size: u32) -> Self {
        self.watermark_size = size;
        self
    }

    pub fn execute(self) -> Result<(), WavemarkError> {
        let Some(host) = self.host else {
            return Err(WavemarkError::CarrierNotSet);
        };
        let Some(mark) = self.watermark else {
            return Err(WavemarkError::WatermarkNotSet);
        };
        let Some(output) = self.output else {
            return Err(WavemarkError::TargetNotSet);
        };

        let host = normalize_file(&host, self.host_size)?;
        let payload = normalize_file(&mark, self.watermark_size)?;
        let watermarked = watermark::embed(&host, &payload, &self.options)?;
        debug!("embedded with {:?} into {output:?}", self.options);

        watermarked.save_as(&output)
    }
}
