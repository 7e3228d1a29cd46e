use std::path::{Path, PathBuf};

use log::warn;

use crate::matrix;
use crate::media::{normalize_file, Persist};
use crate::watermark::{self, ExtractionMode};
use crate::{ExtractionRegion, WatermarkOptions, WavemarkError, HOST_SIZE};

pub fn prepare() -> ExtractApi {
    ExtractApi::default()
}

#[derive(Debug)]
pub struct ExtractApi {
    watermarked: Option<PathBuf>,
    reference: Option<PathBuf>,
    output: Option<PathBuf>,
    options: WatermarkOptions,
    region: ExtractionRegion,
    host_size: u32,
}

impl Default for ExtractApi {
    fn default() -> Self {
        Self {
            watermarked: None,
            reference: None,
            output: None,
            options: WatermarkOptions::default(),
            region: ExtractionRegion::default(),
            host_size: HOST_SIZE,
        }
    }
}

impl ExtractApi {
    /// Must be the options the image was embedded with
    pub fn with_options(mut self, options: WatermarkOptions) -> Self {
        self.options = options;
        self
    }

    pub fn from_watermarked<A: AsRef<Path>>(mut self, watermarked: A) -> Self {
        self.watermarked = Some(watermarked.as_ref().to_path_buf());
        self
    }

    /// The unmarked host, switches to reference assisted extraction
    pub fn with_reference<A: AsRef<Path>>(mut self, reference: A) -> Self {
        self.reference = Some(reference.as_ref().to_path_buf());
        self
    }

    /// If `None` is passed, extraction runs blind
    pub fn use_reference<A: AsRef<Path>>(mut self, reference: Option<A>) -> Self {
        self.reference = reference.map(|r| r.as_ref().to_path_buf());
        self
    }

    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    pub fn with_region(mut self, region: ExtractionRegion) -> Self {
        self.region = region;
        self
    }

    pub fn with_host_size(mut self, size: u32) -> Self {
        self.host_size = size;
        self
    }

    pub fn execute(self) -> Result<ExtractionMode, WavemarkError> {
        let Some(watermarked) = self.watermarked else {
            return Err(WavemarkError::WatermarkedNotSet);
        };
        let Some(output) = self.output else {
            return Err(WavemarkError::TargetNotSet);
        };

        let watermarked = normalize_file(&watermarked, self.host_size)?;
        let reference = self
            .reference
            .map(|r| normalize_file(&r, self.host_size))
            .transpose()?;
        let extraction = watermark::extract_with_region(
            &watermarked,
            reference.as_ref(),
            &self.options,
            self.region,
        )?;
        if extraction.degenerate_cells > 0 {
            warn!(
                "{} cells could not be recovered and were set to the midtone",
                extraction.degenerate_cells
            );
        }

        matrix::to_gray(&extraction.watermark).save_as(&output)?;

        Ok(extraction.mode)
    }
}
