use std::path::{Path, PathBuf};

use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::degrade::{degrade, degrade_with_rng};
use crate::matrix;
use crate::media::{normalize_file, Persist};
use crate::metrics::psnr;
use crate::watermark::{self, ExtractionMode};
use crate::{ExtractionRegion, WatermarkOptions, WavemarkError, DEFAULT_NOISE_SIGMA, HOST_SIZE};

pub fn prepare() -> RobustnessApi {
    RobustnessApi::default()
}

/// Outcome of a robustness run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RobustnessReport {
    pub mode: ExtractionMode,
    pub sigma: f64,
    /// PSNR of the noisy image against the clean watermarked one
    pub psnr: f64,
}

/// Degrades a watermarked image with Gaussian noise and extracts from the noisy copy.
#[derive(Debug)]
pub struct RobustnessApi {
    watermarked: Option<PathBuf>,
    reference: Option<PathBuf>,
    output: Option<PathBuf>,
    noisy_output: Option<PathBuf>,
    options: WatermarkOptions,
    region: ExtractionRegion,
    sigma: f64,
    seed: Option<u64>,
    host_size: u32,
}

impl Default for RobustnessApi {
    fn default() -> Self {
        Self {
            watermarked: None,
            reference: None,
            output: None,
            noisy_output: None,
            options: WatermarkOptions::default(),
            region: ExtractionRegion::default(),
            sigma: DEFAULT_NOISE_SIGMA,
            seed: None,
            host_size: HOST_SIZE,
        }
    }
}

impl RobustnessApi {
    pub fn with_options(mut self, options: WatermarkOptions) -> Self {
        self.options = options;
        self
    }

    pub fn from_watermarked<A: AsRef<Path>>(mut self, watermarked: A) -> Self {
        self.watermarked = Some(watermarked.as_ref().to_path_buf());
        self
    }

    pub fn use_reference<A: AsRef<Path>>(mut self, reference: Option<A>) -> Self {
        self.reference = reference.map(|r| r.as_ref().to_path_buf());
        self
    }

    /// Where the watermark extracted from the noisy image goes
    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    /// Optionally keep the noisy image as well
    pub fn use_noisy_output<A: AsRef<Path>>(mut self, noisy_output: Option<A>) -> Self {
        self.noisy_output = noisy_output.map(|n| n.as_ref().to_path_buf());
        self
    }

    pub fn with_region(mut self, region: ExtractionRegion) -> Self {
        self.region = region;
        self
    }

    /// Must match the size the image was embedded at
    pub fn with_host_size(mut self, size: u32) -> Self {
        self.host_size = size;
        self
    }

    pub fn with_sigma(mut self, sigma: f64) -> Self {
        self.sigma = sigma;
        self
    }

    /// Fixes the noise, without a seed every run is different
    pub fn use_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn execute(self) -> Result<RobustnessReport, WavemarkError> {
        let Some(watermarked) = self.watermarked else {
            return Err(WavemarkError::WatermarkedNotSet);
        };
        let Some(output) = self.output else {
            return Err(WavemarkError::TargetNotSet);
        };

        let clean = normalize_file(&watermarked, self.host_size)?;
        let reference = self
            .reference
            .map(|r| normalize_file(&r, self.host_size))
            .transpose()?;
        let noisy = match self.seed {
            Some(seed) => degrade_with_rng(&clean, self.sigma, &mut StdRng::seed_from_u64(seed))?,
            None => degrade(&clean, self.sigma)?,
        };
        if let Some(noisy_output) = &self.noisy_output {
            noisy.save_as(noisy_output)?;
        }

        let extraction =
            watermark::extract_with_region(&noisy, reference.as_ref(), &self.options, self.region)?;
        if extraction.degenerate_cells > 0 {
            warn!(
                "{} cells could not be recovered and were set to the midtone",
                extraction.degenerate_cells
            );
        }
        matrix::to_gray(&extraction.watermark).save_as(&output)?;

        let report = RobustnessReport {
            mode: extraction.mode,
            sigma: self.sigma,
            psnr: psnr(&clean, &noisy)?,
        };
        info!("robustness run finished: {report:?}");

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::load_file;
    use image::{GrayImage, Luma};
    use tempfile::tempdir;

    fn write_fixture(path: &Path) {
        GrayImage::from_fn(512, 512, |x, y| Luma([((x * 5 + y * 11) % 160 + 50) as u8]))
            .save(path)
            .expect("Failed to write fixture");
    }

    #[test]
    fn illustrate_api_usage() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let image = temp_dir.path().join("watermarked.png");
        write_fixture(&image);
        let noisy = temp_dir.path().join("noisy.png");

        let report = crate::api::robustness::prepare()
            .from_watermarked(&image)
            .use_reference(Some(&image))
            .use_noisy_output(Some(&noisy))
            .with_output(temp_dir.path().join("extracted.png"))
            .with_sigma(15.0)
            .use_seed(Some(42))
            .execute()
            .expect("Failed to run robustness test");

        assert_eq!(report.mode, ExtractionMode::ReferenceAssisted);
        assert!(report.psnr.is_finite() && report.psnr > 20.0);
        assert!(noisy.exists());
    }

    #[test]
    fn should_be_lossless_without_noise() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let image = temp_dir.path().join("watermarked.png");
        write_fixture(&image);

        let report = prepare()
            .from_watermarked(&image)
            .with_output(temp_dir.path().join("extracted.png"))
            .with_sigma(0.0)
            .execute()
            .expect("Failed to run robustness test");

        assert_eq!(report.mode, ExtractionMode::Blind);
        assert_eq!(report.psnr, f64::INFINITY);
    }

    #[test]
    fn should_normalize_to_the_configured_host_size() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let image = temp_dir.path().join("watermarked.png");
        let noisy = temp_dir.path().join("noisy.png");
        let extracted = temp_dir.path().join("extracted.png");
        write_fixture(&image);

        prepare()
            .from_watermarked(&image)
            .use_reference(Some(&image))
            .use_noisy_output(Some(&noisy))
            .with_output(&extracted)
            .with_host_size(256)
            .use_seed(Some(3))
            .execute()
            .expect("Failed to run robustness test");

        // a 256 host leaves a 128 spectrum at level 1, so half of it is 64
        assert_eq!(load_file(&noisy).unwrap().dim(), (256, 256));
        assert_eq!(load_file(&extracted).unwrap().dim(), (64, 64));
    }

    #[test]
    fn should_reject_negative_sigma() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let image = temp_dir.path().join("watermarked.png");
        write_fixture(&image);

        let err = prepare()
            .from_watermarked(&image)
            .with_output(temp_dir.path().join("extracted.png"))
            .with_sigma(-1.0)
            .execute()
            .unwrap_err();

        assert!(err.is_transform_error());
    }
}
