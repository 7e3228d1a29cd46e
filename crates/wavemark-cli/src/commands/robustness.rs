use std::path::PathBuf;

use clap::Args;
use wavemark_core::{PsnrQuality, WatermarkOptions, DEFAULT_NOISE_SIGMA};

use crate::CliResult;

/// Adds Gaussian noise to a watermarked image and extracts the watermark from the noisy copy
#[derive(Args, Debug)]
pub struct RobustnessArgs {
    /// Watermarked image
    #[arg(short = 'i', long = "in", value_name = "watermarked image", required = true)]
    pub watermarked: PathBuf,

    /// Original host image for reference assisted extraction
    #[arg(short = 'r', long = "reference", value_name = "original image")]
    pub reference: Option<PathBuf>,

    /// Watermark extracted from the noisy image will be stored as file
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output image file",
        required = true
    )]
    pub write_to_file: PathBuf,

    /// Standard deviation of the noise
    #[arg(long, default_value_t = DEFAULT_NOISE_SIGMA)]
    pub sigma: f64,

    /// Seed for reproducible noise
    #[arg(long)]
    pub seed: Option<u64>,

    /// Also store the noisy image
    #[arg(long, value_name = "noisy image file")]
    pub noisy_out: Option<PathBuf>,

    /// Extract exactly the 128x128 payload instead of half of the spectrum
    #[arg(long)]
    pub exact_region: bool,
}

impl RobustnessArgs {
    pub fn run(self, options: WatermarkOptions) -> CliResult<()> {
        let report = wavemark_core::commands::robustness(
            &self.watermarked,
            self.reference.as_deref(),
            &self.write_to_file,
            self.noisy_out.as_deref(),
            self.sigma,
            self.seed,
            options,
            super::extract::region(self.exact_region),
        )?;
        println!(
            "{:?} watermark extracted from noisy image (sigma {}), PSNR noisy vs. clean: {:.2} dB ({})",
            report.mode,
            report.sigma,
            report.psnr,
            PsnrQuality::of(report.psnr)
        );

        Ok(())
    }
}
