use std::path::PathBuf;

use clap::Args;
use wavemark_core::PsnrQuality;

use crate::CliResult;

/// Calculates the PSNR between an original and a watermarked image
#[derive(Args, Debug)]
pub struct PsnrArgs {
    /// Original image
    #[arg(short = 'a', long = "original", value_name = "original image", required = true)]
    pub original: PathBuf,

    /// Watermarked image, resampled to the size of the original if needed
    #[arg(short = 'b', long = "watermarked", value_name = "watermarked image", required = true)]
    pub watermarked: PathBuf,
}

impl PsnrArgs {
    pub fn run(self) -> CliResult<()> {
        let psnr = wavemark_core::commands::psnr(&self.original, &self.watermarked)?;
        println!("PSNR: {psnr:.2} dB");
        println!("Quality: {}", PsnrQuality::of(psnr));

        Ok(())
    }
}
