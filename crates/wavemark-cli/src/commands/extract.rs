use std::path::PathBuf;

use clap::Args;
use wavemark_core::{ExtractionRegion, WatermarkOptions, WATERMARK_SIZE};

use crate::CliResult;

/// Extracts a watermark, reference assisted when the original host is given, blind otherwise
#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Watermarked image
    #[arg(short = 'i', long = "in", value_name = "watermarked image", required = true)]
    pub watermarked: PathBuf,

    /// Original host image for reference assisted extraction
    #[arg(short = 'r', long = "reference", value_name = "original image")]
    pub reference: Option<PathBuf>,

    /// Extracted watermark will be stored as file
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output image file",
        required = true
    )]
    pub write_to_file: PathBuf,

    /// Extract exactly the 128x128 payload instead of half of the spectrum
    #[arg(long)]
    pub exact_region: bool,
}

impl ExtractArgs {
    pub fn run(self, options: WatermarkOptions) -> CliResult<()> {
        let mode = wavemark_core::commands::extract(
            &self.watermarked,
            self.reference.as_deref(),
            &self.write_to_file,
            options,
            region(self.exact_region),
        )?;
        println!("{mode:?} watermark extracted to {}", self.write_to_file.display());

        Ok(())
    }
}

pub(crate) fn region(exact: bool) -> ExtractionRegion {
    if exact {
        let size = WATERMARK_SIZE as usize;
        ExtractionRegion::Payload {
            rows: size,
            cols: size,
        }
    } else {
        ExtractionRegion::HalfSpectrum
    }
}
