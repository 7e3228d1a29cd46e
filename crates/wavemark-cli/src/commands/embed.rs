use std::path::PathBuf;

use clap::Args;
use wavemark_core::WatermarkOptions;

use crate::CliResult;

/// Embeds a watermark image into a host image
#[derive(Args, Debug)]
pub struct EmbedArgs {
    /// Host image, used readonly and normalized to 512x512 grayscale
    #[arg(short = 'i', long = "in", value_name = "host image", required = true)]
    pub host: PathBuf,

    /// Watermark image, normalized to 128x128 grayscale
    #[arg(short = 'w', long = "watermark", value_name = "watermark image", required = true)]
    pub watermark: PathBuf,

    /// Watermarked image will be stored as file, the extension selects the format
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output image file",
        required = true
    )]
    pub write_to_file: PathBuf,
}

impl EmbedArgs {
    pub fn run(self, options: WatermarkOptions) -> CliResult<()> {
        wavemark_core::commands::embed(&self.host, &self.watermark, &self.write_to_file, options)
    }
}
