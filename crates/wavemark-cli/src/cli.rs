use clap::{Parser, Subcommand};
use wavemark_core::{Wavelet, WatermarkOptions};

use crate::commands::*;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    /// Wavelet family of the decomposition: haar, db1, db2, db3 or db4
    #[arg(long, global = true, default_value = "haar")]
    pub wavelet: Wavelet,

    /// Number of wavelet decomposition levels
    #[arg(long, global = true, default_value_t = 1)]
    pub level: usize,

    /// Embedding strength, must be the same for embedding and extraction
    #[arg(long, global = true, default_value_t = 0.1)]
    pub alpha: f64,

    #[command(subcommand)]
    pub command: Commands,
}

impl CliArgs {
    pub fn options(&self) -> WatermarkOptions {
        WatermarkOptions::default()
            .with_wavelet(self.wavelet)
            .with_level(self.level)
            .with_alpha(self.alpha)
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Embed(embed::EmbedArgs),
    Extract(extract::ExtractArgs),
    Robustness(robustness::RobustnessArgs),
    Psnr(psnr::PsnrArgs),
}
