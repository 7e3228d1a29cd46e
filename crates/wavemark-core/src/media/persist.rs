use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::ImageFormat;
use log::error;

use crate::error::WavemarkError;
use crate::matrix::{self, GrayMatrix};
use crate::result::Result;

/// Writes something to a raster file, the format is picked by the file extension.
pub trait Persist {
    fn save_as(&self, file: &Path) -> Result<()>;
}

impl Persist for GrayMatrix {
    fn save_as(&self, file: &Path) -> Result<()> {
        let format = ImageFormat::from_path(file).map_err(|e| {
            error!("Unsupported target format {file:?}: {e}");
            WavemarkError::ImageEncodingError
        })?;
        let f = File::create(file).map_err(|e| {
            error!("Error creating file {file:?}: {e}");
            WavemarkError::WriteError { source: e }
        })?;

        let mut writer = BufWriter::new(f);
        matrix::to_gray_image(self)
            .write_to(&mut writer, format)
            .map_err(|e| {
                error!("Error saving image: {e}");
                WavemarkError::ImageEncodingError
            })?;
        writer.flush()?;

        Ok(())
    }
}
