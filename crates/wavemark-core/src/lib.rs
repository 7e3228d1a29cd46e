//! # Wavemark Core API
//!
//! Hides a small grayscale watermark in the DCT spectrum of the wavelet approximation of a
//! grayscale host image, and recovers it again.
//!
//! There are two layers:
//! - in memory functions on intensity matrices: [`embed`], [`extract`], [`psnr`], [`degrade`]
//! - file based builders in [`api`] (and their flat wrappers in [`commands`])
//!
//! # Usage Examples
//!
//! ## Embed and extract in memory
//!
//! ```rust
//! use wavemark_core::{embed, extract, GrayMatrix, WatermarkOptions};
//!
//! let host = GrayMatrix::from_shape_fn((512, 512), |(r, c)| ((r * 7 + c * 13) % 200 + 20) as u8);
//! let payload = GrayMatrix::from_elem((128, 128), 255);
//! let options = WatermarkOptions::default();
//!
//! let watermarked = embed(&host, &payload, &options).expect("Failed to embed watermark");
//! let recovered = extract(&watermarked, Some(&host), &options).expect("Failed to extract");
//!
//! assert_eq!(recovered.dim(), (128, 128));
//! ```
//!
//! ## Embed a watermark into an image file
//!
//! ```rust
//! use image::{GrayImage, Luma};
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().expect("Failed to create temporary directory");
//! let host = temp_dir.path().join("host.png");
//! let mark = temp_dir.path().join("mark.png");
//! GrayImage::from_fn(640, 480, |x, y| Luma([((x ^ y) % 256) as u8])).save(&host).unwrap();
//! GrayImage::from_fn(128, 128, |x, _| Luma([(x * 2) as u8])).save(&mark).unwrap();
//!
//! wavemark_core::api::embed::prepare()
//!     .with_host(&host)
//!     .with_watermark(&mark)
//!     .with_output(temp_dir.path().join("watermarked.png"))
//!     .execute()
//!     .expect("Failed to embed watermark");
//! ```
//!
//! ## Extract it again
//!
//! ```rust
//! use image::{GrayImage, Luma};
//! use tempfile::tempdir;
//! use wavemark_core::ExtractionMode;
//!
//! let temp_dir = tempdir().expect("Failed to create temporary directory");
//! let image = temp_dir.path().join("watermarked.png");
//! GrayImage::from_fn(512, 512, |x, y| Luma([((x + y) % 256) as u8])).save(&image).unwrap();
//!
//! let mode = wavemark_core::api::extract::prepare()
//!     .from_watermarked(&image)
//!     .with_output(temp_dir.path().join("extracted.png"))
//!     .execute()
//!     .expect("Failed to extract watermark");
//!
//! assert_eq!(mode, ExtractionMode::Blind);
//! ```

#![warn(
    // clippy::unwrap_used,
    // clippy::expect_used,
    clippy::redundant_else,
)]

pub mod api;
pub mod commands;
pub mod degrade;
pub mod error;
pub mod matrix;
pub mod media;
pub mod metrics;
pub mod options;
pub mod result;
pub mod transform;
pub mod watermark;

pub use crate::degrade::{degrade, degrade_with_rng};
pub use crate::error::{LoadError, TransformError, WavemarkError};
pub use crate::matrix::{FloatMatrix, GrayMatrix};
pub use crate::media::{normalize_bytes, normalize_file, normalize_image, Persist};
pub use crate::metrics::{mean_absolute_error, psnr, psnr_resampled, PsnrQuality};
pub use crate::options::*;
pub use crate::result::Result;
pub use crate::transform::Wavelet;
pub use crate::watermark::{embed, extract, extract_with_region, Extraction, ExtractionMode};
