//! File based workflows, one builder per operation.
//!
//! Every builder is created with `prepare()`, configured with `with_*` calls and run with
//! `execute()`. Inputs are normalized the same way for all of them, hosts to
//! [`HOST_SIZE`](crate::HOST_SIZE) and watermarks to [`WATERMARK_SIZE`](crate::WATERMARK_SIZE).

pub mod embed;
pub mod extract;
pub mod psnr;
pub mod robustness;

pub use robustness::RobustnessReport;
