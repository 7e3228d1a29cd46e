//! Flat function wrappers over [`crate::api`], one per operation.

mod embed;
mod extract;
mod psnr;
mod robustness;

pub use embed::embed;
pub use extract::extract;
pub use psnr::psnr;
pub use robustness::robustness;
