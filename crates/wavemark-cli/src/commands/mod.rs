pub mod embed;
pub mod extract;
pub mod psnr;
pub mod robustness;
