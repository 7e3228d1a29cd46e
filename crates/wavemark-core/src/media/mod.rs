//! Everything that touches raster files: loading and normalizing on the way in, encoding on
//! the way out.

pub mod normalize;
mod persist;

pub use normalize::{load_file, normalize_bytes, normalize_file, normalize_image};
pub use persist::Persist;
