//! Layered image synthesis: background field, device render, header
//! overlay, composed into one scene and rasterized to WebP.

pub mod background;
pub mod card;
pub mod color;
pub mod device;
pub mod raster;

// Re-export the composition surface
pub use card::{card_svg, DEVICE_SEED_OFFSET};
pub use raster::Rasterizer;
