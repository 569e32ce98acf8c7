//! gpuforge - deterministic procedural generator for the GPU card catalog
//!
//! This crate renders the collectible GPU set as layered vector scenes,
//! rasterizes them to WebP at build time, and emits the manifest the
//! storefront inventory reads. Everything is reproducible from fixed
//! seeds: no wall clock, no entropy, no network.

pub mod attributes;
pub mod catalog;
pub mod rarity;
pub mod render;
pub mod rng;
pub mod types;

// Re-export main types for convenience
pub use catalog::{assign_rarities, build_catalog, card_seed, CatalogConfig, TierAllocation};
pub use rarity::{Material, Rarity};
pub use types::{CardRecord, IdRange, Manifest};
