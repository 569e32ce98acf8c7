//! Build-time entry point that renders the card catalog to disk.

use std::path::PathBuf;

use anyhow::Result;
use gpuforge::{build_catalog, CatalogConfig};
use tracing::{info, Level};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let mut config = CatalogConfig::default();
    if let Ok(dir) = std::env::var("GPUFORGE_OUT_DIR") {
        config.out_dir = PathBuf::from(dir);
    }

    info!(
        "Generating {} cards (ids {}..={}) into {}",
        config.end_id - config.start_id + 1,
        config.start_id,
        config.end_id,
        config.out_dir.display()
    );

    let manifest = build_catalog(&config)?;

    info!(
        "Generated {} unique GPU cards in {}",
        manifest.total,
        config.out_dir.display()
    );
    info!("Manifest: {}", config.manifest_path().display());
    info!(
        "Id {} is the gifted base GPU and is not generated by this build",
        config.base_gift_id
    );
    Ok(())
}
