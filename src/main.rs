use anyhow::Result;
use catalog_vendor_sync::infrastructure::init_logging_with_config;
use catalog_vendor_sync::{AppConfig, run_enrichment};

fn main() -> Result<()> {
    let config = AppConfig::default();
    init_logging_with_config(&config.logging)?;

    run_enrichment(&config)?;
    Ok(())
}
