pub mod audio;
pub mod chapters;
pub mod editions;
pub mod init;
pub mod quiz;
pub mod reciters;
pub mod search;

use std::path::Path;

use anyhow::{Context, Result};

use hifz_client::{load_config_from, AlQuranClient, HifzConfig};

/// Load configuration and build a client from it.
pub(crate) fn client(config_path: Option<&Path>) -> Result<(HifzConfig, AlQuranClient)> {
    let config = load_config_from(config_path)?;
    let client = AlQuranClient::from_config(&config).context("failed to create client")?;
    tracing::debug!("using scripture service at {}", config.base_url);
    Ok((config, client))
}
