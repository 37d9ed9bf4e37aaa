//! CLI command implementations.

pub mod dashboards;

use anyhow::Result;
use grafana_client::GrafanaClient;
use grafana_config::Config;

/// Build a client from resolved configuration.
pub fn build_client_from_config(config: &Config) -> Result<GrafanaClient> {
    Ok(GrafanaClient::builder().from_config(config).build()?)
}
