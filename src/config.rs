//! Configuration file loading.
//!
//! A topology can be described in a small YAML file instead of command-line
//! flags:
//!
//! ```yaml
//! topology: erdos_renyi
//! params:
//!   n: 10
//!   p: 0.3
//! seed: 42
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use log::info;
use serde::Deserialize;

use crate::registry::TopologyParams;

/// Parsed topology configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TopologyConfig {
    /// Topology-type name as registered, e.g. "balanced_tree".
    pub topology: String,
    /// Named generator parameters.
    #[serde(default)]
    pub params: BTreeMap<String, f64>,
    /// RNG seed for random topologies.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl TopologyConfig {
    pub fn params(&self) -> TopologyParams {
        let mut params = TopologyParams::new();
        for (key, &value) in &self.params {
            params.set(key, value);
        }
        params
    }
}

/// Loads and parses a topology configuration YAML file.
pub fn load_config(path: &Path) -> Result<TopologyConfig> {
    let content = fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read configuration file '{}'", path.display()))?;
    let config: TopologyConfig = serde_yaml::from_str(&content)
        .wrap_err_with(|| format!("Failed to parse configuration file '{}'", path.display()))?;
    info!("Loaded topology configuration from {:?}", path);
    Ok(config)
}
