//! Emission of topology declaration files.
//!
//! The built `Topology` is serialized into the output directory where the
//! emulator picks it up. YAML is the primary format; JSON is available for
//! runtimes that prefer it. Output is deterministic for a given topology.

use std::fs;
use std::path::{Path, PathBuf};

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use log::info;

use crate::topology::Topology;

/// Writes `topology.yaml` into the output directory, returning its path.
pub fn write_topology_yaml(topology: &Topology, output_dir: &Path) -> Result<PathBuf> {
    let path = output_dir.join("topology.yaml");
    let yaml = serde_yaml::to_string(topology)
        .wrap_err("Failed to serialize topology declarations to YAML")?;
    fs::write(&path, yaml)
        .wrap_err_with(|| format!("Failed to write topology declarations to '{}'", path.display()))?;
    info!("Wrote topology declarations to {:?}", path);
    Ok(path)
}

/// Writes `topology.json` into the output directory, returning its path.
pub fn write_topology_json(topology: &Topology, output_dir: &Path) -> Result<PathBuf> {
    let path = output_dir.join("topology.json");
    let json = serde_json::to_string_pretty(topology)
        .wrap_err("Failed to serialize topology declarations to JSON")?;
    fs::write(&path, json)
        .wrap_err_with(|| format!("Failed to write topology declarations to '{}'", path.display()))?;
    info!("Wrote topology declarations to {:?}", path);
    Ok(path)
}
