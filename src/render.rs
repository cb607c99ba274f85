//! Graphviz rendering of built topologies.
//!
//! Rendering is a side effect only: the topology is turned into DOT text
//! with switches and hosts in distinct colors, and an external tool does
//! the actual display. Nothing here feeds back into the topology.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use log::info;
use petgraph::dot::{Config, Dot};
use petgraph::graph::UnGraph;

use crate::topology::{ElementKind, Topology};

const SWITCH_COLOR: &str = "firebrick2";
const HOST_COLOR: &str = "steelblue2";

/// Renders a topology as Graphviz DOT, switches red and hosts blue.
pub fn to_dot(topology: &Topology) -> String {
    let mut graph: UnGraph<(&str, ElementKind), ()> = UnGraph::new_undirected();
    let mut indices = BTreeMap::new();
    for (name, &kind) in &topology.elements {
        indices.insert(name.as_str(), graph.add_node((name.as_str(), kind)));
    }
    for link in &topology.links {
        // Endpoints were validated at registration time
        if let (Some(&a), Some(&b)) = (indices.get(link.a.as_str()), indices.get(link.b.as_str()))
        {
            graph.add_edge(a, b, ());
        }
    }

    format!(
        "{:?}",
        Dot::with_attr_getters(
            &graph,
            &[Config::NodeNoLabel, Config::EdgeNoLabel],
            &|_, _| String::new(),
            &|_, (_, &(name, kind))| {
                let color = match kind {
                    ElementKind::Switch => SWITCH_COLOR,
                    ElementKind::Host => HOST_COLOR,
                };
                format!("label = \"{}\" style = filled fillcolor = {}", name, color)
            },
        )
    )
}

/// Writes the DOT rendering next to the other emitted files.
pub fn write_dot(topology: &Topology, path: &Path) -> Result<()> {
    let dot = to_dot(topology);
    fs::write(path, dot)
        .wrap_err_with(|| format!("Failed to write DOT rendering to '{}'", path.display()))?;
    info!("Wrote DOT rendering to {:?}", path);
    Ok(())
}
