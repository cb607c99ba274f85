//! Graph-to-topology translation.
//!
//! The adapter walks a generated graph once and registers one switch, one
//! host, and one switch-host link per node, then one switch-switch link per
//! edge. Node `i` in the graph becomes the pair `s{i+1}` / `h{i+1}`, so the
//! emitted names are 1-indexed.

use log::{debug, info};
use petgraph::graph::UnGraph;
use petgraph::visit::EdgeRef;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::TopologyError;
use crate::generate;
use crate::topology::types::Topology;

/// Translates a graph into a fresh set of topology declarations.
pub fn build_topology(graph: &UnGraph<(), ()>) -> Result<Topology, TopologyError> {
    let mut topology = Topology::new();
    build_into(graph, &mut topology)?;
    Ok(topology)
}

/// Translates a graph into an existing topology.
///
/// Registration is a single linear pass with no recovery: the first
/// rejected registration aborts the build and leaves the topology
/// partially filled. Running this twice against the same topology fails
/// with a duplicate-name error, which is the intended contract.
pub fn build_into(graph: &UnGraph<(), ()>, topology: &mut Topology) -> Result<(), TopologyError> {
    for node in graph.node_indices() {
        let n = node.index() + 1;
        let switch = format!("s{}", n);
        let host = format!("h{}", n);
        topology.add_switch(&switch)?;
        topology.add_host(&host)?;
        topology.add_link(&switch, &host)?;
    }

    for edge in graph.edge_references() {
        let a = format!("s{}", edge.source().index() + 1);
        let b = format!("s{}", edge.target().index() + 1);
        topology.add_link(&a, &b)?;
    }

    debug!(
        "Built topology: {} switches, {} hosts, {} links",
        topology.switch_count(),
        topology.host_count(),
        topology.link_count()
    );
    Ok(())
}

/// Balanced-tree topology: a complete r-ary tree of switches, each with
/// one attached host.
pub struct BalancedTree {
    graph: UnGraph<(), ()>,
    topology: Topology,
}

impl BalancedTree {
    pub fn new(fanout: usize, height: usize) -> Result<Self, TopologyError> {
        let graph = generate::balanced_tree(fanout, height)?;
        let topology = build_topology(&graph)?;
        info!(
            "Balanced tree topology: fanout={}, height={}, {} switches",
            fanout,
            height,
            topology.switch_count()
        );
        Ok(Self { graph, topology })
    }

    pub fn graph(&self) -> &UnGraph<(), ()> {
        &self.graph
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    pub fn into_topology(self) -> Topology {
        self.topology
    }
}

/// Erdos-Renyi topology: switches wired as a G(n, p) random graph, each
/// with one attached host. A seed makes the sampled graph reproducible.
pub struct ErdosRenyi {
    graph: UnGraph<(), ()>,
    topology: Topology,
}

impl ErdosRenyi {
    pub fn new(nodes: usize, probability: f64, seed: Option<u64>) -> Result<Self, TopologyError> {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let graph = generate::erdos_renyi(nodes, probability, &mut rng)?;
        let topology = build_topology(&graph)?;
        info!(
            "Erdos-Renyi topology: n={}, p={}, {} switch-switch links",
            nodes,
            probability,
            topology.switch_links().count()
        );
        Ok(Self { graph, topology })
    }

    pub fn graph(&self) -> &UnGraph<(), ()> {
        &self.graph
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    pub fn into_topology(self) -> Topology {
        self.topology
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::types::ElementKind;
    use std::collections::HashMap;

    #[test]
    fn test_build_counts_match_graph() {
        let graph = generate::balanced_tree(2, 2).unwrap();
        let topology = build_topology(&graph).unwrap();

        assert_eq!(topology.switch_count(), 7);
        assert_eq!(topology.host_count(), 7);
        assert_eq!(topology.host_links().count(), 7);
        assert_eq!(topology.switch_links().count(), 6);
        assert_eq!(topology.link_count(), 13);
    }

    #[test]
    fn test_names_are_one_indexed() {
        let graph = generate::balanced_tree(2, 1).unwrap();
        let topology = build_topology(&graph).unwrap();

        for n in 1..=3 {
            assert_eq!(topology.kind(&format!("s{}", n)), Some(ElementKind::Switch));
            assert_eq!(topology.kind(&format!("h{}", n)), Some(ElementKind::Host));
        }
        assert_eq!(topology.kind("s0"), None);
        assert_eq!(topology.kind("h0"), None);
    }

    #[test]
    fn test_each_host_has_exactly_one_link() {
        let graph = generate::balanced_tree(3, 2).unwrap();
        let topology = build_topology(&graph).unwrap();

        let mut host_degree: HashMap<&str, usize> = HashMap::new();
        for link in &topology.links {
            for endpoint in [link.a.as_str(), link.b.as_str()] {
                if topology.kind(endpoint) == Some(ElementKind::Host) {
                    *host_degree.entry(endpoint).or_default() += 1;
                }
            }
        }
        assert_eq!(host_degree.len(), topology.host_count());
        assert!(host_degree.values().all(|&degree| degree == 1));

        // Each host links to its paired switch
        for link in topology.host_links() {
            let (host, switch) = match topology.kind(&link.a) {
                Some(ElementKind::Host) => (&link.a, &link.b),
                _ => (&link.b, &link.a),
            };
            assert_eq!(host.trim_start_matches('h'), switch.trim_start_matches('s'));
        }
    }

    #[test]
    fn test_rebuild_into_same_topology_fails() {
        let graph = generate::balanced_tree(2, 1).unwrap();
        let mut topology = build_topology(&graph).unwrap();

        let err = build_into(&graph, &mut topology).unwrap_err();
        assert!(matches!(err, TopologyError::DuplicateElement(_)));
    }

    #[test]
    fn test_balanced_tree_specialization() {
        let tree = BalancedTree::new(2, 2).unwrap();
        assert_eq!(tree.graph().node_count(), 7);
        assert_eq!(tree.topology().switch_count(), 7);
        let topology = tree.into_topology();
        assert_eq!(topology.host_count(), 7);
    }

    #[test]
    fn test_erdos_renyi_specialization_extremes() {
        let sparse = ErdosRenyi::new(5, 0.0, None).unwrap();
        assert_eq!(sparse.topology().switch_count(), 5);
        assert_eq!(sparse.topology().host_count(), 5);
        assert_eq!(sparse.topology().switch_links().count(), 0);
        assert_eq!(sparse.topology().host_links().count(), 5);

        let complete = ErdosRenyi::new(5, 1.0, None).unwrap();
        assert_eq!(complete.topology().switch_links().count(), 10);
    }

    #[test]
    fn test_erdos_renyi_seed_reproducibility() {
        let a = ErdosRenyi::new(8, 0.5, Some(99)).unwrap();
        let b = ErdosRenyi::new(8, 0.5, Some(99)).unwrap();
        assert_eq!(a.topology().links, b.topology().links);
    }

    #[test]
    fn test_empty_graph_builds_empty_topology() {
        let graph = UnGraph::new_undirected();
        let topology = build_topology(&graph).unwrap();
        assert_eq!(topology.elements.len(), 0);
        assert_eq!(topology.link_count(), 0);
    }
}
