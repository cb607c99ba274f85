//! Graph generator functions.
//!
//! Each generator produces an undirected petgraph graph that the topology
//! adapter later translates into switch/host/link declarations. Parameter
//! validation happens here and nowhere else: the adapter and the registry
//! propagate generator errors unchanged.

use log::debug;
use petgraph::graph::UnGraph;
use rand::Rng;

use crate::error::TopologyError;

/// Generates a complete r-ary tree of the given height.
///
/// Nodes are numbered in heap order, so the parent of node `i` (for `i > 0`)
/// is node `(i - 1) / fanout`. A height of 0 yields a single root node;
/// a fanout of 1 yields a path of `height + 1` nodes.
///
/// # Errors
///
/// Returns `TopologyError::InvalidFanout` if `fanout` is 0.
pub fn balanced_tree(fanout: usize, height: usize) -> Result<UnGraph<(), ()>, TopologyError> {
    if fanout == 0 {
        return Err(TopologyError::InvalidFanout);
    }

    let mut node_count = 1;
    let mut level_width = 1;
    for _ in 0..height {
        level_width *= fanout;
        node_count += level_width;
    }

    let mut graph = UnGraph::with_capacity(node_count, node_count - 1);
    let nodes: Vec<_> = (0..node_count).map(|_| graph.add_node(())).collect();
    for i in 1..node_count {
        graph.add_edge(nodes[(i - 1) / fanout], nodes[i], ());
    }

    debug!(
        "Generated balanced tree: fanout={}, height={}, {} nodes, {} edges",
        fanout,
        height,
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
}

/// Generates an Erdos-Renyi G(n, p) random graph.
///
/// Each of the C(n, 2) possible undirected edges is present independently
/// with probability `probability`. With `probability` 0 no edges are drawn;
/// with 1 the complete graph is produced regardless of RNG state.
///
/// # Errors
///
/// Returns `TopologyError::InvalidProbability` if `probability` is outside
/// [0, 1] or not finite.
pub fn erdos_renyi<R: Rng + ?Sized>(
    nodes: usize,
    probability: f64,
    rng: &mut R,
) -> Result<UnGraph<(), ()>, TopologyError> {
    if !(0.0..=1.0).contains(&probability) {
        return Err(TopologyError::InvalidProbability(probability));
    }

    let mut graph = UnGraph::with_capacity(nodes, 0);
    let indices: Vec<_> = (0..nodes).map(|_| graph.add_node(())).collect();
    for i in 0..nodes {
        for j in (i + 1)..nodes {
            if rng.gen_bool(probability) {
                graph.add_edge(indices[i], indices[j], ());
            }
        }
    }

    debug!(
        "Generated Erdos-Renyi graph: n={}, p={}, {} edges drawn",
        nodes,
        probability,
        graph.edge_count()
    );
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_balanced_tree_counts() {
        // fanout=2, height=2 is the canonical 7-node binary tree
        let graph = balanced_tree(2, 2).unwrap();
        assert_eq!(graph.node_count(), 7);
        assert_eq!(graph.edge_count(), 6);

        let graph = balanced_tree(3, 2).unwrap();
        assert_eq!(graph.node_count(), 13);
        assert_eq!(graph.edge_count(), 12);
    }

    #[test]
    fn test_balanced_tree_height_zero_is_single_node() {
        let graph = balanced_tree(2, 0).unwrap();
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_balanced_tree_fanout_one_is_path() {
        let graph = balanced_tree(1, 4).unwrap();
        assert_eq!(graph.node_count(), 5);
        assert_eq!(graph.edge_count(), 4);
    }

    #[test]
    fn test_balanced_tree_rejects_zero_fanout() {
        assert_eq!(balanced_tree(0, 2).err(), Some(TopologyError::InvalidFanout));
    }

    #[test]
    fn test_erdos_renyi_probability_extremes() {
        let mut rng = StdRng::seed_from_u64(42);

        let empty = erdos_renyi(5, 0.0, &mut rng).unwrap();
        assert_eq!(empty.node_count(), 5);
        assert_eq!(empty.edge_count(), 0);

        // p=1 must yield the complete graph, C(5,2) = 10 edges
        let complete = erdos_renyi(5, 1.0, &mut rng).unwrap();
        assert_eq!(complete.edge_count(), 10);
    }

    #[test]
    fn test_erdos_renyi_zero_nodes() {
        let mut rng = StdRng::seed_from_u64(42);
        let graph = erdos_renyi(0, 0.5, &mut rng).unwrap();
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_erdos_renyi_rejects_bad_probability() {
        let mut rng = StdRng::seed_from_u64(42);
        assert!(erdos_renyi(5, -0.1, &mut rng).is_err());
        assert!(erdos_renyi(5, 1.5, &mut rng).is_err());
        assert!(erdos_renyi(5, f64::NAN, &mut rng).is_err());
    }

    #[test]
    fn test_erdos_renyi_seeded_runs_are_reproducible() {
        let mut rng_a = StdRng::seed_from_u64(7);
        let mut rng_b = StdRng::seed_from_u64(7);
        let a = erdos_renyi(10, 0.5, &mut rng_a).unwrap();
        let b = erdos_renyi(10, 0.5, &mut rng_b).unwrap();
        assert_eq!(a.edge_count(), b.edge_count());
        let edges_a: Vec<_> = a.raw_edges().iter().map(|e| (e.source(), e.target())).collect();
        let edges_b: Vec<_> = b.raw_edges().iter().map(|e| (e.source(), e.target())).collect();
        assert_eq!(edges_a, edges_b);
    }
}
