//! Network topology module.
//!
//! This module contains the topology declaration types, the registration
//! primitives, and the adapter that translates generated graphs into
//! switch/host/link declarations.

pub mod adapter;
pub mod types;

// Re-export key types and functions for easier access
pub use adapter::{build_into, build_topology, BalancedTree, ErdosRenyi};
pub use types::{ElementKind, Link, Topology};
