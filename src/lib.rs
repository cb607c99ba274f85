//! # Topogen - Graph-derived topology declarations for network emulators
//!
//! This library translates graph-theory topology generators into the
//! switch/host/link declarations a network emulator instantiates. Every
//! graph node becomes a switch with one attached host; every graph edge
//! becomes a switch-to-switch link.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - `generate`: graph generator functions (balanced tree, Erdos-Renyi)
//! - `topology`: declaration types, registration primitives, and the
//!   graph-to-topology adapter
//! - `registry`: name-based dispatch to topology constructors
//! - `render`: Graphviz DOT rendering with color-coded element kinds
//! - `config`: YAML configuration file loading
//! - `emit`: YAML/JSON declaration file emission
//! - `error`: the `TopologyError` taxonomy
//!
//! ## Example Usage
//!
//! ```rust
//! use topogen::registry::{TopologyParams, TopologyRegistry};
//!
//! let registry = TopologyRegistry::defaults();
//! let params = TopologyParams::parse_pairs(&["r=2", "h=2"])?;
//! let topology = registry.build("balanced_tree", &params, None)?;
//!
//! assert_eq!(topology.switch_count(), 7);
//! assert_eq!(topology.host_count(), 7);
//! # Ok::<(), topogen::error::TopologyError>(())
//! ```
//!
//! ## Error Handling
//!
//! Library operations return the typed `TopologyError`; filesystem-touching
//! helpers (`config`, `emit`, `render::write_dot`) return
//! `color_eyre::Result` with context, matching the binary boundary.

pub mod config;
pub mod emit;
pub mod error;
pub mod generate;
pub mod registry;
pub mod render;
pub mod topology;
