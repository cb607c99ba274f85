//! Topology type registry.
//!
//! Maps human-readable topology-type names to constructor functions so the
//! CLI can pick a topology by name with named parameters. The registry is
//! an explicit value owned by the caller, not process-wide state: the
//! dispatch surface is whatever registry instance is passed in.

use std::collections::BTreeMap;

use log::debug;

use crate::error::TopologyError;
use crate::topology::{BalancedTree, ErdosRenyi, Topology};

/// Named numeric parameters for a topology constructor, e.g. `r=2, h=3`.
#[derive(Debug, Clone, Default)]
pub struct TopologyParams(BTreeMap<String, f64>);

impl TopologyParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: f64) {
        self.0.insert(key.into(), value);
    }

    /// Parses `KEY=VALUE` pairs as given on the command line.
    pub fn parse_pairs<S: AsRef<str>>(pairs: &[S]) -> Result<Self, TopologyError> {
        let mut params = Self::new();
        for pair in pairs {
            let pair = pair.as_ref();
            let (key, value) = pair.split_once('=').ok_or_else(|| {
                TopologyError::InvalidParameter {
                    key: pair.to_string(),
                    reason: "expected KEY=VALUE".to_string(),
                }
            })?;
            let value = value.parse::<f64>().map_err(|_| {
                TopologyError::InvalidParameter {
                    key: key.to_string(),
                    reason: format!("'{}' is not a number", value),
                }
            })?;
            params.set(key, value);
        }
        Ok(params)
    }

    /// Looks up a count-like parameter, falling back to a default when the
    /// key is absent. Negative or fractional values are rejected here; any
    /// further validation belongs to the generator functions.
    pub fn get_usize(&self, key: &str, default: usize) -> Result<usize, TopologyError> {
        match self.0.get(key) {
            None => Ok(default),
            Some(&value) => {
                if value < 0.0 || value.fract() != 0.0 || !value.is_finite() {
                    return Err(TopologyError::InvalidParameter {
                        key: key.to_string(),
                        reason: format!("'{}' is not a non-negative integer", value),
                    });
                }
                Ok(value as usize)
            }
        }
    }

    pub fn get_f64(&self, key: &str, default: f64) -> f64 {
        self.0.get(key).copied().unwrap_or(default)
    }
}

/// Constructor signature stored in the registry.
pub type Constructor = fn(&TopologyParams, Option<u64>) -> Result<Topology, TopologyError>;

/// Registry of topology-type names to constructors.
pub struct TopologyRegistry {
    constructors: BTreeMap<&'static str, Constructor>,
}

impl TopologyRegistry {
    pub fn empty() -> Self {
        Self {
            constructors: BTreeMap::new(),
        }
    }

    /// The built-in topology types.
    pub fn defaults() -> Self {
        let mut registry = Self::empty();
        registry.register("balanced_tree", build_balanced_tree);
        registry.register("erdos_renyi", build_erdos_renyi);
        registry
    }

    pub fn register(&mut self, name: &'static str, constructor: Constructor) {
        self.constructors.insert(name, constructor);
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.constructors.keys().copied()
    }

    /// Builds the named topology with the given parameters.
    pub fn build(
        &self,
        name: &str,
        params: &TopologyParams,
        seed: Option<u64>,
    ) -> Result<Topology, TopologyError> {
        let constructor =
            self.constructors
                .get(name)
                .ok_or_else(|| TopologyError::UnknownTopology {
                    name: name.to_string(),
                    known: self.names().collect::<Vec<_>>().join(", "),
                })?;
        debug!("Dispatching to topology constructor '{}'", name);
        constructor(params, seed)
    }
}

/// Balanced tree with parameters `r` (fanout) and `h` (height).
fn build_balanced_tree(
    params: &TopologyParams,
    _seed: Option<u64>,
) -> Result<Topology, TopologyError> {
    let fanout = params.get_usize("r", 2)?;
    let height = params.get_usize("h", 2)?;
    Ok(BalancedTree::new(fanout, height)?.into_topology())
}

/// Erdos-Renyi graph with parameters `n` (node count) and `p` (probability).
fn build_erdos_renyi(
    params: &TopologyParams,
    seed: Option<u64>,
) -> Result<Topology, TopologyError> {
    let nodes = params.get_usize("n", 5)?;
    let probability = params.get_f64("p", 0.8);
    Ok(ErdosRenyi::new(nodes, probability, seed)?.into_topology())
}
