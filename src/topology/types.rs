//! Topology type definitions.
//!
//! A `Topology` is the declaration set handed to the emulator: a map from
//! element name to element kind plus the list of links between elements.
//! It is built incrementally through the registration primitives and owns
//! the unique-name and known-endpoint checks.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::TopologyError;

/// Kind of emulated network element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    /// A forwarding element, one per graph node.
    Switch,
    /// An end-station attached to exactly one switch.
    Host,
}

/// A point-to-point connection between two registered elements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub a: String,
    pub b: String,
}

/// The set of element and link declarations for one emulated network.
///
/// Element names are kept in a `BTreeMap` so emitted declarations are
/// deterministic across runs.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Topology {
    pub elements: BTreeMap<String, ElementKind>,
    pub links: Vec<Link>,
}

impl Topology {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a switch. Fails if the name is already taken.
    pub fn add_switch(&mut self, name: impl Into<String>) -> Result<(), TopologyError> {
        self.register(name.into(), ElementKind::Switch)
    }

    /// Registers a host. Fails if the name is already taken.
    pub fn add_host(&mut self, name: impl Into<String>) -> Result<(), TopologyError> {
        self.register(name.into(), ElementKind::Host)
    }

    fn register(&mut self, name: String, kind: ElementKind) -> Result<(), TopologyError> {
        if self.elements.contains_key(&name) {
            return Err(TopologyError::DuplicateElement(name));
        }
        self.elements.insert(name, kind);
        Ok(())
    }

    /// Registers a link between two already-registered elements.
    pub fn add_link(&mut self, a: &str, b: &str) -> Result<(), TopologyError> {
        for endpoint in [a, b] {
            if !self.elements.contains_key(endpoint) {
                return Err(TopologyError::UnknownElement(endpoint.to_string()));
            }
        }
        self.links.push(Link {
            a: a.to_string(),
            b: b.to_string(),
        });
        Ok(())
    }

    pub fn kind(&self, name: &str) -> Option<ElementKind> {
        self.elements.get(name).copied()
    }

    pub fn switch_count(&self) -> usize {
        self.count_kind(ElementKind::Switch)
    }

    pub fn host_count(&self) -> usize {
        self.count_kind(ElementKind::Host)
    }

    fn count_kind(&self, kind: ElementKind) -> usize {
        self.elements.values().filter(|&&k| k == kind).count()
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// Links whose endpoints are both switches.
    pub fn switch_links(&self) -> impl Iterator<Item = &Link> {
        self.links.iter().filter(|link| {
            self.kind(&link.a) == Some(ElementKind::Switch)
                && self.kind(&link.b) == Some(ElementKind::Switch)
        })
    }

    /// Links with at least one host endpoint.
    pub fn host_links(&self) -> impl Iterator<Item = &Link> {
        self.links.iter().filter(|link| {
            self.kind(&link.a) == Some(ElementKind::Host)
                || self.kind(&link.b) == Some(ElementKind::Host)
        })
    }
}
