//! Immutable in-memory graph store.
//!
//! Built once from a [`Dataset`] at startup and never mutated afterward, so
//! any number of concurrent readers may share it without locks. A catalog
//! refresh means loading a fresh store and swapping the handle; in-place
//! mutation is not supported.

use hashbrown::{HashMap, HashSet};
use smallvec::SmallVec;
use tracing::debug;

use crate::dataset::Dataset;
use crate::model::{NodeId, NodeRecord, Relation};
use crate::{Error, Result};

/// Per-node adjacency. Products out of the catalog loader carry three edges
/// (category, brand, attribute), so four inline slots avoid heap spills for
/// the common case.
type AdjacencyList = SmallVec<[(NodeId, Relation); 4]>;

/// The typed product graph: one attribute record and one adjacency list per
/// node identifier.
///
/// Edges are undirected: each edge appears in both endpoints' adjacency
/// lists. Insertion order is preserved per node — neighbor resolution in the
/// substitute finder takes the first match, so adjacency must never be
/// re-sorted.
pub struct GraphStore {
    records: HashMap<NodeId, NodeRecord>,
    adjacency: HashMap<NodeId, AdjacencyList>,
    edge_count: usize,
}

impl GraphStore {
    /// Build a store from a parsed dataset.
    ///
    /// Any malformed input (duplicate node id, edge naming an unknown node,
    /// negative product price) fails the whole load; there is no partial or
    /// degraded construction.
    pub fn load(dataset: Dataset) -> Result<Self> {
        let mut records: HashMap<NodeId, NodeRecord> =
            HashMap::with_capacity(dataset.nodes.len());

        for entry in dataset.nodes {
            if let NodeRecord::Product { price, .. } = &entry.record {
                if *price < 0.0 {
                    return Err(Error::NegativePrice { id: entry.id, price: *price });
                }
            }
            if records.contains_key(&entry.id) {
                return Err(Error::DuplicateNode(entry.id));
            }
            records.insert(entry.id, entry.record);
        }

        let mut adjacency: HashMap<NodeId, AdjacencyList> =
            HashMap::with_capacity(records.len());
        let edge_count = dataset.edges.len();

        for edge in dataset.edges {
            if !records.contains_key(&edge.source) {
                return Err(Error::UnknownNode(edge.source));
            }
            if !records.contains_key(&edge.target) {
                return Err(Error::UnknownNode(edge.target));
            }

            adjacency
                .entry(edge.source.clone())
                .or_default()
                .push((edge.target.clone(), edge.relation.clone()));
            if edge.source != edge.target {
                adjacency
                    .entry(edge.target)
                    .or_default()
                    .push((edge.source, edge.relation));
            }
        }

        debug!(nodes = records.len(), edges = edge_count, "graph store loaded");
        Ok(Self { records, adjacency, edge_count })
    }

    /// The node's attribute record, or a typed NotFound failure.
    pub fn node(&self, id: &NodeId) -> Result<&NodeRecord> {
        self.records.get(id).ok_or_else(|| Error::NotFound(id.clone()))
    }

    /// The node's attribute record, if present.
    pub fn get(&self, id: &NodeId) -> Option<&NodeRecord> {
        self.records.get(id)
    }

    /// All `(neighbor, relation)` pairs of a node, in edge insertion order.
    ///
    /// Lazy and restartable; an unknown id yields an empty sequence.
    pub fn neighbors<'s>(
        &'s self,
        id: &NodeId,
    ) -> impl Iterator<Item = (&'s NodeId, &'s Relation)> + 's {
        self.adjacency
            .get(id)
            .into_iter()
            .flatten()
            .map(|(neighbor, relation)| (neighbor, relation))
    }

    /// First neighbor reached via the given relation, in insertion order.
    ///
    /// This is the one place relation semantics are resolved; a node with
    /// several edges of the same relation degrades to first-match-wins.
    pub fn first_neighbor(&self, id: &NodeId, relation: &Relation) -> Option<&NodeId> {
        self.neighbors(id)
            .find(|(_, r)| *r == relation)
            .map(|(neighbor, _)| neighbor)
    }

    /// Names of all nodes reachable from `id` via `HAS_ATTRIBUTE` edges.
    pub fn attribute_names(&self, id: &NodeId) -> HashSet<&str> {
        self.neighbors(id)
            .filter(|(_, relation)| **relation == Relation::HasAttribute)
            .filter_map(|(neighbor, _)| self.records.get(neighbor))
            .map(|record| record.name())
            .collect()
    }

    /// All product nodes, in no guaranteed order.
    pub fn products(&self) -> impl Iterator<Item = (&NodeId, &NodeRecord)> {
        self.records.iter().filter(|(_, record)| record.is_product())
    }

    pub fn node_count(&self) -> usize {
        self.records.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
}
