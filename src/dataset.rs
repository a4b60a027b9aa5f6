//! Catalog dataset wire format.
//!
//! The upstream catalog loader emits one JSON document with two ordered
//! collections, `nodes` and `edges`. This module only mirrors that contract;
//! id assignment and stock-flag derivation happen upstream and are assumed,
//! never enforced here.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::model::{NodeId, NodeRecord, Relation};
use crate::Result;

/// One `nodes` entry: an identifier plus its typed attribute record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeEntry {
    pub id: NodeId,
    #[serde(flatten)]
    pub record: NodeRecord,
}

/// One `edges` entry: an unordered connection between two node identifiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeEntry {
    pub source: NodeId,
    pub target: NodeId,
    pub relation: Relation,
}

/// The full document consumed by [`GraphStore::load`](crate::GraphStore::load).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub nodes: Vec<NodeEntry>,
    pub edges: Vec<EdgeEntry>,
}

impl Dataset {
    /// Parse a dataset from a JSON string.
    pub fn from_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a dataset from any reader.
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Parse a dataset from a file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }
}
