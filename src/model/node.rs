//! Nodes of the product graph.

use serde::{Deserialize, Serialize};

/// Graph-wide unique node identifier, assigned by the upstream catalog
/// loader (e.g. `prod_42`, `cat_Beverages`, `brand_Fresho`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub String);

impl NodeId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        NodeId(s.to_owned())
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        NodeId(s)
    }
}

/// Per-node attribute record, one variant per node type.
///
/// Only products carry price and stock state; category, brand and attribute
/// nodes are bare named entities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NodeRecord {
    Product {
        name: String,
        price: f64,
        in_stock: bool,
    },
    Category {
        name: String,
    },
    Brand {
        name: String,
    },
    Attribute {
        name: String,
    },
}

impl NodeRecord {
    pub fn name(&self) -> &str {
        match self {
            NodeRecord::Product { name, .. }
            | NodeRecord::Category { name }
            | NodeRecord::Brand { name }
            | NodeRecord::Attribute { name } => name,
        }
    }

    pub fn is_product(&self) -> bool {
        matches!(self, NodeRecord::Product { .. })
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            NodeRecord::Product { .. } => "product",
            NodeRecord::Category { .. } => "category",
            NodeRecord::Brand { .. } => "brand",
            NodeRecord::Attribute { .. } => "attribute",
        }
    }
}
