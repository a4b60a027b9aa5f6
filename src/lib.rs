//! # shelfgraph — Product Knowledge-Graph Substitute Engine
//!
//! An immutable, in-memory typed graph over a static product catalog
//! (products, categories, brands, attribute tags) plus the query engine
//! that recommends in-stock substitutes for an out-of-stock product,
//! constrained by a price ceiling and required tags, ranked by relevance.
//!
//! ## Design Principles
//!
//! 1. **Load once, read forever**: the graph is built from one dataset
//!    document at startup and never mutated; queries run lock-free in
//!    parallel against a shared handle
//! 2. **Typed facts**: node records are a tagged variant per node type,
//!    relations are a closed enum — no loosely typed attribute bags
//! 3. **One resolution helper**: "neighbor of relation R" always goes
//!    through [`GraphStore::first_neighbor`], never adjacency position
//!
//! ## Quick Start
//!
//! ```rust
//! use shelfgraph::{Catalog, SubstituteRequest};
//!
//! # fn main() -> shelfgraph::Result<()> {
//! let catalog = Catalog::load_from_str(r#"{
//!     "nodes": [
//!         {"id": "prod_0", "type": "product", "name": "Sunrise Oil 1L",
//!          "price": 120.0, "in_stock": false},
//!         {"id": "prod_1", "type": "product", "name": "Golden Oil 1L",
//!          "price": 110.0, "in_stock": true},
//!         {"id": "cat_Oil", "type": "category", "name": "Oil"}
//!     ],
//!     "edges": [
//!         {"source": "prod_0", "target": "cat_Oil", "relation": "IS_A"},
//!         {"source": "prod_1", "target": "cat_Oil", "relation": "IS_A"}
//!     ]
//! }"#)?;
//!
//! let subs = catalog.find_substitutes(&"prod_0".into(), &SubstituteRequest::new())?;
//! assert_eq!(subs[0].name, "Golden Oil 1L");
//! # Ok(())
//! # }
//! ```

// ============================================================================
// Modules
// ============================================================================

pub mod dataset;
pub mod model;
pub mod query;
pub mod store;
pub mod substitute;

// ============================================================================
// Re-exports
// ============================================================================

pub use dataset::{Dataset, EdgeEntry, NodeEntry};
pub use model::{NodeId, NodeRecord, Relation};
pub use store::GraphStore;
pub use substitute::{Reason, Substitute, SubstituteRequest, MAX_SUBSTITUTES};

use std::io::Read;
use std::path::Path;

use hashbrown::HashMap;

// ============================================================================
// Top-level Catalog handle
// ============================================================================

/// The primary entry point: a loaded graph plus the query API exposed to
/// presentation layers.
///
/// Construct one `Catalog` at startup and pass it by reference (or `Arc`) to
/// every query site. All operations are read-only; the catalog is `Send +
/// Sync` and safe to share without locks.
pub struct Catalog {
    store: GraphStore,
}

impl Catalog {
    /// Wrap an already-loaded graph store.
    pub fn new(store: GraphStore) -> Self {
        Self { store }
    }

    /// Load a catalog from a parsed dataset.
    pub fn load(dataset: Dataset) -> Result<Self> {
        Ok(Self::new(GraphStore::load(dataset)?))
    }

    /// Load a catalog from a JSON string.
    pub fn load_from_str(json: &str) -> Result<Self> {
        Self::load(Dataset::from_str(json)?)
    }

    /// Load a catalog from any reader.
    pub fn load_from_reader(reader: impl Read) -> Result<Self> {
        Self::load(Dataset::from_reader(reader)?)
    }

    /// Load a catalog from a JSON file on disk.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::load(Dataset::from_path(path)?)
    }

    /// Id → display name for every product, in no guaranteed order.
    pub fn products(&self) -> HashMap<NodeId, String> {
        query::list_products(&self.store)
    }

    /// Full attribute record for a node id.
    pub fn product_details(&self, id: &NodeId) -> Result<&NodeRecord> {
        query::product_details(&self.store, id)
    }

    /// Up to [`MAX_SUBSTITUTES`] ranked substitutes for a target product.
    pub fn find_substitutes(
        &self,
        id: &NodeId,
        request: &SubstituteRequest,
    ) -> Result<Vec<Substitute>> {
        substitute::find_substitutes(&self.store, id, request)
    }

    /// Access the underlying graph store (for structural queries).
    pub fn store(&self) -> &GraphStore {
        &self.store
    }
}

// ============================================================================
// Error Types
// ============================================================================

/// All failures the engine can produce.
///
/// Load-time variants are fatal: the store is never partially constructed.
/// `NotFound` is the only query-time failure and is recoverable; an empty
/// substitute list is a success, not an error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to parse dataset: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("duplicate node id: {0}")]
    DuplicateNode(NodeId),

    #[error("edge references unknown node: {0}")]
    UnknownNode(NodeId),

    #[error("product {id} has negative price {price}")]
    NegativePrice { id: NodeId, price: f64 },

    #[error("node not found: {0}")]
    NotFound(NodeId),
}

impl Error {
    /// True for failures raised while building the graph, which abort
    /// startup entirely.
    pub fn is_load_error(&self) -> bool {
        !matches!(self, Error::NotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
