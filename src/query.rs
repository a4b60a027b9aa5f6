//! Read facade over the graph store for presentation layers.

use hashbrown::HashMap;

use crate::model::{NodeId, NodeRecord};
use crate::store::GraphStore;
use crate::Result;

/// Id → display name for every product node, in no guaranteed order.
pub fn list_products(store: &GraphStore) -> HashMap<NodeId, String> {
    store
        .products()
        .map(|(id, record)| (id.clone(), record.name().to_owned()))
        .collect()
}

/// Full attribute record for a node, or a typed NotFound failure.
pub fn product_details<'s>(store: &'s GraphStore, id: &NodeId) -> Result<&'s NodeRecord> {
    store.node(id)
}
