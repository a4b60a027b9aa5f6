//! Property tests for the substitute finder's hard guarantees: result size,
//! self-exclusion, stock and budget filters, score ordering, determinism.

use proptest::prelude::*;
use shelfgraph::{
    Catalog, Dataset, EdgeEntry, NodeEntry, NodeId, NodeRecord, Relation, SubstituteRequest,
    MAX_SUBSTITUTES,
};

/// One category, one brand, N products. Every product is in the category;
/// every other product carries the shared brand.
fn build_catalog(products: &[(u32, bool)]) -> Catalog {
    let mut nodes = vec![
        NodeEntry {
            id: NodeId::from("cat_0"),
            record: NodeRecord::Category { name: "C".into() },
        },
        NodeEntry {
            id: NodeId::from("brand_0"),
            record: NodeRecord::Brand { name: "B".into() },
        },
    ];
    let mut edges = Vec::new();

    for (i, (price, in_stock)) in products.iter().enumerate() {
        let id = NodeId(format!("prod_{i}"));
        nodes.push(NodeEntry {
            id: id.clone(),
            record: NodeRecord::Product {
                name: format!("Product {i}"),
                price: *price as f64,
                in_stock: *in_stock,
            },
        });
        edges.push(EdgeEntry {
            source: id.clone(),
            target: NodeId::from("cat_0"),
            relation: Relation::IsA,
        });
        if i % 2 == 0 {
            edges.push(EdgeEntry {
                source: id,
                target: NodeId::from("brand_0"),
                relation: Relation::HasBrand,
            });
        }
    }

    Catalog::load(Dataset { nodes, edges }).unwrap()
}

proptest! {
    #[test]
    fn substitutes_respect_hard_guarantees(
        products in prop::collection::vec((0u32..500, any::<bool>()), 1..12),
        target_seed in 0usize..12,
        budget in prop::option::of(0u32..500),
    ) {
        let target = target_seed % products.len();
        let catalog = build_catalog(&products);

        let mut request = SubstituteRequest::new();
        if let Some(budget) = budget {
            request = request.with_max_price(budget as f64);
        }

        let id = NodeId(format!("prod_{target}"));
        let subs = catalog.find_substitutes(&id, &request).unwrap();

        prop_assert!(subs.len() <= MAX_SUBSTITUTES);

        let target_name = format!("Product {target}");
        for sub in &subs {
            prop_assert_ne!(&sub.name, &target_name);

            let index: usize = sub.name.trim_start_matches("Product ").parse().unwrap();
            let (price, in_stock) = products[index];
            prop_assert!(in_stock);
            prop_assert_eq!(sub.price, price as f64);
            if let Some(budget) = budget {
                prop_assert!(sub.price <= budget as f64);
            }
        }

        for pair in subs.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }

        let again = catalog.find_substitutes(&id, &request).unwrap();
        prop_assert_eq!(subs, again);
    }
}
