//! Substitute discovery: anchor resolution, candidate filtering, scoring,
//! ranking.
//!
//! Given a target product, the finder resolves its category anchor and brand
//! from the graph, collects the anchor's other products as candidates, drops
//! those that are out of stock, over budget or missing required tags, scores
//! the survivors and returns the top three.

use std::cmp::Reverse;

use hashbrown::HashSet;
use serde::Serialize;
use tracing::{trace, warn};

use crate::model::{NodeId, NodeRecord, Relation};
use crate::store::GraphStore;
use crate::Result;

/// Score bonus for a candidate carrying the target's brand.
const SAME_BRAND_BONUS: i32 = 10;
/// Score bonus for a candidate strictly cheaper than the target.
const CHEAPER_BONUS: i32 = 5;
/// At most this many ranked substitutes are returned per query.
pub const MAX_SUBSTITUTES: usize = 3;

/// Symbolic explanation for a scoring contribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Reason {
    SameBrandMatch,
    DiffBrandAlternative,
    CheaperOption,
    PremiumOption,
    SameCategory,
}

impl Reason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Reason::SameBrandMatch => "same_brand_match",
            Reason::DiffBrandAlternative => "diff_brand_alternative",
            Reason::CheaperOption => "cheaper_option",
            Reason::PremiumOption => "premium_option",
            Reason::SameCategory => "same_category",
        }
    }
}

impl std::fmt::Display for Reason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Constraints for one substitute query.
#[derive(Debug, Clone, Default)]
pub struct SubstituteRequest {
    max_price: Option<f64>,
    required_tags: HashSet<String>,
}

impl SubstituteRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inclusive price ceiling. A ceiling of `0.0` still filters; only an
    /// unset ceiling admits any price.
    pub fn with_max_price(mut self, max_price: f64) -> Self {
        self.max_price = Some(max_price);
        self
    }

    /// Attribute names every substitute must carry. Matching is exact and
    /// case-sensitive, mirroring the upstream catalog contract.
    pub fn with_required_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

/// One ranked substitute candidate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Substitute {
    pub name: String,
    pub price: f64,
    pub score: i32,
    pub reasons: Vec<Reason>,
}

/// Find up to [`MAX_SUBSTITUTES`] ranked substitutes for `target`.
///
/// An unknown target id is a NotFound failure. A target with no category
/// anchor, or constraints that no candidate survives, is a success with an
/// empty result.
pub fn find_substitutes(
    store: &GraphStore,
    target: &NodeId,
    request: &SubstituteRequest,
) -> Result<Vec<Substitute>> {
    let target_record = store.node(target)?;
    let target_price = match target_record {
        NodeRecord::Product { price, .. } => *price,
        _ => 0.0,
    };
    trace!(%target, ?request, "substitute query");

    // Anchor resolution: first IS_A neighbor is the category anchor, first
    // HAS_BRAND neighbor is the target brand. Duplicate edges are a known
    // upstream data-quality defect; flag them but keep first-match results.
    let mut anchor: Option<&NodeId> = None;
    let mut target_brand: Option<&NodeId> = None;
    let mut duplicate_edges = 0usize;
    for (neighbor, relation) in store.neighbors(target) {
        match relation {
            Relation::IsA => {
                if anchor.is_none() {
                    anchor = Some(neighbor);
                } else {
                    duplicate_edges += 1;
                }
            }
            Relation::HasBrand => {
                if target_brand.is_none() {
                    target_brand = Some(neighbor);
                } else {
                    duplicate_edges += 1;
                }
            }
            _ => {}
        }
    }
    if duplicate_edges > 0 {
        warn!(%target, duplicate_edges, "duplicate IS_A/HAS_BRAND edges, using first match");
    }

    // No category anchor means no comparison basis. Not an error.
    let Some(anchor) = anchor else {
        trace!(%target, "no category anchor");
        return Ok(Vec::new());
    };

    let mut scored = Vec::new();
    for (candidate, _) in store.neighbors(anchor) {
        if candidate == target {
            continue;
        }
        let Some(NodeRecord::Product { name, price, in_stock }) = store.get(candidate) else {
            continue;
        };

        // Filters, fixed order: stock, budget, tags.
        if !*in_stock {
            continue;
        }
        if let Some(max_price) = request.max_price {
            if *price > max_price {
                continue;
            }
        }
        if !request.required_tags.is_empty() {
            let tags = store.attribute_names(candidate);
            if !request.required_tags.iter().all(|t| tags.contains(t.as_str())) {
                continue;
            }
        }

        let mut score = 0;
        let mut reasons = Vec::with_capacity(3);

        let brand = store.first_neighbor(candidate, &Relation::HasBrand);
        if brand.is_some() && brand == target_brand {
            score += SAME_BRAND_BONUS;
            reasons.push(Reason::SameBrandMatch);
        } else {
            reasons.push(Reason::DiffBrandAlternative);
        }

        if *price < target_price {
            score += CHEAPER_BONUS;
            reasons.push(Reason::CheaperOption);
        } else if *price > target_price {
            reasons.push(Reason::PremiumOption);
        }

        reasons.push(Reason::SameCategory);

        scored.push(Substitute { name: name.clone(), price: *price, score, reasons });
    }

    // Stable sort: ties keep candidate-discovery order.
    scored.sort_by_key(|candidate| Reverse(candidate.score));
    scored.truncate(MAX_SUBSTITUTES);
    Ok(scored)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;

    fn store(json: &str) -> GraphStore {
        GraphStore::load(Dataset::from_str(json).unwrap()).unwrap()
    }

    // Two siblings of prod_a in cat_C1: prod_b shares the brand and costs
    // the same, prod_c has no brand edge at all.
    const SIBLINGS: &str = r#"{
        "nodes": [
            {"id": "prod_a", "type": "product", "name": "Target", "price": 100.0, "in_stock": false},
            {"id": "prod_b", "type": "product", "name": "Twin", "price": 100.0, "in_stock": true},
            {"id": "prod_c", "type": "product", "name": "Unbranded", "price": 100.0, "in_stock": true},
            {"id": "cat_C1", "type": "category", "name": "C1"},
            {"id": "brand_B1", "type": "brand", "name": "B1"}
        ],
        "edges": [
            {"source": "prod_a", "target": "cat_C1", "relation": "IS_A"},
            {"source": "prod_a", "target": "brand_B1", "relation": "HAS_BRAND"},
            {"source": "prod_b", "target": "cat_C1", "relation": "IS_A"},
            {"source": "prod_b", "target": "brand_B1", "relation": "HAS_BRAND"},
            {"source": "prod_c", "target": "cat_C1", "relation": "IS_A"}
        ]
    }"#;

    #[test]
    fn test_equal_price_adds_no_price_reason() {
        let store = store(SIBLINGS);
        let subs =
            find_substitutes(&store, &"prod_a".into(), &SubstituteRequest::new()).unwrap();
        assert_eq!(subs.len(), 2);
        assert_eq!(subs[0].name, "Twin");
        assert_eq!(subs[0].score, 10);
        assert_eq!(subs[0].reasons, vec![Reason::SameBrandMatch, Reason::SameCategory]);
    }

    #[test]
    fn test_missing_brand_is_a_different_brand() {
        let store = store(SIBLINGS);
        let subs =
            find_substitutes(&store, &"prod_a".into(), &SubstituteRequest::new()).unwrap();
        assert_eq!(subs[1].name, "Unbranded");
        assert_eq!(subs[1].score, 0);
        assert_eq!(
            subs[1].reasons,
            vec![Reason::DiffBrandAlternative, Reason::SameCategory]
        );
    }

    #[test]
    fn test_zero_budget_still_filters() {
        let store = store(SIBLINGS);
        let request = SubstituteRequest::new().with_max_price(0.0);
        let subs = find_substitutes(&store, &"prod_a".into(), &request).unwrap();
        assert!(subs.is_empty());
    }

    #[test]
    fn test_budget_is_inclusive() {
        let store = store(SIBLINGS);
        let request = SubstituteRequest::new().with_max_price(100.0);
        let subs = find_substitutes(&store, &"prod_a".into(), &request).unwrap();
        assert_eq!(subs.len(), 2);
    }

    #[test]
    fn test_reason_codes_serialize_snake_case() {
        assert_eq!(Reason::SameBrandMatch.as_str(), "same_brand_match");
        assert_eq!(
            serde_json::to_string(&Reason::CheaperOption).unwrap(),
            "\"cheaper_option\""
        );
    }
}
