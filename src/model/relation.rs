//! Edge relation labels.

use serde::{Deserialize, Serialize};

/// Relation label carried by an edge.
///
/// The closed set the engine understands is `IS_A` (product → category),
/// `HAS_BRAND` (product → brand) and `HAS_ATTRIBUTE` (product → attribute
/// tag). Any other label round-trips through `Other` but is inert to every
/// query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Relation {
    #[serde(rename = "IS_A")]
    IsA,
    #[serde(rename = "HAS_BRAND")]
    HasBrand,
    #[serde(rename = "HAS_ATTRIBUTE")]
    HasAttribute,
    #[serde(untagged)]
    Other(String),
}

impl std::fmt::Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Relation::IsA => write!(f, "IS_A"),
            Relation::HasBrand => write!(f, "HAS_BRAND"),
            Relation::HasAttribute => write!(f, "HAS_ATTRIBUTE"),
            Relation::Other(label) => write!(f, "{label}"),
        }
    }
}
