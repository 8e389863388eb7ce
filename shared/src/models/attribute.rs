//! Attribute Model

use serde::{Deserialize, Serialize};

/// Attribute definition entity (an axis of variation, e.g. "Color")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeDefinition {
    pub id: i64,
    /// Display label, doubles as the URL query-parameter key
    pub name: String,
}

/// Attribute value row
///
/// Scoped to one variant when `variant_id` is set, product-level otherwise.
/// A given (attribute_id, variant_id) pair resolves to at most one value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeValue {
    pub id: i64,
    pub value: String,
    /// Owning attribute definition
    pub attribute_id: i64,
    /// Scoping variant (None = product-level value)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<i64>,
}

impl AttributeValue {
    /// Whether this row is scoped to a specific variant
    pub fn is_variant_scoped(&self) -> bool {
        self.variant_id.is_some()
    }
}
