//! Product Model

use serde::{Deserialize, Serialize};

/// Product entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub sku: String,
    pub title: String,
    pub description: String,
    /// Price in cents
    pub price: i64,
}

/// Product variant entity
///
/// A concrete purchasable configuration, described by the variant-scoped
/// [`AttributeValue`](super::AttributeValue) rows referencing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    pub id: i64,
    /// Human-facing code, used for image-directory lookups and cart identity
    pub sku: String,
    pub product_id: i64,
    /// Price in cents
    pub price: i64,
    /// Cost in cents
    pub cost: i64,
    pub quantity: i64,
    pub featured: bool,
}
