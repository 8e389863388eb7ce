//! Product-detail wire payload and validated catalog aggregate
//!
//! The backend returns loosely-shaped JSON rows. Everything the resolution
//! engine consumes goes through [`ProductDetailPayload::into_catalog`], the
//! single validated construction path: referentially-broken payloads are
//! rejected there, so the engine never has to re-check row shapes.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use super::{AttributeDefinition, AttributeValue, ImageDirectories, Product, Variant};
use crate::error::{AppError, AppResult};

/// Validated catalog aggregate for one product page
///
/// Row order is preserved from the wire payload; grouping, defaults, and
/// multi-match tie-breaks all depend on supply order.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    pub product: Product,
    pub variants: Vec<Variant>,
    pub attribute_defs: Vec<AttributeDefinition>,
    pub attribute_values: Vec<AttributeValue>,
    pub images: ImageDirectories,
}

impl Catalog {
    /// Variant-scoped value row for (attribute, variant), if present
    ///
    /// Product-level rows never participate; a variant is described only by
    /// the rows scoped to it.
    pub fn variant_value(&self, attribute_id: i64, variant_id: i64) -> Option<&AttributeValue> {
        self.attribute_values
            .iter()
            .find(|row| row.attribute_id == attribute_id && row.variant_id == Some(variant_id))
    }
}

/// Raw product-detail response from the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDetailPayload {
    pub product: ProductRow,
    #[serde(default)]
    pub product_category: Option<CategoryRow>,
    #[serde(default)]
    pub product_variants: Vec<VariantRow>,
    #[serde(default)]
    pub product_variant_attributes: Vec<AttributeRow>,
    #[serde(default)]
    pub product_variant_attribute_values: Vec<AttributeValueRow>,
    #[serde(default)]
    pub product_files: Vec<FileRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRow {
    pub id: i64,
    pub sku: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRow {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariantRow {
    pub id: i64,
    pub sku: String,
    pub product_id: i64,
    pub price: i64,
    #[serde(default)]
    pub cost: i64,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttributeRow {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub product_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttributeValueRow {
    pub id: i64,
    pub value: String,
    pub product_variant_attribute_id: i64,
    #[serde(default)]
    pub product_variant_id: Option<i64>,
    #[serde(default)]
    pub product_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileRow {
    pub id: i64,
    pub path: String,
    #[serde(default)]
    pub product_id: Option<i64>,
    #[serde(default)]
    pub product_variant_id: Option<i64>,
    #[serde(default)]
    pub sort_order: i32,
}

impl ProductDetailPayload {
    /// Validate the payload and build the catalog aggregate
    ///
    /// Rejected outright (the engine never sees the data):
    /// - duplicate attribute-definition or variant ids
    /// - value rows referencing an unknown attribute or variant
    ///
    /// Survived with a warning (conditions the resolver is specified to
    /// tolerate):
    /// - two value rows for the same (attribute, variant) pair: first wins
    /// - file rows referencing an unknown variant: skipped, the image
    ///   fallback chain covers the gap
    pub fn into_catalog(self) -> AppResult<Catalog> {
        let product = Product {
            id: self.product.id,
            sku: self.product.sku,
            title: self.product.title,
            description: self.product.description.unwrap_or_default(),
            price: self.product.price,
        };

        let mut attribute_defs = Vec::with_capacity(self.product_variant_attributes.len());
        let mut def_ids = HashSet::new();
        for row in self.product_variant_attributes {
            if !def_ids.insert(row.id) {
                return Err(AppError::validation("duplicate attribute definition id")
                    .with_detail("attribute_id", row.id));
            }
            attribute_defs.push(AttributeDefinition {
                id: row.id,
                name: row.name,
            });
        }

        let mut variants = Vec::with_capacity(self.product_variants.len());
        let mut variant_skus: HashMap<i64, String> = HashMap::new();
        for row in self.product_variants {
            if variant_skus.contains_key(&row.id) {
                return Err(
                    AppError::validation("duplicate variant id").with_detail("variant_id", row.id)
                );
            }
            variant_skus.insert(row.id, row.sku.clone());
            variants.push(Variant {
                id: row.id,
                sku: row.sku,
                product_id: row.product_id,
                price: row.price,
                cost: row.cost,
                quantity: row.quantity,
                featured: row.featured,
            });
        }

        let mut attribute_values = Vec::with_capacity(self.product_variant_attribute_values.len());
        let mut seen_pairs = HashSet::new();
        for row in self.product_variant_attribute_values {
            if !def_ids.contains(&row.product_variant_attribute_id) {
                return Err(AppError::unknown_attribute(row.product_variant_attribute_id)
                    .with_detail("value_id", row.id));
            }
            if let Some(variant_id) = row.product_variant_id {
                if !variant_skus.contains_key(&variant_id) {
                    return Err(AppError::unknown_variant(variant_id).with_detail("value_id", row.id));
                }
                if !seen_pairs.insert((row.product_variant_attribute_id, variant_id)) {
                    tracing::warn!(
                        attribute_id = row.product_variant_attribute_id,
                        variant_id,
                        value = %row.value,
                        "[Catalog] duplicate value for attribute on variant, keeping first"
                    );
                    continue;
                }
            }
            attribute_values.push(AttributeValue {
                id: row.id,
                value: row.value,
                attribute_id: row.product_variant_attribute_id,
                variant_id: row.product_variant_id,
                product_id: row.product_id,
            });
        }

        let mut files = self.product_files;
        files.sort_by_key(|f| f.sort_order);
        let mut images = ImageDirectories::default();
        for file in files {
            match file.product_variant_id {
                Some(variant_id) => match variant_skus.get(&variant_id) {
                    Some(sku) => images
                        .variant_images
                        .entry(sku.clone())
                        .or_default()
                        .push(file.path),
                    None => {
                        tracing::warn!(
                            file_id = file.id,
                            variant_id,
                            "[Catalog] image file references unknown variant, skipping"
                        );
                    }
                },
                None => images.main_images.push(file.path),
            }
        }

        Ok(Catalog {
            product,
            variants,
            attribute_defs,
            attribute_values,
            images,
        })
    }
}
