//! Variant resolution
//!
//! Maps the current attribute selection to at most one concrete variant.
//! Pure and synchronous: recomputed from the full variant list on every
//! selection change, never incrementally patched.

use crate::selection::SelectionState;
use shared::models::{Catalog, Variant};

/// Resolve the variant matching the selection on every attribute axis
///
/// A variant matches when, for **every** attribute definition, its
/// variant-scoped value row equals the selection entry for that attribute's
/// name. Missing on either side is a non-match; product-scoped rows never
/// participate. Zero matches is a defined outcome, not an error; the page
/// falls back to product-level display.
pub fn resolve_variant<'a>(selection: &SelectionState, catalog: &'a Catalog) -> Option<&'a Variant> {
    let mut matched: Option<&Variant> = None;
    for variant in &catalog.variants {
        if !variant_matches(selection, variant.id, catalog) {
            continue;
        }
        match matched {
            None => matched = Some(variant),
            Some(first) => {
                // Data-integrity condition, not a crash: first in supply
                // order wins.
                tracing::warn!(
                    product_id = catalog.product.id,
                    kept = %first.sku,
                    ignored = %variant.sku,
                    "[Resolver] multiple variants match one selection, keeping first"
                );
            }
        }
    }
    tracing::debug!(
        product_id = catalog.product.id,
        variant = matched.map(|v| v.sku.as_str()),
        "[Resolver] selection resolved"
    );
    matched
}

fn variant_matches(selection: &SelectionState, variant_id: i64, catalog: &Catalog) -> bool {
    catalog.attribute_defs.iter().all(|def| {
        match (
            selection.value_of(&def.name),
            catalog.variant_value(def.id, variant_id),
        ) {
            (Some(chosen), Some(row)) => row.value == chosen,
            // Missing on either side (or both) never counts as a match.
            _ => false,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::AttributeGroups;
    use shared::models::{
        AttributeDefinition, AttributeValue, ImageDirectories, Product, Variant,
    };

    fn variant(id: i64, sku: &str) -> Variant {
        Variant {
            id,
            sku: sku.to_string(),
            product_id: 1,
            price: 12900,
            cost: 6000,
            quantity: 5,
            featured: false,
        }
    }

    fn value(id: i64, attribute_id: i64, variant_id: Option<i64>, value: &str) -> AttributeValue {
        AttributeValue {
            id,
            value: value.to_string(),
            attribute_id,
            variant_id,
            product_id: None,
        }
    }

    fn catalog() -> Catalog {
        Catalog {
            product: Product {
                id: 1,
                sku: "CRT-100".to_string(),
                title: "Linen Curtain".to_string(),
                description: String::new(),
                price: 12900,
            },
            variants: vec![variant(10, "RED-M"), variant(11, "RED-L")],
            attribute_defs: vec![
                AttributeDefinition {
                    id: 100,
                    name: "Color".to_string(),
                },
                AttributeDefinition {
                    id: 101,
                    name: "Size".to_string(),
                },
            ],
            attribute_values: vec![
                value(1000, 100, Some(10), "Red"),
                value(1001, 101, Some(10), "M"),
                value(1002, 100, Some(11), "Red"),
                value(1003, 101, Some(11), "L"),
            ],
            images: ImageDirectories::default(),
        }
    }

    fn select(catalog: &Catalog, pairs: &[(&str, &str)]) -> SelectionState {
        let groups = AttributeGroups::build(&catalog.attribute_defs, &catalog.attribute_values);
        let query: Vec<(String, String)> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let mut state = SelectionState::new();
        state.seed(&query, &groups);
        state
    }

    #[test]
    fn test_full_match_resolves_unique_variant() {
        let catalog = catalog();
        let selection = select(&catalog, &[("Color", "Red"), ("Size", "L")]);

        assert_eq!(resolve_variant(&selection, &catalog).unwrap().sku, "RED-L");
    }

    #[test]
    fn test_no_combination_resolves_none() {
        let mut catalog = catalog();
        // Introduce a Blue value on a third axis-less variant so "Blue" is
        // a known Color but the {Blue, M} combination doesn't exist.
        catalog.variants.push(variant(12, "BLUE-S"));
        catalog.attribute_values.push(value(1004, 100, Some(12), "Blue"));
        catalog.attribute_values.push(value(1005, 101, Some(12), "S"));
        let selection = select(&catalog, &[("Color", "Blue"), ("Size", "M")]);

        assert!(resolve_variant(&selection, &catalog).is_none());
    }

    #[test]
    fn test_partial_variant_data_never_matches() {
        let mut catalog = catalog();
        // RED-L loses its Size row: it must never match, even though Color
        // agrees.
        catalog.attribute_values.retain(|v| v.id != 1003);
        let selection = select(&catalog, &[("Color", "Red"), ("Size", "M")]);

        assert_eq!(resolve_variant(&selection, &catalog).unwrap().sku, "RED-M");

        let selection = select(&catalog, &[("Color", "Red"), ("Size", "L")]);
        assert!(resolve_variant(&selection, &catalog).is_none());
    }

    #[test]
    fn test_missing_both_sides_is_non_match() {
        let mut catalog = catalog();
        // An extra definition with no value rows anywhere: no selection
        // entry is seeded for it and no variant carries a row, so nothing
        // resolves (no undefined == undefined false positive).
        catalog.attribute_defs.push(AttributeDefinition {
            id: 102,
            name: "Pleat".to_string(),
        });
        let selection = select(&catalog, &[("Color", "Red"), ("Size", "M")]);

        assert!(resolve_variant(&selection, &catalog).is_none());
    }

    #[test]
    fn test_product_scoped_rows_do_not_match() {
        let mut catalog = catalog();
        // A product-level "Red" row on a variant missing its own Color row
        // must not stand in for the variant-scoped value.
        catalog.attribute_values.retain(|v| v.id != 1002);
        catalog.attribute_values.push(value(1006, 100, None, "Red"));
        let selection = select(&catalog, &[("Color", "Red"), ("Size", "L")]);

        assert!(resolve_variant(&selection, &catalog).is_none());
    }

    #[test]
    fn test_duplicate_match_keeps_first_in_order() {
        let mut catalog = catalog();
        // A second variant with identical values (integrity breach).
        catalog.variants.push(variant(12, "RED-L-DUP"));
        catalog.attribute_values.push(value(1004, 100, Some(12), "Red"));
        catalog.attribute_values.push(value(1005, 101, Some(12), "L"));
        let selection = select(&catalog, &[("Color", "Red"), ("Size", "L")]);

        assert_eq!(resolve_variant(&selection, &catalog).unwrap().sku, "RED-L");
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let catalog = catalog();
        let selection = select(&catalog, &[("Color", "Red"), ("Size", "M")]);

        let first = resolve_variant(&selection, &catalog).map(|v| v.id);
        for _ in 0..10 {
            assert_eq!(resolve_variant(&selection, &catalog).map(|v| v.id), first);
        }
    }
}
