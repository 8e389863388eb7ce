//! Drive the product page reducer against a canned payload.
//!
//! Run with: `RUST_LOG=debug cargo run -p storefront-core --example product_page`

use anyhow::Result;
use shared::models::ProductDetailPayload;
use storefront_core::{ProductPage, RecordingUrlPort, parse_query};

const PAYLOAD: &str = r#"{
    "product": { "id": 1, "sku": "CRT-100", "title": "Linen Curtain", "price": 12900 },
    "product_variants": [
        { "id": 10, "sku": "ECRU-M", "product_id": 1, "price": 12900 },
        { "id": 11, "sku": "ECRU-L", "product_id": 1, "price": 14900 }
    ],
    "product_variant_attributes": [
        { "id": 100, "name": "Color" },
        { "id": 101, "name": "Size" }
    ],
    "product_variant_attribute_values": [
        { "id": 1000, "value": "Ecru", "product_variant_attribute_id": 100, "product_variant_id": 10 },
        { "id": 1001, "value": "M", "product_variant_attribute_id": 101, "product_variant_id": 10 },
        { "id": 1002, "value": "Ecru", "product_variant_attribute_id": 100, "product_variant_id": 11 },
        { "id": 1003, "value": "L", "product_variant_attribute_id": 101, "product_variant_id": 11 }
    ],
    "product_files": [
        { "id": 4, "path": "main-1.jpg", "sort_order": 1 },
        { "id": 5, "path": "ecru-m.jpg", "product_variant_id": 10, "sort_order": 1 }
    ]
}"#;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let payload: ProductDetailPayload = serde_json::from_str(PAYLOAD)?;
    let catalog = payload.into_catalog()?;

    let query = parse_query("?Size=L&intent=custom_curtain");
    let mut page = ProductPage::load(catalog, &query, RecordingUrlPort::new());
    println!(
        "loaded {}: variant = {:?}, images = {:?}",
        page.product_sku(),
        page.selected_variant().map(|v| v.sku.clone()),
        page.image_sequence()
    );

    page.select_value("Size", "M");
    println!(
        "after Size=M: variant = {:?}, images = {:?}",
        page.selected_variant().map(|v| v.sku.clone()),
        page.image_sequence()
    );
    println!("url: ?{}", page.query_string());

    Ok(())
}
