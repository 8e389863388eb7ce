//! End-to-end tests driving the product page reducer the way the page
//! shell does: decode a backend payload, load the page with the URL's
//! query pairs, then click attribute values and flip images.

use anyhow::Result;
use shared::models::{Catalog, ProductDetailPayload};
use storefront_core::{parse_query, ProductPage, RecordingUrlPort, SelectionPhase};

/// Backend payload for a curtain with Color x Size variants; RED-M has a
/// dedicated image sequence, RED-L has none.
fn payload() -> ProductDetailPayload {
    serde_json::from_value(serde_json::json!({
        "product": {
            "id": 1,
            "sku": "CRT-100",
            "title": "Linen Curtain",
            "description": "Washed linen, rod pocket top.",
            "price": 12900
        },
        "product_category": { "id": 9, "name": "Curtains" },
        "product_variants": [
            { "id": 10, "sku": "RED-M", "product_id": 1, "price": 12900, "quantity": 4 },
            { "id": 11, "sku": "RED-L", "product_id": 1, "price": 14900, "quantity": 2 }
        ],
        "product_variant_attributes": [
            { "id": 100, "name": "Color" },
            { "id": 101, "name": "Size" }
        ],
        "product_variant_attribute_values": [
            { "id": 1000, "value": "Red", "product_variant_attribute_id": 100, "product_variant_id": 10 },
            { "id": 1001, "value": "M", "product_variant_attribute_id": 101, "product_variant_id": 10 },
            { "id": 1002, "value": "Red", "product_variant_attribute_id": 100, "product_variant_id": 11 },
            { "id": 1003, "value": "L", "product_variant_attribute_id": 101, "product_variant_id": 11 }
        ],
        "product_files": [
            { "id": 4, "path": "main-1.jpg", "sort_order": 1 },
            { "id": 5, "path": "main-2.jpg", "sort_order": 2 },
            { "id": 6, "path": "red-m-a.jpg", "product_variant_id": 10, "sort_order": 1 },
            { "id": 7, "path": "red-m-b.jpg", "product_variant_id": 10, "sort_order": 2 }
        ]
    }))
    .unwrap()
}

fn catalog() -> Catalog {
    payload().into_catalog().unwrap()
}

#[test]
fn selecting_size_resolves_the_matching_variant() {
    let mut page = ProductPage::load(catalog(), &[], RecordingUrlPort::new());
    // Defaults seed to the first value on each axis: {Color: Red, Size: M}.
    assert_eq!(page.selected_variant().unwrap().sku, "RED-M");

    page.select_value("Size", "L");
    assert_eq!(page.selected_variant().unwrap().sku, "RED-L");
    assert_eq!(page.selection_phase(), SelectionPhase::UserModified);
}

#[test]
fn unmatched_combination_falls_back_to_main_images() {
    let mut p = payload();
    // A green size-S variant makes "Green" a known color, but {Green, M}
    // exists on no variant.
    p.product_variants.push(serde_json::from_value(serde_json::json!(
        { "id": 12, "sku": "GRN-S", "product_id": 1, "price": 12900 }
    )).unwrap());
    p.product_variant_attribute_values.extend([
        serde_json::from_value(serde_json::json!(
            { "id": 1004, "value": "Green", "product_variant_attribute_id": 100, "product_variant_id": 12 }
        )).unwrap(),
        serde_json::from_value(serde_json::json!(
            { "id": 1005, "value": "S", "product_variant_attribute_id": 101, "product_variant_id": 12 }
        )).unwrap(),
    ]);
    let catalog = p.into_catalog().unwrap();

    let mut page = ProductPage::load(catalog, &[], RecordingUrlPort::new());
    page.select_value("Color", "Green");

    assert!(page.selected_variant().is_none());
    assert_eq!(page.image_sequence(), ["main-1.jpg", "main-2.jpg"]);
}

#[test]
fn gallery_starts_at_zero_and_wraps() {
    let mut page = ProductPage::load(catalog(), &[], RecordingUrlPort::new());
    // RED-M is selected by default and has a two-image dedicated sequence.
    assert_eq!(page.image_sequence(), ["red-m-a.jpg", "red-m-b.jpg"]);
    assert_eq!(page.active_image_index(), 0);

    page.next_image();
    assert_eq!(page.active_image_index(), 1);
    page.next_image();
    assert_eq!(page.active_image_index(), 0);
}

#[test]
fn variant_switch_rewinds_and_reclamps_the_gallery() {
    let mut page = ProductPage::load(catalog(), &[], RecordingUrlPort::new());
    page.next_image();
    assert_eq!(page.active_image_index(), 1);

    // RED-L has no dedicated images: sequence becomes the main images and
    // the cursor is back at the first image.
    page.select_value("Size", "L");
    assert_eq!(page.image_sequence(), ["main-1.jpg", "main-2.jpg"]);
    assert_eq!(page.active_image_index(), 0);
    assert!(page.active_image_index() < page.image_sequence().len());
}

#[test]
fn unknown_query_value_defaults_to_first_known_value() {
    let query = parse_query("?Color=Green");
    let page = ProductPage::load(catalog(), &query, RecordingUrlPort::new());

    assert_eq!(page.selection().value_of("Color"), Some("Red"));
    assert_eq!(page.selected_variant().unwrap().sku, "RED-M");
}

#[test]
fn url_reflects_full_selection_and_keeps_passthrough_params() {
    let query = parse_query("?intent=custom_curtain&Size=M");
    let mut page = ProductPage::load(catalog(), &query, RecordingUrlPort::new());

    page.select_value("Size", "L");

    let current = page.query_string();
    assert_eq!(current, "Color=Red&Size=L&intent=custom_curtain");
}

#[test]
fn url_port_sees_one_in_place_replacement_per_transition() {
    let mut page = ProductPage::load(catalog(), &[], RecordingUrlPort::new());
    page.select_value("Size", "L");
    page.select_value("Size", "M");

    // One replacement for the seed and one per click, nothing else.
    assert_eq!(
        page.url_port().history,
        ["Color=Red&Size=M", "Color=Red&Size=L", "Color=Red&Size=M"]
    );
}

#[test]
fn seeding_from_a_serialized_selection_reproduces_it() -> Result<()> {
    let mut page = ProductPage::load(catalog(), &[], RecordingUrlPort::new());
    page.select_value("Size", "L");
    let serialized = page.query_string();

    let reloaded = ProductPage::load(catalog(), &parse_query(&serialized), RecordingUrlPort::new());
    assert_eq!(reloaded.selection_phase(), SelectionPhase::Seeded);
    assert_eq!(reloaded.selection().value_of("Color"), Some("Red"));
    assert_eq!(reloaded.selection().value_of("Size"), Some("L"));
    assert_eq!(reloaded.query_string(), serialized);
    Ok(())
}

#[test]
fn image_clicks_do_not_rewrite_the_url() {
    let mut page = ProductPage::load(catalog(), &[], RecordingUrlPort::new());
    let before = page.url_port().history.len();

    page.next_image();
    page.prev_image();

    assert_eq!(page.url_port().history.len(), before);
}

#[test]
fn broken_payload_never_reaches_the_engine() -> Result<()> {
    let mut p = payload();
    p.product_variant_attribute_values[0].product_variant_attribute_id = 999;

    let err = p.into_catalog().unwrap_err();
    assert_eq!(err.code, shared::ErrorCode::UnknownAttribute);
    Ok(())
}
