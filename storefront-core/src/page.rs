//! Product page state
//!
//! One reducer owns the selection, the resolved variant, and the gallery.
//! Every user event is a single synchronous transition, with no cascading
//! effects keeping derived state in sync. A page is bound to one product;
//! navigating to a different sku constructs a fresh page.

use crate::catalog::AttributeGroups;
use crate::images::{Gallery, PLACEHOLDER_IMAGE, resolve_images};
use crate::query::UrlPort;
use crate::resolver::resolve_variant;
use crate::selection::{SelectionPhase, SelectionState};
use crate::zoom::{BoundingBox, ZoomLens, ZoomPosition};
use shared::models::{Catalog, Variant};

/// Product detail page state machine
pub struct ProductPage<P: UrlPort> {
    catalog: Catalog,
    groups: AttributeGroups,
    selection: SelectionState,
    gallery: Gallery,
    zoom: ZoomLens,
    /// Query pairs unrelated to attributes (tracking/intent params),
    /// preserved verbatim on every URL rewrite
    passthrough: Vec<(String, String)>,
    url: P,
}

impl<P: UrlPort> ProductPage<P> {
    /// Build the page from a validated catalog and the URL's query pairs
    ///
    /// Seeds the selection, resolves the variant and image sequence, and
    /// pushes the canonical query string through the URL port. Only called
    /// after the catalog fetch definitively succeeded.
    pub fn load(catalog: Catalog, query: &[(String, String)], url: P) -> Self {
        let groups = AttributeGroups::build(&catalog.attribute_defs, &catalog.attribute_values);
        let passthrough: Vec<(String, String)> = query
            .iter()
            .filter(|(key, _)| groups.get(key).is_none())
            .cloned()
            .collect();

        let mut selection = SelectionState::new();
        selection.seed(query, &groups);

        let variant = resolve_variant(&selection, &catalog);
        let gallery = Gallery::new(resolve_images(variant, &catalog.images, PLACEHOLDER_IMAGE));

        let mut page = Self {
            catalog,
            groups,
            selection,
            gallery,
            zoom: ZoomLens::new(),
            passthrough,
            url,
        };
        page.sync_url();
        tracing::debug!(
            product = %page.catalog.product.sku,
            axes = page.groups.len(),
            "[Page] loaded"
        );
        page
    }

    /// The only mutator: an explicit click on an attribute-value control
    ///
    /// Replaces one selection entry, recomputes variant and images, rewinds
    /// the gallery to the first image, and rewrites the URL in place.
    pub fn select_value(&mut self, name: &str, value: &str) {
        if !self.selection.select(&self.groups, name, value) {
            return;
        }
        self.refresh_gallery();
        self.gallery.rewind();
        self.sync_url();
    }

    /// Currently resolved variant, recomputed from the full variant list
    pub fn selected_variant(&self) -> Option<&Variant> {
        resolve_variant(&self.selection, &self.catalog)
    }

    pub fn product_sku(&self) -> &str {
        &self.catalog.product.sku
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn selection_phase(&self) -> SelectionPhase {
        self.selection.phase()
    }

    pub fn groups(&self) -> &AttributeGroups {
        &self.groups
    }

    pub fn image_sequence(&self) -> &[String] {
        self.gallery.sequence()
    }

    pub fn active_image(&self) -> Option<&str> {
        self.gallery.active()
    }

    pub fn active_image_index(&self) -> usize {
        self.gallery.active_index()
    }

    pub fn next_image(&mut self) {
        self.gallery.next();
    }

    pub fn prev_image(&mut self) {
        self.gallery.prev();
    }

    pub fn zoom_at(&mut self, bounds: BoundingBox, pointer_x: f64, pointer_y: f64) {
        self.zoom.follow(bounds, pointer_x, pointer_y);
    }

    pub fn zoom_clear(&mut self) {
        self.zoom.clear();
    }

    pub fn zoom_position(&self) -> Option<ZoomPosition> {
        self.zoom.position()
    }

    /// The URL port this page writes history replacements to
    pub fn url_port(&self) -> &P {
        &self.url
    }

    /// Canonical query string for the current selection
    pub fn query_string(&self) -> String {
        self.selection.to_query(&self.groups, &self.passthrough)
    }

    fn refresh_gallery(&mut self) {
        let sequence = {
            let variant = resolve_variant(&self.selection, &self.catalog);
            resolve_images(variant, &self.catalog.images, PLACEHOLDER_IMAGE)
        };
        self.gallery.replace(sequence);
    }

    fn sync_url(&mut self) {
        let query = self.query_string();
        self.url.replace_query(&query);
    }
}
