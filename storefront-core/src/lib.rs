//! Storefront resolution engine
//!
//! Attribute grouping, variant resolution, selection/URL state, and image
//! sequencing for the product detail page. The catalog is fetched once per
//! page view via [`client::BackendClient`]; every operation after that is a
//! pure, synchronous recomputation over the in-memory catalog, cheap enough
//! to re-run on each user event.

pub mod catalog;
pub mod client;
pub mod images;
pub mod page;
pub mod query;
pub mod resolver;
pub mod selection;
pub mod zoom;

// Re-exports
pub use catalog::{AttributeGroup, AttributeGroups};
pub use client::{BackendClient, ClientConfig};
pub use images::{Gallery, PLACEHOLDER_IMAGE, resolve_images};
pub use page::ProductPage;
pub use query::{RecordingUrlPort, UrlPort, parse_query, serialize_query};
pub use resolver::resolve_variant;
pub use selection::{SelectionPhase, SelectionState};
pub use zoom::{BoundingBox, ZoomLens, ZoomPosition};
