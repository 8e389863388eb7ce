//! Data models
//!
//! Shared between the resolution engine and the page shell (via API).
//! All IDs are `i64`, assigned by the backend.

pub mod attribute;
pub mod catalog;
pub mod image;
pub mod product;

// Re-exports
pub use attribute::*;
pub use catalog::*;
pub use image::*;
pub use product::*;
