//! Shared types for the storefront workspace
//!
//! Domain models, the product-detail wire payload with its validated
//! construction path, and the unified error system used by the
//! resolution engine.

pub mod error;
pub mod models;

// Re-exports
pub use error::{AppError, AppResult, ErrorCode};
pub use serde::{Deserialize, Serialize};
