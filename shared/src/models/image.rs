//! Image Directory Model

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Ordered image sequences for a product page
///
/// Image paths are opaque URL strings, never decoded or transformed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageDirectories {
    /// Product-level image paths
    pub main_images: Vec<String>,
    /// Variant-scoped image paths, keyed by variant sku
    pub variant_images: HashMap<String, Vec<String>>,
}

impl ImageDirectories {
    /// Dedicated non-empty image sequence for a variant sku, if any
    pub fn for_sku(&self, sku: &str) -> Option<&[String]> {
        self.variant_images
            .get(sku)
            .map(|seq| seq.as_slice())
            .filter(|seq| !seq.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_sku_skips_empty_sequences() {
        let mut dirs = ImageDirectories::default();
        dirs.variant_images.insert("RED-M".to_string(), vec![]);
        dirs.variant_images
            .insert("RED-L".to_string(), vec!["a.jpg".to_string()]);

        assert!(dirs.for_sku("RED-M").is_none());
        assert_eq!(dirs.for_sku("RED-L").unwrap(), ["a.jpg".to_string()]);
        assert!(dirs.for_sku("BLUE-S").is_none());
    }
}
