//! Attribute grouping read model
//!
//! Builds, per attribute definition, the deduplicated list of distinct
//! value strings for the selector UI. Order is first-seen supply order,
//! never alphabetical; the first entry of each group is the deterministic
//! default for seeding a selection.

use serde::{Deserialize, Serialize};
use shared::models::{AttributeDefinition, AttributeValue};
use std::collections::HashSet;

/// Distinct values for one attribute definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeGroup {
    pub attribute_id: i64,
    pub name: String,
    /// Deduplicated values, first-seen order
    pub values: Vec<String>,
}

/// Grouped attribute values for a whole product, in definition order
///
/// Definitions with zero known values produce no group and therefore no
/// selector and no selection entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeGroups {
    groups: Vec<AttributeGroup>,
}

impl AttributeGroups {
    pub fn build(defs: &[AttributeDefinition], values: &[AttributeValue]) -> Self {
        let mut groups = Vec::with_capacity(defs.len());
        for def in defs {
            let mut seen = HashSet::new();
            let mut list = Vec::new();
            for row in values.iter().filter(|row| row.attribute_id == def.id) {
                if seen.insert(row.value.as_str()) {
                    list.push(row.value.clone());
                }
            }
            if !list.is_empty() {
                groups.push(AttributeGroup {
                    attribute_id: def.id,
                    name: def.name.clone(),
                    values: list,
                });
            }
        }
        Self { groups }
    }

    pub fn iter(&self) -> impl Iterator<Item = &AttributeGroup> {
        self.groups.iter()
    }

    pub fn get(&self, name: &str) -> Option<&AttributeGroup> {
        self.groups.iter().find(|group| group.name == name)
    }

    /// First known value for an attribute (the seeding default)
    pub fn default_value(&self, name: &str) -> Option<&str> {
        self.get(name)
            .and_then(|group| group.values.first())
            .map(String::as_str)
    }

    /// Whether `value` is a known value for the named attribute
    pub fn contains(&self, name: &str, value: &str) -> bool {
        self.get(name)
            .is_some_and(|group| group.values.iter().any(|v| v == value))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
