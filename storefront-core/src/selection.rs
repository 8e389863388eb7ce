//! Selection state machine
//!
//! One chosen value per attribute axis, driven through three phases:
//!
//! ```text
//! Uninitialized ──seed (catalog loaded)──▶ Seeded ──select──▶ UserModified
//!                                                              │    ▲
//!                                                              └────┘
//! ```
//!
//! Seeding happens once, from the URL query plus deterministic defaults.
//! After that, the only mutator is an explicit user selection replacing
//! exactly one entry.

use crate::catalog::AttributeGroups;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Lifecycle phase of the selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPhase {
    /// No selection yet (catalog still loading)
    Uninitialized,
    /// Populated from URL + defaults
    Seeded,
    /// One or more entries overwritten by explicit clicks
    UserModified,
}

/// The user's current choice for every attribute axis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    phase: SelectionPhase,
    chosen: HashMap<String, String>,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionState {
    pub fn new() -> Self {
        Self {
            phase: SelectionPhase::Uninitialized,
            chosen: HashMap::new(),
        }
    }

    pub fn phase(&self) -> SelectionPhase {
        self.phase
    }

    /// Chosen value for an attribute name, if any
    pub fn value_of(&self, name: &str) -> Option<&str> {
        self.chosen.get(name).map(String::as_str)
    }

    pub fn is_selected(&self, name: &str, value: &str) -> bool {
        self.value_of(name) == Some(value)
    }

    pub fn len(&self) -> usize {
        self.chosen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chosen.is_empty()
    }

    /// Seed the selection from URL query pairs plus defaults
    ///
    /// For each attribute with at least one known value: take the query
    /// value when it is a known value for that attribute, otherwise the
    /// first value of the group. Unknown query values are ignored, not
    /// errors. Fires once; repeat calls are no-ops.
    pub fn seed(&mut self, query: &[(String, String)], groups: &AttributeGroups) {
        if self.phase != SelectionPhase::Uninitialized {
            tracing::warn!(phase = ?self.phase, "[Selection] seed called twice, ignoring");
            return;
        }
        for group in groups.iter() {
            let from_query = query
                .iter()
                .find(|(key, _)| key == &group.name)
                .map(|(_, v)| v.as_str());
            let value = match from_query {
                Some(v) if groups.contains(&group.name, v) => v,
                Some(v) => {
                    tracing::debug!(
                        attribute = %group.name,
                        value = %v,
                        "[Selection] unknown query value, falling back to default"
                    );
                    group.values[0].as_str()
                }
                None => group.values[0].as_str(),
            };
            self.chosen.insert(group.name.clone(), value.to_string());
        }
        self.phase = SelectionPhase::Seeded;
    }

    /// Apply an explicit user selection
    ///
    /// Replaces exactly one entry; all other entries keep their value.
    /// Returns false (state untouched) for unknown attributes or values.
    pub fn select(&mut self, groups: &AttributeGroups, name: &str, value: &str) -> bool {
        if !groups.contains(name, value) {
            tracing::warn!(
                attribute = %name,
                value = %value,
                "[Selection] ignoring selection of unknown attribute value"
            );
            return false;
        }
        self.chosen.insert(name.to_string(), value.to_string());
        self.phase = SelectionPhase::UserModified;
        true
    }

    /// Serialize to a query string: attribute pairs in definition order,
    /// then pass-through pairs verbatim
    pub fn to_query(&self, groups: &AttributeGroups, passthrough: &[(String, String)]) -> String {
        let pairs: Vec<(String, String)> = groups
            .iter()
            .filter_map(|group| {
                self.value_of(&group.name)
                    .map(|value| (group.name.clone(), value.to_string()))
            })
            .chain(passthrough.iter().cloned())
            .collect();
        crate::query::serialize_query(&pairs)
    }
}
